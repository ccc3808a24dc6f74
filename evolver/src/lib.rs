pub mod breeding;
pub mod evolution;
pub mod outcome;
pub mod policy;
pub mod selection;

pub use outcome::{OutcomeStats, Scorer, SurvivalScorer};
pub use policy::{Policy, PolicyError, WeightMatrix};
