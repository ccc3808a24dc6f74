pub mod rng_wrapper;
mod select_by_tournament;
mod select_elites;
mod selection_result;

pub use select_by_tournament::select_by_tournament;
pub use select_elites::select_elites;
pub use selection_result::{SelectionError, SelectionResult};
