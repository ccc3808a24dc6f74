mod evolution_engine;
mod history;

pub use evolution_engine::EvolutionEngine;
pub use history::FitnessHistory;

use serde::{Deserialize, Serialize};
use strum::Display;
use validator::Validate;

use crate::{breeding::BreedingError, policy::Policy, selection::SelectionError};

/// Generation lifecycle events published by the engine.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum EventType {
    /// The incoming population has been scored; carries the mean fitness.
    GenerationScored(f32),
    GenerationAdvanced,
}

/// Run-wide parameters, fixed for the lifetime of a run.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct EvolutionConfig {
    /// Length of the flattened percept vector (P).
    #[validate(range(min = 1))]
    pub n_percepts: usize,
    /// Number of possible actions (A).
    #[validate(range(min = 1))]
    pub n_actions: usize,
    /// Number of policies per generation (N).
    #[validate(range(min = 1))]
    pub population_size: usize,
    /// Top policies carried into the next generation unchanged.
    pub elite_count: usize,
    /// Candidates drawn per tournament.
    #[validate(range(min = 1))]
    pub tournament_size: usize,
    /// Per-gene probability of additive mutation after crossover.
    #[validate(range(min = 0.0, max = 1.0))]
    pub mutation_rate: f32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        EvolutionConfig {
            n_percepts: 75,
            n_actions: 5,
            population_size: 34,
            elite_count: 4,
            tournament_size: 7,
            mutation_rate: 0.03,
        }
    }
}

impl EvolutionConfig {
    pub(crate) fn check(&self) -> Result<(), EvolutionError> {
        self.validate().map_err(EvolutionError::InvalidSettings)?;
        if self.elite_count >= self.population_size {
            return Err(EvolutionError::EliteCountTooLarge {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        if self.tournament_size > self.population_size {
            return Err(EvolutionError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(validator::ValidationErrors),
    #[error("Elite count {elite_count} must be lower than population size {population_size}")]
    EliteCountTooLarge {
        elite_count: usize,
        population_size: usize,
    },
    #[error(
        "Tournament size {tournament_size} cannot exceed population size {population_size}"
    )]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },
    #[error("Population size mismatch: expected {expected}, got {actual}")]
    PopulationSize { expected: usize, actual: usize },
    #[error("Outcome statistics mismatch: {actual} outcomes for {expected} policies")]
    OutcomeCount { expected: usize, actual: usize },
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Breeding(#[from] BreedingError),
}

/// The product of one generation advance: the bred population and the mean
/// fitness of the generation that produced it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub generation: u64,
    pub policies: Vec<Policy>,
    pub mean_fitness: f32,
}

pub type EvolutionResult = Result<Snapshot, EvolutionError>;
