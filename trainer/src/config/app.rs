use ::config::{Config, Environment, File, FileFormat};
use evolver::evolution::EvolutionConfig;
use serde::Deserialize;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub generations: u64,
    pub turns_per_game: u32,
    pub n_percepts: usize,
    pub n_actions: usize,
    pub population_size: usize,
    pub elite_count: usize,
    pub tournament_size: usize,
    pub mutation_rate: f32,
    /// Fixed RNG seed for reproducible runs; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }

    pub fn evolution(&self) -> EvolutionConfig {
        EvolutionConfig {
            n_percepts: self.n_percepts,
            n_actions: self.n_actions,
            population_size: self.population_size,
            elite_count: self.elite_count,
            tournament_size: self.tournament_size,
            mutation_rate: self.mutation_rate,
        }
    }
}
