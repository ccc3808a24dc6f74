use std::rc::Rc;

use common::subject_observer::{Observer, Subject};
use dipstick::{Input, InputScope, Log, LogScope};
use evolver::{
    evolution::{EventType, EvolutionEngine, EvolutionError, FitnessHistory},
    selection::rng_wrapper::Random,
    PolicyError, SurvivalScorer,
};
use log::{error, info, trace};
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

use crate::{config::app::AppConfig, simulator::StubSimulator};

mod config;
mod simulator;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ::config::ConfigError),
    #[error(transparent)]
    Evolution(#[from] EvolutionError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

struct MetricsObserver {
    log_scope: LogScope,
}

impl MetricsObserver {
    fn new() -> Self {
        MetricsObserver {
            log_scope: Log::to_log().level(log::Level::Trace).metrics(),
        }
    }
}

impl Observer<EvolutionEngine, EventType> for MetricsObserver {
    fn update(&self, _: &EvolutionEngine, event: EventType) {
        trace!("Engine event: {}", event);
        if let EventType::GenerationScored(mean_fitness) = event {
            self.log_scope.gauge("mean_fitness").value(mean_fitness);
        }
    }
}

fn main() {
    config::log::init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let app_config = AppConfig::new()?;
    let mut rng = match app_config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut engine = EvolutionEngine::new(app_config.evolution())?;
    let observer = Rc::new(MetricsObserver::new());
    engine.register_observer(observer.clone());

    let simulator = StubSimulator::new(app_config.n_percepts, app_config.turns_per_game);
    let mut history = FitnessHistory::new();
    let mut population = {
        let mut random = Random::new(&mut rng);
        engine.init_population(&mut random)
    };

    for generation in 0..app_config.generations {
        let outcomes = simulator.run_generation(&population, &mut rng)?;
        let snapshot = {
            let mut random = Random::new(&mut rng);
            engine.advance_generation(&population, &outcomes, &SurvivalScorer, &mut random)?
        };
        history.push(snapshot.mean_fitness);
        info!("Generation {}: {:.2}", generation, snapshot.mean_fitness);
        population = snapshot.policies;
    }

    if let Some(overall) = history.overall_mean() {
        info!("Overall mean fitness: {:.2}", overall);
    }

    engine.unregister_observer(observer);
    Ok(())
}
