use std::rc::Rc;

use common::subject_observer::{Observer, SharedObservers, Subject};
use log::debug;

use crate::{
    breeding::{mutate, uniform_crossover},
    outcome::{OutcomeStats, Scorer},
    policy::Policy,
    selection::{rng_wrapper::RngWrapper, select_by_tournament, select_elites},
};

use super::{EventType, EvolutionConfig, EvolutionError, EvolutionResult, Snapshot};

/// Drives one population from generation to generation: scores the incoming
/// population from simulator outcomes, carries the elites over unchanged,
/// and breeds the rest through tournament selection, uniform crossover and
/// additive mutation.
pub struct EvolutionEngine {
    observers: SharedObservers<Self, EventType>,
    config: EvolutionConfig,
    generation: u64,
}

impl Subject<EventType> for EvolutionEngine {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, EventType>>) {
        self.observers.push(observer);
    }

    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, EventType>>) {
        self.observers.retain(|obs| !Rc::ptr_eq(obs, &observer));
    }

    fn notify_observers(&self, event: EventType) {
        for obs in &self.observers {
            obs.update(self, event.clone());
        }
    }
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig) -> Result<Self, EvolutionError> {
        config.check()?;
        Ok(EvolutionEngine {
            observers: vec![],
            config,
            generation: 0,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Number of completed generation advances.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Produces the initial population: `population_size` policies with
    /// independently randomized weights and unassigned fitness.
    pub fn init_population(&self, rng: &mut impl RngWrapper) -> Vec<Policy> {
        (0..self.config.population_size)
            .map(|_| Policy::random(self.config.n_percepts, self.config.n_actions, rng))
            .collect()
    }

    /// Advances one generation. `outcomes` must align index-for-index with
    /// `population` and both must match the configured population size; any
    /// mismatch is a fatal precondition violation, not a recoverable fault.
    pub fn advance_generation(
        &mut self,
        population: &[Policy],
        outcomes: &[OutcomeStats],
        scorer: &impl Scorer,
        rng: &mut impl RngWrapper,
    ) -> EvolutionResult {
        let size = self.config.population_size;
        if population.len() != size {
            return Err(EvolutionError::PopulationSize {
                expected: size,
                actual: population.len(),
            });
        }
        if outcomes.len() != population.len() {
            return Err(EvolutionError::OutcomeCount {
                expected: population.len(),
                actual: outcomes.len(),
            });
        }

        let fitnesses = outcomes
            .iter()
            .map(|outcome| scorer.score(outcome))
            .collect::<Vec<_>>();
        let mean_fitness = fitnesses.iter().sum::<f32>() / fitnesses.len() as f32;
        self.notify_observers(EventType::GenerationScored(mean_fitness));

        let mut next_population = Vec::with_capacity(size);

        // Elites survive verbatim, fitness included; they are not rebred.
        for index in select_elites(&fitnesses, self.config.elite_count)? {
            let mut elite = population[index].clone();
            elite.set_fitness(fitnesses[index]);
            next_population.push(elite);
        }

        // Each breeding event runs two independent tournaments against the
        // full scored population; parents may coincide.
        for _ in 0..size - self.config.elite_count {
            let parent1 = select_by_tournament(&fitnesses, self.config.tournament_size, rng)?;
            let parent2 = select_by_tournament(&fitnesses, self.config.tournament_size, rng)?;
            let mut child = uniform_crossover(
                population[parent1].weights(),
                population[parent2].weights(),
                rng,
            )?;
            mutate(&mut child, self.config.mutation_rate, rng);
            next_population.push(Policy::from_weights(child));
        }

        self.generation += 1;
        debug!(
            "Generation {} advanced, mean fitness {:.2}",
            self.generation, mean_fitness
        );
        self.notify_observers(EventType::GenerationAdvanced);

        Ok(Snapshot {
            generation: self.generation,
            policies: next_population,
            mean_fitness,
        })
    }
}
