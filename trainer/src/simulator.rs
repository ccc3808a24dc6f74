use evolver::{OutcomeStats, Policy, PolicyError};
use rand::Rng;

/// Stand-in for the external game simulator. Feeds each policy randomized
/// percepts through its projection and synthesizes plausible outcome
/// statistics from the resulting action scores, so the training loop can run
/// end to end without the real game.
pub struct StubSimulator {
    n_percepts: usize,
    turns_per_game: u32,
}

impl StubSimulator {
    pub fn new(n_percepts: usize, turns_per_game: u32) -> Self {
        StubSimulator {
            n_percepts,
            turns_per_game,
        }
    }

    pub fn run_generation(
        &self,
        population: &[Policy],
        rng: &mut impl Rng,
    ) -> Result<Vec<OutcomeStats>, PolicyError> {
        population
            .iter()
            .map(|policy| self.run_policy(policy, rng))
            .collect()
    }

    fn run_policy(&self, policy: &Policy, rng: &mut impl Rng) -> Result<OutcomeStats, PolicyError> {
        let percepts = (0..self.n_percepts)
            .map(|_| rng.gen::<f32>())
            .collect::<Vec<_>>();
        let scores = policy.evaluate(&percepts)?;

        // Rough [0, 1] signal: percepts and fresh weights both live in
        // [0, 1), so a dot product over P percepts averages around P / 4.
        let best = scores.iter().cloned().fold(f32::MIN, f32::max);
        let vigor = (best / (self.n_percepts as f32 / 2.0)).clamp(0.0, 1.0);

        let luck = rng.gen::<f32>();
        let survived = ((vigor + luck) / 2.0 * self.turns_per_game as f32) as u32;
        let turns_survived = survived.min(self.turns_per_game);
        let alive = turns_survived == self.turns_per_game;

        Ok(OutcomeStats {
            turns_survived,
            alive,
            size: 1.0 + 3.0 * vigor,
            strawberries_eaten: rng.gen_range(0..=turns_survived / 10),
            enemy_energy_eaten: vigor * rng.gen_range(0.0..5.0),
            squares_visited: rng.gen_range(1..=turns_survived.max(1)),
            bounces: rng.gen_range(0..=turns_survived / 5),
        })
    }
}

#[cfg(test)]
mod tests {
    use evolver::Policy;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::simulator::StubSimulator;

    #[test]
    fn test_run_generation_returns_one_outcome_per_policy() {
        // Given
        let mut rng = StdRng::seed_from_u64(7);
        let simulator = StubSimulator::new(5, 50);
        let population = {
            let mut random = evolver::selection::rng_wrapper::Random::new(&mut rng);
            (0..8)
                .map(|_| Policy::random(5, 3, &mut random))
                .collect::<Vec<_>>()
        };

        // When
        let outcomes = simulator.run_generation(&population, &mut rng).unwrap();

        // Then
        assert_eq!(population.len(), outcomes.len());
        for outcome in &outcomes {
            assert!(outcome.turns_survived <= 50);
            assert!(!outcome.alive || outcome.turns_survived == 50);
        }
    }

    #[test]
    fn test_run_generation_fails_on_percept_shape_mismatch() {
        // Given: simulator configured for more percepts than the policies have
        let mut rng = StdRng::seed_from_u64(7);
        let simulator = StubSimulator::new(6, 50);
        let population = {
            let mut random = evolver::selection::rng_wrapper::Random::new(&mut rng);
            vec![Policy::random(5, 3, &mut random)]
        };

        // When
        let result = simulator.run_generation(&population, &mut rng);

        // Then
        assert!(result.is_err());
    }
}
