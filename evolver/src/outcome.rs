use serde::{Deserialize, Serialize};

/// Per-policy statistics reported by the game simulator for one generation.
/// The core only consumes these; how they are produced is the simulator's
/// business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeStats {
    /// Last turn the creature lived to.
    pub turns_survived: u32,
    /// True if the creature was still alive at the end of the game.
    pub alive: bool,
    pub size: f32,
    pub strawberries_eaten: u32,
    /// Energy gained from eating enemies.
    pub enemy_energy_eaten: f32,
    /// Distinct squares visited over the game.
    pub squares_visited: u32,
    /// Tracked by the simulator but deliberately absent from the default
    /// fitness weighting.
    pub bounces: u32,
}

/// Turns one policy's outcome statistics into a scalar fitness.
pub trait Scorer {
    fn score(&self, outcome: &OutcomeStats) -> f32;
}

/// Default weighting: survival time and staying alive count once, growth and
/// feeding count double, exploration counts a tenth per square. Bounces are
/// excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurvivalScorer;

impl Scorer for SurvivalScorer {
    fn score(&self, outcome: &OutcomeStats) -> f32 {
        outcome.turns_survived as f32
            + outcome.alive as u32 as f32
            + 2.0 * outcome.size
            + 2.0 * outcome.strawberries_eaten as f32
            + 2.0 * outcome.enemy_energy_eaten
            + outcome.squares_visited as f32 / 10.0
    }
}
