/// Append-only record of per-generation mean fitness values. Owned by the
/// driver and fed from each generation advance; reporting only, the engine
/// never reads it back.
#[derive(Debug, Clone, Default)]
pub struct FitnessHistory {
    means: Vec<f32>,
}

impl FitnessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mean_fitness: f32) {
        self.means.push(mean_fitness);
    }

    pub fn means(&self) -> &[f32] {
        &self.means
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Mean of the recorded generation means, `None` while empty.
    pub fn overall_mean(&self) -> Option<f32> {
        if self.means.is_empty() {
            return None;
        }
        Some(self.means.iter().sum::<f32>() / self.means.len() as f32)
    }
}
