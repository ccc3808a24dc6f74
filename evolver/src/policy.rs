use thiserror::Error;

use crate::selection::rng_wrapper::RngWrapper;

#[derive(Error, Debug, PartialEq)]
pub enum PolicyError {
    #[error("Percept shape mismatch: policy expects {expected} percepts, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Row-major weight matrix of shape (percepts x actions). The shape is fixed
/// at construction and never changes across crossover or mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    values: Vec<f32>,
    percepts: usize,
    actions: usize,
}

impl WeightMatrix {
    /// Builds a matrix with every entry drawn uniformly from [0, 1).
    pub fn random(percepts: usize, actions: usize, rng: &mut impl RngWrapper) -> Self {
        let values = (0..percepts * actions)
            .map(|_| rng.unit_fraction())
            .collect();
        WeightMatrix {
            values,
            percepts,
            actions,
        }
    }

    pub fn from_values(values: Vec<f32>, percepts: usize, actions: usize) -> Self {
        debug_assert_eq!(values.len(), percepts * actions);
        WeightMatrix {
            values,
            percepts,
            actions,
        }
    }

    pub fn percepts(&self) -> usize {
        self.percepts
    }

    pub fn actions(&self) -> usize {
        self.actions
    }

    pub fn get(&self, percept: usize, action: usize) -> f32 {
        self.values[percept * self.actions + action]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Projects a flattened percept vector to one score per action (plain
    /// dot products, no bias, no activation).
    pub fn project(&self, percepts: &[f32]) -> Result<Vec<f32>, PolicyError> {
        if percepts.len() != self.percepts {
            return Err(PolicyError::ShapeMismatch {
                expected: self.percepts,
                actual: percepts.len(),
            });
        }

        let scores = (0..self.actions)
            .map(|action| {
                percepts
                    .iter()
                    .enumerate()
                    .map(|(percept, &input)| input * self.get(percept, action))
                    .sum()
            })
            .collect();
        Ok(scores)
    }
}

/// A single evolvable decision policy: a weight matrix plus the fitness
/// assigned to it for the current generation. Fitness is 0 until assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    weights: WeightMatrix,
    fitness: f32,
}

impl Policy {
    pub fn random(percepts: usize, actions: usize, rng: &mut impl RngWrapper) -> Self {
        Policy {
            weights: WeightMatrix::random(percepts, actions, rng),
            fitness: 0f32,
        }
    }

    pub fn from_weights(weights: WeightMatrix) -> Self {
        Policy {
            weights,
            fitness: 0f32,
        }
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f32) {
        self.fitness = fitness;
    }

    /// Scores a percept vector against this policy's weights. The percept
    /// length must match the matrix's percept dimension.
    pub fn evaluate(&self, percepts: &[f32]) -> Result<Vec<f32>, PolicyError> {
        self.weights.project(percepts)
    }
}
