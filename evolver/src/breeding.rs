use thiserror::Error;

use crate::{policy::WeightMatrix, selection::rng_wrapper::RngWrapper};

#[derive(Error, Debug, PartialEq)]
pub enum BreedingError {
    #[error("Cannot crossover parents of different shapes: {0}x{1} vs {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
}

/// Uniform crossover: every gene is copied from one parent or the other by
/// an independent coin flip. Genes are never averaged or interpolated.
pub fn uniform_crossover(
    parent1: &WeightMatrix,
    parent2: &WeightMatrix,
    rng: &mut impl RngWrapper,
) -> Result<WeightMatrix, BreedingError> {
    if parent1.percepts() != parent2.percepts() || parent1.actions() != parent2.actions() {
        return Err(BreedingError::ShapeMismatch(
            parent1.percepts(),
            parent1.actions(),
            parent2.percepts(),
            parent2.actions(),
        ));
    }

    let values = parent1
        .values()
        .iter()
        .zip(parent2.values())
        .map(|(&gene1, &gene2)| if rng.coin_flip() { gene1 } else { gene2 })
        .collect();
    Ok(WeightMatrix::from_values(
        values,
        parent1.percepts(),
        parent1.actions(),
    ))
}

/// Additive mutation: each gene independently mutates with probability
/// `mutation_rate` by gaining a fresh uniform [0, 1) draw. Untouched genes
/// keep their crossover value bit for bit.
pub fn mutate(weights: &mut WeightMatrix, mutation_rate: f32, rng: &mut impl RngWrapper) {
    for gene in weights.values_mut() {
        if rng.unit_fraction() < mutation_rate {
            *gene += rng.unit_fraction();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{policy::WeightMatrix, selection::rng_wrapper::test_utils::RngTest};

    use super::{mutate, uniform_crossover, BreedingError};

    fn parents() -> (WeightMatrix, WeightMatrix) {
        (
            WeightMatrix::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2),
            WeightMatrix::from_values(vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0], 3, 2),
        )
    }

    #[test]
    fn test_uniform_crossover_should_copy_each_gene_from_one_parent() {
        // Given
        let (parent1, parent2) = parents();
        let mut rng_mock = RngTest::with_coins(vec![true, false, false, true, false, true]);

        // When
        let child = uniform_crossover(&parent1, &parent2, &mut rng_mock).unwrap();

        // Then
        assert_eq!(&[1.0, 20.0, 30.0, 4.0, 50.0, 6.0], child.values());
    }

    #[test]
    fn test_uniform_crossover_should_never_interpolate() {
        // Given
        let (parent1, parent2) = parents();
        let mut rng = common_test::seeded_rng();
        let mut random = crate::selection::rng_wrapper::Random::new(&mut rng);

        // When
        let child = uniform_crossover(&parent1, &parent2, &mut random).unwrap();

        // Then
        for (index, &gene) in child.values().iter().enumerate() {
            assert!(
                gene == parent1.values()[index] || gene == parent2.values()[index],
                "Gene {} should come from one of the parents, got {}",
                index,
                gene
            );
        }
    }

    #[test]
    fn test_uniform_crossover_should_preserve_shape() {
        let (parent1, parent2) = parents();
        let mut rng_mock = RngTest::new();

        let child = uniform_crossover(&parent1, &parent2, &mut rng_mock).unwrap();

        assert_eq!(parent1.percepts(), child.percepts());
        assert_eq!(parent1.actions(), child.actions());
    }

    #[test]
    fn test_uniform_crossover_should_return_error_when_shapes_differ() {
        // Given
        let parent1 = WeightMatrix::from_values(vec![0.0; 6], 3, 2);
        let parent2 = WeightMatrix::from_values(vec![0.0; 6], 2, 3);
        let mut rng_mock = RngTest::new();

        // When
        let result = uniform_crossover(&parent1, &parent2, &mut rng_mock);

        // Then
        assert_eq!(Err(BreedingError::ShapeMismatch(3, 2, 2, 3)), result);
    }

    #[test]
    fn test_mutate_should_only_increase_flagged_genes() {
        // Given
        let original = WeightMatrix::from_values(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let mut mutated = original.clone();
        // Gene draws alternate below/above the rate: genes 0 and 2 mutate,
        // gaining 0.5 and 0.25.
        let mut rng_mock =
            RngTest::with_units(vec![0.01, 0.5, 0.9, 0.01, 0.25, 0.9]);

        // When
        mutate(&mut mutated, 0.03, &mut rng_mock);

        // Then
        assert_eq!(&[1.5, 2.0, 3.25, 4.0], mutated.values());
        for (index, (&before, &after)) in original
            .values()
            .iter()
            .zip(mutated.values())
            .enumerate()
        {
            assert!(
                after >= before,
                "Mutation must never decrease a gene (gene {})",
                index
            );
        }
    }

    #[test]
    fn test_mutate_should_leave_genes_untouched_when_rate_is_zero() {
        // Given
        let original = WeightMatrix::from_values(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let mut mutated = original.clone();
        let mut rng = common_test::seeded_rng();
        let mut random = crate::selection::rng_wrapper::Random::new(&mut rng);

        // When
        mutate(&mut mutated, 0.0, &mut random);

        // Then
        assert_eq!(original, mutated);
    }
}
