use std::cmp::Ordering;

use crate::selection::{SelectionError, SelectionResult};

/// Returns the indexes of the `expected_count` fittest entries, best first.
/// The sort is stable, so equal fitness values keep their population order.
pub fn select_elites(fitnesses: &[f32], expected_count: usize) -> SelectionResult {
    let len = fitnesses.len();

    if expected_count > len {
        return Err(SelectionError::OutOfRange(expected_count, len));
    }

    let mut indexes = (0..len).collect::<Vec<_>>();
    indexes.sort_by(|&a, &b| {
        fitnesses[b]
            .partial_cmp(&fitnesses[a])
            .unwrap_or(Ordering::Equal)
    });
    Ok(indexes[0..expected_count].to_vec())
}

#[cfg(test)]
mod tests {
    use crate::selection::SelectionError;

    use super::select_elites;

    #[test]
    fn test_select_elites_should_return_fittest_first() {
        // Given
        let fitnesses = vec![2.0, 5.0, 1.0, 4.0];

        // When / Then
        assert_eq!(Ok(vec![]), select_elites(&fitnesses, 0));
        assert_eq!(Ok(vec![1, 3]), select_elites(&fitnesses, 2));
        assert_eq!(Ok(vec![1, 3, 0, 2]), select_elites(&fitnesses, 4));
    }

    #[test]
    fn test_select_elites_should_break_ties_by_population_order() {
        // Given
        let fitnesses = vec![3.0, 7.0, 7.0, 3.0];

        // When
        let result = select_elites(&fitnesses, 4);

        // Then
        assert_eq!(Ok(vec![1, 2, 0, 3]), result);
    }

    #[test]
    fn test_select_elites_should_return_error_when_count_exceeds_population() {
        // Given
        let fitnesses = vec![1.0, 2.0];

        // When
        let result = select_elites(&fitnesses, 3);

        // Then
        assert_eq!(Err(SelectionError::OutOfRange(3, 2)), result);
    }
}
