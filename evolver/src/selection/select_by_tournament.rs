use std::cmp::Ordering;

use crate::selection::{rng_wrapper::RngWrapper, SelectionError};

/// Selects one breeding parent: draws `pool_size` distinct candidates from
/// the whole population (partial Fisher-Yates over an index permutation) and
/// returns the index of the fittest candidate.
pub fn select_by_tournament(
    fitnesses: &[f32],
    pool_size: usize,
    rng: &mut impl RngWrapper,
) -> Result<usize, SelectionError> {
    let len = fitnesses.len();

    if pool_size == 0 {
        return Err(SelectionError::EmptyPool);
    }
    if pool_size > len {
        return Err(SelectionError::PoolTooLarge(pool_size, len));
    }

    let mut indexes = (0..len).collect::<Vec<_>>();
    for slot in 0..pool_size {
        let pick = rng.gen_range(slot..len);
        indexes.swap(slot, pick);
    }

    let winner = indexes[0..pool_size]
        .iter()
        .copied()
        .max_by(|&a, &b| {
            fitnesses[a]
                .partial_cmp(&fitnesses[b])
                .unwrap_or(Ordering::Equal)
        })
        .unwrap();
    Ok(winner)
}
