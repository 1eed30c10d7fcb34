//! Functions to generate measurement sequences for tests
use rand::Rng;

/// Random walk of `len` integers starting at `start`, each step drawn
/// uniformly from `[-max_step, max_step]`.
pub fn random_walk<R: Rng>(
    rng: &mut R,
    start: i64,
    max_step: i64,
    len: usize,
) -> Vec<i64> {
    let mut current = start;
    (0..len)
        .map(|_| {
            let value = current;
            current += rng.gen_range(-max_step..=max_step);
            value
        })
        .collect()
}

/// Sequence of `len` draws from only `levels` distinct values, so
/// repeated measurements and equal steps are common.
pub fn plateaued<R: Rng>(rng: &mut R, levels: i64, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..levels)).collect()
}

/// Strictly ascending sequence of `len` integers starting at `start`.
#[must_use]
pub fn strictly_ascending(start: i64, len: usize) -> Vec<i64> {
    (0..len).map(|i| start + i as i64).collect()
}
