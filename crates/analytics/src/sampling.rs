//! Shaped random sampling helpers shared by the dataset generators.
//!
//! Every historical series is a uniform draw per month multiplied by a
//! linear drift factor, so multi-year trends (rising losses, falling
//! satisfaction) emerge from otherwise flat noise.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Linear interpolation factor for sample `i` of `n`: 0.0 for the first
/// sample, 1.0 for the last.
pub fn progress(i: usize, n: usize) -> f32 {
    if n <= 1 {
        return 0.0;
    }
    i as f32 / (n - 1) as f32
}

/// Drift multiplier for sample `i` of `n`. `total_drift` is the fractional
/// change applied to the final sample: 0.5 ends 50% above the base range,
/// -0.2 ends 20% below it.
pub fn drift_factor(i: usize, n: usize, total_drift: f32) -> f32 {
    1.0 + progress(i, n) * total_drift
}

/// Draw a series of `n` uniform samples from `[min, max)`, each scaled by
/// the drift factor for its position.
pub fn drifting_series(
    rng: &mut ChaCha8Rng,
    n: usize,
    min: f32,
    max: f32,
    total_drift: f32,
) -> Vec<f32> {
    (0..n)
        .map(|i| rng.gen_range(min..max) * drift_factor(i, n, total_drift))
        .collect()
}

/// Pick one of `choices` with the given relative weights.
///
/// Weights must be non-negative and sum to a positive value.
pub fn pick_weighted<T: Copy>(rng: &mut ChaCha8Rng, choices: &[(T, f32)]) -> T {
    let total: f32 = choices.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0.0..total);
    for &(value, weight) in choices {
        if roll < weight {
            return value;
        }
        roll -= weight;
    }
    // Floating point edge: fall back to the last choice.
    choices[choices.len() - 1].0
}

/// Pick one of `choices` uniformly.
pub fn pick_uniform<T: Copy>(rng: &mut ChaCha8Rng, choices: &[T]) -> T {
    choices[rng.gen_range(0..choices.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress(0, 36), 0.0);
        assert!((progress(35, 36) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_progress_single_sample() {
        assert_eq!(progress(0, 1), 0.0);
    }

    #[test]
    fn test_drift_factor_positive() {
        assert!((drift_factor(35, 36, 0.5) - 1.5).abs() < 1e-6);
        assert!((drift_factor(0, 36, 0.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_drift_factor_negative() {
        assert!((drift_factor(35, 36, -0.2) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_drifting_series_bounds() {
        let mut r = rng();
        let series = drifting_series(&mut r, 36, 10.0, 20.0, 0.5);
        assert_eq!(series.len(), 36);
        for (i, v) in series.iter().enumerate() {
            let factor = drift_factor(i, 36, 0.5);
            assert!(*v >= 10.0 * factor && *v <= 20.0 * factor);
        }
    }

    #[test]
    fn test_pick_weighted_respects_zero_weight() {
        let mut r = rng();
        for _ in 0..100 {
            let v = pick_weighted(&mut r, &[(1u8, 0.0), (2u8, 1.0)]);
            assert_eq!(v, 2);
        }
    }

    #[test]
    fn test_pick_weighted_distribution() {
        let mut r = rng();
        let mut heavy = 0;
        for _ in 0..1000 {
            if pick_weighted(&mut r, &[('a', 0.9), ('b', 0.1)]) == 'a' {
                heavy += 1;
            }
        }
        // 90% weight should dominate clearly.
        assert!(heavy > 800);
    }

    #[test]
    fn test_pick_uniform_in_range() {
        let mut r = rng();
        for _ in 0..50 {
            let v = pick_uniform(&mut r, &[1, 2, 3]);
            assert!((1..=3).contains(&v));
        }
    }
}
