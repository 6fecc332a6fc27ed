//! Simulated QAOA Weight Generator
//!
//! Stands in for a quantum optimizer: every instrument gets a
//! Markowitz-flavoured score, the score is turned into a noisy raw weight,
//! and the raw weights are normalized to percentages.
//!
//! Nothing is searched or minimized. The output is a heuristic draw and is
//! expected to differ between calls for the same input.

use rand::Rng;

use crate::catalog::InstrumentCatalog;
use crate::model::Allocation;
use crate::rounding::round1;

/// Raw weight before scoring adjustments
pub const BASE_WEIGHT: f64 = 20.0;

/// Lower clamp for raw weights
pub const MIN_RAW_WEIGHT: f64 = 5.0;

/// Upper clamp for raw weights
pub const MAX_RAW_WEIGHT: f64 = 50.0;

/// Half-width of the uniform noise added to each raw weight
pub const WEIGHT_NOISE: f64 = 5.0;

const SCORE_SCALE: f64 = 100.0;

const TIME_BASE_MS: f64 = 50.0;
const TIME_PER_ASSET_MS: f64 = 15.0;
const TIME_NOISE_MS: f64 = 10.0;

/// Map a score and a noise draw to a raw weight in [5, 50]
pub fn raw_weight(score: f64, noise: f64) -> f64 {
    (BASE_WEIGHT + score * SCORE_SCALE + noise).clamp(MIN_RAW_WEIGHT, MAX_RAW_WEIGHT)
}

/// Scale weights to percentages rounded to one decimal.
///
/// The rounding residue is added to the first element only, so the result
/// sums to 100 while the first weight can drift visibly away from its
/// unrounded share on long lists.
pub fn normalize(raw: &[f64]) -> Vec<f64> {
    let total: f64 = raw.iter().sum();
    if total <= 0.0 {
        return vec![0.0; raw.len()];
    }

    let mut weights: Vec<f64> = raw.iter().map(|w| round1(w / total * 100.0)).collect();

    let diff = 100.0 - weights.iter().sum::<f64>();
    if let Some(first) = weights.first_mut() {
        *first = round1(*first + diff);
    }

    weights
}

/// Cosmetic solver time that grows with the number of assets
pub fn synthetic_time_ms<R: Rng>(n_assets: usize, rng: &mut R) -> f64 {
    TIME_BASE_MS
        + n_assets as f64 * TIME_PER_ASSET_MS
        + rng.random_range(-TIME_NOISE_MS..=TIME_NOISE_MS)
}

/// Weight generator bound to an instrument catalog
pub struct QaoaSimulator<'a> {
    catalog: &'a dyn InstrumentCatalog,
}

impl<'a> QaoaSimulator<'a> {
    pub fn new(catalog: &'a dyn InstrumentCatalog) -> Self {
        Self { catalog }
    }

    /// Score of a single instrument, higher risk aversion penalizes volatility
    pub fn score(&self, ticker: &str, risk_aversion: f64) -> f64 {
        let (expected_return, volatility) = self.catalog.estimates(ticker);
        expected_return - risk_aversion * volatility
    }

    /// Clamped raw weights with fresh noise per instrument
    pub fn raw_weights<R: Rng>(
        &self,
        tickers: &[String],
        risk_aversion: f64,
        rng: &mut R,
    ) -> Vec<f64> {
        tickers
            .iter()
            .map(|ticker| {
                let noise = rng.random_range(-WEIGHT_NOISE..=WEIGHT_NOISE);
                raw_weight(self.score(ticker, risk_aversion), noise)
            })
            .collect()
    }

    /// Produce a weight distribution and its synthetic solver time.
    ///
    /// No bounds are checked here; a single ticker yields `[100.0]`.
    pub fn optimize<R: Rng>(
        &self,
        tickers: &[String],
        risk_aversion: f64,
        rng: &mut R,
    ) -> Allocation {
        let qaoa_time_ms = synthetic_time_ms(tickers.len(), rng);
        let weights = normalize(&self.raw_weights(tickers, risk_aversion, rng));

        tracing::debug!(
            assets = tickers.len(),
            risk_aversion,
            qaoa_time_ms,
            ?weights,
            "qaoa simulation complete"
        );

        Allocation {
            weights,
            qaoa_time_ms,
            classical: None,
        }
    }
}
