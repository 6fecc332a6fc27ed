//! Portfolio Metrics
//!
//! Expected return, volatility, Sharpe ratio, parametric VaR and a drawdown
//! estimate from static per-instrument estimates.
//!
//! Covariance is not modelled: variance is the sum of squared weighted
//! volatilities, scaled by a fixed correlation factor.

use crate::catalog::InstrumentCatalog;
use crate::model::PortfolioMetrics;
use crate::rounding::round2;

/// Spanish government bond yield used as the risk-free rate
pub const RISK_FREE_RATE: f64 = 0.03;

/// Flat correlation adjustment applied to every portfolio
pub const CORRELATION_FACTOR: f64 = 0.7;

/// One-sided 95% normal quantile
pub const Z_95: f64 = 1.645;

pub const DRAWDOWN_MULTIPLIER: f64 = 2.5;

/// Unrounded statistics as fractions
#[derive(Clone, Copy, Debug, PartialEq)]
struct RawMetrics {
    expected_return: f64,
    volatility: f64,
    sharpe_ratio: f64,
    var_95: f64,
    max_drawdown: f64,
}

impl RawMetrics {
    fn compute(catalog: &dyn InstrumentCatalog, tickers: &[String], weights: &[f64]) -> Self {
        let mut expected_return = 0.0;
        let mut variance = 0.0;

        for (ticker, weight) in tickers.iter().zip(weights) {
            let (asset_return, asset_volatility) = catalog.estimates(ticker);
            let fraction = weight / 100.0;

            expected_return += fraction * asset_return;
            variance += (fraction * asset_volatility).powi(2);
        }

        let volatility = variance.sqrt() * CORRELATION_FACTOR;
        let sharpe_ratio = if volatility > 0.0 {
            (expected_return - RISK_FREE_RATE) / volatility
        } else {
            0.0
        };

        Self {
            expected_return,
            volatility,
            sharpe_ratio,
            var_95: expected_return - Z_95 * volatility,
            max_drawdown: volatility * DRAWDOWN_MULTIPLIER,
        }
    }

    fn rounded(self) -> PortfolioMetrics {
        PortfolioMetrics {
            expected_return: round2(self.expected_return * 100.0),
            volatility: round2(self.volatility * 100.0),
            sharpe_ratio: round2(self.sharpe_ratio),
            var_95: round2(self.var_95 * 100.0),
            max_drawdown: round2(self.max_drawdown * 100.0),
        }
    }
}

/// Compute the five summary statistics for an aligned ticker/weight list.
///
/// Pure: identical inputs always give identical outputs. Unknown tickers
/// fall back to the catalog's default estimates.
pub fn compute_metrics(
    catalog: &dyn InstrumentCatalog,
    tickers: &[String],
    weights: &[f64],
) -> PortfolioMetrics {
    RawMetrics::compute(catalog, tickers, weights).rounded()
}
