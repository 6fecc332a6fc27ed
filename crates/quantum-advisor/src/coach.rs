//! Quantum Coach
//!
//! Request-level flow over the catalogs and the numeric engine:
//! classify → resolve profile → generate weights → metrics → benchmark.

use std::sync::Arc;

use chrono::Local;
use rand::Rng;

use crate::catalog::{InstrumentCatalog, ProfileCatalog};
use crate::error::{AdvisorError, Result};
use crate::model::{
    Allocation, AssetAllocation, BenchmarkResult, ChatReply, InstrumentListing, Intent,
    IntentKind, OptimizeBenchmark, OptimizeReport, OptimizedAsset, PortfolioMetrics,
    PortfolioReport, Profile, ProfileId, ProfileSummary, RiskTier,
};
use crate::strategy::{QaoaSimulator, run_classical};
use crate::svckit::{classify, compute_metrics, narrative};

/// Fewest instruments accepted for a direct optimization
pub const MIN_INSTRUMENTS: usize = 2;

/// Most instruments accepted for a direct optimization
pub const MAX_INSTRUMENTS: usize = 12;

/// Entry point used by the transport layer
#[derive(Clone)]
pub struct QuantumCoach {
    instruments: Arc<dyn InstrumentCatalog>,
    profiles: Arc<dyn ProfileCatalog>,
}

impl QuantumCoach {
    pub fn new(instruments: Arc<dyn InstrumentCatalog>, profiles: Arc<dyn ProfileCatalog>) -> Self {
        Self {
            instruments,
            profiles,
        }
    }

    /// Map free text to an intent
    pub fn classify(&self, message: &str) -> Intent {
        classify(message)
    }

    /// Weights for `tickers`, optionally with the classical comparison
    pub fn generate_weights(
        &self,
        tickers: &[String],
        risk_aversion: f64,
        with_benchmark: bool,
    ) -> Allocation {
        self.generate_weights_with(tickers, risk_aversion, with_benchmark, &mut rand::rng())
    }

    /// Same as [`Self::generate_weights`] with a caller-supplied generator
    pub fn generate_weights_with<R: Rng>(
        &self,
        tickers: &[String],
        risk_aversion: f64,
        with_benchmark: bool,
        rng: &mut R,
    ) -> Allocation {
        let simulator = QaoaSimulator::new(self.instruments.as_ref());
        let mut allocation = simulator.optimize(tickers, risk_aversion, rng);

        if with_benchmark {
            allocation.classical =
                Some(run_classical(&allocation.weights, allocation.qaoa_time_ms, rng));
        }

        allocation
    }

    pub fn compute_metrics(&self, tickers: &[String], weights: &[f64]) -> PortfolioMetrics {
        compute_metrics(self.instruments.as_ref(), tickers, weights)
    }

    /// Reject lists a direct optimization must not run on.
    ///
    /// Unknown tickers fail the whole request here, unlike the metrics
    /// lookups which substitute defaults.
    pub fn validate(&self, tickers: &[String], risk_aversion: f64) -> Result<()> {
        if !(MIN_INSTRUMENTS..=MAX_INSTRUMENTS).contains(&tickers.len()) {
            return Err(AdvisorError::InvalidInstrumentList {
                count: tickers.len(),
                min: MIN_INSTRUMENTS,
                max: MAX_INSTRUMENTS,
            });
        }

        let unknown: Vec<String> = tickers
            .iter()
            .filter(|t| !self.instruments.contains(t))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(AdvisorError::UnknownInstruments(unknown));
        }

        check_risk_aversion(risk_aversion)
    }

    /// Validated optimization over caller-chosen tickers
    pub fn optimize(
        &self,
        tickers: &[String],
        risk_aversion: f64,
        with_benchmark: bool,
    ) -> Result<OptimizeReport> {
        self.validate(tickers, risk_aversion)?;

        let allocation = self.generate_weights(tickers, risk_aversion, with_benchmark);
        let metrics = self.compute_metrics(tickers, &allocation.weights);

        let assets = tickers
            .iter()
            .zip(&allocation.weights)
            .filter_map(|(ticker, &weight)| {
                self.instruments.instrument(ticker).map(|i| OptimizedAsset {
                    ticker: ticker.clone(),
                    name: i.name.clone(),
                    weight,
                    expected_return: i.expected_return,
                    volatility: i.volatility,
                })
            })
            .collect();

        tracing::info!(
            assets = tickers.len(),
            risk_aversion,
            with_benchmark,
            "optimization complete"
        );

        Ok(OptimizeReport {
            success: true,
            assets,
            metrics,
            execution_time_ms: allocation.qaoa_time_ms,
            benchmark: allocation.classical.map(|c| OptimizeBenchmark {
                classical_time_ms: c.time_ms,
                quantum_advantage_percent: c.quantum_advantage,
            }),
        })
    }

    /// Resolve a profile, falling back to the balanced one
    pub fn resolve_profile(&self, id: Option<ProfileId>) -> Result<&Profile> {
        let requested = id.unwrap_or(ProfileId::FALLBACK);

        if let Some(profile) = self.profiles.profile(requested) {
            return Ok(profile);
        }

        tracing::warn!(profile = %requested, "profile not in catalog, falling back");
        self.profiles
            .profile(ProfileId::FALLBACK)
            .ok_or_else(|| AdvisorError::UnknownProfile(ProfileId::FALLBACK.to_string()))
    }

    /// Answer a chat message.
    ///
    /// Portfolio intents always carry their own profile; `profile_hint` is
    /// only consulted when an intent has none.
    pub fn respond(
        &self,
        message: &str,
        profile_hint: Option<ProfileId>,
        with_benchmark: bool,
    ) -> Result<ChatReply> {
        let intent = self.classify(message);

        if intent.kind.wants_portfolio() {
            let report = self.portfolio_report(&intent, profile_hint, with_benchmark)?;
            return Ok(ChatReply {
                message: report.explanation.clone(),
                portfolio: Some(report),
                suggested_actions: narrative::actions(&narrative::PORTFOLIO_ACTIONS),
            });
        }

        let (text, actions) = match intent.kind {
            IntentKind::Greeting => (narrative::GREETING, narrative::GREETING_ACTIONS),
            IntentKind::ExplainQuantum => {
                (narrative::QUANTUM_EXPLAINER, narrative::QUANTUM_ACTIONS)
            }
            // ExplainMetrics; portfolio kinds returned above
            _ => (narrative::METRICS_EXPLAINER, narrative::METRICS_ACTIONS),
        };

        Ok(ChatReply {
            message: text.into(),
            portfolio: None,
            suggested_actions: narrative::actions(&actions),
        })
    }

    fn portfolio_report(
        &self,
        intent: &Intent,
        profile_hint: Option<ProfileId>,
        with_benchmark: bool,
    ) -> Result<PortfolioReport> {
        let profile = self.resolve_profile(intent.profile.or(profile_hint))?;
        let tickers = &profile.tickers;

        let allocation = self.generate_weights(tickers, profile.risk_aversion, with_benchmark);
        let metrics = self.compute_metrics(tickers, &allocation.weights);

        let assets = tickers
            .iter()
            .zip(&allocation.weights)
            .enumerate()
            .map(|(i, (ticker, &weight))| {
                let instrument = self.instruments.instrument(ticker);
                AssetAllocation {
                    ticker: ticker.clone(),
                    name: instrument.map_or_else(|| ticker.clone(), |i| i.name.clone()),
                    weight,
                    color: narrative::chart_color(i).into(),
                    risk_level: instrument.map_or(RiskTier::Medium, |i| i.risk_tier),
                    description: instrument.map(|i| i.description.clone()).unwrap_or_default(),
                    isin: instrument.and_then(|i| i.isin.clone()),
                }
            })
            .collect();

        let benchmark = allocation.classical.as_ref().map(|classical| {
            let classical_metrics = self.compute_metrics(tickers, &classical.weights);
            BenchmarkResult {
                qaoa_return: metrics.expected_return,
                classical_return: classical_metrics.expected_return,
                qaoa_time_ms: allocation.qaoa_time_ms,
                classical_time_ms: classical.time_ms,
                quantum_advantage: classical.quantum_advantage,
            }
        });

        tracing::info!(
            profile = %profile.id,
            intent = ?intent.kind,
            expected_return = metrics.expected_return,
            sharpe = metrics.sharpe_ratio,
            "portfolio generated"
        );

        Ok(PortfolioReport {
            success: true,
            portfolio_type: profile.name.clone(),
            assets,
            explanation: narrative::explain_portfolio(profile, &metrics, intent.inflation_addon),
            metrics,
            benchmark,
            disclaimer: narrative::DISCLAIMER.into(),
            timestamp: Local::now().to_rfc3339(),
        })
    }

    pub fn profiles(&self) -> Vec<ProfileSummary> {
        self.profiles.profiles().into_iter().map(ProfileSummary::from).collect()
    }

    pub fn instruments_by_category(&self) -> InstrumentListing {
        let mut listing = InstrumentListing::default();
        for instrument in self.instruments.instruments() {
            listing.push(instrument);
        }
        listing
    }
}

/// Risk aversion must lie in [0, 1]
pub fn check_risk_aversion(risk_aversion: f64) -> Result<()> {
    if (0.0..=1.0).contains(&risk_aversion) {
        Ok(())
    } else {
        Err(AdvisorError::InvalidRiskAversion(risk_aversion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinCatalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn coach() -> QuantumCoach {
        let catalog = Arc::new(BuiltinCatalog::new());
        QuantumCoach::new(catalog.clone(), catalog)
    }

    fn tickers(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_validate_count_bounds() {
        let coach = coach();

        let err = coach.validate(&tickers(&["IBTS.L"]), 0.5).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInstrumentList { count: 1, .. }));

        let all: Vec<String> = coach
            .instruments
            .instruments()
            .iter()
            .map(|i| i.ticker.clone())
            .collect();
        assert!(coach.validate(&all[..12], 0.5).is_ok());
        assert!(matches!(
            coach.validate(&all[..13], 0.5),
            Err(AdvisorError::InvalidInstrumentList { count: 13, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_tickers() {
        let coach = coach();
        let err = coach
            .validate(&tickers(&["SAN.MC", "FAKE", "NOPE"]), 0.5)
            .unwrap_err();
        assert_eq!(err, AdvisorError::UnknownInstruments(tickers(&["FAKE", "NOPE"])));
    }

    #[test]
    fn test_validate_risk_aversion() {
        let coach = coach();
        let list = tickers(&["SAN.MC", "BBVA.MC"]);
        assert!(coach.validate(&list, 0.0).is_ok());
        assert!(coach.validate(&list, 1.0).is_ok());
        assert!(matches!(
            coach.validate(&list, 1.5),
            Err(AdvisorError::InvalidRiskAversion(_))
        ));
        assert!(coach.validate(&list, -0.1).is_err());
    }

    #[test]
    fn test_optimize_report() {
        let coach = coach();
        let list = tickers(&["SAN.MC", "IBTS.L", "BTC-EUR"]);
        let report = coach.optimize(&list, 0.5, true).unwrap();

        assert!(report.success);
        assert_eq!(report.assets.len(), 3);
        assert_eq!(report.assets[1].name, "iShares EUR Govt Bond 1-3yr");
        let total: f64 = report.assets.iter().map(|a| a.weight).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!(report.benchmark.is_some());

        let without = coach.optimize(&list, 0.5, false).unwrap();
        assert!(without.benchmark.is_none());
    }

    #[test]
    fn test_generate_weights_with_benchmark() {
        let coach = coach();
        let list = tickers(&["VWCE.DE", "EUNL.DE", "SAN.MC", "ITX.MC", "CSPX.L"]);
        let mut rng = StdRng::seed_from_u64(21);

        let allocation = coach.generate_weights_with(&list, 0.5, true, &mut rng);
        let classical = allocation.classical.expect("benchmark requested");
        assert_eq!(classical.weights.len(), 5);
        assert!((classical.weights.iter().sum::<f64>() - 100.0).abs() < 1e-9);

        let plain = coach.generate_weights_with(&list, 0.5, false, &mut rng);
        assert!(plain.classical.is_none());
    }

    #[test]
    fn test_respond_conservative_portfolio() {
        let coach = coach();
        let reply = coach.respond("quiero algo conservador y seguro", None, false).unwrap();

        let portfolio = reply.portfolio.expect("portfolio reply");
        assert_eq!(portfolio.portfolio_type, "Conservador España");
        let tickers: Vec<&str> = portfolio.assets.iter().map(|a| a.ticker.as_str()).collect();
        assert_eq!(tickers, ["IBE.MC", "TEF.MC", "IBTS.L", "EUNL.DE"]);
        assert_eq!(portfolio.assets[0].color, "#14B8A6");
        assert_eq!(portfolio.assets[2].risk_level, RiskTier::Low);
        assert!(portfolio.benchmark.is_none());
        assert_eq!(reply.message, portfolio.explanation);
        assert_eq!(reply.suggested_actions.len(), 3);
    }

    #[test]
    fn test_respond_with_benchmark() {
        let coach = coach();
        let reply = coach.respond("me interesa bitcoin", None, true).unwrap();

        let portfolio = reply.portfolio.unwrap();
        assert_eq!(portfolio.portfolio_type, "Agresivo con Crypto");
        let benchmark = portfolio.benchmark.unwrap();
        assert!((benchmark.qaoa_return - portfolio.metrics.expected_return).abs() < f64::EPSILON);
        assert!((2.5..=8.5).contains(&benchmark.quantum_advantage));
    }

    #[test]
    fn test_respond_inflation_addon() {
        let coach = coach();
        let reply = coach.respond("quiero batir la inflación", None, false).unwrap();
        assert!(reply.message.contains("inflación española"));
        assert_eq!(reply.portfolio.unwrap().portfolio_type, "Conservador España");
    }

    #[test]
    fn test_respond_canned_replies() {
        let coach = coach();

        let greeting = coach.respond("hola", None, false).unwrap();
        assert!(greeting.portfolio.is_none());
        assert!(greeting.message.starts_with("¡Hola! Soy Coach Q"));

        let quantum = coach.respond("¿qué es qaoa?", None, false).unwrap();
        assert!(quantum.message.contains("Hamiltoniano"));

        let metrics = coach.respond("explícame el sharpe", None, false).unwrap();
        assert!(metrics.message.contains("VaR 95%"));
    }

    #[test]
    fn test_default_portfolio_ignores_hint() {
        let coach = coach();
        // Fallback intent already carries the balanced profile
        let reply = coach
            .respond("tengo 2000 euros", Some(ProfileId::AgresivoCrypto), false)
            .unwrap();
        assert_eq!(reply.portfolio.unwrap().portfolio_type, "Equilibrado Global");
    }

    #[test]
    fn test_resolve_profile() {
        let coach = coach();
        assert_eq!(coach.resolve_profile(None).unwrap().id, ProfileId::EquilibradoGlobal);
        assert_eq!(
            coach.resolve_profile(Some(ProfileId::CrecimientoTech)).unwrap().id,
            ProfileId::CrecimientoTech
        );
    }

    #[test]
    fn test_listings() {
        let coach = coach();
        assert_eq!(coach.profiles().len(), 4);

        let listing = coach.instruments_by_category();
        assert_eq!(listing.ibex35.len(), 8);
        assert_eq!(listing.etfs, ["VWCE.DE", "CSPX.L", "EUNL.DE", "IBTS.L"]);
        assert_eq!(listing.crypto, ["BTC-EUR", "ETH-EUR"]);
        assert_eq!(listing.us_tech.len(), 5);
    }
}
