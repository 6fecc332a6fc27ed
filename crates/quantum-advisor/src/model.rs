//! Domain Models
//!
//! Instruments, profiles, intents and the numeric outputs of the engine.
//! Weights and metrics are plain `f64` percentages rounded at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordinal risk tier of an instrument
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    MediumLow,
    Medium,
    MediumHigh,
    High,
    VeryHigh,
}

/// Market segment an instrument belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ibex35,
    Etf,
    Crypto,
    UsTech,
}

/// A single investable asset with static estimates
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Instrument {
    /// Ticker symbol (e.g., "SAN.MC", "BTC-EUR")
    pub ticker: String,

    /// Display name
    pub name: String,

    pub category: Category,

    pub risk_tier: RiskTier,

    /// Short description shown next to the allocation
    pub description: String,

    /// ISIN, absent for crypto and US listings
    pub isin: Option<String>,

    /// Expected annual return as a fraction (0.082 = 8.2%)
    pub expected_return: f64,

    /// Annual volatility as a fraction
    pub volatility: f64,
}

impl Instrument {
    pub fn new(
        ticker: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        risk_tier: RiskTier,
        expected_return: f64,
        volatility: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            category,
            risk_tier,
            description: String::new(),
            isin: None,
            expected_return,
            volatility,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }
}

/// Identifier of a portfolio profile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileId {
    #[serde(rename = "conservador_espanol")]
    ConservadorEspanol,
    #[serde(rename = "equilibrado_global")]
    EquilibradoGlobal,
    #[serde(rename = "crecimiento_tech")]
    CrecimientoTech,
    #[serde(rename = "agresivo_crypto")]
    AgresivoCrypto,
}

impl ProfileId {
    /// Profile used whenever none can be resolved
    pub const FALLBACK: Self = ProfileId::EquilibradoGlobal;

    pub const ALL: [Self; 4] = [
        ProfileId::ConservadorEspanol,
        ProfileId::EquilibradoGlobal,
        ProfileId::CrecimientoTech,
        ProfileId::AgresivoCrypto,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileId::ConservadorEspanol => "conservador_espanol",
            ProfileId::EquilibradoGlobal => "equilibrado_global",
            ProfileId::CrecimientoTech => "crecimiento_tech",
            ProfileId::AgresivoCrypto => "agresivo_crypto",
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Named allocation template
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,

    pub name: String,

    pub description: String,

    /// Risk aversion in [0, 1], higher = more conservative
    pub risk_aversion: f64,

    /// Ordered instrument identifiers
    pub tickers: Vec<String>,
}

/// What the user is asking for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Greeting,
    ExplainQuantum,
    ExplainMetrics,
    PortfolioRequest,
    InflationHedge,
    DefaultPortfolio,
}

impl IntentKind {
    /// Whether this intent is answered with an allocation
    pub const fn wants_portfolio(self) -> bool {
        matches!(
            self,
            IntentKind::PortfolioRequest | IntentKind::InflationHedge | IntentKind::DefaultPortfolio
        )
    }
}

/// Classified user intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub kind: IntentKind,

    pub profile: Option<ProfileId>,

    /// Append the inflation commentary to the explanation
    #[serde(default)]
    pub inflation_addon: bool,
}

impl Intent {
    pub const fn new(kind: IntentKind) -> Self {
        Self {
            kind,
            profile: None,
            inflation_addon: false,
        }
    }

    pub const fn portfolio(kind: IntentKind, profile: ProfileId) -> Self {
        Self {
            kind,
            profile: Some(profile),
            inflation_addon: false,
        }
    }

    pub const fn with_inflation_addon(mut self) -> Self {
        self.inflation_addon = true;
        self
    }
}

/// Summary risk/return statistics, percentages except `sharpe_ratio`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub expected_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
    /// Parametric Value at Risk at 95%
    pub var_95: f64,
    pub max_drawdown: f64,
}

/// Second, deliberately inferior weighting produced for comparison
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassicalRun {
    pub weights: Vec<f64>,
    pub time_ms: f64,
    /// Drawn independently of both portfolios' returns
    pub quantum_advantage: f64,
}

/// Output of the weight generator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Percentages aligned with the instrument list, summing to 100
    pub weights: Vec<f64>,

    /// Synthetic solver time
    pub qaoa_time_ms: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub classical: Option<ClassicalRun>,
}

/// QAOA vs classical comparison
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub qaoa_return: f64,
    pub classical_return: f64,
    pub qaoa_time_ms: f64,
    pub classical_time_ms: f64,
    /// Percentage improvement figure, not derived from the two returns
    pub quantum_advantage: f64,
}

/// One row of a chat portfolio
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub ticker: String,
    pub name: String,
    pub weight: f64,
    /// Chart colour (hex)
    pub color: String,
    pub risk_level: RiskTier,
    pub description: String,
    pub isin: Option<String>,
}

/// Full portfolio answer for a chat request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub success: bool,

    /// Profile display name
    pub portfolio_type: String,

    pub assets: Vec<AssetAllocation>,

    pub metrics: PortfolioMetrics,

    pub benchmark: Option<BenchmarkResult>,

    pub explanation: String,

    pub disclaimer: String,

    /// ISO-8601 generation time
    pub timestamp: String,
}

/// Reply to a chat message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,

    pub portfolio: Option<PortfolioReport>,

    #[serde(default)]
    pub suggested_actions: Vec<String>,
}

/// One row of a direct optimization
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizedAsset {
    pub ticker: String,
    pub name: String,
    pub weight: f64,
    pub expected_return: f64,
    pub volatility: f64,
}

/// Classical comparison figures attached to a direct optimization
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizeBenchmark {
    pub classical_time_ms: f64,
    pub quantum_advantage_percent: f64,
}

/// Result of a direct optimization over caller-chosen tickers
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizeReport {
    pub success: bool,
    pub assets: Vec<OptimizedAsset>,
    pub metrics: PortfolioMetrics,
    pub execution_time_ms: f64,
    pub benchmark: Option<OptimizeBenchmark>,
}

/// Public view of a profile
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: ProfileId,
    pub name: String,
    pub description: String,
    pub risk_aversion: f64,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
            description: profile.description.clone(),
            risk_aversion: profile.risk_aversion,
        }
    }
}

/// Tickers grouped by market segment
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InstrumentListing {
    pub ibex35: Vec<String>,
    pub etfs: Vec<String>,
    pub crypto: Vec<String>,
    pub us_tech: Vec<String>,
}

impl InstrumentListing {
    pub fn push(&mut self, instrument: &Instrument) {
        let bucket = match instrument.category {
            Category::Ibex35 => &mut self.ibex35,
            Category::Etf => &mut self.etfs,
            Category::Crypto => &mut self.crypto,
            Category::UsTech => &mut self.us_tech,
        };
        bucket.push(instrument.ticker.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tier_ordering() {
        assert!(RiskTier::Low < RiskTier::MediumLow);
        assert!(RiskTier::MediumLow < RiskTier::Medium);
        assert!(RiskTier::MediumHigh < RiskTier::High);
        assert!(RiskTier::High < RiskTier::VeryHigh);
        assert_eq!(serde_json::to_string(&RiskTier::MediumHigh).unwrap(), "\"MEDIUM_HIGH\"");
    }

    #[test]
    fn test_profile_id_round_trip_names() {
        for id in ProfileId::ALL {
            assert_eq!(id.as_str().parse::<ProfileId>().unwrap(), id);
            assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", id.as_str()));
        }
        assert!("moderado".parse::<ProfileId>().is_err());
    }

    #[test]
    fn test_intent_wire_format() {
        let intent = crate::svckit::classify("quiero batir la inflación");
        let json = serde_json::to_value(intent).unwrap();
        assert_eq!(json["kind"], "inflation_hedge");
        assert_eq!(json["profile"], "conservador_espanol");
        assert_eq!(json["inflation_addon"], true);
        assert!(intent.kind.wants_portfolio());
        assert!(!IntentKind::Greeting.wants_portfolio());
    }
}
