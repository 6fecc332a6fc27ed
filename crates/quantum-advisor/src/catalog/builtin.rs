//! Built-in Catalog
//!
//! Static instrument and profile tables for the Spanish retail market:
//! IBEX 35 blue chips, UCITS ETFs, two crypto assets and US tech.

use std::collections::HashMap;

use super::{InstrumentCatalog, ProfileCatalog};
use crate::model::{Category, Instrument, Profile, ProfileId, RiskTier};

// (ticker, name, category, risk tier, expected return, volatility, isin, description)
type InstrumentRow = (
    &'static str,
    &'static str,
    Category,
    RiskTier,
    f64,
    f64,
    Option<&'static str>,
    &'static str,
);

#[rustfmt::skip]
const INSTRUMENTS: &[InstrumentRow] = &[
    ("SAN.MC", "Banco Santander", Category::Ibex35, RiskTier::MediumHigh, 0.082, 0.28,
        Some("ES0113900J37"), "Mayor banco de la Eurozona por capitalización"),
    ("BBVA.MC", "BBVA", Category::Ibex35, RiskTier::MediumHigh, 0.075, 0.26,
        Some("ES0113211835"), "Segundo banco español, fuerte presencia en México"),
    ("ITX.MC", "Inditex", Category::Ibex35, RiskTier::Medium, 0.095, 0.22,
        Some("ES0148396007"), "Líder mundial en moda rápida (Zara, Massimo Dutti)"),
    ("IBE.MC", "Iberdrola", Category::Ibex35, RiskTier::MediumLow, 0.058, 0.18,
        Some("ES0144580Y14"), "Líder mundial en energías renovables"),
    ("TEF.MC", "Telefónica", Category::Ibex35, RiskTier::Medium, 0.045, 0.20,
        Some("ES0178430E18"), "Telecomunicaciones, dividendo estable"),
    ("REP.MC", "Repsol", Category::Ibex35, RiskTier::MediumHigh, 0.065, 0.32,
        Some("ES0173516115"), "Energía integrada, transición energética"),
    ("AMS.MC", "Amadeus IT", Category::Ibex35, RiskTier::Medium, 0.088, 0.24,
        Some("ES0109067019"), "Tecnología para sector turístico"),
    ("FER.MC", "Ferrovial", Category::Ibex35, RiskTier::Medium, 0.072, 0.21,
        Some("ES0118900010"), "Infraestructuras y construcción"),
    ("VWCE.DE", "Vanguard FTSE All-World", Category::Etf, RiskTier::Medium, 0.078, 0.15,
        Some("IE00BK5BQT80"), "Exposición global diversificada, bajo coste (TER 0.22%)"),
    ("CSPX.L", "iShares Core S&P 500", Category::Etf, RiskTier::Medium, 0.095, 0.17,
        Some("IE00B5BMR087"), "S&P 500 acumulación, TER 0.07%"),
    ("EUNL.DE", "iShares Core MSCI World", Category::Etf, RiskTier::Medium, 0.082, 0.16,
        Some("IE00B4L5Y983"), "MSCI World acumulación, TER 0.20%"),
    ("IBTS.L", "iShares EUR Govt Bond 1-3yr", Category::Etf, RiskTier::Low, 0.025, 0.03,
        Some("IE00B14X4Q57"), "Bonos gobierno EUR corto plazo, bajo riesgo"),
    ("BTC-EUR", "Bitcoin", Category::Crypto, RiskTier::VeryHigh, 0.35, 0.72,
        None, "Criptomoneda líder, alta volatilidad"),
    ("ETH-EUR", "Ethereum", Category::Crypto, RiskTier::VeryHigh, 0.28, 0.85,
        None, "Plataforma smart contracts, alta volatilidad"),
    ("AAPL", "Apple Inc.", Category::UsTech, RiskTier::Medium, 0.12, 0.25,
        None, "Tecnología de consumo, ecosistema sólido"),
    ("MSFT", "Microsoft Corporation", Category::UsTech, RiskTier::Medium, 0.115, 0.23,
        None, "Software empresarial, cloud Azure"),
    ("GOOGL", "Alphabet Inc.", Category::UsTech, RiskTier::Medium, 0.105, 0.26,
        None, "Búsqueda, publicidad, cloud"),
    ("NVDA", "NVIDIA Corporation", Category::UsTech, RiskTier::High, 0.22, 0.45,
        None, "GPUs, líder en IA/ML hardware"),
    ("TSLA", "Tesla Inc.", Category::UsTech, RiskTier::VeryHigh, 0.18, 0.55,
        None, "Vehículos eléctricos, muy volátil"),
];

// (id, name, description, risk aversion, tickers)
type ProfileRow = (ProfileId, &'static str, &'static str, f64, &'static [&'static str]);

const PROFILES: &[ProfileRow] = &[
    (
        ProfileId::ConservadorEspanol,
        "Conservador España",
        "Para quien prioriza preservar capital. Ideal para primeros €1,000-5,000",
        0.8,
        &["IBE.MC", "TEF.MC", "IBTS.L", "EUNL.DE"],
    ),
    (
        ProfileId::EquilibradoGlobal,
        "Equilibrado Global",
        "Balance riesgo-retorno. Para inversión a 5-10 años",
        0.5,
        &["VWCE.DE", "EUNL.DE", "SAN.MC", "ITX.MC", "CSPX.L"],
    ),
    (
        ProfileId::CrecimientoTech,
        "Crecimiento Tech",
        "Mayor riesgo, mayor potencial. Solo con capital que puedes perder",
        0.3,
        &["AAPL", "MSFT", "NVDA", "GOOGL", "ITX.MC", "VWCE.DE"],
    ),
    (
        ProfileId::AgresivoCrypto,
        "Agresivo con Crypto",
        "Alta volatilidad. Máximo 5-10% de tu patrimonio total",
        0.15,
        &["BTC-EUR", "ETH-EUR", "NVDA", "TSLA", "AAPL", "VWCE.DE"],
    ),
];

/// Catalog backed by the compiled-in tables
pub struct BuiltinCatalog {
    instruments: Vec<Instrument>,
    index: HashMap<String, usize>,
    profiles: Vec<Profile>,
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        let instruments: Vec<Instrument> = INSTRUMENTS
            .iter()
            .map(|&(ticker, name, category, tier, ret, vol, isin, description)| {
                let instrument = Instrument::new(ticker, name, category, tier, ret, vol)
                    .with_description(description);
                match isin {
                    Some(isin) => instrument.with_isin(isin),
                    None => instrument,
                }
            })
            .collect();

        let index = instruments
            .iter()
            .enumerate()
            .map(|(i, instrument)| (instrument.ticker.clone(), i))
            .collect();

        let profiles = PROFILES
            .iter()
            .map(|&(id, name, description, risk_aversion, tickers)| Profile {
                id,
                name: name.into(),
                description: description.into(),
                risk_aversion,
                tickers: tickers.iter().map(|t| (*t).to_string()).collect(),
            })
            .collect();

        Self { instruments, index, profiles }
    }
}

impl InstrumentCatalog for BuiltinCatalog {
    fn instrument(&self, ticker: &str) -> Option<&Instrument> {
        self.index.get(ticker).map(|&i| &self.instruments[i])
    }

    fn instruments(&self) -> Vec<&Instrument> {
        self.instruments.iter().collect()
    }
}

impl ProfileCatalog for BuiltinCatalog {
    fn profile(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    fn profiles(&self) -> Vec<&Profile> {
        self.profiles.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_defaults() {
        let catalog = BuiltinCatalog::new();

        let ibts = catalog.instrument("IBTS.L").unwrap();
        assert_eq!(ibts.risk_tier, RiskTier::Low);
        assert_eq!(ibts.isin.as_deref(), Some("IE00B14X4Q57"));
        assert!(catalog.instrument("BTC-EUR").unwrap().isin.is_none());

        assert!(!catalog.contains("NOTREAL"));
        assert_eq!(catalog.estimates("NOTREAL"), (0.05, 0.2));
        assert_eq!(catalog.estimates("IBTS.L"), (0.025, 0.03));
    }

    #[test]
    fn test_profiles_reference_known_instruments() {
        let catalog = BuiltinCatalog::new();
        assert_eq!(ProfileCatalog::profiles(&catalog).len(), 4);

        for profile in ProfileCatalog::profiles(&catalog) {
            assert!((0.0..=1.0).contains(&profile.risk_aversion));
            assert!((2..=12).contains(&profile.tickers.len()));
            for ticker in &profile.tickers {
                assert!(catalog.contains(ticker), "{ticker} missing for {}", profile.id);
            }
        }
    }

    #[test]
    fn test_profile_ticker_order_is_preserved() {
        let catalog = BuiltinCatalog::new();
        let conservative = catalog.profile(ProfileId::ConservadorEspanol).unwrap();
        assert_eq!(conservative.tickers, ["IBE.MC", "TEF.MC", "IBTS.L", "EUNL.DE"]);
        assert!((conservative.risk_aversion - 0.8).abs() < f64::EPSILON);
    }
}
