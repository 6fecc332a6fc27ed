//! Error Types for Quantum Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisorError {
    /// Instrument count outside the accepted range
    #[error("Invalid instrument list: {count} instruments (allowed {min}-{max})")]
    InvalidInstrumentList {
        count: usize,
        min: usize,
        max: usize,
    },

    /// One or more identifiers missing from the instrument catalog
    #[error("Unknown instruments: {}", .0.join(", "))]
    UnknownInstruments(Vec<String>),

    #[error("Risk aversion {0} outside [0, 1]")]
    InvalidRiskAversion(f64),

    /// Raised only when even the fallback profile is missing from the catalog
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
}

impl AdvisorError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AdvisorError::InvalidInstrumentList { .. } | AdvisorError::UnknownInstruments(_) => {
                "INVALID_INSTRUMENT_LIST"
            }
            AdvisorError::InvalidRiskAversion(_) => "INVALID_RISK_AVERSION",
            AdvisorError::UnknownProfile(_) => "UNKNOWN_PROFILE",
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::InvalidInstrumentList { count, min, .. } if count < min => {
                format!("Se necesitan al menos {min} activos")
            }
            AdvisorError::InvalidInstrumentList { max, .. } => {
                format!("Máximo {max} activos por limitaciones del simulador cuántico")
            }
            AdvisorError::UnknownInstruments(tickers) => {
                format!("Tickers no válidos: {}", tickers.join(", "))
            }
            AdvisorError::InvalidRiskAversion(value) => {
                format!("La aversión al riesgo debe estar entre 0 y 1 (recibido {value})")
            }
            AdvisorError::UnknownProfile(_) => "Perfil de cartera no disponible.".into(),
        }
    }
}
