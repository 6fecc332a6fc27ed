//! Instrument and Profile Catalogs
//!
//! Read-only lookup services queried by identifier. Built once at startup
//! and shared behind `Arc` across requests.

mod builtin;

pub use builtin::BuiltinCatalog;

use crate::model::{Instrument, Profile, ProfileId};

/// Fallback expected return for identifiers missing from the catalog
pub const DEFAULT_EXPECTED_RETURN: f64 = 0.05;

/// Fallback volatility for identifiers missing from the catalog
pub const DEFAULT_VOLATILITY: f64 = 0.2;

/// Static instrument attributes by ticker
pub trait InstrumentCatalog: Send + Sync {
    /// Look up a single instrument
    fn instrument(&self, ticker: &str) -> Option<&Instrument>;

    /// All instruments in catalog order
    fn instruments(&self) -> Vec<&Instrument>;

    fn contains(&self, ticker: &str) -> bool {
        self.instrument(ticker).is_some()
    }

    /// Expected return and volatility, substituting defaults for unknown tickers.
    ///
    /// Never fails: numeric components must keep going on a missing entry.
    fn estimates(&self, ticker: &str) -> (f64, f64) {
        match self.instrument(ticker) {
            Some(instrument) => (instrument.expected_return, instrument.volatility),
            None => {
                tracing::warn!(ticker, "instrument not in catalog, using default estimates");
                (DEFAULT_EXPECTED_RETURN, DEFAULT_VOLATILITY)
            }
        }
    }
}

/// Allocation templates by profile id
pub trait ProfileCatalog: Send + Sync {
    fn profile(&self, id: ProfileId) -> Option<&Profile>;

    /// All profiles in catalog order
    fn profiles(&self) -> Vec<&Profile>;
}
