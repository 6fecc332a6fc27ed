//! Application State

use std::sync::Arc;

use quantum_advisor::{BuiltinCatalog, QuantumCoach};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Engine over the read-only catalogs
    pub coach: QuantumCoach,
}

impl AppState {
    /// State backed by the compiled-in catalog
    pub fn builtin() -> Self {
        let catalog = Arc::new(BuiltinCatalog::new());
        Self {
            coach: QuantumCoach::new(catalog.clone(), catalog),
        }
    }
}
