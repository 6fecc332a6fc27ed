//! Service Kit
//!
//! Stateless analysis services used by [`crate::QuantumCoach`]: metrics,
//! intent classification and reply text.

pub mod intent;
pub mod metrics;
pub mod narrative;

pub use intent::classify;
pub use metrics::compute_metrics;
