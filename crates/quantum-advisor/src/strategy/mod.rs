//! Allocation Strategies
//!
//! The simulated QAOA weight generator and the classical benchmark that is
//! run against it.

mod benchmark;
mod qaoa;

pub use benchmark::{perturb, run_classical};
pub use qaoa::{QaoaSimulator, normalize, raw_weight, synthetic_time_ms};
