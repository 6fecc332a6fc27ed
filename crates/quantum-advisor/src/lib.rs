//! # quantum-advisor
//!
//! Simulated QAOA portfolio allocation for Spanish retail investors.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │    Intent    │──▶│   Profile    │──▶│    QAOA      │──▶│   Metrics    │
//! │  Classifier  │   │   Catalog    │   │  Simulator   │   │  Calculator  │
//! └──────────────┘   └──────────────┘   └──────┬───────┘   └──────▲───────┘
//!                                              │  benchmark       │
//!                                              ▼                  │
//!                                       ┌──────────────┐          │
//!                                       │  Classical   │──────────┘
//!                                       │  Benchmark   │
//!                                       └──────────────┘
//! ```
//!
//! The "optimizer" is a randomized heuristic scorer, not a solver: each
//! instrument's weight is `clamp(20 + 100·(e − r·v) + noise, 5, 50)`,
//! normalized to 100%. Metrics use fixed constants (risk-free 3%,
//! correlation factor 0.7, z = 1.645, drawdown ×2.5).
//!
//! Catalogs are immutable after construction and shared via `Arc`; every
//! request draws fresh randomness from the thread-local generator.

pub mod catalog;
pub mod coach;
pub mod error;
pub mod model;
pub mod rounding;
pub mod strategy;
pub mod svckit;

pub use catalog::{BuiltinCatalog, InstrumentCatalog, ProfileCatalog};
pub use coach::QuantumCoach;
pub use error::{AdvisorError, Result};
pub use model::{
    Allocation, BenchmarkResult, ChatReply, Instrument, Intent, IntentKind, OptimizeReport,
    PortfolioMetrics, Profile, ProfileId, RiskTier,
};
