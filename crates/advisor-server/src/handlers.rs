//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use chrono::{Local, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize};

use quantum_advisor::{
    AdvisorError, ChatReply, OptimizeReport, ProfileId,
    coach::check_risk_aversion,
    model::{InstrumentListing, ProfileSummary},
    rounding::round2,
    svckit::narrative::{ECB_RATE, SPAIN_INFLATION},
};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Validated but not used: chat portfolios take the profile's coefficient
    #[serde(default = "default_risk_aversion")]
    pub risk_aversion: f64,
    /// Used only when the message maps to no profile of its own
    #[serde(default)]
    pub profile: Option<ProfileId>,
    #[serde(default)]
    pub benchmark_active: bool,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub tickers: Vec<String>,
    #[serde(default = "default_risk_aversion")]
    pub risk_aversion: f64,
    #[serde(default)]
    pub benchmark: bool,
}

fn default_risk_aversion() -> f64 {
    0.5
}

fn default_language() -> String {
    "es".into()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<ProfileSummary>,
}

#[derive(Debug, Serialize)]
pub struct MarketStatus {
    pub index: &'static str,
    pub value: f64,
    pub change_percent: f64,
    pub is_up: bool,
    pub status: &'static str,
    pub inflation_spain: f64,
    pub ecb_rate: f64,
    pub timestamp: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(err: &AdvisorError) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.user_message(),
            code: err.code().into(),
        }),
    )
}

fn internal_error(err: &AdvisorError) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.user_message(),
            code: err.code().into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online",
        service: "QuantumCoach API",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Local::now().to_rfc3339(),
    })
}

/// Available portfolio profiles
pub async fn list_profiles(State(state): State<AppState>) -> Json<ProfilesResponse> {
    Json(ProfilesResponse {
        profiles: state.coach.profiles(),
    })
}

/// Tickers grouped by market segment
pub async fn list_assets(State(state): State<AppState>) -> Json<InstrumentListing> {
    Json(state.coach.instruments_by_category())
}

/// Main chat endpoint
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    check_risk_aversion(payload.risk_aversion).map_err(|e| bad_request(&e))?;

    tracing::info!(
        language = %payload.language,
        benchmark = payload.benchmark_active,
        "chat request"
    );

    let reply = state
        .coach
        .respond(&payload.message, payload.profile, payload.benchmark_active)
        .map_err(|e| {
            tracing::error!("Chat error: {}", e);
            internal_error(&e)
        })?;

    Ok(Json(reply))
}

/// Direct optimization over caller-chosen tickers
pub async fn optimize_handler(
    State(state): State<AppState>,
    Json(payload): Json<OptimizeRequest>,
) -> Result<Json<OptimizeReport>, ApiError> {
    let report = state
        .coach
        .optimize(&payload.tickers, payload.risk_aversion, payload.benchmark)
        .map_err(|e| {
            tracing::warn!("Rejected optimization: {}", e);
            bad_request(&e)
        })?;

    Ok(Json(report))
}

/// Simulated IBEX 35 snapshot
pub async fn market_status() -> Json<MarketStatus> {
    Json(simulated_market_status())
}

fn simulated_market_status() -> MarketStatus {
    let mut rng = rand::rng();
    let change = round2(rng.random_range(-1.5..=2.0));
    let value = round2(11_450.0 + rng.random_range(-200.0..=200.0));
    let now = Local::now();

    MarketStatus {
        index: "IBEX 35",
        value,
        change_percent: change,
        is_up: change > 0.0,
        status: if (9..17).contains(&now.hour()) { "open" } else { "closed" },
        inflation_spain: SPAIN_INFLATION,
        ecb_rate: ECB_RATE,
        timestamp: now.to_rfc3339(),
    }
}
