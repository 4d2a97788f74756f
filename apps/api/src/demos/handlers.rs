//! Axum route handlers for the demo API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::completion::Model;
use crate::demos::contracts::{self, ContractView};
use crate::demos::filings::{self, FilingsView};
use crate::demos::plans;
use crate::demos::prompts::PLAN_QUESTIONS;
use crate::demos::AskResponse;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Parsed and checked against the supported set before anything runs.
    pub model: String,
    pub question: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub question: String,
    pub plans: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub id: Model,
    pub long_context: bool,
}

#[derive(Debug, Serialize)]
pub struct PlanListResponse {
    pub plans: Vec<String>,
    pub max_selections: usize,
    pub model: Model,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/models
pub async fn handle_list_models() -> Json<Vec<ModelInfo>> {
    Json(
        Model::ALL
            .into_iter()
            .map(|id| ModelInfo {
                id,
                long_context: id.is_long_context(),
            })
            .collect(),
    )
}

/// GET /api/v1/filings
///
/// The filing rows the decoder reasons over, plus the query that fetched them.
pub async fn handle_view_filings(
    State(state): State<AppState>,
) -> Result<Json<FilingsView>, AppError> {
    Ok(Json(filings::view(state.records.as_ref()).await?))
}

/// POST /api/v1/filings/ask
pub async fn handle_ask_filings(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let model: Model = request.model.parse()?;
    let exchange = filings::ask(
        state.records.as_ref(),
        &state.completion,
        state.config.max_prompt_chars,
        model,
        request.question.as_deref(),
    )
    .await?;
    Ok(Json(exchange.into()))
}

/// GET /api/v1/contracts
pub async fn handle_view_contract(
    State(state): State<AppState>,
) -> Result<Json<ContractView>, AppError> {
    Ok(Json(contracts::view(state.records.as_ref()).await?))
}

/// POST /api/v1/contracts/ask
pub async fn handle_ask_contract(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let model: Model = request.model.parse()?;
    let exchange = contracts::ask(
        state.records.as_ref(),
        &state.completion,
        state.config.max_prompt_chars,
        model,
        request.question.as_deref(),
    )
    .await?;
    Ok(Json(exchange.into()))
}

/// GET /api/v1/plans
pub async fn handle_list_plans(
    State(state): State<AppState>,
) -> Result<Json<PlanListResponse>, AppError> {
    let plans = plans::list(state.records.as_ref()).await?;
    Ok(Json(PlanListResponse {
        plans,
        max_selections: plans::MAX_PLANS,
        model: plans::MODEL,
    }))
}

/// GET /api/v1/plans/questions
pub async fn handle_plan_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: PLAN_QUESTIONS.to_vec(),
    })
}

/// POST /api/v1/plans/compare
///
/// One completion call over the concatenated details of the selected plans.
pub async fn handle_compare_plans(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let exchange = plans::compare(
        state.records.as_ref(),
        &state.completion,
        state.config.max_prompt_chars,
        &request.question,
        &request.plans,
    )
    .await?;
    Ok(Json(exchange.into()))
}
