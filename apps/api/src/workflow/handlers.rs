use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::workflow::gate::{clear_marker, mark_complete, GateDecision, StepGate, StepStatus, Target};
use crate::workflow::proof::{
    load_links, save_links, submission_text, summarize, ProofSummary, SubmissionLinks,
};
use crate::workflow::steps::{index_of, Step, STEPS};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ArtifactRequest {
    pub artifact: String,
}

/// The proof view when unlocked, otherwise where the caller must go instead.
#[derive(Serialize)]
#[serde(untagged)]
pub enum ProofView {
    Unlocked(ProofSummary),
    Locked(GateDecision),
}

fn step_by_id(id: &str) -> Result<&'static Step, AppError> {
    index_of(id)
        .map(|i| &STEPS[i])
        .ok_or_else(|| AppError::NotFound(format!("Step {id} not found")))
}

/// GET /api/v1/steps
pub async fn handle_list_steps(
    State(state): State<AppState>,
) -> Result<Json<Vec<StepStatus>>, AppError> {
    let gate = StepGate::load(state.store.as_ref()).await?;
    Ok(Json(gate.statuses()))
}

/// GET /api/v1/steps/entry
pub async fn handle_workflow_entry(
    State(state): State<AppState>,
) -> Result<Json<GateDecision>, AppError> {
    let gate = StepGate::load(state.store.as_ref()).await?;
    Ok(Json(gate.entry_point()))
}

/// GET /api/v1/steps/:index/enter
pub async fn handle_enter_step(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<GateDecision>, AppError> {
    let gate = StepGate::load(state.store.as_ref()).await?;
    Ok(Json(gate.enter(Target::from_index(index))))
}

/// PUT /api/v1/steps/:id/artifact
pub async fn handle_put_artifact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<ArtifactRequest>>,
) -> Result<Json<Vec<StepStatus>>, AppError> {
    let step = step_by_id(&id)?;
    let artifact = body.map(|Json(req)| req.artifact).unwrap_or_default();
    let store = state.store.as_ref();
    mark_complete(store, step, &artifact).await?;
    info!("Step {} marked complete", step.id);
    Ok(Json(StepGate::load(store).await?.statuses()))
}

/// DELETE /api/v1/steps/:id/artifact
pub async fn handle_delete_artifact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StepStatus>>, AppError> {
    let step = step_by_id(&id)?;
    let store = state.store.as_ref();
    clear_marker(store, step).await?;
    info!("Step {} marker cleared", step.id);
    Ok(Json(StepGate::load(store).await?.statuses()))
}

/// GET /api/v1/proof
pub async fn handle_get_proof(State(state): State<AppState>) -> Result<Json<ProofView>, AppError> {
    let store = state.store.as_ref();
    let gate = StepGate::load(store).await?;
    if let decision @ GateDecision::Redirect { .. } = gate.enter(Target::Proof) {
        return Ok(Json(ProofView::Locked(decision)));
    }
    let links = load_links(store).await?;
    Ok(Json(ProofView::Unlocked(summarize(&gate, links))))
}

/// PUT /api/v1/proof/links
pub async fn handle_put_links(
    State(state): State<AppState>,
    Json(links): Json<SubmissionLinks>,
) -> Result<Json<ProofView>, AppError> {
    let store = state.store.as_ref();
    let gate = StepGate::load(store).await?;
    if let decision @ GateDecision::Redirect { .. } = gate.enter(Target::Proof) {
        return Ok(Json(ProofView::Locked(decision)));
    }
    save_links(store, &links).await?;
    Ok(Json(ProofView::Unlocked(summarize(&gate, links))))
}

/// GET /api/v1/proof/submission
pub async fn handle_submission_text(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = state.store.as_ref();
    let gate = StepGate::load(store).await?;
    if let decision @ GateDecision::Redirect { .. } = gate.enter(Target::Proof) {
        return Ok(Json(decision).into_response());
    }
    let links = load_links(store).await?;
    Ok(submission_text(&gate, &links).into_response())
}

/// POST /api/v1/reset
pub async fn handle_reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.editor.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}
