use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::editor::edits::DocumentEdit;
use crate::editor::EditorSnapshot;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::readiness::bullets::{critique_document, BulletGuidance};
use crate::readiness::critique;
use crate::render::export::plain_text;
use crate::state::AppState;
use crate::store::records::load_document;

#[derive(Deserialize)]
pub struct CritiqueRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct CritiqueResponse {
    pub findings: Vec<String>,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<EditorSnapshot>, AppError> {
    Ok(Json(state.editor.snapshot().await?))
}

/// PUT /api/v1/resume
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(document): Json<ResumeDocument>,
) -> Result<Json<EditorSnapshot>, AppError> {
    let snapshot = state
        .editor
        .commit(DocumentEdit::Replace {
            document: Box::new(document),
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/resume/edits
pub async fn handle_apply_edit(
    State(state): State<AppState>,
    Json(edit): Json<DocumentEdit>,
) -> Result<Json<EditorSnapshot>, AppError> {
    Ok(Json(state.editor.commit(edit).await?))
}

/// POST /api/v1/resume/sample
pub async fn handle_load_sample(
    State(state): State<AppState>,
) -> Result<Json<EditorSnapshot>, AppError> {
    Ok(Json(state.editor.commit(DocumentEdit::LoadSample).await?))
}

/// POST /api/v1/resume/bullets/critique
pub async fn handle_critique_bullet(Json(req): Json<CritiqueRequest>) -> Json<CritiqueResponse> {
    Json(CritiqueResponse {
        findings: critique(&req.text),
    })
}

/// GET /api/v1/resume/guidance
pub async fn handle_document_guidance(
    State(state): State<AppState>,
) -> Result<Json<Vec<BulletGuidance>>, AppError> {
    let doc = load_document(state.store.as_ref()).await?;
    Ok(Json(critique_document(&doc)))
}

/// GET /api/v1/resume/export
pub async fn handle_export_text(State(state): State<AppState>) -> Result<String, AppError> {
    let doc = load_document(state.store.as_ref()).await?;
    Ok(plain_text(&doc))
}
