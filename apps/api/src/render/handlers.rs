use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::render::renderer::{render, RenderedDocument};
use crate::render::template::{palette, TemplateChoice, ThemeChoice, ThemeInfo};
use crate::state::AppState;
use crate::store::records::{load_document, load_preferences, save_preferences, Preferences};

#[derive(Deserialize)]
pub struct PreviewQuery {
    pub template: Option<String>,
    pub theme: Option<String>,
}

#[derive(Serialize)]
pub struct PreferencesResponse {
    pub template: &'static str,
    pub theme: &'static str,
    pub theme_color: &'static str,
    pub templates: Vec<&'static str>,
    pub palette: Vec<ThemeInfo>,
}

impl From<Preferences> for PreferencesResponse {
    fn from(prefs: Preferences) -> Self {
        Self {
            template: prefs.template.name(),
            theme: prefs.theme.name(),
            theme_color: prefs.theme.color(),
            templates: TemplateChoice::ALL.iter().map(|t| t.name()).collect(),
            palette: palette(),
        }
    }
}

/// Either field may be omitted to keep its current value.
#[derive(Deserialize)]
pub struct PreferencesUpdate {
    pub template: Option<String>,
    pub theme: Option<String>,
}

fn parse_template(value: &str) -> Result<TemplateChoice, AppError> {
    TemplateChoice::from_name(value)
        .ok_or_else(|| AppError::Validation(format!("Unknown template '{value}'")))
}

fn parse_theme(value: &str) -> Result<ThemeChoice, AppError> {
    ThemeChoice::parse(value).ok_or_else(|| AppError::Validation(format!("Unknown theme '{value}'")))
}

/// GET /api/v1/preview
/// Query parameters override the persisted choices for this render only.
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewQuery>,
) -> Result<Json<RenderedDocument>, AppError> {
    let store = state.store.as_ref();
    let prefs = load_preferences(store).await?;
    let template = match params.template.as_deref() {
        Some(name) => parse_template(name)?,
        None => prefs.template,
    };
    let theme = match params.theme.as_deref() {
        Some(value) => parse_theme(value)?,
        None => prefs.theme,
    };
    let doc = load_document(store).await?;
    Ok(Json(render(&doc, template, theme)))
}

/// GET /api/v1/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
) -> Result<Json<PreferencesResponse>, AppError> {
    let prefs = load_preferences(state.store.as_ref()).await?;
    Ok(Json(prefs.into()))
}

/// PUT /api/v1/preferences
pub async fn handle_put_preferences(
    State(state): State<AppState>,
    Json(req): Json<PreferencesUpdate>,
) -> Result<Json<PreferencesResponse>, AppError> {
    let store = state.store.as_ref();
    let mut prefs = load_preferences(store).await?;
    if let Some(name) = req.template.as_deref() {
        prefs.template = parse_template(name)?;
    }
    if let Some(value) = req.theme.as_deref() {
        prefs.theme = parse_theme(value)?;
    }
    save_preferences(store, &prefs).await?;
    Ok(Json(prefs.into()))
}
