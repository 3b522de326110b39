//! Typed access to the records kept in a [`PersistentStore`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::resume::ResumeDocument;
use crate::render::template::{TemplateChoice, ThemeChoice};
use crate::store::keys::{DOCUMENT_KEY, TEMPLATE_KEY, THEME_KEY};
use crate::store::{PersistentStore, StoreError};

/// Decodes a persisted record. Anything that is not a valid record, including
/// invalid JSON, is treated as absent and yields the empty document.
pub fn parse_document(raw: &str) -> ResumeDocument {
    match serde_json::from_str::<ResumeDocument>(raw) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Discarding malformed resume record: {e}");
            ResumeDocument::default()
        }
    }
}

pub async fn load_document(store: &dyn PersistentStore) -> Result<ResumeDocument, StoreError> {
    Ok(store
        .get(DOCUMENT_KEY)
        .await?
        .map(|raw| parse_document(&raw))
        .unwrap_or_default())
}

pub async fn save_document(
    store: &dyn PersistentStore,
    doc: &ResumeDocument,
) -> Result<(), StoreError> {
    let record = serde_json::to_string(doc)?;
    store.set(DOCUMENT_KEY, &record).await
}

/// The presentation choices, stored as a template name and a theme color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub template: TemplateChoice,
    pub theme: ThemeChoice,
}

/// Missing or unrecognised values fall back to the first option of each set.
pub async fn load_preferences(store: &dyn PersistentStore) -> Result<Preferences, StoreError> {
    let template = store
        .get(TEMPLATE_KEY)
        .await?
        .and_then(|name| TemplateChoice::from_name(&name))
        .unwrap_or_default();
    let theme = store
        .get(THEME_KEY)
        .await?
        .and_then(|color| ThemeChoice::from_color(&color))
        .unwrap_or_default();
    Ok(Preferences { template, theme })
}

pub async fn save_preferences(
    store: &dyn PersistentStore,
    prefs: &Preferences,
) -> Result<(), StoreError> {
    store.set(TEMPLATE_KEY, prefs.template.name()).await?;
    store.set(THEME_KEY, prefs.theme.color()).await
}
