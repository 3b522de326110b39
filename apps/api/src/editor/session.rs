use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::editor::edits::{apply, DocumentEdit};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::readiness::{score, suggest, ScoreReport, Suggestion};
use crate::store::records::{load_document, save_document};
use crate::store::{PersistentStore, StoreError};

/// A document together with the score and suggestions derived from it.
/// Always built in one step, so the three never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorSnapshot {
    pub document: ResumeDocument,
    pub score: ScoreReport,
    pub suggestions: Vec<Suggestion>,
}

impl EditorSnapshot {
    pub fn of(document: ResumeDocument) -> Self {
        let score = score(&document);
        let suggestions = suggest(&document);
        debug!(
            "Recomputed readiness: {}/{} with {} suggestions",
            score.points,
            score.max_points,
            suggestions.len()
        );
        Self {
            document,
            score,
            suggestions,
        }
    }
}

/// The editing surface's write path: load, mutate, persist, recompute.
///
/// Edits are serialized so that each one reads the previous edit's write.
pub struct Editor {
    store: Arc<dyn PersistentStore>,
    write_lock: Mutex<()>,
}

impl Editor {
    pub fn new(store: Arc<dyn PersistentStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn snapshot(&self) -> Result<EditorSnapshot, StoreError> {
        Ok(EditorSnapshot::of(load_document(self.store.as_ref()).await?))
    }

    /// Applies an edit. Nothing is written when the edit is invalid.
    pub async fn commit(&self, edit: DocumentEdit) -> Result<EditorSnapshot, AppError> {
        let _guard = self.write_lock.lock().await;
        let current = load_document(self.store.as_ref()).await?;
        let next = apply(current, edit)?;
        save_document(self.store.as_ref(), &next).await?;
        Ok(EditorSnapshot::of(next))
    }

    /// Clears every owned key. Holds the write lock so an edit that already
    /// loaded the document cannot write it back afterwards.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.store.clear().await?;
        info!("All progress reset ({} backend)", self.store.backend());
        Ok(())
    }
}
