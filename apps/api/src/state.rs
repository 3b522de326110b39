use std::sync::Arc;

use crate::editor::Editor;
use crate::store::PersistentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one store every view reads and writes.
    pub store: Arc<dyn PersistentStore>,
    /// Serialized write path for document edits, over the same store.
    pub editor: Arc<Editor>,
}

impl AppState {
    pub fn new(store: Arc<dyn PersistentStore>) -> Self {
        Self {
            editor: Arc::new(Editor::new(store.clone())),
            store,
        }
    }
}
