use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};

use crate::store::{PersistentStore, StoreError, StoreEvent, EVENT_CAPACITY};

/// In-process store. Default backend when no Redis URL is configured.
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
    events: broadcast::Sender<StoreEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            values: RwLock::new(HashMap::new()),
            events,
        }
    }

    fn notify(&self, event: StoreEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersistentStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.notify(StoreEvent::Set {
            key: key.to_string(),
        });
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let existed = self.values.write().await.remove(key).is_some();
        if existed {
            self.notify(StoreEvent::Removed {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.values.write().await.clear();
        self.notify(StoreEvent::Cleared);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
