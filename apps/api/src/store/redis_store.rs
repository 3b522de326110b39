use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::store::keys::owned_keys;
use crate::store::{PersistentStore, StoreError, StoreEvent, EVENT_CAPACITY};

/// Redis-backed store. One multiplexed connection serves every request, so
/// commands from a session reach the server in issue order.
///
/// Change notifications cover writes made through this process only.
pub struct RedisStore {
    conn: MultiplexedConnection,
    prefix: String,
    events: broadcast::Sender<StoreEvent>,
}

impl RedisStore {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, StoreError> {
        info!("Connecting to Redis...");
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        info!("Redis connection established");
        Ok(Self {
            conn,
            prefix: prefix.to_string(),
            events,
        })
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn notify(&self, event: StoreEvent) {
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl PersistentStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.get(self.namespaced(key)).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.namespaced(key), value).await?;
        debug!("SET {}", self.namespaced(key));
        self.notify(StoreEvent::Set {
            key: key.to_string(),
        });
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let removed: u32 = conn.del(self.namespaced(key)).await?;
        if removed > 0 {
            self.notify(StoreEvent::Removed {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let keys: Vec<String> = owned_keys().iter().map(|k| self.namespaced(k)).collect();
        let mut conn = self.conn.clone();
        // MULTI/EXEC so no reader sees a half-cleared namespace.
        redis::pipe()
            .atomic()
            .del(&keys)
            .ignore()
            .query_async::<_, ()>(&mut conn)
            .await?;
        info!("Cleared {} keys under prefix '{}'", keys.len(), self.prefix);
        self.notify(StoreEvent::Cleared);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
