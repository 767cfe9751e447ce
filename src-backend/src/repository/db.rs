//! Mock Database
//!
//! In-memory board guarded by an async mutex. Every command holds the lock
//! for the whole operation, so operations never interleave.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::config::BackendConfig;
use crate::domain::BoardData;

/// Database state wrapper
pub struct MockDb {
    data: Mutex<BoardData>,
    config: BackendConfig,
}

impl MockDb {
    pub fn new(data: BoardData, config: BackendConfig) -> Self {
        Self {
            data: Mutex::new(data),
            config,
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, BoardData> {
        self.data.lock().await
    }

    /// Copy of the whole board
    pub async fn snapshot(&self) -> BoardData {
        self.data.lock().await.clone()
    }

    /// Sleep for a random latency from the configured range
    pub async fn simulate_delay(&self) {
        let delay = self.config.sample_latency();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Initialize the store from configuration
pub fn init_db(config: &BackendConfig) -> Arc<MockDb> {
    let data = if config.seed {
        BoardData::seed()
    } else {
        BoardData::new()
    };
    log::info!(
        "Mock DB ready: {} columns, {} cards, latency {}-{}ms",
        data.columns.len(),
        data.cards.len(),
        config.latency_min_ms,
        config.latency_max_ms
    );
    Arc::new(MockDb::new(data, config.clone()))
}
