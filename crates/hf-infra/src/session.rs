//! Session reader over the stored `authToken`.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use hf_core::ports::{KeyValueStorePort, SessionPort};

use crate::keys;

pub struct LocalSessionReader {
    store: Arc<dyn KeyValueStorePort>,
}

impl LocalSessionReader {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionPort for LocalSessionReader {
    async fn auth_token(&self) -> anyhow::Result<Option<String>> {
        self.store
            .get_item(keys::AUTH_TOKEN)
            .await
            .context("Failed to read auth token")
    }
}
