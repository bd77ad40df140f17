//! Local key/value store port
//!
//! String keys to string values, the same shape as browser local storage.
//! Every piece of onboarding state is persisted through this port.

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read the value stored under `key`.
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> anyhow::Result<()>;
}
