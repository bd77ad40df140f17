//! User record repository (`userData`).

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use hf_core::onboarding::UserRecord;
use hf_core::ports::{KeyValueStorePort, UserRecordPort};

use crate::keys;

pub struct LocalUserRecordRepository {
    store: Arc<dyn KeyValueStorePort>,
}

impl LocalUserRecordRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRecordPort for LocalUserRecordRepository {
    async fn load_user(&self) -> anyhow::Result<Option<UserRecord>> {
        let Some(raw) = self
            .store
            .get_item(keys::USER_DATA)
            .await
            .context("Failed to read user record")?
        else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let record = serde_json::from_str(&raw).context("Failed to parse user record")?;
        Ok(Some(record))
    }

    async fn save_user(&self, record: &UserRecord) -> anyhow::Result<()> {
        let json = serde_json::to_string(record).context("Failed to serialize user record")?;
        self.store
            .set_item(keys::USER_DATA, &json)
            .await
            .context("Failed to write user record")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryKeyValueStore;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_load_user_returns_none_when_missing() {
        let repo = LocalUserRecordRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        assert!(repo.load_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_keeps_account_fields() {
        let signed_in = json!({
            "id": "1",
            "name": "John Doe",
            "email": "john@example.com",
            "role": "job-seeker"
        });
        let store = Arc::new(InMemoryKeyValueStore::with_entries([(
            keys::USER_DATA,
            signed_in.to_string(),
        )]));
        let repo = LocalUserRecordRepository::new(store.clone());

        let mut record = repo.load_user().await.unwrap().unwrap();
        record.onboarding_completed = true;
        repo.save_user(&record).await.unwrap();

        let raw = store.get_item(keys::USER_DATA).await.unwrap().unwrap();
        let saved: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved["email"], json!("john@example.com"));
        assert_eq!(saved["role"], json!("job-seeker"));
        assert_eq!(saved["onboardingCompleted"], json!(true));
    }

    #[tokio::test]
    async fn test_invalid_json_returns_error() {
        let store = Arc::new(InMemoryKeyValueStore::with_entries([(
            keys::USER_DATA,
            "{invalid",
        )]));
        let repo = LocalUserRecordRepository::new(store);

        let err = repo.load_user().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse user record"));
    }
}
