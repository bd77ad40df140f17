use async_trait::async_trait;

use crate::onboarding::UserRecord;

/// Access to the signed-in user's record.
#[async_trait]
pub trait UserRecordPort: Send + Sync {
    /// Load the record, `None` if nothing is stored.
    ///
    /// A stored record that cannot be parsed is an error, so callers never
    /// overwrite data they failed to read.
    async fn load_user(&self) -> anyhow::Result<Option<UserRecord>>;

    async fn save_user(&self, record: &UserRecord) -> anyhow::Result<()>;
}
