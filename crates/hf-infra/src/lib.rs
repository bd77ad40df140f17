//! HireFlow infrastructure adapters
//!
//! Implementations of the `hf-core` ports on top of a local key/value
//! store, the system clock and the platform data directories.

pub mod app_dirs;
pub mod config;
pub mod keys;
pub mod onboarding;
pub mod session;
pub mod storage;
pub mod submission;
pub mod time;
pub mod user_record;

pub use app_dirs::DirsAppDirsAdapter;
pub use onboarding::{LocalCompletionFlag, LocalProgressGateway};
pub use session::LocalSessionReader;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
pub use submission::LocalProfileSubmission;
pub use time::SystemClock;
pub use user_record::LocalUserRecordRepository;
