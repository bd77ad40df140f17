//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the adapters that
//! talk to local storage, the clock and the profile backend. Use cases only
//! ever see these traits, so every adapter can be swapped for an in-memory
//! one in tests.

pub mod app_dirs;
mod clock;
pub mod errors;
pub mod key_value;
pub mod onboarding;
pub mod profile_submission;
pub mod session;
pub mod user_record;

pub use app_dirs::AppDirsPort;
pub use clock::*;
pub use errors::AppDirsError;
pub use key_value::KeyValueStorePort;
pub use onboarding::{OnboardingProgressPort, OnboardingStatusPort};
pub use profile_submission::{ProfileSubmissionPort, SubmissionError};
pub use session::SessionPort;
pub use user_record::UserRecordPort;
