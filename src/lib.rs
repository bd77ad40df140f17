//! HireFlow job-seeker onboarding
//!
//! Root crate: startup wiring in [`bootstrap`] and the host command facade
//! in [`commands`]. Domain rules live in `hf-core`, use cases in `hf-app`,
//! storage adapters in `hf-infra`.

pub mod bootstrap;
pub mod commands;

pub use bootstrap::AppRuntime;
