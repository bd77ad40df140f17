//! HireFlow Application Layer
//!
//! Onboarding use cases orchestrating the core wizard state machine over
//! the ports implemented by `hf-infra`.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
