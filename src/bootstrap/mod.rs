pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config_or_empty, resolve_paths, ResolvedPaths};
pub use runtime::{create_runtime, start, AppRuntime, UseCases};
pub use wiring::{wire_dependencies, wire_with_store, WiringError};
