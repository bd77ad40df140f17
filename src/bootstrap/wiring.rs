//! # Dependency Injection / 依赖注入模块
//!
//! The only place where concrete adapters meet the ports.
//! 具体适配器与端口唯一的汇合点。
//!
//! ## Rules / 规则
//!
//! - Adapters are created here and handed out as `Arc<dyn Port>`
//! - No business logic, no path defaults (see `bootstrap::config`)
//! - Every onboarding adapter shares one key/value store

use std::sync::Arc;

use hf_app::AppDeps;
use hf_core::config::AppConfig;
use hf_core::ports::{AppDirsError, AppDirsPort, KeyValueStorePort};
use hf_infra::{
    DirsAppDirsAdapter, FileKeyValueStore, LocalCompletionFlag, LocalProfileSubmission,
    LocalProgressGateway, LocalSessionReader, LocalUserRecordRepository, SystemClock,
};
use tracing::info;

use super::config::resolve_paths;

/// Wiring error type
/// 依赖注入错误类型
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Application directories unavailable: {0}")]
    AppDirs(#[from] AppDirsError),

    #[error("Local store initialization failed: {0}")]
    StoreInit(String),
}

pub type WiringResult<T> = Result<T, WiringError>;

/// Wire all dependencies from config
/// 根据配置连接所有依赖
///
/// Uses the platform data directory for any path the config leaves empty.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    wire_dependencies_with_dirs(config, &DirsAppDirsAdapter::new())
}

/// Same as [`wire_dependencies`] with an explicit directory source
/// 使用显式目录来源的 [`wire_dependencies`]
pub fn wire_dependencies_with_dirs(
    config: &AppConfig,
    app_dirs: &dyn AppDirsPort,
) -> WiringResult<AppDeps> {
    let paths = resolve_paths(config, app_dirs)?;

    if let Some(parent) = paths.local_store_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::StoreInit(format!(
                "Failed to create store directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    info!(path = %paths.local_store_path.display(), "Using local store");
    let store: Arc<dyn KeyValueStorePort> =
        Arc::new(FileKeyValueStore::new(paths.local_store_path));
    Ok(wire_with_store(store))
}

/// Wire every port over a given key/value store
/// 基于给定键值存储连接所有端口
pub fn wire_with_store(store: Arc<dyn KeyValueStorePort>) -> AppDeps {
    AppDeps {
        progress: Arc::new(LocalProgressGateway::new(store.clone())),
        onboarding_status: Arc::new(LocalCompletionFlag::new(store.clone())),
        user_records: Arc::new(LocalUserRecordRepository::new(store.clone())),
        session: Arc::new(LocalSessionReader::new(store)),
        profile_submission: Arc::new(LocalProfileSubmission::new()),
        clock: Arc::new(SystemClock),
    }
}
