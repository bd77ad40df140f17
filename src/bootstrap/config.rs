//! # Path Resolution / 路径解析
//!
//! `AppConfig` carries whatever the config file says, including empty
//! values. This module turns it into concrete paths: configured values win,
//! empty ones fall back to the platform data directory.
//! 配置值优先，空值回退到平台数据目录。

use std::path::{Path, PathBuf};

use hf_app::AppPaths;
use hf_core::config::AppConfig;
use hf_core::ports::{AppDirsError, AppDirsPort};
use hf_infra::config::load_config;
use tracing::info;

/// Paths the runtime actually uses.
/// 运行时实际使用的路径。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub local_store_path: PathBuf,
    pub logs_dir: PathBuf,
}

/// Resolve effective paths from config
/// 从配置解析有效路径
///
/// The platform directories are only queried when at least one configured
/// value is empty.
pub fn resolve_paths(
    config: &AppConfig,
    app_dirs: &dyn AppDirsPort,
) -> Result<ResolvedPaths, AppDirsError> {
    let store_configured = !config.local_store_path.as_os_str().is_empty();
    let logs_configured = !config.logs_dir.as_os_str().is_empty();
    if store_configured && logs_configured {
        return Ok(ResolvedPaths {
            local_store_path: config.local_store_path.clone(),
            logs_dir: config.logs_dir.clone(),
        });
    }

    let defaults = AppPaths::from_app_dirs(&app_dirs.get_app_dirs()?);
    Ok(ResolvedPaths {
        local_store_path: if store_configured {
            config.local_store_path.clone()
        } else {
            defaults.local_store_path
        },
        logs_dir: if logs_configured {
            config.logs_dir.clone()
        } else {
            defaults.logs_dir
        },
    })
}

/// Default config file location inside the app data directory
/// 应用数据目录中的默认配置文件路径
pub fn default_config_path(app_dirs: &dyn AppDirsPort) -> Result<PathBuf, AppDirsError> {
    Ok(AppPaths::from_app_dirs(&app_dirs.get_app_dirs()?).config_path)
}

/// Load config, treating a missing file as an empty config
/// 加载配置，文件不存在时视为空配置
///
/// A file that exists but cannot be read or parsed is still an error.
pub fn load_config_or_empty(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::empty());
    }
    load_config(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_infra::DirsAppDirsAdapter;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    struct UnavailableDirs;

    impl AppDirsPort for UnavailableDirs {
        fn get_app_dirs(&self) -> Result<hf_core::app_dirs::AppDirs, AppDirsError> {
            Err(AppDirsError::DataLocalDirUnavailable)
        }
    }

    #[test]
    fn configured_paths_skip_platform_lookup() {
        let config = AppConfig {
            local_store_path: PathBuf::from("/srv/hireflow/store.json"),
            logs_dir: PathBuf::from("/srv/hireflow/logs"),
            file_logging: false,
        };

        let paths = resolve_paths(&config, &UnavailableDirs).unwrap();

        assert_eq!(
            paths.local_store_path,
            PathBuf::from("/srv/hireflow/store.json")
        );
        assert_eq!(paths.logs_dir, PathBuf::from("/srv/hireflow/logs"));
    }

    #[test]
    fn empty_values_fall_back_to_app_data_root() {
        let base = TempDir::new().unwrap();
        let dirs = DirsAppDirsAdapter::with_base_data_local_dir(base.path().to_path_buf());
        let config = AppConfig {
            logs_dir: PathBuf::from("/var/log/hireflow"),
            ..AppConfig::empty()
        };

        let paths = resolve_paths(&config, &dirs).unwrap();

        assert!(paths.local_store_path.starts_with(base.path()));
        assert!(paths.local_store_path.ends_with("local_storage.json"));
        assert_eq!(paths.logs_dir, PathBuf::from("/var/log/hireflow"));
    }

    #[test]
    fn empty_values_without_platform_dir_is_error() {
        let result = resolve_paths(&AppConfig::empty(), &UnavailableDirs);

        assert!(matches!(result, Err(AppDirsError::DataLocalDirUnavailable)));
    }

    #[test]
    fn missing_config_file_is_empty_config() {
        let dir = TempDir::new().unwrap();

        let config = load_config_or_empty(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn broken_config_file_is_still_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[logging\nfile_logging = ").unwrap();

        assert!(load_config_or_empty(file.path()).is_err());
    }
}
