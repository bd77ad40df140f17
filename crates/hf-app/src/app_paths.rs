use std::path::PathBuf;

use hf_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub local_store_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            local_store_path: dirs.app_data_root.join("local_storage.json"),
            config_path: dirs.app_data_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/hireflow"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(
            paths.local_store_path,
            PathBuf::from("/tmp/hireflow/local_storage.json")
        );
        assert_eq!(paths.config_path, PathBuf::from("/tmp/hireflow/config.toml"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/hireflow/logs"));
    }
}
