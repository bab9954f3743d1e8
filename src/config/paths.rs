use std::path::{Path, PathBuf};

/// Application directory under the platform config root (e.g. ~/.config on
/// Linux), falling back to the current directory if that root is
/// unavailable.
fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("benchboss")
}

/// Returns the platform-specific path for the config file.
pub fn get_config_path() -> String {
    app_config_dir()
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_config_dir().join("logs").to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_the_app_directory() {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        assert!(config_path.contains("benchboss"));
        assert!(log_dir.contains("benchboss"));
        assert!(config_path.ends_with("config.toml"));
        assert!(log_dir.ends_with("logs"));
    }
}
