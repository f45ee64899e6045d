//! Loading the optional user config file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use repolyzer_settings::UserConfig;
use tracing::{debug, warn};

/// `<config dir>/repolyzer/config.toml`, if the platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("repolyzer").join("config.toml"))
}

/// Load the user config. A missing file is `None`; an unreadable or
/// malformed one is reported as a warning and also yields `None`, so the
/// analysis still runs on built-in defaults.
pub(crate) fn load_config() -> Option<UserConfig> {
    load_config_from(&config_path()?)
}

fn load_config_from(path: &Path) -> Option<UserConfig> {
    if !path.is_file() {
        debug!(path = %path.display(), "no user config");
        return None;
    }
    match read_config(path) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded user config");
            Some(config)
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %format!("{err:#}"),
                "ignoring invalid config file"
            );
            None
        }
    }
}

fn read_config(path: &Path) -> Result<UserConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    UserConfig::from_toml_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_from(&dir.path().join("config.toml")), None);
    }

    #[test]
    fn valid_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "top_languages = 3\nprogress = false\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.top_languages, Some(3));
        assert_eq!(config.progress, Some(false));
        assert_eq!(config.max_todo_items, None);
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "top_languages = \"many\"\n").unwrap();
        assert_eq!(load_config_from(&path), None);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_todos = 5\n").unwrap();
        assert_eq!(load_config_from(&path), None);
    }

    #[test]
    fn read_config_names_the_file_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("config.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn config_path_ends_with_repolyzer_config_toml() {
        if let Some(path) = config_path() {
            assert!(path.ends_with("repolyzer/config.toml"));
        }
    }
}
