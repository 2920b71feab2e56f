use std::fs;
use std::path::{Path, PathBuf};

use casebridge_types::{CaseConfig, ConfigError};

use crate::settings::CaseSettings;

const CONFIG_DIR: &str = "casebridge";
const CONFIG_FILE: &str = "casebridge.json";

/// Default config location: `<config_dir>/casebridge/casebridge.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default location is tried
/// and a missing file yields `CaseConfig::default()`.
pub fn load_config(path: Option<&Path>) -> Result<CaseConfig, ConfigError> {
    find_config(path).map(Option::unwrap_or_default)
}

/// Like [`load_config`], but `Ok(None)` when no default file exists so the
/// caller can pick its own fallback.
pub fn find_config(path: Option<&Path>) -> Result<Option<CaseConfig>, ConfigError> {
    let (config_path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => {
                tracing::debug!("[Config] no config directory on this platform");
                return Ok(None);
            },
        },
    };

    if !config_path.exists() {
        if required {
            return Err(ConfigError::NotFound { path: config_path.display().to_string() });
        }
        tracing::debug!("[Config] {} not found", config_path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::from_io_error(&e))?;
    let config: CaseConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;

    tracing::info!("[Config] loaded {}", config_path.display());
    Ok(Some(config))
}

/// Load and compile in one step.
pub fn load_settings(path: Option<&Path>) -> Result<CaseSettings, ConfigError> {
    let config = load_config(path)?;
    CaseSettings::from_config(&config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"normalize_inputs": true, "ignore_paths": ["/legacy"]}}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert!(config.normalize_inputs);
        assert!(config.ignore_paths.contains("/legacy"));
    }

    #[test]
    fn test_find_explicit_file_keeps_empty_ignore_paths() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let config = find_config(Some(file.path())).unwrap().unwrap();

        assert!(config.ignore_paths.is_empty());
        assert_eq!(config, CaseConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_config(Some(&path)).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();

        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_load_settings_compiles_patterns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ignore_path_patterns": ["/v0/.*"]}}"#).unwrap();

        let settings = load_settings(Some(file.path())).unwrap();

        assert!(settings.is_ignored_path("/v0/users"));
    }

    #[test]
    fn test_load_settings_rejects_bad_pattern() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ignore_path_patterns": ["("]}}"#).unwrap();

        let err = load_settings(Some(file.path())).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }
}
