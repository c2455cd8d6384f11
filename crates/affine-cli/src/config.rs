use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::constants::{APP_DIR, CONFIG_ENV};
use crate::errors::CliError;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AffineConfig {
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub solver: SolverSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub color: bool,
    pub ascii: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            color: true,
            ascii: false,
            format: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    pub verify_sample: bool,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            verify_sample: true,
        }
    }
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<AffineConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AffineConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<AffineConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CliError::config(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    let config = toml::from_str(&contents).map_err(|e| {
        CliError::config(format!("Failed to parse config {}: {}", path.display(), e))
    })?;
    Ok(config)
}

pub fn write_config(path: &Path, config: &AffineConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::config(format!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    let contents = toml::to_string_pretty(config)
        .map_err(|e| CliError::config(format!("TOML error: {}", e)))?;
    std::fs::write(path, contents).map_err(|e| {
        CliError::config(format!("Failed to write config {}: {}", path.display(), e))
    })?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".config").join(APP_DIR))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|_| {
        CliError::config("HOME is not set; cannot resolve the default config path")
    })?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert!(config.ui.color);
        assert!(!config.ui.ascii);
        assert!(config.ui.format.is_none());
        assert!(config.solver.verify_sample);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nformat = \"plain\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.ui.format, Some(OutputFormat::Plain));
        assert!(config.ui.color);
        assert!(config.solver.verify_sample);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AffineConfig::default();
        config.solver.verify_sample = false;
        config.ui.ascii = true;

        write_config(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();
        assert!(!loaded.solver.verify_sample);
        assert!(loaded.ui.ascii);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\ncolor = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
