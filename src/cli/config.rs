//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::EvaluatorConfig;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Default vault directory
    pub dir: Option<PathBuf>,

    /// Front matter keys every note must carry
    pub required_properties: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notecheck/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notecheck")
            .join("config.toml")
    }

    /// Resolve the vault directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Current working directory
    pub fn vault_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the evaluator settings.
    ///
    /// Precedence order for required properties:
    /// 1. CLI `--require` arguments (if any)
    /// 2. Config file `required_properties` setting
    /// 3. Built-in defaults (`aliases`, `created`)
    pub fn evaluator_config(&self, cli_required: &[String]) -> EvaluatorConfig {
        if !cli_required.is_empty() {
            return EvaluatorConfig {
                required_properties: cli_required.to_vec(),
            };
        }
        match &self.required_properties {
            Some(keys) => EvaluatorConfig {
                required_properties: keys.clone(),
            },
            None => EvaluatorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_REQUIRED_PROPERTIES;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_no_dir() {
        let config = Config::default();
        assert!(config.dir.is_none());
        assert!(config.required_properties.is_none());
    }

    #[test]
    fn vault_dir_prefers_cli_arg() {
        let config = Config {
            dir: Some(PathBuf::from("/config/vault")),
            required_properties: None,
        };
        let cli_dir = PathBuf::from("/cli/vault");
        assert_eq!(config.vault_dir(Some(&cli_dir)), PathBuf::from("/cli/vault"));
    }

    #[test]
    fn vault_dir_falls_back_to_config() {
        let config = Config {
            dir: Some(PathBuf::from("/config/vault")),
            required_properties: None,
        };
        assert_eq!(config.vault_dir(None), PathBuf::from("/config/vault"));
    }

    #[test]
    fn vault_dir_falls_back_to_cwd() {
        assert_eq!(Config::default().vault_dir(None), PathBuf::from("."));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        assert!(Config::config_path().ends_with("notecheck/config.toml"));
    }

    #[test]
    fn required_properties_precedence() {
        let config = Config {
            dir: None,
            required_properties: Some(vec!["source".to_string()]),
        };
        assert_eq!(
            config.evaluator_config(&["id".to_string()]).required_properties,
            vec!["id"]
        );
        assert_eq!(config.evaluator_config(&[]).required_properties, vec!["source"]);
        assert_eq!(
            Config::default().evaluator_config(&[]).required_properties,
            DEFAULT_REQUIRED_PROPERTIES.to_vec()
        );
    }

    #[test]
    fn load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "dir = \"/home/me/vault\"\nrequired_properties = [\"aliases\", \"source\"]\n",
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.dir, Some(PathBuf::from("/home/me/vault")));
        assert_eq!(
            config.required_properties,
            Some(vec!["aliases".to_string(), "source".to_string()])
        );
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dir = [unclosed").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse config file"));
    }
}
