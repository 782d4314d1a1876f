use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_true_slope")]
    pub true_slope: f64,
    #[serde(default = "default_true_intercept")]
    pub true_intercept: f64,
    #[serde(default = "default_noise_range")]
    pub noise_range: f64,
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_sample_size() -> usize {
    10_000
}
fn default_true_slope() -> f64 {
    0.6
}
fn default_true_intercept() -> f64 {
    0.3
}
fn default_noise_range() -> f64 {
    0.3
}
fn default_seed() -> Option<u64> {
    Some(42)
}
fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_output_path() -> String {
    "linear_regression_results.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            true_slope: default_true_slope(),
            true_intercept: default_true_intercept(),
            noise_range: default_noise_range(),
            seed: default_seed(),
            theme: default_theme(),
            output_path: default_output_path(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("olsfit")
            .join("config.toml")
    }

    /// Reject generator settings that cannot produce a usable sample set.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            bail!("sample_size must be at least 1");
        }
        if !self.noise_range.is_finite() || self.noise_range < 0.0 {
            bail!("noise_range must be a finite, non-negative number");
        }
        if !self.true_slope.is_finite() || !self.true_intercept.is_finite() {
            bail!("true_slope and true_intercept must be finite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.sample_size, 10_000);
        assert_eq!(config.true_slope, 0.6);
        assert_eq!(config.true_intercept, 0.3);
        assert_eq!(config.noise_range, 0.3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.output_path, "linear_regression_results.json");
    }

    #[test]
    fn test_config_partial_file_keeps_other_defaults() {
        let toml_str = r#"
sample_size = 250
seed = 42
theme = "catppuccin-mocha"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sample_size, 250);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.noise_range, 0.3);
    }

    #[test]
    fn test_config_save_load_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            seed: Some(7),
            noise_range: 0.05,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.noise_range, 0.05);
        assert_eq!(loaded.theme, config.theme);
    }

    #[test]
    fn test_default_runs_are_reproducible() {
        assert_eq!(Config::default().seed, Some(42));
        let saved = toml::to_string_pretty(&Config::default()).unwrap();
        let loaded: Config = toml::from_str(&saved).unwrap();
        assert_eq!(loaded.seed, Some(42));
    }

    #[test]
    fn test_validate_rejects_bad_generator_settings() {
        assert!(Config::default().validate().is_ok());

        let zero = Config {
            sample_size: 0,
            ..Config::default()
        };
        assert!(zero.validate().is_err());

        let negative_noise = Config {
            noise_range: -0.1,
            ..Config::default()
        };
        assert!(negative_noise.validate().is_err());

        let nan_slope = Config {
            true_slope: f64::NAN,
            ..Config::default()
        };
        assert!(nan_slope.validate().is_err());
    }
}
