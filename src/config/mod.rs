use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::{LedgerError, Result};
use crate::ledger::Taxonomy;

/// Overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "BUDGET_BEE_CONFIG";
const APP_DIR: &str = "budget_bee";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Zero or negative means no budget has been declared.
    #[serde(default)]
    pub monthly_budget: f64,
    #[serde(default)]
    pub taxonomy: Taxonomy,
    #[serde(default = "Config::default_load_sample_feed")]
    pub load_sample_feed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            monthly_budget: 0.0,
            taxonomy: Taxonomy::survey_default(),
            load_sample_feed: Self::default_load_sample_feed(),
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_load_sample_feed() -> bool {
        true
    }

    pub fn validate(&self) -> Result<()> {
        if !self.monthly_budget.is_finite() {
            return Err(LedgerError::Config(format!(
                "monthly budget must be a finite number, got {}",
                self.monthly_budget
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(LedgerError::Config("currency cannot be empty".into()));
        }
        Ok(())
    }
}

/// Loads and saves [`Config`] as pretty-printed JSON.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves the path from `BUDGET_BEE_CONFIG`, falling back to the
    /// platform configuration directory.
    pub fn new() -> Result<Self> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(Self::at(PathBuf::from(path)));
        }
        let base = dirs::config_dir().ok_or_else(|| {
            LedgerError::Config("could not determine a configuration directory".into())
        })?;
        Ok(Self::at(base.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Missing files yield the defaults.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/a/config.json")),
            PathBuf::from("/a/config.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/a/config")), PathBuf::from("/a/config.tmp"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"monthly_budget": 1500.0}"#).unwrap();
        assert_eq!(config.monthly_budget, 1500.0);
        assert_eq!(config.currency, "USD");
        assert!(config.load_sample_feed);
        assert_eq!(config.taxonomy, Taxonomy::survey_default());
    }
}
