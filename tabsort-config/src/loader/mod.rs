pub mod error;

use crate::util::{non_empty_var, parse_bool};
use error::ConfigLoadError;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tabsort_core::SortEngineConfig;
use tracing::{debug, info};

/// Path of a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "TABSORT_CONFIG_PATH";
/// Inline JSON config.
pub const CONFIG_JSON_VAR: &str = "TABSORT_CONFIG_JSON";
/// Boolean override of `enabled`.
pub const ENABLED_VAR: &str = "TABSORT_ENABLED";

const DEFAULT_CANDIDATES: &[&str] =
    &["tabsort.toml", "tabsort.json", "config/tabsort.toml"];

/// Source that produced the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// Passed explicitly by the caller (e.g. `--config`).
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// A validated configuration and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLoad {
    pub config: SortEngineConfig,
    pub source: ConfigSource,
}

/// Resolves [`SortEngineConfig`] from files and the environment.
///
/// Evaluation order:
/// 1) `$TABSORT_CONFIG_PATH` (TOML or JSON file),
/// 2) `$TABSORT_CONFIG_JSON` (inline JSON),
/// 3) the first existing default file under the base directory,
/// 4) defaults.
///
/// `$TABSORT_ENABLED` is applied on top of whichever source won, and the
/// result is validated.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory searched for the default config files.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (config, source) = self.load_unvalidated()?;
        self.finish(config, source)
    }

    /// Load `path`, ignoring the path-selecting environment variables.
    pub fn load_explicit(&self, path: &Path) -> Result<ConfigLoad, ConfigLoadError> {
        let config = Self::load_from_file(path)?;
        self.finish(config, ConfigSource::Explicit(path.to_path_buf()))
    }

    fn load_unvalidated(
        &self,
    ) -> Result<(SortEngineConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = non_empty_var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty_var(CONFIG_JSON_VAR) {
            let config = Self::parse_json(&raw, CONFIG_JSON_VAR)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((SortEngineConfig::default(), ConfigSource::Default))
    }

    fn finish(
        &self,
        mut config: SortEngineConfig,
        source: ConfigSource,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        if let Some(raw) = non_empty_var(ENABLED_VAR) {
            config.enabled = parse_bool(&raw).ok_or(ConfigLoadError::InvalidEnv {
                var: ENABLED_VAR,
                value: raw,
            })?;
            debug!(enabled = config.enabled, "applied {ENABLED_VAR} override");
        }

        config.validate()?;
        info!(source = ?source, enabled = config.enabled, "loaded sort engine config");
        Ok(ConfigLoad { config, source })
    }

    pub fn load_from_file(path: &Path) -> Result<SortEngineConfig, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") => Self::parse_toml(&contents, &origin),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Try TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<SortEngineConfig, ConfigLoadError> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| ConfigLoadError::Parse {
                origin: origin.to_string(),
                message: format!("toml error: {toml_err}; json error: {json_err}"),
            })
        })
    }

    pub fn parse_json(raw: &str, origin: &str) -> Result<SortEngineConfig, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
            origin: origin.to_string(),
            message: err.to_string(),
        })
    }

    pub fn parse_toml(raw: &str, origin: &str) -> Result<SortEngineConfig, ConfigLoadError> {
        toml::from_str(raw).map_err(|err| ConfigLoadError::Parse {
            origin: origin.to_string(),
            message: err.to_string(),
        })
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| self.base_dir.join(candidate))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_str_accepts_toml_and_json() {
        let toml = ConfigLoader::parse_from_str("enabled = false\n", "inline").unwrap();
        assert!(!toml.enabled);
        assert_eq!(toml.query_sort_parameter, "query-sort");

        let json =
            ConfigLoader::parse_from_str(r##"{"indexed_column_prefix": "#"}"##, "inline")
                .unwrap();
        assert_eq!(json.indexed_column_prefix, "#");
        assert!(json.enabled);
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = ConfigLoader::parse_from_str("enabled = [", "broken.cfg").unwrap_err();
        assert!(err.to_string().contains("broken.cfg"));
    }
}
