use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::growth::GrowthPolicy;

pub const CONFIG_ENV: &str = "SLICE_COURSE_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CourseConfig {
    pub color: bool,
    pub growth: GrowthPolicy,
}

impl Default for CourseConfig {
    fn default() -> Self {
        CourseConfig {
            color: true,
            growth: GrowthPolicy::default(),
        }
    }
}

impl CourseConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CourseConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Loads the file named by `SLICE_COURSE_CONFIG`, or the defaults when
    /// the variable is unset.
    pub fn resolve() -> Result<Self, ConfigError> {
        Self::resolve_from(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    pub fn resolve_from(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::debug!("loading course config from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.growth.threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "growth.threshold".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Colour is on unless the config turns it off or `NO_COLOR` is set.
    pub fn use_color(&self) -> bool {
        self.color && std::env::var_os("NO_COLOR").is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CourseConfig::from_toml("").unwrap();
        assert_eq!(config, CourseConfig::default());
        assert_eq!(config.growth.threshold, 256);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = "color = false\n[growth]\nthreshold = 64\n";
        let config = CourseConfig::from_toml(toml).unwrap();
        assert!(!config.color);
        assert!(!config.use_color());
        assert_eq!(config.growth, GrowthPolicy::new(64));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let result = CourseConfig::from_toml("[growth]\nthreshold = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = CourseConfig::from_toml("colour = true\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        let result = CourseConfig::from_toml("[growth\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_resolve_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[growth]\nthreshold = 32").unwrap();

        let config = CourseConfig::resolve_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.growth.threshold, 32);
        assert!(config.color);
    }

    #[test]
    fn test_resolve_without_path() {
        let config = CourseConfig::resolve_from(None).unwrap();
        assert_eq!(config, CourseConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let result = CourseConfig::resolve_from(Some(PathBuf::from("/nonexistent/course.toml")));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("course.toml"));
    }
}
