use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_under;
use crate::utils::time::parse_time_arg;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = ".planner";
const CONFIG_FILE_NAME: &str = "planner.conf";
const DATABASE_FILE_NAME: &str = "planner.sqlite";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Time used when an event is added without one (`HH:MM`).
    #[serde(default = "default_time")]
    pub default_time: String,
    /// flexi_logger spec, e.g. `warn` or `info, planner::core=debug`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_time() -> String {
    "09:00".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_time: default_time(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// `~/.planner`, or `./.planner` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE_NAME)
    }

    /// Load configuration from the standard file, or defaults if it is missing.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{} ({})", e, path.display())))
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(format!("invalid YAML: {}", e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// The configured default time as a `NaiveTime`.
    pub fn default_time(&self) -> AppResult<NaiveTime> {
        parse_time_arg(&self.default_time)
            .map_err(|_| AppError::Config(format!("invalid default_time '{}'", self.default_time)))
    }

    /// Create the config directory, write the config file (unless `is_test`)
    /// and return the resulting configuration.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let database = match custom_db {
            Some(name) => resolve_under(&dir, name),
            None => Self::database_file(),
        };

        let config = Config {
            database: database.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        if let Some(parent) = database.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.default_time, "09:00");
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.default_time().unwrap().to_string(), "09:00:00");
    }

    #[test]
    fn bad_default_time_is_a_config_error() {
        let cfg = Config::from_yaml("default_time: noon\n").unwrap();
        assert!(matches!(cfg.default_time(), Err(AppError::Config(_))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.conf")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
