use platform_dirs::AppDirs;
use serde::{Serialize, Deserialize};
use ron::ser::{to_string_pretty, PrettyConfig};
use ron::de::from_reader;
use std::fs;
use std::path::{Path, PathBuf};
use crate::math::base::NumberBase;
use crate::math::cmp::DEFAULT_DECIMAL_PLACES;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Config write error: {0}")]
    Write(#[from] ron::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::decimal_places")]
    pub decimal_places: u32,
    #[serde(default = "defaults::base")]
    pub base: NumberBase,
    #[serde(default = "defaults::show_decimal")]
    pub show_decimal: bool,
}

macro_rules! default_ {
    ($name:ident, $type:ident) => {
        pub fn $name() -> $type {
            Config::default().$name
        }
    };
}

mod defaults {
    use super::Config;
    use super::NumberBase;
    default_!(decimal_places, u32);
    default_!(base, NumberBase);
    default_!(show_decimal, bool);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            base: NumberBase::Decimal,
            show_decimal: false,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dirs = AppDirs::new(Some("rationals"), false).ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir.join("rationals.cfg"))
    }

    /// Load from the platform config directory, falling back to the defaults.
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => {
                log::warn!("{}, using default config", err);
                Self::default()
            },
        }
    }

    /// Load from `path`. A missing or unreadable file yields the defaults; either way the file is
    /// rewritten so it lists every field.
    pub fn load_from(path: &Path) -> Self {
        let conf = match Self::read(path) {
            Ok(conf) => conf,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, writing defaults", path.display());
                Self::default()
            },
            Err(err) => {
                log::warn!("Failed to read {}: {}", path.display(), err);
                return Self::default();
            },
        };
        // write back default values of any fields not present
        if let Err(err) = conf.write(path) {
            log::warn!("Failed to write {}: {}", path.display(), err);
        }
        conf
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let file = fs::File::open(path)?;
        Ok(from_reader::<fs::File, Self>(file)?)
    }

    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, to_string_pretty(self, PrettyConfig::default())?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = TempDir::new("rationals-config").unwrap();
        let path = dir.path().join("nested").join("rationals.cfg");

        assert_eq!(Config::load_from(&path), Config::default());
        assert_eq!(Config::read(&path).unwrap(), Config::default());
    }

    #[test]
    fn missing_fields_are_filled_in() {
        let dir = TempDir::new("rationals-config").unwrap();
        let path = dir.path().join("rationals.cfg");
        fs::write(&path, "(decimal_places: 3)").unwrap();

        let conf = Config::load_from(&path);
        assert_eq!(conf.decimal_places, 3);
        assert_eq!(conf.base, NumberBase::Decimal);
        assert!(!conf.show_decimal);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("show_decimal"));
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = TempDir::new("rationals-config").unwrap();
        let path = dir.path().join("rationals.cfg");
        fs::write(&path, "(decimal_places: \"many\")").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
        assert!(matches!(Config::read(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn round_trip() {
        let dir = TempDir::new("rationals-config").unwrap();
        let path = dir.path().join("rationals.cfg");
        let conf = Config { decimal_places: 4, base: NumberBase::Hexadecimal, show_decimal: true };

        conf.write(&path).unwrap();
        assert_eq!(Config::read(&path).unwrap(), conf);
    }
}
