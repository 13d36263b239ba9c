use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;
use tracing::{debug, warn};

use crate::capitalization::Capitalization;
use crate::style::Style;
use crate::username::GenerationConfig;

/// Largest minimum syllable count a run may ask for
pub const MAX_MIN_SYLLABLES: u32 = 6;

/// Largest maximum syllable count a run may ask for
pub const MAX_MAX_SYLLABLES: u32 = 8;

/// Most usernames one run may generate
pub const MAX_AMOUNT: usize = 50;

/// A setting outside the bounds a run accepts
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("{field} must be between 1 and {max}, got {value}")]
pub struct OutOfBounds {
    pub field: &'static str,
    pub value: u64,
    pub max: u64,
}

/// Defaults remembered between runs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub language: String,
    pub style: String,
    pub min_syllables: u32,
    pub max_syllables: u32,
    pub complexity: u8,
    pub capitalization: String,
    pub append_number: bool,
    pub append_symbol: bool,
    pub amount: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            style: "Modern".to_string(),
            min_syllables: 2,
            max_syllables: 3,
            complexity: 2,
            capitalization: "lowercase".to_string(),
            append_number: false,
            append_symbol: false,
            amount: 10,
        }
    }
}

impl Config {
    /// Check the counts against the same bounds the command line enforces.
    ///
    /// Saved files bypass the argument parser, so this runs on the merged config.
    pub fn check_limits(&self) -> Result<(), OutOfBounds> {
        let limits = [
            ("min-syllables", u64::from(self.min_syllables), u64::from(MAX_MIN_SYLLABLES)),
            ("max-syllables", u64::from(self.max_syllables), u64::from(MAX_MAX_SYLLABLES)),
            ("amount", self.amount as u64, MAX_AMOUNT as u64),
        ];
        for (field, value, max) in limits {
            if !(1..=max).contains(&value) {
                return Err(OutOfBounds { field, value, max });
            }
        }
        Ok(())
    }

    pub fn to_generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            language: self.language.clone(),
            style: Style::from(self.style.as_str()),
            min_syllables: self.min_syllables,
            max_syllables: self.max_syllables,
            complexity: self.complexity,
            capitalization: Capitalization::from(self.capitalization.as_str()),
            append_number: self.append_number,
            append_symbol: self.append_symbol,
            batch_size: self.amount,
        }
    }
}

impl From<&GenerationConfig> for Config {
    fn from(gc: &GenerationConfig) -> Self {
        Self {
            language: gc.language.clone(),
            style: gc.style.to_string(),
            min_syllables: gc.min_syllables,
            max_syllables: gc.max_syllables,
            complexity: gc.complexity,
            capitalization: gc.capitalization.to_string(),
            append_number: gc.append_number,
            append_symbol: gc.append_symbol,
            amount: gc.batch_size,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "sylla") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("sylla_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or unreadable files fall back to the defaults
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            debug!(path = %self.path.display(), "no saved config, using defaults");
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring malformed config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
