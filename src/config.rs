use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,

    #[serde(default = "default_bucket_capacity")]
    pub bucket_capacity: usize,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("dictionary.txt")
}

fn default_bucket_capacity() -> usize {
    1000
}

fn default_max_suggestions() -> usize {
    5
}

fn default_show_timing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            bucket_capacity: default_bucket_capacity(),
            max_suggestions: default_max_suggestions(),
            show_timing: default_show_timing(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        dictionary: Option<PathBuf>,
        bucket_capacity: Option<usize>,
        max_suggestions: Option<usize>,
        no_timing: bool,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".wordwise.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(dict) = dictionary {
            config.dictionary = dict;
        }
        if let Some(capacity) = bucket_capacity {
            config.bucket_capacity = capacity;
        }
        if let Some(max) = max_suggestions {
            config.max_suggestions = max;
        }
        if no_timing {
            config.show_timing = false;
        }

        anyhow::ensure!(
            config.bucket_capacity > 0,
            "bucket capacity must be at least 1"
        );
        anyhow::ensure!(
            config.max_suggestions > 0,
            "max suggestions must be at least 1"
        );

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.dictionary != default_dictionary() {
            self.dictionary = other.dictionary;
        }
        if other.bucket_capacity != default_bucket_capacity() {
            self.bucket_capacity = other.bucket_capacity;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        self.show_timing = other.show_timing;
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordwise").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
