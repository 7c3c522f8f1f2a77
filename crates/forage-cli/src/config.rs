//! Configuration management for the forage CLI.

use anyhow::{Context, Result};
use forage_core::config::SimConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "forage.toml";

/// Contents of `forage.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print a progress bar while running.
    #[serde(default = "default_progress")]
    pub progress: bool,
    /// Write a JSON snapshot here after each run.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

fn default_progress() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            progress: default_progress(),
            snapshot: None,
        }
    }
}

/// Command-line overrides for individual simulation fields.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub grid_size: Option<usize>,
    pub ants: Option<usize>,
    pub resources: Option<usize>,
    pub steps: Option<u64>,
    pub seed: Option<u64>,
}

impl Config {
    /// Load `forage.toml` from the current or a parent directory, or defaults.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply(&mut self, overrides: &Overrides) {
        let sim = &mut self.simulation;
        if let Some(v) = overrides.grid_size {
            sim.grid_size = v;
        }
        if let Some(v) = overrides.ants {
            sim.ants_per_colony = v;
        }
        if let Some(v) = overrides.resources {
            sim.num_resources = v;
        }
        if let Some(v) = overrides.steps {
            sim.steps = v;
        }
        if overrides.seed.is_some() {
            sim.seed = overrides.seed;
        }
    }
}

/// Find forage.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let dir = std::env::current_dir().ok()?;
    find_config_from(&dir)
}

fn find_config_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = Config::default();
        config.simulation = SimConfig::new(12, 4, 9).with_seed(3);
        config.output.snapshot = Some(PathBuf::from("out.json"));

        config.save(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[simulation]\ngrid_size = 30\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.simulation.grid_size, 30);
        assert_eq!(loaded.simulation.ants_per_colony, 5);
        assert_eq!(loaded.simulation.seed, None);
        assert!(loaded.output.progress);
    }

    #[test]
    fn negative_counts_fail_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[simulation]\nants_per_colony = -2\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn config_is_found_in_a_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        Config::default().save(&dir.path().join(CONFIG_FILE)).unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_from(&nested), Some(dir.path().join(CONFIG_FILE)));
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let mut config = Config::default();
        config.apply(&Overrides {
            grid_size: Some(8),
            seed: Some(1),
            ..Overrides::default()
        });
        assert_eq!(config.simulation.grid_size, 8);
        assert_eq!(config.simulation.seed, Some(1));
        assert_eq!(config.simulation.num_resources, 15);
    }
}
