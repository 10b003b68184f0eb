//! Scene configuration loaded from JSON or YAML.
//!
//! Every field has a default, so an empty document (`{}`) describes the
//! stock flyover: a 256-division terrain over ±6 and a ±5 sphere box.

use std::path::Path;

use serde::{Deserialize, Serialize};
use terrasphere::{ConfigError, ElevationBands, ParticleConfig, TerrainConfig};

use crate::command::Command;
use crate::error::{AppError, AppResult};

/// Headless run script: how many frames to simulate and when to issue
/// commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunScript {
    #[serde(default = "default_frames")]
    pub frames: u64,
    /// Fixed frame time in seconds; `None` measures the wall clock
    #[serde(default = "default_fixed_dt")]
    pub fixed_dt: Option<f32>,
    /// Batches spawned before the first frame
    #[serde(default = "default_initial_batches")]
    pub initial_batches: usize,
    /// Spawn another batch every this many frames (0 = never)
    #[serde(default = "default_spawn_every")]
    pub spawn_every: u64,
    /// Clear all spheres every this many frames (0 = never)
    #[serde(default)]
    pub clear_every: u64,
    /// Log scene statistics every this many frames (0 = never)
    #[serde(default = "default_log_every")]
    pub log_every: u64,
}

fn default_frames() -> u64 {
    600
}
fn default_fixed_dt() -> Option<f32> {
    Some(1.0 / 60.0)
}
fn default_initial_batches() -> usize {
    1
}
fn default_spawn_every() -> u64 {
    120
}
fn default_log_every() -> u64 {
    60
}

impl Default for RunScript {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            fixed_dt: default_fixed_dt(),
            initial_batches: default_initial_batches(),
            spawn_every: default_spawn_every(),
            clear_every: 0,
            log_every: default_log_every(),
        }
    }
}

impl RunScript {
    /// Commands to apply before advancing frame `frame` (1-based).
    ///
    /// A clear and a spawn due on the same frame run in that order, so the
    /// frame starts with exactly one fresh batch.
    pub fn commands_for_frame(&self, frame: u64) -> Vec<Command> {
        let due = |every: u64| every > 0 && frame > 0 && frame % every == 0;
        let mut commands = Vec::new();
        if due(self.clear_every) {
            commands.push(Command::Clear);
        }
        if due(self.spawn_every) {
            commands.push(Command::SpawnBatch);
        }
        commands
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dt) = self.fixed_dt {
            if !dt.is_finite() {
                return Err(ConfigError::NonFinite("run.fixed_dt"));
            }
            if dt <= 0.0 {
                return Err(ConfigError::NotPositive("run.fixed_dt"));
            }
        }
        Ok(())
    }
}

/// Everything needed to build a `Scene`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// RNG seed shared by terrain synthesis and sphere spawning
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub terrain: TerrainConfig,
    /// Height colours for the terrain mesh
    #[serde(default)]
    pub bands: ElevationBands,
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default)]
    pub run: RunScript,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.terrain.validate()?;
        self.particles.validate()?;
        self.run.validate()
    }

    /// Save configuration to JSON file
    pub fn save_json(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| AppError::io(path, e))
    }

    /// Load configuration from JSON file
    pub fn load_json(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn save_yaml(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml).map_err(|e| AppError::io(path, e))
    }

    /// Load configuration from YAML file
    pub fn load_yaml(path: &Path) -> AppResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let config: Self = serde_yaml::from_str(&yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load by file extension: `.json`, `.yaml` or `.yml`.
    pub fn load(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::load_json(path),
            Some("yaml") | Some("yml") => Self::load_yaml(path),
            _ => Err(AppError::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: SceneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.terrain.divisions, 256);
        assert_eq!(config.particles.batch_size, 50);
        assert_eq!(config.bands, ElevationBands::default());
    }

    #[test]
    fn test_bands_override() {
        let yaml = "bands:\n  colors: [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]\n  thresholds: [0.1, 0.2, 0.9]\n";
        let config: SceneConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.bands.colors[3], [0.0, 0.0, 1.0]);
        assert_eq!(config.bands.thresholds, [0.1, 0.2, 0.9]);
    }

    #[test]
    fn test_partial_override() {
        let yaml = "seed: 7\nterrain:\n  divisions: 32\n  fault:\n    iterations: 10\n";
        let config: SceneConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.terrain.divisions, 32);
        assert_eq!(config.terrain.fault.iterations, 10);
        assert_eq!(config.terrain.fault.delta, 0.0015);
        assert_eq!(config.terrain.max_x, 6.0);
    }

    #[test]
    fn test_commands_schedule() {
        let run = RunScript {
            spawn_every: 2,
            clear_every: 4,
            ..Default::default()
        };
        assert!(run.commands_for_frame(0).is_empty());
        assert!(run.commands_for_frame(1).is_empty());
        assert_eq!(run.commands_for_frame(2), vec![Command::SpawnBatch]);
        assert_eq!(
            run.commands_for_frame(4),
            vec![Command::Clear, Command::SpawnBatch]
        );
    }

    #[test]
    fn test_rejects_bad_fixed_dt() {
        let mut config = SceneConfig::default();
        config.run.fixed_dt = Some(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive("run.fixed_dt"))
        );
        config.run.fixed_dt = None;
        assert!(config.validate().is_ok());
    }
}
