//! Errors surfaced by the scene driver.

use std::path::PathBuf;

use terrasphere::{ConfigError, TerrainError};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON scene config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML scene config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported config extension for {0} (expected .json, .yaml or .yml)")]
    UnsupportedExtension(PathBuf),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
