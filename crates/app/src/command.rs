//! Discrete scene inputs.
//!
//! The interactive flyover bound these to the arrow keys: up adds a batch of
//! spheres, down removes them all.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Append one configured batch of random spheres
    SpawnBatch,
    /// Remove every sphere
    Clear,
}

/// Key names a windowed front end would forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Other,
}

impl Command {
    /// Command bound to a key press, if any.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowUp => Some(Command::SpawnBatch),
            Key::ArrowDown => Some(Command::Clear),
            Key::Other => None,
        }
    }
}
