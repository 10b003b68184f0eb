//! Scene driver for the terrain flyover and bouncing-sphere container.
//!
//! Wraps the `terrasphere` core in an owned [`Scene`], maps key presses to
//! [`Command`]s, and runs scripted headless sessions from a JSON or YAML
//! [`SceneConfig`].

pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod runner;
pub mod scene;

pub use clock::FrameClock;
pub use command::{Command, Key};
pub use config::{RunScript, SceneConfig};
pub use error::{AppError, AppResult};
pub use runner::run_script;
pub use scene::{Scene, SceneStats};
