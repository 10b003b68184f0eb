//! Terrasphere headless runner.
//!
//! Usage: `terrasphere [scene.json|scene.yaml]`
//!
//! Without an argument the stock scene runs. Set `RUST_LOG=debug` to see
//! spawn and clear events, `RUST_LOG=trace` to dump the terrain mesh.

use std::path::PathBuf;
use std::process::ExitCode;

use app::{run_script, AppResult, Scene, SceneConfig};

fn run() -> AppResult<()> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("Loading scene config from {}", path.display());
            SceneConfig::load(&path)?
        }
        None => SceneConfig::default(),
    };

    let mut scene = Scene::new(&config)?;
    let stats = run_script(&mut scene, &config.run);
    log::info!("Finished: {}", stats.format_summary());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
