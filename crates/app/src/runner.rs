//! Headless frame loop driven by a `RunScript`.

use crate::clock::FrameClock;
use crate::command::Command;
use crate::config::RunScript;
use crate::scene::{Scene, SceneStats};

/// Run `script` against `scene` and return the final statistics.
///
/// Each frame applies the commands due for it, reads the clock, then advances.
pub fn run_script(scene: &mut Scene, script: &RunScript) -> SceneStats {
    let mut clock = match script.fixed_dt {
        Some(dt) => FrameClock::fixed(dt),
        None => FrameClock::wall(),
    };
    // Start the wall clock so the first frame measures real time.
    clock.tick();

    for _ in 0..script.initial_batches {
        scene.apply(Command::SpawnBatch);
    }

    for frame in 1..=script.frames {
        for command in script.commands_for_frame(frame) {
            scene.apply(command);
        }
        let dt = clock.tick();
        scene.advance(dt);

        if script.log_every > 0 && frame % script.log_every == 0 {
            log::info!("{}", scene.stats().format_summary());
        }
    }

    scene.stats()
}
