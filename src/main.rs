//! Demo driver: replays a key sequence against a synthetic frame loop.
//!
//! Runs the default shortcut tour (top preset, toggle back, widen FOV,
//! frame the origin) or, given arguments, an options TOML path and/or a
//! sequence of key strings, e.g.:
//!
//! ```text
//! isoview presets/fast.toml Numpad7 Numpad5 Numpad9
//! ```

use std::path::Path;
use std::time::Duration;

use isoview::camera::{CameraState, ViewController};
use isoview::options::Options;

/// Synthetic frame delta: 60 fps.
const FRAME: Duration = Duration::from_millis(16);

/// Dispatch one key press and run its transition to completion.
fn press(
    controller: &mut ViewController,
    camera: &mut CameraState,
    options: &Options,
    key: &str,
) {
    let Some(action) = options.keybindings.lookup(key) else {
        log::warn!("{key}: not bound");
        return;
    };

    controller.execute(action, camera);
    let mut frames = 0_u32;
    while let Some(state) = controller.tick(FRAME) {
        *camera = state;
        frames += 1;
    }
    log::info!(
        "{key} ({action:?}): {frames} frames -> pivot {}, fov {:.4}, {:?}",
        camera.pivot,
        camera.fov,
        camera.projection
    );
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1).peekable();

    // An optional leading .toml argument selects an options preset.
    let options = if args.peek().is_some_and(|arg| arg.ends_with(".toml")) {
        let path = args.next().unwrap_or_default();
        match Options::load(Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("failed to load {path}: {e}");
                std::process::exit(1);
            }
        }
    } else {
        Options::default()
    };

    let keys: Vec<String> = args.collect();
    let keys = if keys.is_empty() {
        vec![
            "Numpad7".to_owned(),
            "Numpad5".to_owned(),
            "Numpad8".to_owned(),
            "Numpad9".to_owned(),
        ]
    } else {
        keys
    };

    let mut controller = ViewController::new(options.transition.clone());
    let mut camera = CameraState::default();

    log::info!(
        "start: pivot {}, fov {:.1}, {:?}",
        camera.pivot,
        camera.fov,
        camera.projection
    );
    for key in &keys {
        press(&mut controller, &mut camera, &options, key);
    }
}
