use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format
/// (`"Numpad7"`, `"Tab"`). The struct serializes transparently, so a
/// TOML `[keybindings]` table is just `action = "Key"` lines; a partial
/// table replaces the whole map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `TopView` → `"Numpad7"`).
    bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::TopView, "Numpad7".into()),
            (KeyAction::FrontView, "Numpad1".into()),
            (KeyAction::SideView, "Numpad3".into()),
            (KeyAction::TogglePerspective, "Numpad5".into()),
            (KeyAction::LookAtOrigin, "Numpad9".into()),
            (KeyAction::WidenFov, "Numpad8".into()),
            (KeyAction::NarrowFov, "Numpad2".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string. The binding table is tiny,
    /// so this scans rather than maintaining a reverse map.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find_map(|(action, bound)| (bound == key).then_some(*action))
    }

    /// The key currently bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Bind (or rebind) an action to a key string.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
    }
}
