use serde::{Deserialize, Serialize};

/// View actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings]
/// top_view = "Numpad7"
/// toggle_perspective = "Numpad5"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Animate to the top orthographic preset.
    TopView,
    /// Animate to the front orthographic preset.
    FrontView,
    /// Animate to the side orthographic preset.
    SideView,
    /// Toggle between perspective and the saved/default isometric view.
    TogglePerspective,
    /// Frame the origin from the configured octant offset.
    LookAtOrigin,
    /// Animate the field of view to the wide preset.
    WidenFov,
    /// Animate the field of view to the narrow preset.
    NarrowFov,
}
