//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (transition tuning, key bindings) are
//! consolidated here. Options serialize to/from TOML so hosts can ship
//! editable preset files.

mod keybindings;
mod transition;

use std::path::Path;

pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::IsoviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// (or serialize transparently) so partial TOML files work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// View-transition tuning parameters.
    pub transition: TransitionOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`IsoviewError::Io`] if the file cannot be read and
    /// [`IsoviewError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, IsoviewError> {
        let content = std::fs::read_to_string(path).map_err(IsoviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| IsoviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`IsoviewError::OptionsParse`] if serialization fails and
    /// [`IsoviewError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), IsoviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| IsoviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(IsoviewError::Io)?;
        }
        std::fs::write(path, content).map_err(IsoviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use crate::input::KeyAction;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[transition]
duration_secs = 0.25
easing = "quadratic_out"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.transition.duration_secs, 0.25);
        assert_eq!(
            opts.transition.easing,
            crate::animation::EasingFunction::QuadraticOut
        );
        // Everything else should be default
        assert_eq!(opts.transition.isometric_fov, 0.0125);
        assert_eq!(opts.transition.fov_wide, 90.0);
        assert_eq!(
            opts.keybindings.lookup("Numpad5"),
            Some(KeyAction::TogglePerspective)
        );
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Numpad7"),
            Some(KeyAction::TopView)
        );
        assert_eq!(
            opts.keybindings.lookup("Numpad2"),
            Some(KeyAction::NarrowFov)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybinding_table_parses_from_toml() {
        let toml_str = r#"
[keybindings]
top_view = "KeyT"
toggle_perspective = "Space"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyT"), Some(KeyAction::TopView));
        assert_eq!(
            opts.keybindings.key_for(KeyAction::TogglePerspective),
            Some("Space")
        );
        // A partial table replaces the whole map.
        assert_eq!(opts.keybindings.lookup("Numpad9"), None);
    }

    #[test]
    fn rebinding_replaces_the_key() {
        let mut opts = Options::default();
        opts.keybindings.bind(KeyAction::TopView, "KeyT");
        assert_eq!(opts.keybindings.lookup("KeyT"), Some(KeyAction::TopView));
        assert_eq!(opts.keybindings.lookup("Numpad7"), None);
    }

    #[test]
    fn octant_offset_round_trips_as_array() {
        let toml_str = r"
[transition]
octant_offset = [-4.0, 4.0, -4.0]
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.transition.octant_offset,
            glam::Vec3::new(-4.0, 4.0, -4.0)
        );
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("transition"));

        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        // Transition should have exposed fields but not skipped ones
        let transition = &props["transition"]["properties"];
        assert!(transition.get("duration_secs").is_some());
        assert!(transition.get("fov_wide").is_some());
        assert!(transition.get("easing").is_none());
        assert!(transition.get("isometric_fov").is_none());
    }
}
