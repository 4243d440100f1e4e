//! Input vocabulary: the discrete actions hosts bind to keys.
//!
//! Raw key decoding stays host-side; this crate only maps already
//! decoded key strings to [`KeyAction`] values via
//! [`crate::options::KeybindingOptions`].

/// Key-bindable view actions.
pub mod keyboard;

pub use keyboard::KeyAction;
