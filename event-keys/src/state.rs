//! Key state normalization.
//!
//! A [`KeyState`] is the value-object form of a single physical key press:
//! four modifier flags, the logical key label, and an optional physical key
//! code. Raw states coming straight from an input event are canonicalized
//! with [`normalize_key_state`] before any string generation or comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The names a key event reports when the pressed key is itself a modifier.
const MODIFIER_KEY_NAMES: [&str; 4] = ["Control", "Meta", "Alt", "Shift"];

/// A single key press: modifier flags plus the primary key label.
///
/// The serialized shape matches a DOM `KeyboardEvent` (`ctrlKey`, `metaKey`,
/// `altKey`, `shiftKey`, `key`, `code`), so JSON captures of browser events
/// deserialize directly.
///
/// `key` is the logical key label (`"a"`, `"!"`, `"Enter"`, ...); it is the
/// empty string when the press is a bare modifier key. `code` is the
/// layout-independent physical key identifier (`"KeyA"`, `"Digit1"`, ...)
/// and is only consulted for keyboard-layout lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyState {
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub alt_key: bool,
    pub shift_key: bool,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl KeyState {
    /// Create a state with only a key label set.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }
}

/// Render the single concrete canonical spelling of the normalized state:
/// pressed modifiers in `Control`, `Meta`, `Alt`, `Shift` order, then the
/// key label, `+`-joined. The empty state renders as the empty string.
impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = normalize_key_state(self);
        let mut parts = Vec::new();

        if state.ctrl_key {
            parts.push("Control");
        }
        if state.meta_key {
            parts.push("Meta");
        }
        if state.alt_key {
            parts.push("Alt");
        }
        if state.shift_key {
            parts.push("Shift");
        }
        if !state.key.is_empty() {
            parts.push(&state.key);
        }

        write!(f, "{}", parts.join("+"))
    }
}

/// Canonicalize a raw key state.
///
/// - A key label that names a modifier (`Control`, `Meta`, `Alt`, `Shift`)
///   forces the matching flag true and clears `key` — a bare modifier press
///   has no primary key.
/// - A literal space key label becomes `Space` so it survives later
///   whitespace handling.
/// - Everything else, including `code`, passes through unchanged.
///
/// Total and pure; normalizing twice is a no-op.
pub fn normalize_key_state(raw: &KeyState) -> KeyState {
    let key_is_modifier = MODIFIER_KEY_NAMES.contains(&raw.key.as_str());

    KeyState {
        ctrl_key: raw.key == "Control" || raw.ctrl_key,
        meta_key: raw.key == "Meta" || raw.meta_key,
        alt_key: raw.key == "Alt" || raw.alt_key,
        shift_key: raw.key == "Shift" || raw.shift_key,
        key: if key_is_modifier {
            String::new()
        } else if raw.key == " " {
            "Space".to_string()
        } else {
            raw.key.clone()
        },
        code: raw.code.clone(),
    }
}

/// The only char of a one-char string, `None` otherwise.
pub(crate) fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Compare two states by the four modifier flags and the key label.
///
/// `code` is deliberately ignored: two presses on different physical keys
/// that produce the same label and modifiers count as the same combination.
pub fn key_states_equal(a: &KeyState, b: &KeyState) -> bool {
    a.ctrl_key == b.ctrl_key
        && a.meta_key == b.meta_key
        && a.alt_key == b.alt_key
        && a.shift_key == b.shift_key
        && a.key == b.key
}
