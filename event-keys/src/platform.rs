//! Platform defaults and keyboard layout lookup.
//!
//! Contains:
//! - the process-wide "does Meta act as the primary modifier" default
//!   (Apple platforms use ⌘, everything else uses Control)
//! - [`KeyboardLayoutMap`], the caller-suppliable physical-code → glyph
//!   table, with a built-in US-QWERTY default

use std::collections::HashMap;
use std::sync::OnceLock;

static DEFAULT_LAYOUT_MAP: OnceLock<KeyboardLayoutMap> = OnceLock::new();

/// Whether the `Modifier` alias should stand for Meta on this platform.
///
/// - Apple platforms: the primary modifier is ⌘ (Meta).
/// - All other platforms: the primary modifier is Control.
#[inline]
pub fn default_meta_modifier_key() -> bool {
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    {
        true
    }
    #[cfg(not(any(target_os = "macos", target_os = "ios")))]
    {
        false
    }
}

/// Mapping from physical key codes (`"KeyA"`, `"Digit1"`, ...) to the glyph
/// that position produces with no modifiers held on a given layout.
///
/// Read-only from the library's point of view: callers build one (e.g. from
/// the browser's `navigator.keyboard.getLayoutMap()` or a test fixture) and
/// hand it in. [`default_keyboard_layout_map`] provides a US-QWERTY table
/// for convenience; it is not authoritative for other layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardLayoutMap {
    entries: HashMap<String, String>,
}

impl KeyboardLayoutMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// US-QWERTY letters, digit row, numpad, and common punctuation.
    ///
    /// Covers the `KeyA`..`KeyZ`, `Digit0`..`Digit9`, `Numpad0`..`Numpad9`
    /// codes plus the punctuation and numpad operator positions from the
    /// W3C UI Events code list (<https://www.w3.org/TR/uievents-code/>).
    pub fn us_qwerty() -> Self {
        let mut map = Self::new();

        for (code, glyph) in [
            ("Backquote", "`"),
            ("Backslash", "\\"),
            ("BracketLeft", "["),
            ("BracketRight", "]"),
            ("Comma", ","),
            ("Equal", "="),
            ("Minus", "-"),
            ("Period", "."),
            ("Quote", "'"),
            ("Semicolon", ";"),
            ("Slash", "/"),
            ("NumpadAdd", "+"),
            ("NumpadDivide", "/"),
            ("NumpadEqual", "="),
            ("NumpadMultiply", "*"),
            ("NumpadSubtract", "-"),
        ] {
            map.insert(code, glyph);
        }

        for digit in 0..10 {
            map.insert(format!("Digit{digit}"), digit.to_string());
            map.insert(format!("Numpad{digit}"), digit.to_string());
        }

        for letter in 'a'..='z' {
            map.insert(
                format!("Key{}", letter.to_ascii_uppercase()),
                letter.to_string(),
            );
        }

        map
    }

    /// Register the glyph a physical key code produces.
    pub fn insert(&mut self, code: impl Into<String>, glyph: impl Into<String>) {
        self.entries.insert(code.into(), glyph.into());
    }

    /// Look up the unmodified glyph for a physical key code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyboardLayoutMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (code, glyph) in iter {
            map.insert(code, glyph);
        }
        map
    }
}

/// The process-wide US-QWERTY layout table, built once on first use.
pub fn default_keyboard_layout_map() -> &'static KeyboardLayoutMap {
    DEFAULT_LAYOUT_MAP.get_or_init(KeyboardLayoutMap::us_qwerty)
}
