//! Canonical hotkey string generation.
//!
//! A single physical press can have several equally valid textual names: the
//! platform-neutral `Modifier` alias vs the concrete `Control`/`Meta`, and
//! the typed character vs the layout-neutral glyph derived from the physical
//! key code (`Shift+1` vs `!`, `Alt+a` vs `å`). Consumers matching hotkeys
//! need every accepted spelling, so [`generate_key_strings`] returns the full
//! ordered set rather than one string.

use crate::platform::KeyboardLayoutMap;
use crate::state::{KeyState, normalize_key_state, single_char};

/// Ordered set of equivalent canonical spellings for one key press.
///
/// Non-empty by construction; the first entry is the primary form.
pub type KeyStrings = Vec<String>;

/// Options for [`generate_key_strings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions<'a> {
    /// Emit a platform-generic `Modifier` spelling alongside the concrete
    /// `Control`/`Meta` one when the designated platform modifier is the
    /// only one of the two pressed.
    pub modifier_key: bool,
    /// Which key `Modifier` designates: Meta when true, Control otherwise.
    pub meta_modifier_key: bool,
    /// Physical-code → glyph table used to produce layout alternates for
    /// shifted or Alt-altered keys. No alternates are produced without it.
    pub keyboard_layout_map: Option<&'a KeyboardLayoutMap>,
}

/// Generate every accepted canonical spelling of a key press.
///
/// The input is normalized first, so raw event states can be passed
/// directly. Always returns at least one string; a state with no modifiers
/// and no key yields a single empty string.
///
/// ```
/// use event_keys::{GenerateOptions, KeyState, generate_key_strings};
///
/// let press = KeyState {
///     shift_key: true,
///     ..KeyState::from_key("A")
/// };
/// let keys = generate_key_strings(&press, GenerateOptions::default());
/// assert_eq!(keys, ["Shift+a", "A"]);
/// ```
pub fn generate_key_strings(raw: &KeyState, options: GenerateOptions<'_>) -> KeyStrings {
    let state = normalize_key_state(raw);
    let prefixes = ctrl_meta_prefixes(&state, options);
    let suffixes = alt_shift_key_suffixes(&state, options.keyboard_layout_map);

    let mut keys = Vec::with_capacity(prefixes.len() * suffixes.len());
    for suffix in &suffixes {
        for prefix in &prefixes {
            let combined = format!("{prefix}{suffix}");
            keys.push(combined.strip_prefix('+').unwrap_or(&combined).to_string());
        }
    }
    keys
}

/// Control/Meta prefix variants, alias spelling first when it applies.
///
/// The `Modifier` alias only stands in for the designated platform modifier
/// when it is pressed alone: `Control+Meta` together always spell out both.
fn ctrl_meta_prefixes(state: &KeyState, options: GenerateOptions<'_>) -> Vec<String> {
    let mut ctrl_meta = String::new();
    if state.ctrl_key {
        ctrl_meta.push_str("+Control");
    }
    if state.meta_key {
        ctrl_meta.push_str("+Meta");
    }

    let designated_alone = if options.meta_modifier_key {
        !state.ctrl_key && state.meta_key
    } else {
        state.ctrl_key && !state.meta_key
    };

    if options.modifier_key && designated_alone {
        vec!["+Modifier".to_string(), ctrl_meta]
    } else {
        vec![ctrl_meta]
    }
}

/// Alt/Shift + key suffix variants, each carrying a leading `+`.
///
/// Shift over a plain letter and layout-mapped shifted/altered glyphs each
/// produce an extra spelling; the order (canonical-with-modifiers first, raw
/// pressed key last) is significant.
fn alt_shift_key_suffixes(state: &KeyState, layout: Option<&KeyboardLayoutMap>) -> Vec<String> {
    let press_key = if state.key.is_empty() {
        String::new()
    } else {
        format!("+{}", state.key)
    };

    if !state.alt_key && !state.shift_key {
        return vec![press_key];
    }

    let alt = if state.alt_key { "+Alt" } else { "" };
    let shift = if state.shift_key { "+Shift" } else { "" };

    // Shift+A: the uppercase letter alone already implies Shift.
    if state.shift_key && single_char(&state.key).is_some_and(|c| c.is_ascii_uppercase()) {
        return vec![
            format!("{alt}{shift}+{}", state.key.to_lowercase()),
            format!("{alt}{press_key}"),
        ];
    }

    if let (Some(layout), Some(code)) = (layout, state.code.as_deref())
        && let Some(layout_key) = layout.get(code)
    {
        // is_ascii_graphic is exactly the printable range U+0021..=U+007E.
        let printable = single_char(&state.key).is_some_and(|c| c.is_ascii_graphic());

        // Shift+!: the event reports the shifted glyph, the layout tells us
        // which unshifted position produced it.
        if state.shift_key && printable {
            return vec![
                format!("{alt}{shift}+{layout_key}"),
                format!("{alt}{press_key}"),
            ];
        }

        // Alt+å: the event reports an already-altered glyph.
        if state.alt_key && !printable {
            let mut suffixes = vec![format!("{alt}{shift}+{layout_key}")];
            if state.shift_key && single_char(layout_key).is_some_and(|c| c.is_ascii_lowercase()) {
                suffixes.push(format!("{alt}+{}", layout_key.to_uppercase()));
            }
            suffixes.push(press_key);
            return suffixes;
        }
    }

    vec![format!("{alt}{shift}{press_key}")]
}
