//! Keyboard event normalization and hotkey string matching.
//!
//! This crate maps physical key presses (modifier flags + key label) and
//! user-typed hotkey strings onto one canonical, comparable representation:
//!
//! - [`generate_key_strings`] turns a key state into the ordered set of
//!   equivalent canonical spellings (`Shift+1` and `!` name the same press),
//!   covering platform modifier aliasing and keyboard-layout alternates.
//! - [`parse_key_string`] leniently parses a free-form hotkey string back
//!   into a key state, tolerating typos, casing, ordering, and whitespace
//!   while reporting exactly what was tolerated.
//! - [`equal_event_key`] answers the consumer question: does this stored
//!   hotkey spec (string or event-like state) denote the same physical
//!   combination as that live event, under any accepted spelling?
//!
//! Everything is synchronous and pure over immutable inputs; the only
//! process-wide state is a pair of read-only defaults (platform modifier
//! flag and US-QWERTY layout table) computed once on first use.
//!
//! ```
//! use event_keys::{EventKeyOptions, KeyState, equal_event_key};
//!
//! let event = KeyState {
//!     ctrl_key: true,
//!     ..KeyState::from_key("a")
//! };
//! assert!(equal_event_key(&event, "Control+a", EventKeyOptions::default()));
//! ```

mod parser;
mod platform;
mod state;
mod strings;

pub use parser::{ParseOptions, ParseWarning, ParsedKeyState, parse_key_string};
pub use platform::{KeyboardLayoutMap, default_keyboard_layout_map, default_meta_modifier_key};
pub use state::{KeyState, key_states_equal, normalize_key_state};
pub use strings::{GenerateOptions, KeyStrings, generate_key_strings};

/// A key representation as consumers hold them: either an event-like state
/// or a hotkey string.
#[derive(Debug, Clone, Copy)]
pub enum EventKey<'a> {
    State(&'a KeyState),
    Text(&'a str),
}

impl<'a> From<&'a KeyState> for EventKey<'a> {
    fn from(state: &'a KeyState) -> Self {
        EventKey::State(state)
    }
}

impl<'a> From<&'a str> for EventKey<'a> {
    fn from(text: &'a str) -> Self {
        EventKey::Text(text)
    }
}

impl<'a> From<&'a String> for EventKey<'a> {
    fn from(text: &'a String) -> Self {
        EventKey::Text(text)
    }
}

/// Per-call overrides for the event-level operations; `None` means "use the
/// process-wide default".
///
/// Defaults: the `Modifier` alias is enabled, the designated platform
/// modifier follows [`default_meta_modifier_key`], and layout alternates use
/// [`default_keyboard_layout_map`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EventKeyOptions<'a> {
    pub modifier_key: Option<bool>,
    pub meta_modifier_key: Option<bool>,
    pub keyboard_layout_map: Option<&'a KeyboardLayoutMap>,
}

impl EventKeyOptions<'_> {
    fn resolve(&self) -> GenerateOptions<'_> {
        GenerateOptions {
            modifier_key: self.modifier_key.unwrap_or(true),
            meta_modifier_key: self
                .meta_modifier_key
                .unwrap_or_else(default_meta_modifier_key),
            keyboard_layout_map: Some(
                self.keyboard_layout_map
                    .unwrap_or_else(|| default_keyboard_layout_map()),
            ),
        }
    }
}

/// Every accepted canonical spelling of an event's key press, with the
/// process-wide platform defaults applied.
pub fn create_event_keys(state: &KeyState, options: EventKeyOptions<'_>) -> KeyStrings {
    generate_key_strings(state, options.resolve())
}

/// Resolve either key representation to a normalized state.
///
/// Strings go through the lenient parser (with this platform's default
/// `Modifier` resolution unless overridden); event-like states are
/// normalized only and never carry a warning.
pub fn parse_event_key<'a>(
    key: impl Into<EventKey<'a>>,
    options: EventKeyOptions<'_>,
) -> ParsedKeyState {
    match key.into() {
        EventKey::Text(text) => parse_key_string(
            text,
            ParseOptions {
                meta_modifier_key: options
                    .meta_modifier_key
                    .unwrap_or_else(default_meta_modifier_key),
            },
        ),
        EventKey::State(state) => ParsedKeyState {
            state: normalize_key_state(state),
            warning: None,
        },
    }
}

/// Whether two key representations denote the same physical combination.
///
/// Both sides are resolved to their canonical string sets; any shared
/// spelling is a match. This is the intended hotkey-matching predicate for
/// comparing a stored spec against a live event.
pub fn equal_event_key<'a, 'b>(
    a: impl Into<EventKey<'a>>,
    b: impl Into<EventKey<'b>>,
    options: EventKeyOptions<'_>,
) -> bool {
    let a_keys = create_event_keys(&parse_event_key(a, options).state, options);
    let b_keys = create_event_keys(&parse_event_key(b, options).state, options);
    let matched = a_keys.iter().any(|key| b_keys.contains(key));
    log::trace!("comparing key spellings {a_keys:?} against {b_keys:?}: matched={matched}");
    matched
}
