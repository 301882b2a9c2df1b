//! Lenient hotkey string parsing.
//!
//! Parses free-form strings like `"Ctrl + shift+b"` back into a normalized
//! [`KeyState`]. Parsing is total: typos, casing variance, extra whitespace,
//! wrong modifier order, and duplicate key tokens all degrade to structured
//! [`ParseWarning`] flags instead of errors, so consumers can accept the
//! input and still tell the user exactly what was tolerated.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::state::{KeyState, single_char};

/// One token per `+` boundary: an arbitrary first char plus any following
/// non-`+` chars. The leading `.` lets a bare `+` (or a `+` right after a
/// delimiter, as in `"Meta++"`) come through as a literal key token.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.[^+]*)(?:\+|$)").expect("Failed to compile token pattern"));

/// Order slot a literal key token moves the parser to; any modifier token
/// seen afterwards is out of order.
const KEY_ORDER: u8 = 9;

/// Which modifier flag a recognized modifier token drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModifierKind {
    Control,
    Meta,
    /// Platform-neutral alias; resolves to Control or Meta per options.
    ModifierAlias,
    Shift,
    Alt,
}

/// A loose-match rule for one modifier spelling family.
struct ModifierRule {
    pattern: Regex,
    canonical: &'static str,
    /// Position in the canonical modifier order (Control=1 .. Alt=5).
    order: u8,
    kind: ModifierKind,
}

/// Classification rules in fixed priority order; the first matching rule
/// wins, anything unmatched is a literal key token.
static MODIFIER_RULES: LazyLock<[ModifierRule; 5]> = LazyLock::new(|| {
    let rule = |pattern: &str, canonical, order, kind| ModifierRule {
        pattern: Regex::new(pattern).expect("Failed to compile modifier pattern"),
        canonical,
        order,
        kind,
    };
    [
        rule(r"(?i)^c.*?tr", "Control", 1, ModifierKind::Control),
        rule(r"(?i)^(?:meta|sup|win)", "Meta", 2, ModifierKind::Meta),
        rule(r"(?i)^(?:mod|co?m.*?d)", "Modifier", 3, ModifierKind::ModifierAlias),
        rule(r"(?i)^shift", "Shift", 4, ModifierKind::Shift),
        rule(r"(?i)^alt", "Alt", 5, ModifierKind::Alt),
    ]
});

/// Options for [`parse_key_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Resolve the `Modifier` alias to Meta instead of Control.
    pub meta_modifier_key: bool,
}

/// Which tolerances were invoked while parsing a key string.
///
/// Serializes camelCase with false flags skipped, so the serialized form
/// contains only the warnings that actually fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseWarning {
    /// A later literal key token differed from the one already retained.
    #[serde(skip_serializing_if = "is_false")]
    pub invalid_keys: bool,
    /// A key token was accepted in a non-canonical casing or format.
    #[serde(skip_serializing_if = "is_false")]
    pub loose_key: bool,
    /// A modifier was spelled non-canonically, or was redundant/implied.
    #[serde(skip_serializing_if = "is_false")]
    pub loose_modifier_keys: bool,
    /// Modifiers appeared out of canonical order or were repeated.
    #[serde(skip_serializing_if = "is_false")]
    pub loose_order: bool,
    /// A token carried whitespace that was stripped before matching.
    #[serde(skip_serializing_if = "is_false")]
    pub unnecessary_spaces: bool,
}

impl ParseWarning {
    /// True when at least one tolerance was invoked.
    pub fn any(&self) -> bool {
        self.invalid_keys
            || self.loose_key
            || self.loose_modifier_keys
            || self.loose_order
            || self.unnecessary_spaces
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// A parsed key state plus the tolerances invoked to produce it.
///
/// `warning` is `None` when the input was fully canonical; consumers wanting
/// strict validation treat any `Some` as a soft failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedKeyState {
    #[serde(flatten)]
    pub state: KeyState,
    #[serde(default)]
    pub warning: Option<ParseWarning>,
}

/// Parse a free-form hotkey string into a normalized key state.
///
/// Never fails: malformed input yields a best-effort state with the applied
/// tolerances recorded in `warning`.
///
/// ```
/// use event_keys::{ParseOptions, parse_key_string};
///
/// let parsed = parse_key_string("ctrl+a", ParseOptions::default());
/// assert!(parsed.state.ctrl_key);
/// assert_eq!(parsed.state.key, "a");
/// assert!(parsed.warning.unwrap().loose_modifier_keys);
/// ```
pub fn parse_key_string(text: &str, options: ParseOptions) -> ParsedKeyState {
    let mut state = KeyState::default();
    let mut warning = ParseWarning::default();
    let mut order_count: u8 = 0;

    for caps in TOKEN_PATTERN.captures_iter(text) {
        let raw_token = &caps[1];
        let token: String = raw_token.chars().filter(|c| !c.is_whitespace()).collect();
        // A lone space token is the spelling for a literal space key, not
        // sloppy input.
        if raw_token != " " && raw_token != token {
            warning.unnecessary_spaces = true;
        }

        match MODIFIER_RULES.iter().find(|rule| rule.pattern.is_match(&token)) {
            Some(rule) => {
                if token != rule.canonical {
                    warning.loose_modifier_keys = true;
                }
                // The alias must come first outright; concrete modifiers
                // only need to be non-decreasing relative to their slot.
                let out_of_order = match rule.kind {
                    ModifierKind::ModifierAlias => order_count != 0,
                    _ => order_count >= rule.order,
                };
                if out_of_order {
                    warning.loose_order = true;
                }
                order_count = rule.order;

                match rule.kind {
                    ModifierKind::Control => state.ctrl_key = true,
                    ModifierKind::Meta => state.meta_key = true,
                    ModifierKind::ModifierAlias => {
                        if options.meta_modifier_key {
                            state.meta_key = true;
                        } else {
                            state.ctrl_key = true;
                        }
                    }
                    ModifierKind::Shift => state.shift_key = true,
                    ModifierKind::Alt => state.alt_key = true,
                }
            }
            None => {
                let valid_key = normalize_key_token(&token);
                if token != valid_key {
                    warning.loose_key = true;
                }
                order_count = KEY_ORDER;
                if state.key.is_empty() {
                    state.key = valid_key;
                } else if state.key != valid_key {
                    // First literal token wins; later ones only warn.
                    warning.invalid_keys = true;
                }
            }
        }
    }

    // An uppercase letter alone implies Shift; Shift plus a lowercase letter
    // is accepted but normalized to the event-derived uppercase form.
    if single_char(&state.key).is_some_and(|c| c.is_ascii_uppercase()) {
        if state.shift_key {
            warning.loose_modifier_keys = true;
        } else {
            if state.ctrl_key || state.meta_key || state.alt_key {
                warning.loose_modifier_keys = true;
            }
            state.shift_key = true;
        }
    } else if single_char(&state.key).is_some_and(|c| c.is_ascii_lowercase()) && state.shift_key {
        warning.loose_key = true;
        state.key = state.key.to_uppercase();
    }

    if warning.any() {
        log::debug!("tolerated non-canonical key string {text:?}: {warning:?}");
    }

    ParsedKeyState {
        state,
        warning: warning.any().then_some(warning),
    }
}

/// Canonical form of a literal key token: empty means the space key, single
/// chars stay verbatim, longer names get their first letter capitalized.
fn normalize_key_token(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => "Space".to_string(),
        Some(_) if chars.as_str().is_empty() => token.to_string(),
        Some(first) => {
            let mut normalized: String = first.to_uppercase().collect();
            normalized.push_str(chars.as_str());
            normalized
        }
    }
}
