//! Integration tests for event-keys.
//!
//! These tests exercise the full pipeline as an integrated system:
//! raw state → normalization → canonical strings, string → lenient parse →
//! re-generation, and the `equal_event_key` predicate over both
//! representations. Options are pinned explicitly where platform defaults
//! would otherwise make the expectations host-dependent.

use event_keys::{
    EventKeyOptions, GenerateOptions, KeyState, KeyboardLayoutMap, ParseOptions, create_event_keys,
    equal_event_key, generate_key_strings, key_states_equal, normalize_key_state,
    parse_event_key, parse_key_string,
};

/// Options pinned to a Control-platform profile with the alias enabled.
fn win_profile() -> EventKeyOptions<'static> {
    EventKeyOptions {
        modifier_key: Some(true),
        meta_modifier_key: Some(false),
        keyboard_layout_map: None,
    }
}

/// Options pinned to a Meta-platform profile with the alias enabled.
fn mac_profile() -> EventKeyOptions<'static> {
    EventKeyOptions {
        modifier_key: Some(true),
        meta_modifier_key: Some(true),
        keyboard_layout_map: None,
    }
}

fn event(key: &str, code: &str) -> KeyState {
    KeyState {
        code: Some(code.to_string()),
        ..KeyState::from_key(key)
    }
}

// ---------------------------------------------------------------------------
// Round-trip: generated primary string parses back to the same state
// ---------------------------------------------------------------------------

#[test]
fn primary_string_round_trips() {
    let states = [
        KeyState::from_key("a"),
        KeyState::from_key("Enter"),
        KeyState {
            ctrl_key: true,
            ..KeyState::from_key("b")
        },
        KeyState {
            meta_key: true,
            alt_key: true,
            ..KeyState::from_key("x")
        },
        KeyState {
            shift_key: true,
            ..KeyState::from_key("A")
        },
        KeyState {
            ctrl_key: true,
            meta_key: true,
            alt_key: true,
            shift_key: true,
            ..KeyState::from_key("Enter")
        },
        KeyState {
            ctrl_key: true,
            ..KeyState::from_key("Control")
        },
    ];

    // No alias and no layout map: the primary spelling is the concrete one.
    let generate = GenerateOptions::default();
    let parse = ParseOptions::default();

    for state in states {
        let normalized = normalize_key_state(&state);
        let keys = generate_key_strings(&state, generate);
        assert!(!keys.is_empty());

        let parsed = parse_key_string(&keys[0], parse);
        assert!(
            key_states_equal(&parsed.state, &normalized),
            "round-trip of {keys:?} gave {:?}, expected {normalized:?}",
            parsed.state
        );
    }
}

// ---------------------------------------------------------------------------
// equal_event_key
// ---------------------------------------------------------------------------

#[test]
fn reflexive_for_any_representation() {
    let representations = ["a", "Control+a", "Shift+A", "Modifier+Alt+x", "F5"];
    for text in representations {
        assert!(
            equal_event_key(text, text, win_profile()),
            "{text:?} should equal itself"
        );
    }

    let state = event("!", "Digit1");
    let state = KeyState {
        shift_key: true,
        ..state
    };
    assert!(equal_event_key(&state, &state, win_profile()));
}

#[test]
fn alias_and_concrete_spellings_match_on_their_platform() {
    let ctrl_a = KeyState {
        ctrl_key: true,
        ..KeyState::from_key("a")
    };

    // On a Control platform the alias names Control...
    assert!(equal_event_key("Control+a", &ctrl_a, win_profile()));
    assert!(equal_event_key("Modifier+a", &ctrl_a, win_profile()));
    // ...but not Meta.
    let meta_a = KeyState {
        meta_key: true,
        ..KeyState::from_key("a")
    };
    assert!(!equal_event_key("Modifier+a", &meta_a, win_profile()));

    // On a Meta platform it is the other way around.
    assert!(equal_event_key("Modifier+a", &meta_a, mac_profile()));
    assert!(!equal_event_key("Modifier+a", &ctrl_a, mac_profile()));
    assert!(equal_event_key("Meta+a", &meta_a, mac_profile()));
}

#[test]
fn shifted_letters_match_under_either_spelling() {
    let shift_a = KeyState {
        shift_key: true,
        ..KeyState::from_key("A")
    };
    assert!(equal_event_key("A", &shift_a, win_profile()));
    assert!(equal_event_key("Shift+a", &shift_a, win_profile()));
    assert!(equal_event_key("Shift+A", &shift_a, win_profile()));
    assert!(!equal_event_key("a", &shift_a, win_profile()));
}

#[test]
fn layout_alternates_match_through_the_default_map() {
    let bang = KeyState {
        shift_key: true,
        ..event("!", "Digit1")
    };
    assert!(equal_event_key("!", &bang, win_profile()));
    assert!(equal_event_key("Shift+1", &bang, win_profile()));
    assert!(!equal_event_key("Shift+2", &bang, win_profile()));

    let alt_a = KeyState {
        alt_key: true,
        ..event("å", "KeyA")
    };
    assert!(equal_event_key("Alt+a", &alt_a, win_profile()));
    assert!(equal_event_key("å", &alt_a, win_profile()));
}

#[test]
fn custom_layout_map_overrides_the_default() {
    // A layout where the key at the QWERTY-"a" position produces "q".
    let layout: KeyboardLayoutMap = [("KeyA", "q")].into_iter().collect();
    let options = EventKeyOptions {
        keyboard_layout_map: Some(&layout),
        ..win_profile()
    };

    let alt_press = KeyState {
        alt_key: true,
        ..event("æ", "KeyA")
    };
    assert!(equal_event_key("Alt+q", &alt_press, options));
    assert!(!equal_event_key("Alt+a", &alt_press, options));
}

#[test]
fn lenient_spellings_still_match() {
    let ctrl_b = KeyState {
        ctrl_key: true,
        ..KeyState::from_key("b")
    };
    assert!(equal_event_key("ctrl+b", &ctrl_b, win_profile()));
    assert!(equal_event_key("Ctrl + b", &ctrl_b, win_profile()));

    // "Ctrl+B" implies Shift via the uppercase letter, so it names a
    // different combination than plain Ctrl+b.
    assert!(!equal_event_key("Ctrl+B", &ctrl_b, win_profile()));
    let ctrl_shift_b = KeyState {
        ctrl_key: true,
        shift_key: true,
        ..KeyState::from_key("B")
    };
    assert!(equal_event_key("Ctrl+B", &ctrl_shift_b, win_profile()));
}

// ---------------------------------------------------------------------------
// Bare modifier presses
// ---------------------------------------------------------------------------

#[test]
fn bare_modifier_press_normalizes_and_generates() {
    let press = KeyState {
        ctrl_key: true,
        ..KeyState::from_key("Control")
    };
    let normalized = normalize_key_state(&press);
    assert_eq!(normalized.key, "");
    assert!(normalized.ctrl_key);

    assert_eq!(
        create_event_keys(&press, mac_profile()),
        ["Control"],
        "Control is not the designated modifier on a Meta platform"
    );
    assert_eq!(
        create_event_keys(&press, win_profile()),
        ["Modifier", "Control"]
    );

    assert!(equal_event_key("Control", &press, win_profile()));
    assert!(equal_event_key("Modifier", &press, win_profile()));
}

// ---------------------------------------------------------------------------
// parse_event_key over both representations
// ---------------------------------------------------------------------------

#[test]
fn parse_event_key_unifies_states_and_strings() {
    let from_state = parse_event_key(&event(" ", "Space"), win_profile());
    assert_eq!(from_state.state.key, "Space");
    assert_eq!(from_state.warning, None);

    let from_text = parse_event_key("Space", win_profile());
    assert!(key_states_equal(&from_state.state, &from_text.state));
    assert_eq!(from_text.warning, None);
}

#[test]
fn lenient_parse_reports_every_tolerance() {
    let parsed = parse_event_key("shift + ctrl+a+b", win_profile());
    let warning = parsed.warning.expect("tolerances should be reported");
    assert!(warning.unnecessary_spaces);
    assert!(warning.loose_modifier_keys); // "shift" and "ctrl" spellings
    assert!(warning.loose_order); // Control after Shift
    assert!(warning.invalid_keys); // second literal key token "b"
    assert!(warning.loose_key); // Shift+lowercase normalized to "A"
    assert_eq!(parsed.state.key, "A");
    assert!(parsed.state.ctrl_key && parsed.state.shift_key);
}

// ---------------------------------------------------------------------------
// DOM-shaped JSON fixtures
// ---------------------------------------------------------------------------

#[test]
fn json_event_captures_feed_the_pipeline() {
    let fixture = r#"{
        "key": "!",
        "code": "Digit1",
        "ctrlKey": false,
        "metaKey": false,
        "altKey": false,
        "shiftKey": true
    }"#;
    let state: KeyState = serde_json::from_str(fixture).expect("fixture should deserialize");

    assert_eq!(
        create_event_keys(&state, win_profile()),
        ["Shift+1", "!"]
    );
    assert!(equal_event_key("Shift+1", &state, win_profile()));
}
