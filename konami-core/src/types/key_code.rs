//! Physical key codes, named after DOM `KeyboardEvent.code` values

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letter keys (A-Z)
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,

    // Digit row (0-9)
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Control keys
    Enter,
    Escape,
    Space,
    Tab,
    Backspace,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    MetaLeft,
    MetaRight,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl KeyCode {
    /// Every key code, in declaration order
    pub const ALL: [KeyCode; 65] = [
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::KeyA,
        KeyCode::KeyB,
        KeyCode::KeyC,
        KeyCode::KeyD,
        KeyCode::KeyE,
        KeyCode::KeyF,
        KeyCode::KeyG,
        KeyCode::KeyH,
        KeyCode::KeyI,
        KeyCode::KeyJ,
        KeyCode::KeyK,
        KeyCode::KeyL,
        KeyCode::KeyM,
        KeyCode::KeyN,
        KeyCode::KeyO,
        KeyCode::KeyP,
        KeyCode::KeyQ,
        KeyCode::KeyR,
        KeyCode::KeyS,
        KeyCode::KeyT,
        KeyCode::KeyU,
        KeyCode::KeyV,
        KeyCode::KeyW,
        KeyCode::KeyX,
        KeyCode::KeyY,
        KeyCode::KeyZ,
        KeyCode::Digit0,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::Space,
        KeyCode::Tab,
        KeyCode::Backspace,
        KeyCode::ShiftLeft,
        KeyCode::ShiftRight,
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::AltLeft,
        KeyCode::AltRight,
        KeyCode::MetaLeft,
        KeyCode::MetaRight,
        KeyCode::F1,
        KeyCode::F2,
        KeyCode::F3,
        KeyCode::F4,
        KeyCode::F5,
        KeyCode::F6,
        KeyCode::F7,
        KeyCode::F8,
        KeyCode::F9,
        KeyCode::F10,
        KeyCode::F11,
        KeyCode::F12,
    ];

    /// Canonical DOM `code` name, e.g. `"ArrowUp"` or `"KeyB"`
    pub fn code(&self) -> &'static str {
        match self {
            KeyCode::ArrowUp => "ArrowUp",
            KeyCode::ArrowDown => "ArrowDown",
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowRight => "ArrowRight",
            KeyCode::KeyA => "KeyA",
            KeyCode::KeyB => "KeyB",
            KeyCode::KeyC => "KeyC",
            KeyCode::KeyD => "KeyD",
            KeyCode::KeyE => "KeyE",
            KeyCode::KeyF => "KeyF",
            KeyCode::KeyG => "KeyG",
            KeyCode::KeyH => "KeyH",
            KeyCode::KeyI => "KeyI",
            KeyCode::KeyJ => "KeyJ",
            KeyCode::KeyK => "KeyK",
            KeyCode::KeyL => "KeyL",
            KeyCode::KeyM => "KeyM",
            KeyCode::KeyN => "KeyN",
            KeyCode::KeyO => "KeyO",
            KeyCode::KeyP => "KeyP",
            KeyCode::KeyQ => "KeyQ",
            KeyCode::KeyR => "KeyR",
            KeyCode::KeyS => "KeyS",
            KeyCode::KeyT => "KeyT",
            KeyCode::KeyU => "KeyU",
            KeyCode::KeyV => "KeyV",
            KeyCode::KeyW => "KeyW",
            KeyCode::KeyX => "KeyX",
            KeyCode::KeyY => "KeyY",
            KeyCode::KeyZ => "KeyZ",
            KeyCode::Digit0 => "Digit0",
            KeyCode::Digit1 => "Digit1",
            KeyCode::Digit2 => "Digit2",
            KeyCode::Digit3 => "Digit3",
            KeyCode::Digit4 => "Digit4",
            KeyCode::Digit5 => "Digit5",
            KeyCode::Digit6 => "Digit6",
            KeyCode::Digit7 => "Digit7",
            KeyCode::Digit8 => "Digit8",
            KeyCode::Digit9 => "Digit9",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Escape",
            KeyCode::Space => "Space",
            KeyCode::Tab => "Tab",
            KeyCode::Backspace => "Backspace",
            KeyCode::ShiftLeft => "ShiftLeft",
            KeyCode::ShiftRight => "ShiftRight",
            KeyCode::ControlLeft => "ControlLeft",
            KeyCode::ControlRight => "ControlRight",
            KeyCode::AltLeft => "AltLeft",
            KeyCode::AltRight => "AltRight",
            KeyCode::MetaLeft => "MetaLeft",
            KeyCode::MetaRight => "MetaRight",
            KeyCode::F1 => "F1",
            KeyCode::F2 => "F2",
            KeyCode::F3 => "F3",
            KeyCode::F4 => "F4",
            KeyCode::F5 => "F5",
            KeyCode::F6 => "F6",
            KeyCode::F7 => "F7",
            KeyCode::F8 => "F8",
            KeyCode::F9 => "F9",
            KeyCode::F10 => "F10",
            KeyCode::F11 => "F11",
            KeyCode::F12 => "F12",
        }
    }

    /// Parses a key name such as `"ArrowUp"`, `"up"`, `"KeyB"` or `"b"`.
    ///
    /// Matching is case-insensitive and accepts the short aliases listed in
    /// [`create_key_map`].
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::UnknownKey(name.to_string()));
        }
        create_key_map()
            .get(trimmed.to_uppercase().as_str())
            .copied()
            .ok_or_else(|| Error::UnknownKey(trimmed.to_string()))
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for KeyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        KeyCode::parse(s)
    }
}

/// Name table used by [`KeyCode::parse`]. Keys are upper-case.
pub fn create_key_map() -> HashMap<&'static str, KeyCode> {
    let mut map = HashMap::new();

    // Arrow keys
    map.insert("ARROWUP", KeyCode::ArrowUp);
    map.insert("UP", KeyCode::ArrowUp);
    map.insert("ARROWDOWN", KeyCode::ArrowDown);
    map.insert("DOWN", KeyCode::ArrowDown);
    map.insert("ARROWLEFT", KeyCode::ArrowLeft);
    map.insert("LEFT", KeyCode::ArrowLeft);
    map.insert("ARROWRIGHT", KeyCode::ArrowRight);
    map.insert("RIGHT", KeyCode::ArrowRight);

    // Letter keys
    map.insert("KEYA", KeyCode::KeyA);
    map.insert("A", KeyCode::KeyA);
    map.insert("KEYB", KeyCode::KeyB);
    map.insert("B", KeyCode::KeyB);
    map.insert("KEYC", KeyCode::KeyC);
    map.insert("C", KeyCode::KeyC);
    map.insert("KEYD", KeyCode::KeyD);
    map.insert("D", KeyCode::KeyD);
    map.insert("KEYE", KeyCode::KeyE);
    map.insert("E", KeyCode::KeyE);
    map.insert("KEYF", KeyCode::KeyF);
    map.insert("F", KeyCode::KeyF);
    map.insert("KEYG", KeyCode::KeyG);
    map.insert("G", KeyCode::KeyG);
    map.insert("KEYH", KeyCode::KeyH);
    map.insert("H", KeyCode::KeyH);
    map.insert("KEYI", KeyCode::KeyI);
    map.insert("I", KeyCode::KeyI);
    map.insert("KEYJ", KeyCode::KeyJ);
    map.insert("J", KeyCode::KeyJ);
    map.insert("KEYK", KeyCode::KeyK);
    map.insert("K", KeyCode::KeyK);
    map.insert("KEYL", KeyCode::KeyL);
    map.insert("L", KeyCode::KeyL);
    map.insert("KEYM", KeyCode::KeyM);
    map.insert("M", KeyCode::KeyM);
    map.insert("KEYN", KeyCode::KeyN);
    map.insert("N", KeyCode::KeyN);
    map.insert("KEYO", KeyCode::KeyO);
    map.insert("O", KeyCode::KeyO);
    map.insert("KEYP", KeyCode::KeyP);
    map.insert("P", KeyCode::KeyP);
    map.insert("KEYQ", KeyCode::KeyQ);
    map.insert("Q", KeyCode::KeyQ);
    map.insert("KEYR", KeyCode::KeyR);
    map.insert("R", KeyCode::KeyR);
    map.insert("KEYS", KeyCode::KeyS);
    map.insert("S", KeyCode::KeyS);
    map.insert("KEYT", KeyCode::KeyT);
    map.insert("T", KeyCode::KeyT);
    map.insert("KEYU", KeyCode::KeyU);
    map.insert("U", KeyCode::KeyU);
    map.insert("KEYV", KeyCode::KeyV);
    map.insert("V", KeyCode::KeyV);
    map.insert("KEYW", KeyCode::KeyW);
    map.insert("W", KeyCode::KeyW);
    map.insert("KEYX", KeyCode::KeyX);
    map.insert("X", KeyCode::KeyX);
    map.insert("KEYY", KeyCode::KeyY);
    map.insert("Y", KeyCode::KeyY);
    map.insert("KEYZ", KeyCode::KeyZ);
    map.insert("Z", KeyCode::KeyZ);

    // Digit row
    map.insert("DIGIT0", KeyCode::Digit0);
    map.insert("0", KeyCode::Digit0);
    map.insert("DIGIT1", KeyCode::Digit1);
    map.insert("1", KeyCode::Digit1);
    map.insert("DIGIT2", KeyCode::Digit2);
    map.insert("2", KeyCode::Digit2);
    map.insert("DIGIT3", KeyCode::Digit3);
    map.insert("3", KeyCode::Digit3);
    map.insert("DIGIT4", KeyCode::Digit4);
    map.insert("4", KeyCode::Digit4);
    map.insert("DIGIT5", KeyCode::Digit5);
    map.insert("5", KeyCode::Digit5);
    map.insert("DIGIT6", KeyCode::Digit6);
    map.insert("6", KeyCode::Digit6);
    map.insert("DIGIT7", KeyCode::Digit7);
    map.insert("7", KeyCode::Digit7);
    map.insert("DIGIT8", KeyCode::Digit8);
    map.insert("8", KeyCode::Digit8);
    map.insert("DIGIT9", KeyCode::Digit9);
    map.insert("9", KeyCode::Digit9);

    // Control keys
    map.insert("ENTER", KeyCode::Enter);
    map.insert("RETURN", KeyCode::Enter);
    map.insert("ESCAPE", KeyCode::Escape);
    map.insert("ESC", KeyCode::Escape);
    map.insert("SPACE", KeyCode::Space);
    map.insert("TAB", KeyCode::Tab);
    map.insert("BACKSPACE", KeyCode::Backspace);
    map.insert("BACK", KeyCode::Backspace);

    // Modifiers; bare names resolve to the left-hand key
    map.insert("SHIFTLEFT", KeyCode::ShiftLeft);
    map.insert("SHIFT", KeyCode::ShiftLeft);
    map.insert("SHIFTRIGHT", KeyCode::ShiftRight);
    map.insert("CONTROLLEFT", KeyCode::ControlLeft);
    map.insert("CONTROL", KeyCode::ControlLeft);
    map.insert("CTRL", KeyCode::ControlLeft);
    map.insert("CONTROLRIGHT", KeyCode::ControlRight);
    map.insert("ALTLEFT", KeyCode::AltLeft);
    map.insert("ALT", KeyCode::AltLeft);
    map.insert("OPTION", KeyCode::AltLeft);
    map.insert("ALTRIGHT", KeyCode::AltRight);
    map.insert("ALTGR", KeyCode::AltRight);
    map.insert("METALEFT", KeyCode::MetaLeft);
    map.insert("META", KeyCode::MetaLeft);
    map.insert("CMD", KeyCode::MetaLeft);
    map.insert("SUPER", KeyCode::MetaLeft);
    map.insert("WIN", KeyCode::MetaLeft);
    map.insert("METARIGHT", KeyCode::MetaRight);

    // Function keys
    map.insert("F1", KeyCode::F1);
    map.insert("F2", KeyCode::F2);
    map.insert("F3", KeyCode::F3);
    map.insert("F4", KeyCode::F4);
    map.insert("F5", KeyCode::F5);
    map.insert("F6", KeyCode::F6);
    map.insert("F7", KeyCode::F7);
    map.insert("F8", KeyCode::F8);
    map.insert("F9", KeyCode::F9);
    map.insert("F10", KeyCode::F10);
    map.insert("F11", KeyCode::F11);
    map.insert("F12", KeyCode::F12);

    map
}
