//! Input representation for the sequence listener

use crate::types::KeyCode;

/// Where a key event originated in the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputOrigin {
    /// Page-level focus, outside any editable control
    #[default]
    Document,
    /// A single-line text input had focus
    TextInput,
    /// A multi-line text area had focus
    TextArea,
}

impl InputOrigin {
    /// Checks if the event came from an editable text control
    pub fn is_text_entry(&self) -> bool {
        matches!(self, InputOrigin::TextInput | InputOrigin::TextArea)
    }
}

/// Represents a key-down event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Physical key that was pressed
    pub code: KeyCode,
    /// Control that had focus when the key was pressed
    pub origin: InputOrigin,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(code: KeyCode, origin: InputOrigin) -> Self {
        Self { code, origin }
    }

    /// Creates a key event outside any text control
    pub fn document(code: KeyCode) -> Self {
        Self::new(code, InputOrigin::Document)
    }

    /// Creates a key event typed into a text input
    pub fn text_input(code: KeyCode) -> Self {
        Self::new(code, InputOrigin::TextInput)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::document(code)
    }
}
