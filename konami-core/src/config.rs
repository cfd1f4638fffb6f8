//! Listener configuration, loaded from TOML

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sequence::{parse_key_names, KONAMI_CODE};
use crate::types::KeyCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Target key names, in order
    pub sequence: Vec<String>,
    /// Drop key events typed into text inputs and text areas
    pub ignore_text_input: bool,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            sequence: KONAMI_CODE.iter().map(|key| key.code().to_string()).collect(),
            ignore_text_input: true,
        }
    }
}

impl ListenerConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Resolves the configured names to key codes
    pub fn target(&self) -> Result<Vec<KeyCode>> {
        parse_key_names(&self.sequence)
    }

    /// Replaces the target with the given keys
    pub fn with_sequence(mut self, keys: &[KeyCode]) -> Self {
        self.sequence = keys.iter().map(|key| key.code().to_string()).collect();
        self
    }
}
