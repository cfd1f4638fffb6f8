pub mod types;
pub mod error;
pub mod engine;
pub mod sequence;
pub mod config;

pub use types::*;

// Re-export commonly used types
pub use types::key_code::KeyCode;
pub use error::{Error, Result};
pub use engine::{SequenceMatcher, SequenceListener, MatchState, KeyEvent, InputOrigin};
pub use sequence::{KONAMI_CODE, parse_sequence, format_sequence};
pub use config::ListenerConfig;
