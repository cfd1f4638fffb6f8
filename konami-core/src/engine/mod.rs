//! Sequence matching engine
//!
//! The pure state machine lives in [`SequenceMatcher`]; [`SequenceListener`]
//! binds it to a key-event source with attach/detach and text-field filtering.

mod buffer;
mod input;
mod listener;
mod matcher;
mod state;

pub use buffer::MatchBuffer;
pub use input::{KeyEvent, InputOrigin};
pub use listener::SequenceListener;
pub use matcher::SequenceMatcher;
pub use state::MatchState;
