//! Binds a [`SequenceMatcher`] to a key-event source

use log::{debug, info};

use super::{KeyEvent, MatchState, SequenceMatcher};
use crate::config::ListenerConfig;
use crate::error::Result;
use crate::sequence::KONAMI_CODE;
use crate::types::KeyCode;

/// Key-down listener that drives a sequence matcher.
///
/// The listener owns the lifecycle around the pure matcher: it can be
/// attached and detached, it drops events typed into text controls (unless
/// configured otherwise), and it latches an activation flag on the first
/// completed sequence.
pub struct SequenceListener<F = Box<dyn FnMut()>> {
    matcher: SequenceMatcher<KeyCode, F>,
    ignore_text_input: bool,
    attached: bool,
    activated: bool,
}

impl<F: FnMut()> SequenceListener<F> {
    /// Creates an attached listener for `target`
    pub fn new(target: impl Into<Vec<KeyCode>>, on_match: F) -> Self {
        Self {
            matcher: SequenceMatcher::new(target, on_match),
            ignore_text_input: true,
            attached: true,
            activated: false,
        }
    }

    /// Creates an attached listener for the Konami code
    pub fn konami(on_match: F) -> Self {
        Self::new(KONAMI_CODE, on_match)
    }

    /// Creates a listener from configuration, resolving key names
    pub fn with_config(config: &ListenerConfig, on_match: F) -> Result<Self> {
        let target = config.target()?;
        Ok(Self::new(target, on_match).ignore_text_input(config.ignore_text_input))
    }

    /// Sets whether events typed into text controls are dropped
    pub fn ignore_text_input(mut self, ignore: bool) -> Self {
        self.ignore_text_input = ignore;
        self
    }

    /// Starts forwarding events to the matcher
    pub fn attach(&mut self) {
        if !self.attached {
            debug!("Listener attached");
        }
        self.attached = true;
    }

    /// Stops forwarding events and discards partial progress
    pub fn detach(&mut self) {
        if self.attached {
            debug!("Listener detached");
        }
        self.attached = false;
        self.matcher.reset();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handles one key-down event.
    ///
    /// Returns `None` when the listener is detached or the event was
    /// filtered out, otherwise the matcher's new state.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> Option<MatchState> {
        if !self.attached {
            return None;
        }
        if self.ignore_text_input && event.origin.is_text_entry() {
            return None;
        }

        let state = self.matcher.submit(event.code);
        if state.is_match() && !self.activated {
            info!("Key sequence activated");
            self.activated = true;
        }
        Some(state)
    }

    /// True once any sequence has completed, until [`clear_activation`](Self::clear_activation)
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn clear_activation(&mut self) {
        self.activated = false;
    }

    pub fn progress(&self) -> usize {
        self.matcher.progress()
    }

    /// Discards partial progress; the activation flag is kept
    pub fn reset_sequence(&mut self) {
        self.matcher.reset();
    }

    pub fn match_count(&self) -> usize {
        self.matcher.match_count()
    }

    pub fn target(&self) -> &[KeyCode] {
        self.matcher.target()
    }
}
