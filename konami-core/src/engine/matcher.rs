//! Core sequence matching logic

use std::fmt;

use log::{debug, trace, warn};

use super::{MatchBuffer, MatchState};

/// Detects the moment the trailing window of submitted tokens equals a
/// fixed target sequence.
///
/// The buffer is always a valid prefix of the target. When a token breaks
/// the prefix, the matcher only checks whether that token alone restarts
/// the target; it never searches for a longer overlap inside the buffer.
/// With `target = [Up, Up, Down]` the input `Up Up Up Down` therefore does
/// not match: the third `Up` restarts progress at 1, not 2.
///
/// An empty target is accepted but never fires; every submit returns
/// [`MatchState::Reset`].
pub struct SequenceMatcher<T, F = Box<dyn FnMut()>> {
    target: Vec<T>,
    buffer: MatchBuffer<T>,
    on_match: F,
    match_count: usize,
}

impl<T, F> SequenceMatcher<T, F>
where
    T: PartialEq,
    F: FnMut(),
{
    /// Creates a matcher for `target` that calls `on_match` once per
    /// completed occurrence
    pub fn new(target: impl Into<Vec<T>>, on_match: F) -> Self {
        let target = target.into();
        if target.is_empty() {
            warn!("Sequence matcher created with an empty target, it will never fire");
        }

        Self {
            buffer: MatchBuffer::new(target.len()),
            target,
            on_match,
            match_count: 0,
        }
    }

    /// Feeds one token and returns the resulting state
    pub fn submit(&mut self, token: T) -> MatchState {
        let Some(first) = self.target.first() else {
            return MatchState::Reset;
        };
        let starts_over = token == *first;

        self.buffer.push(token);
        trace!("Buffer length {} of {}", self.buffer.len(), self.target.len());

        if self.buffer.is_prefix_of(&self.target) {
            if self.buffer.len() == self.target.len() {
                self.buffer.clear();
                self.match_count += 1;
                debug!("Sequence matched ({} so far)", self.match_count);
                (self.on_match)();
                return MatchState::Matched;
            }
            return MatchState::Growing(self.buffer.len());
        }

        if starts_over {
            self.buffer.retain_last();
            debug!("Prefix broken, restarted at 1");
            MatchState::Growing(1)
        } else {
            if self.buffer.len() > 1 {
                debug!("Prefix broken after {} tokens, buffer cleared", self.buffer.len() - 1);
            }
            self.buffer.clear();
            MatchState::Reset
        }
    }

    /// Discards partial progress without firing the callback
    pub fn reset(&mut self) {
        if !self.buffer.is_empty() {
            trace!("Discarding {} buffered tokens", self.buffer.len());
        }
        self.buffer.clear();
    }

    /// Length of the current valid prefix
    pub fn progress(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_idle(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn target(&self) -> &[T] {
        &self.target
    }

    /// Completed matches since construction
    pub fn match_count(&self) -> usize {
        self.match_count
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SequenceMatcher<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceMatcher")
            .field("target", &self.target)
            .field("buffer", &self.buffer)
            .field("match_count", &self.match_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_grows_then_matches() {
        let fired = Cell::new(0);
        let mut matcher = SequenceMatcher::new(vec!['a', 'b', 'c'], || fired.set(fired.get() + 1));

        assert_eq!(matcher.submit('a'), MatchState::Growing(1));
        assert_eq!(matcher.submit('b'), MatchState::Growing(2));
        assert_eq!(matcher.submit('c'), MatchState::Matched);
        assert_eq!(fired.get(), 1);
        assert!(matcher.is_idle());
        assert_eq!(matcher.match_count(), 1);
    }

    #[test]
    fn test_mismatch_clears_buffer() {
        let mut matcher = SequenceMatcher::new(vec!['a', 'b', 'c'], || {});
        matcher.submit('a');
        matcher.submit('b');
        assert_eq!(matcher.submit('x'), MatchState::Reset);
        assert_eq!(matcher.progress(), 0);
    }

    #[test]
    fn test_mismatch_on_first_token_restarts() {
        let mut matcher = SequenceMatcher::new(vec!['a', 'b', 'c'], || {});
        matcher.submit('a');
        matcher.submit('b');
        assert_eq!(matcher.submit('a'), MatchState::Growing(1));
        assert_eq!(matcher.submit('b'), MatchState::Growing(2));
        assert_eq!(matcher.submit('c'), MatchState::Matched);
    }

    #[test]
    fn test_reset_discards_progress() {
        let fired = Cell::new(false);
        let mut matcher = SequenceMatcher::new(vec![1, 2], || fired.set(true));
        matcher.submit(1);
        matcher.reset();
        assert_eq!(matcher.progress(), 0);
        assert_eq!(matcher.submit(2), MatchState::Reset);
        assert!(!fired.get());
    }

    #[test]
    fn test_empty_target_never_fires() {
        let fired = Cell::new(false);
        let mut matcher = SequenceMatcher::new(Vec::<u8>::new(), || fired.set(true));
        assert_eq!(matcher.submit(0), MatchState::Reset);
        assert_eq!(matcher.submit(0), MatchState::Reset);
        assert!(!fired.get());
        assert_eq!(matcher.match_count(), 0);
    }

    #[test]
    fn test_boxed_callback_default_type() {
        let callback: Box<dyn FnMut()> = Box::new(|| {});
        let mut matcher: SequenceMatcher<u8> = SequenceMatcher::new(vec![7], callback);
        assert_eq!(matcher.submit(7), MatchState::Matched);
        assert_eq!(matcher.target(), &[7u8]);
    }
}
