/// Outcome of submitting one token to a [`SequenceMatcher`](super::SequenceMatcher)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// The buffer is a valid proper prefix of the target; holds its length
    Growing(usize),
    /// The full target was seen; the callback fired and the buffer is empty
    Matched,
    /// The token broke the prefix and did not restart it; the buffer is empty
    Reset,
}

impl MatchState {
    /// Prefix length after the transition
    pub fn progress(&self) -> usize {
        match self {
            MatchState::Growing(progress) => *progress,
            MatchState::Matched | MatchState::Reset => 0,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchState::Matched)
    }
}
