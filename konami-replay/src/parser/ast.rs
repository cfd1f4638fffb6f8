use konami_core::KeyEvent;

/// One action in a replay script
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayEvent {
    /// A key-down event delivered to the listener
    Key(KeyEvent),
    /// Explicitly discard partial progress
    Reset,
    /// Re-attach the listener
    Attach,
    /// Detach the listener, discarding partial progress
    Detach,
}

/// A replay event with the script line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub line: usize,
    pub event: ReplayEvent,
}
