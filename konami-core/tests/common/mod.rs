use std::cell::Cell;
use std::rc::Rc;

use konami_core::{KeyCode, KeyEvent, MatchState, SequenceMatcher, parse_sequence};

/// Shared callback counter; the closure half is handed to the matcher
#[allow(dead_code)]
pub fn counter() -> (Rc<Cell<usize>>, impl FnMut()) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, move || handle.set(handle.get() + 1))
}

/// Parses a space-separated key list, panicking on bad test input
#[allow(dead_code)]
pub fn keys(text: &str) -> Vec<KeyCode> {
    parse_sequence(text).expect("test sequence should parse")
}

/// Key events from outside any text control
#[allow(dead_code)]
pub fn document_events(text: &str) -> Vec<KeyEvent> {
    keys(text).into_iter().map(KeyEvent::document).collect()
}

/// Submits every key and collects the states
#[allow(dead_code)]
pub fn submit_all<F: FnMut()>(matcher: &mut SequenceMatcher<KeyCode, F>, input: &[KeyCode]) -> Vec<MatchState> {
    input.iter().map(|key| matcher.submit(*key)).collect()
}
