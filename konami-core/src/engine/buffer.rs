//! Match buffer management

use std::collections::VecDeque;

/// Trailing window of the most recent tokens, bounded by a capacity
#[derive(Debug, Clone)]
pub struct MatchBuffer<T> {
    tokens: VecDeque<T>,
    capacity: usize,
}

impl<T: PartialEq> MatchBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` tokens
    pub fn new(capacity: usize) -> Self {
        Self {
            tokens: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a token, dropping from the front to stay within capacity
    pub fn push(&mut self, token: T) {
        self.tokens.push_back(token);
        while self.tokens.len() > self.capacity {
            self.tokens.pop_front();
        }
    }

    /// Checks whether the buffer equals `target[..len]` position by position
    pub fn is_prefix_of(&self, target: &[T]) -> bool {
        self.tokens.len() <= target.len()
            && self.tokens.iter().zip(target).all(|(seen, expected)| seen == expected)
    }

    /// Drops everything except the most recent token
    pub fn retain_last(&mut self) {
        let last = self.tokens.pop_back();
        self.tokens.clear();
        if let Some(token) = last {
            self.tokens.push_back(token);
        }
    }

    /// Most recently pushed token
    pub fn last(&self) -> Option<&T> {
        self.tokens.back()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tokens.iter()
    }
}
