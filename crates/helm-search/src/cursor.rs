//! Cyclic Match Cursor
//!
//! State machine over the last loaded match list:
//! ```text
//! Empty ⇄ Single / Multi   (only via load)
//! Single —advance/retreat→ Single   (sole element, no rotation)
//! Multi  —advance/retreat→ Multi    (index ±1 mod length)
//! ```
//! The cursor lives for the process lifetime and is replaced wholesale on
//! each new load; stale state is discarded, never merged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorState {
    Empty,
    Single,
    Multi,
}

impl CursorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorState::Empty => "empty",
            CursorState::Single => "single",
            CursorState::Multi => "multi",
        }
    }
}

impl std::fmt::Display for CursorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered match list plus a rotating index, always valid mod the length.
///
/// The cursor is pure; selecting the returned match on the host is the
/// caller's side effect.
#[derive(Debug, Default)]
pub struct MatchCursor {
    matches: Vec<String>,
    index: usize,
}

impl MatchCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the match list wholesale and reset to the first element,
    /// returning it if the list is non-empty.
    pub fn load(&mut self, matches: Vec<String>) -> Option<&str> {
        self.matches = matches;
        self.index = 0;
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.matches.get(self.index).map(String::as_str)
    }

    /// Rotate left and return the new current match. A single-element list
    /// returns its sole element unchanged; an empty one returns nothing.
    pub fn advance(&mut self) -> Option<&str> {
        if self.matches.len() > 1 {
            self.index = (self.index + 1) % self.matches.len();
        }
        self.current()
    }

    /// Rotate right, symmetric to [`advance`](Self::advance).
    pub fn retreat(&mut self) -> Option<&str> {
        if self.matches.len() > 1 {
            self.index = (self.index + self.matches.len() - 1) % self.matches.len();
        }
        self.current()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn state(&self) -> CursorState {
        match self.matches.len() {
            0 => CursorState::Empty,
            1 => CursorState::Single,
            _ => CursorState::Multi,
        }
    }
}
