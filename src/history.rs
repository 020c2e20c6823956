//! @ai:module:intent Append-only in-memory log of analysis sessions
//! @ai:module:layer application
//! @ai:module:public_api HistoryStore
//! @ai:module:stateless false

use crate::stats::SessionStats;

/// @ai:intent Ordered record of every SessionStats produced by one session
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    sessions: Vec<SessionStats>,
}

impl HistoryStore {
    /// @ai:intent Create an empty history
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Append a session to the end of the history
    /// @ai:effects state:write
    pub fn record(&mut self, stats: SessionStats) {
        self.sessions.push(stats);
    }

    /// @ai:intent All recorded sessions in insertion order
    /// @ai:effects pure
    pub fn list_all(&self) -> &[SessionStats] {
        &self.sessions
    }

    /// Sessions paired with their 1-based display number.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SessionStats)> {
        self.sessions.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
