//! Message log
//!
//! Messages queue up during a turn and move into a bounded history when
//! the turn is flushed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::consts::MSG_HISTORY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLog {
    pending: Vec<String>,
    history: VecDeque<String>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(MSG_HISTORY)
    }
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            pending: Vec::new(),
            history: VecDeque::with_capacity(capacity.min(MSG_HISTORY)),
            capacity,
        }
    }

    /// Queue a message for the current turn. Empty messages are dropped.
    pub fn push(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        if !msg.is_empty() {
            self.pending.push(msg);
        }
    }

    /// Messages queued since the last flush
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Move pending messages into history and return them.
    pub fn flush(&mut self) -> Vec<String> {
        let msgs = std::mem::take(&mut self.pending);
        for msg in &msgs {
            if self.capacity == 0 {
                break;
            }
            if self.history.len() == self.capacity {
                self.history.pop_front();
            }
            self.history.push_back(msg.clone());
        }
        msgs
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.history.len() > capacity {
            self.history.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_flush() {
        let mut log = MessageLog::default();
        log.push("You hit the goblin.");
        log.push("");
        assert_eq!(log.pending().len(), 1);

        let flushed = log.flush();
        assert_eq!(flushed, vec!["You hit the goblin.".to_string()]);
        assert!(log.pending().is_empty());
        assert_eq!(log.history().count(), 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut log = MessageLog::new(2);
        for i in 0..5 {
            log.push(format!("msg {i}"));
        }
        log.flush();
        let hist: Vec<_> = log.history().collect();
        assert_eq!(hist, vec!["msg 3", "msg 4"]);

        log.set_capacity(1);
        assert_eq!(log.history().collect::<Vec<_>>(), vec!["msg 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut log = MessageLog::new(0);
        log.push("gone");
        assert_eq!(log.flush().len(), 1);
        assert_eq!(log.history().count(), 0);
    }
}
