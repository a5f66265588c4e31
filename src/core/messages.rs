//! Pending feedback for the presentation layer.

use serde::{Deserialize, Serialize};

/// FIFO of human-readable messages, drained by the caller every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageLog {
    pending: Vec<String>,
}

impl MessageLog {
    pub fn push(&mut self, message: impl Into<String>) {
        self.pending.push(message.into());
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub(crate) fn last(&self) -> Option<&str> {
        self.pending.last().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, needle: &str) -> bool {
        self.pending.iter().any(|m| m.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_drains_in_order() {
        let mut log = MessageLog::default();
        log.push("first");
        log.push(String::from("second"));
        assert_eq!(log.pending(), ["first", "second"]);
        assert_eq!(log.last(), Some("second"));
        assert_eq!(log.take(), vec!["first", "second"]);
        assert!(log.pending().is_empty());
    }

    #[test]
    fn test_contains_matches_substring() {
        let mut log = MessageLog::default();
        log.push("You found Vial of Lumina!");
        assert!(log.contains("Vial of Lumina"));
        assert!(!log.contains("Labyrinth Key"));
        log.clear();
        assert!(!log.contains("Vial"));
    }
}
