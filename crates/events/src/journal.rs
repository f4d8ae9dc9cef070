//! LIFO transaction journal.

use crate::event::Event;

/// Append-only, last-in-first-out history of events.
///
/// Nothing in the ledger reads the history back; it exists so recent activity
/// can be inspected. Iteration is newest first.
#[derive(Debug, Clone)]
pub struct TransactionLog<E> {
    entries: Vec<E>,
}

impl<E: Event> TransactionLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event on top of the stack.
    pub fn push(&mut self, event: E) {
        self.entries.push(event);
    }

    /// Most recent event, if any.
    pub fn latest(&self) -> Option<&E> {
        self.entries.last()
    }

    /// Events from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.entries.iter().rev()
    }

    /// Rendered event messages from newest to oldest.
    pub fn messages(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for TransactionLog<E> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[derive(Debug, Clone)]
    struct Noted {
        text: &'static str,
        at: DateTime<Utc>,
    }

    impl core::fmt::Display for Noted {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str(self.text)
        }
    }

    impl Event for Noted {
        fn event_type(&self) -> &'static str {
            "test.noted"
        }

        fn version(&self) -> u32 {
            1
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.at
        }
    }

    fn noted(text: &'static str) -> Noted {
        Noted { text, at: Utc::now() }
    }

    #[test]
    fn new_log_is_empty() {
        let log: TransactionLog<Noted> = TransactionLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert!(log.messages().is_empty());
    }

    #[test]
    fn iterates_newest_first() {
        let mut log = TransactionLog::new();
        log.push(noted("first"));
        log.push(noted("second"));
        log.push(noted("third"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.latest().unwrap().text, "third");
        assert_eq!(log.messages(), vec!["third", "second", "first"]);
    }
}
