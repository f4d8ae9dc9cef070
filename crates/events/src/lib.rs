//! Ledger events and the in-memory transaction journal.

pub mod event;
pub mod journal;

pub use event::Event;
pub use journal::TransactionLog;
