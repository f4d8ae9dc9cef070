use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - designed to be **append-only**
/// - **human-readable** via `Display` (the transaction history shows them as-is)
pub trait Event: Clone + core::fmt::Debug + core::fmt::Display + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.product.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (wall-clock time of the operation).
    fn occurred_at(&self) -> DateTime<Utc>;
}
