//! Inventory domain module.
//!
//! This crate holds the ledger that keeps the catalog and its derived indexes
//! consistent, implemented as deterministic in-memory logic (no IO, no
//! terminal handling).

pub mod event;
pub mod ledger;
pub mod product;
pub mod report;
pub mod sort;

pub use event::{LedgerEvent, ProductAdded, ProductRestocked, SaleRecorded};
pub use ledger::{AddProduct, DEFAULT_LOW_STOCK_THRESHOLD, Ledger, RecordSale, RestockProduct};
pub use product::{Price, Product};
pub use report::{LowStockLine, LowStockReport};
pub use sort::SortCriterion;
