//! The inventory ledger: catalog plus the indexes derived from it.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use chrono::{DateTime, Utc};
use stockledger_core::{DomainError, DomainResult, ProductId};
use stockledger_events::{Event, TransactionLog};

use crate::event::{LedgerEvent, ProductAdded, ProductRestocked, SaleRecorded};
use crate::product::{Price, Product};
use crate::report::{LowStockLine, LowStockReport};
use crate::sort::SortCriterion;

/// Quantity below which a product is flagged as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Command: AddProduct.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProduct {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub supplier: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RecordSale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSale {
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RestockProduct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockProduct {
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// In-memory inventory ledger.
///
/// Owns every container and keeps them consistent:
///
/// - **catalog**: authoritative `ProductId -> Product` store
/// - **low-stock index**: ids flagged when an add or sale leaves stock under
///   the threshold; a restock always clears the flag, whatever the new stock
/// - **supplier registry**: every supplier name ever added
/// - **transaction log**: LIFO history of successful operations
/// - **sortable listing**: product snapshots taken at add time; later sales
///   and restocks do not touch them, and re-adding an id appends another one
/// - **purchase-order / delivery queues**: product names queued per restock
///
/// Every operation validates before it mutates, so a failed operation leaves
/// all containers untouched.
#[derive(Debug, Clone)]
pub struct Ledger {
    catalog: BTreeMap<ProductId, Product>,
    low_stock: BTreeSet<ProductId>,
    suppliers: BTreeSet<String>,
    transactions: TransactionLog<LedgerEvent>,
    listing: Vec<Product>,
    purchase_orders: VecDeque<String>,
    deliveries: VecDeque<String>,
    low_stock_threshold: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_LOW_STOCK_THRESHOLD)
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger with a custom low-stock threshold.
    pub fn with_threshold(low_stock_threshold: u32) -> Self {
        Self {
            catalog: BTreeMap::new(),
            low_stock: BTreeSet::new(),
            suppliers: BTreeSet::new(),
            transactions: TransactionLog::new(),
            listing: Vec::new(),
            purchase_orders: VecDeque::new(),
            deliveries: VecDeque::new(),
            low_stock_threshold,
        }
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    /// Add a product, overwriting any catalog entry with the same id.
    pub fn add_product(&mut self, cmd: AddProduct) -> DomainResult<()> {
        let price = Price::new(cmd.price).inspect_err(|e| {
            tracing::warn!(product_id = %cmd.product_id, error = %e, "add rejected");
        })?;

        let product = Product::new(cmd.product_id, cmd.name, price, cmd.quantity, cmd.supplier);
        let product_id = product.product_id();

        if self.catalog.contains_key(&product_id) {
            tracing::debug!(%product_id, "overwriting existing catalog entry");
        }

        self.suppliers.insert(product.supplier().to_string());
        self.listing.push(product.clone());
        if product.quantity() < self.low_stock_threshold {
            self.low_stock.insert(product_id);
        }
        self.record(LedgerEvent::ProductAdded(ProductAdded {
            product_id,
            name: product.name().to_string(),
            occurred_at: cmd.occurred_at,
        }));

        tracing::debug!(%product_id, quantity = product.quantity(), "product added");
        self.catalog.insert(product_id, product);
        Ok(())
    }

    /// Catalog products in ascending id order.
    pub fn view_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.catalog.values()
    }

    pub fn product(&self, product_id: ProductId) -> Option<&Product> {
        self.catalog.get(&product_id)
    }

    /// Record a sale against current stock.
    pub fn record_sale(&mut self, cmd: RecordSale) -> DomainResult<()> {
        let threshold = self.low_stock_threshold;
        let Some(product) = self.catalog.get_mut(&cmd.product_id) else {
            tracing::warn!(product_id = %cmd.product_id, "sale rejected: product not found");
            return Err(DomainError::not_found(cmd.product_id));
        };

        if cmd.quantity > product.quantity() {
            tracing::warn!(
                product_id = %cmd.product_id,
                requested = cmd.quantity,
                available = product.quantity(),
                "sale rejected: insufficient stock"
            );
            return Err(DomainError::insufficient_stock(
                cmd.product_id,
                cmd.quantity,
                product.quantity(),
            ));
        }

        product.sell(cmd.quantity);

        // Sales only lower stock, so they can flag an id but never unflag it.
        if product.quantity() < threshold {
            self.low_stock.insert(cmd.product_id);
        }

        let (name, remaining) = (product.name().to_string(), product.quantity());
        tracing::debug!(
            product_id = %cmd.product_id,
            sold = cmd.quantity,
            remaining,
            "sale recorded"
        );
        self.record(LedgerEvent::SaleRecorded(SaleRecorded {
            product_id: cmd.product_id,
            name,
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        }));
        Ok(())
    }

    /// Receive stock for an existing product.
    ///
    /// The low-stock flag is cleared unconditionally, even when the new
    /// quantity is still under the threshold.
    pub fn restock_product(&mut self, cmd: RestockProduct) -> DomainResult<()> {
        let Some(product) = self.catalog.get_mut(&cmd.product_id) else {
            tracing::warn!(product_id = %cmd.product_id, "restock rejected: product not found");
            return Err(DomainError::not_found(cmd.product_id));
        };

        if product.quantity().checked_add(cmd.quantity).is_none() {
            tracing::warn!(product_id = %cmd.product_id, "restock rejected: quantity overflow");
            return Err(DomainError::validation("restock would overflow stock quantity"));
        }

        product.receive(cmd.quantity);
        self.low_stock.remove(&cmd.product_id);

        let name = product.name().to_string();
        self.purchase_orders.push_back(name.clone());
        self.deliveries.push_back(name.clone());
        tracing::debug!(
            product_id = %cmd.product_id,
            received = cmd.quantity,
            quantity = product.quantity(),
            "product restocked"
        );
        self.record(LedgerEvent::ProductRestocked(ProductRestocked {
            product_id: cmd.product_id,
            name,
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        }));
        Ok(())
    }

    /// Push a successful operation onto the transaction log.
    fn record(&mut self, event: LedgerEvent) {
        tracing::debug!(
            event_type = event.event_type(),
            event_version = event.version(),
            product_id = %event.product_id(),
            occurred_at = %event.occurred_at(),
            "transaction recorded: {event}"
        );
        self.transactions.push(event);
    }

    /// Flagged products in ascending id order, with live catalog quantities.
    pub fn low_stock_report(&self) -> LowStockReport {
        let lines = self
            .low_stock
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .map(|p| LowStockLine {
                product_id: p.product_id(),
                name: p.name().to_string(),
                quantity: p.quantity(),
            })
            .collect();
        LowStockReport::from_lines(lines)
    }

    /// Sort the snapshot listing in place and return it.
    pub fn sort_listing(&mut self, criterion: SortCriterion) -> &[Product] {
        criterion.sort(&mut self.listing);
        tracing::debug!(?criterion, len = self.listing.len(), "listing sorted");
        &self.listing
    }

    /// Snapshot listing in its current order.
    pub fn listing(&self) -> &[Product] {
        &self.listing
    }

    pub fn is_low_stock(&self, product_id: ProductId) -> bool {
        self.low_stock.contains(&product_id)
    }

    pub fn low_stock_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.low_stock.iter().copied()
    }

    /// Distinct supplier names, alphabetical.
    pub fn suppliers(&self) -> impl Iterator<Item = &str> + '_ {
        self.suppliers.iter().map(String::as_str)
    }

    pub fn transactions(&self) -> &TransactionLog<LedgerEvent> {
        &self.transactions
    }

    /// Pending purchase orders, oldest first.
    pub fn purchase_orders(&self) -> impl Iterator<Item = &str> + '_ {
        self.purchase_orders.iter().map(String::as_str)
    }

    /// Pending deliveries, oldest first.
    pub fn deliveries(&self) -> impl Iterator<Item = &str> + '_ {
        self.deliveries.iter().map(String::as_str)
    }
}
