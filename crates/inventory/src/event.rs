use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::ProductId;
use stockledger_events::Event;

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub product_id: ProductId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SaleRecorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecorded {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductRestocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRestocked {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    ProductAdded(ProductAdded),
    SaleRecorded(SaleRecorded),
    ProductRestocked(ProductRestocked),
}

impl LedgerEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            LedgerEvent::ProductAdded(e) => e.product_id,
            LedgerEvent::SaleRecorded(e) => e.product_id,
            LedgerEvent::ProductRestocked(e) => e.product_id,
        }
    }
}

impl Event for LedgerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::ProductAdded(_) => "inventory.product.added",
            LedgerEvent::SaleRecorded(_) => "inventory.product.sold",
            LedgerEvent::ProductRestocked(_) => "inventory.product.restocked",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LedgerEvent::ProductAdded(e) => e.occurred_at,
            LedgerEvent::SaleRecorded(e) => e.occurred_at,
            LedgerEvent::ProductRestocked(e) => e.occurred_at,
        }
    }
}

impl core::fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedgerEvent::ProductAdded(e) => write!(f, "Added product: {}", e.name),
            LedgerEvent::SaleRecorded(e) => write!(f, "Sold {} of {}", e.quantity, e.name),
            LedgerEvent::ProductRestocked(e) => write!(f, "Restocked {} of {}", e.quantity, e.name),
        }
    }
}
