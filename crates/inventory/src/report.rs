use stockledger_core::ProductId;

/// One flagged product, read live from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
}

/// Result of a low-stock report.
///
/// An empty index is reported as `FullyStocked`, never as an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LowStockReport {
    FullyStocked,
    Items(Vec<LowStockLine>),
}

impl LowStockReport {
    pub(crate) fn from_lines(lines: Vec<LowStockLine>) -> Self {
        if lines.is_empty() {
            Self::FullyStocked
        } else {
            Self::Items(lines)
        }
    }

    pub fn is_fully_stocked(&self) -> bool {
        matches!(self, Self::FullyStocked)
    }

    pub fn lines(&self) -> &[LowStockLine] {
        match self {
            Self::FullyStocked => &[],
            Self::Items(lines) => lines,
        }
    }
}
