//! Orderings for the sortable product listing.

use core::cmp::Ordering;
use core::str::FromStr;

use stockledger_core::DomainError;

use crate::product::Product;

/// Sort key offered by the sort submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Highest stock first.
    StockDescending,
    /// Cheapest first.
    PriceAscending,
    /// Best sellers first.
    SalesDescending,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::StockDescending,
        SortCriterion::PriceAscending,
        SortCriterion::SalesDescending,
    ];

    /// Submenu number (1-based).
    pub fn menu_number(self) -> u32 {
        match self {
            SortCriterion::StockDescending => 1,
            SortCriterion::PriceAscending => 2,
            SortCriterion::SalesDescending => 3,
        }
    }

    /// Submenu label.
    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::StockDescending => "Stock Quantity",
            SortCriterion::PriceAscending => "Price",
            SortCriterion::SalesDescending => "Sales Frequency",
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortCriterion::StockDescending => b.quantity().cmp(&a.quantity()),
            SortCriterion::PriceAscending => a.price().total_cmp(&b.price()),
            SortCriterion::SalesDescending => b.sales_count().cmp(&a.sales_count()),
        }
    }

    /// Stable in-place sort: equal keys keep their current relative order.
    pub fn sort(self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

impl TryFrom<u32> for SortCriterion {
    type Error = DomainError;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        SortCriterion::ALL
            .into_iter()
            .find(|c| c.menu_number() == choice)
            .ok_or_else(|| DomainError::invalid_menu_choice(choice.to_string()))
    }
}

impl FromStr for SortCriterion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::invalid_menu_choice(s.trim()))?;
        SortCriterion::try_from(choice)
    }
}
