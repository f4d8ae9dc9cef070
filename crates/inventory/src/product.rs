use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Unit price of a product.
///
/// Always finite and non-negative. No currency is attached.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Total order over prices, usable by `sort_by`.
    pub fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl ValueObject for Price {}

/// Significant digits shown for prices, as a terminal stream prints them.
const PRICE_SIGNIFICANT_DIGITS: i32 = 6;

/// Drop trailing fractional zeros (and a bare trailing point).
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Shortest form with six significant digits: fixed notation for moderate
/// magnitudes, `1.23457e+06` style otherwise.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0 == 0.0 {
            return f.write_str("0");
        }

        // Exponent after rounding to the displayed precision.
        let sci = format!("{:.*e}", (PRICE_SIGNIFICANT_DIGITS - 1) as usize, self.0);
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);

        if exp < -4 || exp >= PRICE_SIGNIFICANT_DIGITS {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
        } else {
            let decimals = (PRICE_SIGNIFICANT_DIGITS - 1 - exp).max(0) as usize;
            let fixed = format!("{:.*}", decimals, self.0);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// A catalog product.
///
/// Stock and sales counters only move through the ledger, which keeps the
/// low-stock index in step with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    product_id: ProductId,
    name: String,
    price: Price,
    quantity: u32,
    supplier: String,
    sales_count: u64,
}

impl Product {
    /// A freshly added product: nothing sold yet.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity: u32,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            quantity,
            supplier: supplier.into(),
            sales_count: 0,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    pub(crate) fn sell(&mut self, quantity: u32) {
        self.quantity -= quantity;
        self.sales_count += u64::from(quantity);
    }

    pub(crate) fn receive(&mut self, quantity: u32) {
        self.quantity += quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_rejects_negative_values() {
        let err = Price::new(-0.01).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative price"),
        }
    }

    #[test]
    fn price_rejects_nan_and_infinity() {
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }

    #[test]
    fn price_displays_without_trailing_zeros() {
        assert_eq!(Price::new(9.99).unwrap().to_string(), "9.99");
        assert_eq!(Price::new(10.0).unwrap().to_string(), "10");
    }

    #[test]
    fn price_displays_six_significant_digits() {
        let shown = |v: f64| Price::new(v).unwrap().to_string();
        assert_eq!(shown(0.0), "0");
        assert_eq!(shown(123456.0), "123456");
        assert_eq!(shown(1234567.5), "1.23457e+06");
        assert_eq!(shown(999999.5), "1e+06");
        assert_eq!(shown(3.14159265), "3.14159");
        assert_eq!(shown(0.0001), "0.0001");
        assert_eq!(shown(0.00001234), "1.234e-05");
        assert_eq!(shown(0.1 + 0.2), "0.3");
    }

    #[test]
    fn new_product_has_no_sales() {
        let product = Product::new(ProductId::new(1), "Widget", Price::new(9.99).unwrap(), 3, "Acme");
        assert_eq!(product.sales_count(), 0);
        assert_eq!(*product.id(), ProductId::new(1));
    }

    #[test]
    fn sell_moves_units_from_stock_to_sales() {
        let mut product = Product::new(ProductId::new(1), "Widget", Price::new(1.0).unwrap(), 10, "Acme");
        product.sell(4);
        assert_eq!(product.quantity(), 6);
        assert_eq!(product.sales_count(), 4);

        product.receive(2);
        assert_eq!(product.quantity(), 8);
        assert_eq!(product.sales_count(), 4);
    }
}
