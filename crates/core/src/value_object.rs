//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two prices of `9.99` are the same price.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. In this workspace the obvious example is a product price;
/// the product itself is an [`Entity`](crate::Entity) keyed by its id.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(9.99), Price(9.99));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
