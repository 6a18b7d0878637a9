//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. The catalog's [`Price`](crate::Price) is the canonical
/// example: a product swaps its price for a new, validated `Price` rather than
/// mutating a raw number in place.
///
/// ## Usage Pattern
///
/// ```
/// use catalog_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Dimensions {
///     width_cm: u32,
///     height_cm: u32,
/// }
///
/// impl ValueObject for Dimensions {}
///
/// let a = Dimensions { width_cm: 10, height_cm: 20 };
/// let b = Dimensions { width_cm: 10, height_cm: 20 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
