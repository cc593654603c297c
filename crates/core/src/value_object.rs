//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In this model
/// validated text such as an author name or an article title is a value
/// object: once parsed it is known to satisfy its constraints, and "changing"
/// it means parsing a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Title(String);
///
/// impl ValueObject for Title {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
