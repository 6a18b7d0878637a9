//! `catalog-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod price;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use price::{Price, format_amount};
pub use value_object::ValueObject;
