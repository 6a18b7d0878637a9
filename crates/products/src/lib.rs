//! Products domain module.
//!
//! This crate contains the product hierarchy of the catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Every variant
//! embeds a shared [`ProductBase`] and exposes it through the [`Catalogued`]
//! capability trait; [`CatalogProduct`] is the closed set of variants that
//! containers store.

pub mod any;
pub mod catalogued;
mod fields;
pub mod lawn_grass;
pub mod product;
pub mod smartphone;
#[cfg(test)]
mod test_support;

pub use any::CatalogProduct;
pub use catalogued::{Catalogued, ProductKind};
pub use lawn_grass::LawnGrass;
pub use product::{Product, ProductBase};
pub use smartphone::Smartphone;
