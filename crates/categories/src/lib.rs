//! Categories domain module.
//!
//! A [`Category`] groups catalog products and renders the catalog's text views.
//! Construction and insertion feed two process-wide counters (see [`counters`]).

pub mod category;
pub mod counters;

pub use category::Category;
pub use counters::{category_count, product_count, reset_counters};
