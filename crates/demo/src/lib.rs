//! Catalog demo: builds categories from seed data and renders a text report.

pub mod report;
pub mod seed;
