use serde_json::Value;

use catalog_core::DomainResult;
use catalog_products::{CatalogProduct, Catalogued};

use crate::counters;

/// A named, ordered group of catalog products.
///
/// The category owns its products: the list handed to [`Category::new`] is
/// moved in, so later changes on the caller's side never leak into it.
///
/// There is no `Clone`: every category must pass through the counters. Use
/// [`Category::duplicate`] for a counted copy.
#[derive(Debug, PartialEq)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<CatalogProduct>,
}

impl Category {
    /// Create a category holding `products` in the given order.
    ///
    /// Counts one category and `products.len()` products in the process-wide
    /// counters.
    pub fn new<P>(
        name: impl Into<String>,
        description: impl Into<String>,
        products: impl IntoIterator<Item = P>,
    ) -> Self
    where
        P: Into<CatalogProduct>,
    {
        let category = Self {
            name: name.into(),
            description: description.into(),
            products: products.into_iter().map(Into::into).collect(),
        };
        counters::record_category(category.products.len());
        tracing::debug!(
            category = %category.name,
            products = category.products.len(),
            "category created"
        );
        category
    }

    /// Create a category with no products.
    pub fn empty(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, Vec::<CatalogProduct>::new())
    }

    /// Build a new category with the same name, description and products.
    ///
    /// Counted like any other construction.
    pub fn duplicate(&self) -> Self {
        Self::new(&self.name, &self.description, self.products.iter().cloned())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Append a product of any variant and count it.
    pub fn add_product(&mut self, product: impl Into<CatalogProduct>) {
        let product = product.into();
        tracing::debug!(
            category = %self.name,
            product = %product.name(),
            kind = %product.kind(),
            "product added"
        );
        self.products.push(product);
        counters::record_product();
    }

    /// Append a product given as an untyped record.
    ///
    /// Fails without touching the category or the counters when the record is
    /// not a product (see [`CatalogProduct::from_record`]).
    pub fn add_record(&mut self, record: &Value) -> DomainResult<()> {
        let product = CatalogProduct::from_record(record)?;
        self.add_product(product);
        Ok(())
    }

    /// Every product's display line, in insertion order, joined by newlines.
    pub fn products(&self) -> String {
        self.products
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogProduct> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of stock units over all products.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity())).sum()
    }

    /// Mean unit price, or `0.0` for an empty category.
    pub fn middle_price(&self) -> f64 {
        if self.products.is_empty() {
            return 0.0;
        }
        let total: f64 = self.products.iter().map(|p| p.price()).sum();
        total / self.products.len() as f64
    }
}

impl<'a> IntoIterator for &'a Category {
    type Item = &'a CatalogProduct;
    type IntoIter = core::slice::Iter<'a, CatalogProduct>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, количество продуктов: {} шт.",
            self.name,
            self.total_quantity()
        )
    }
}
