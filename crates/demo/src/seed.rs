//! Seed data: built-in catalog or a JSON file.
//!
//! File format: an array of categories, each holding untyped product records
//! (see `CatalogProduct::from_record`):
//!
//! ```json
//! [
//!   {
//!     "name": "Смартфоны",
//!     "description": "...",
//!     "products": [
//!       { "kind": "smartphone", "name": "Iphone 15", "description": "...",
//!         "price": 210000.0, "quantity": 8, "efficiency": 98.2,
//!         "model": "15", "memory": 512, "color": "Gray space" }
//!     ]
//!   }
//! ]
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use catalog_categories::Category;
use catalog_core::DomainResult;
use catalog_products::{CatalogProduct, Product};

/// One category as written in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCategory {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub products: Vec<Value>,
}

impl SeedCategory {
    /// Validate every record, then build the category.
    ///
    /// Nothing is counted unless all records are valid.
    pub fn build(&self) -> DomainResult<Category> {
        let products = self
            .products
            .iter()
            .map(CatalogProduct::from_record)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Category::new(&self.name, &self.description, products))
    }
}

/// Where the seed data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    BuiltIn,
    File(PathBuf),
}

impl SeedSource {
    /// First CLI argument wins, then `CATALOG_SEED`, then the built-in data.
    pub fn resolve(arg: Option<String>, env: Option<String>) -> Self {
        match arg.or(env).filter(|s| !s.trim().is_empty()) {
            Some(path) => SeedSource::File(PathBuf::from(path)),
            None => SeedSource::BuiltIn,
        }
    }

    pub fn load(&self) -> anyhow::Result<Vec<Category>> {
        match self {
            SeedSource::BuiltIn => Ok(built_in()?),
            SeedSource::File(path) => load_file(path),
        }
    }
}

/// Parse seed categories from JSON text.
pub fn parse(json: &str) -> anyhow::Result<Vec<SeedCategory>> {
    serde_json::from_str(json).context("seed data is not a list of categories")
}

fn load_file(path: &Path) -> anyhow::Result<Vec<Category>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let seeds = parse(&text)?;
    seeds
        .iter()
        .map(|seed| {
            seed.build()
                .with_context(|| format!("invalid category {:?}", seed.name))
        })
        .collect()
}

/// The two categories of the store demo: smartphones and TVs.
pub fn built_in() -> DomainResult<Vec<Category>> {
    let phones = Category::new(
        "Смартфоны",
        "Смартфоны, как средство не только коммуникации, но и получения дополнительных функций для удобства жизни",
        vec![
            Product::new(
                "Samsung Galaxy S23 Ultra",
                "256GB, Серый цвет, 200MP камера",
                180000.0,
                5,
            )?,
            Product::new("Iphone 15", "512GB, Gray space", 210000.0, 8)?,
            Product::new("Xiaomi Redmi Note 11", "1024GB, Синий", 31000.0, 14)?,
        ],
    );

    let tvs = Category::new(
        "Телевизоры",
        "Современный телевизор, который позволяет наслаждаться просмотром, станет вашим другом и помощником",
        vec![Product::new("55\" QLED 4K", "Фоновая подсветка", 123000.0, 7)?],
    );

    Ok(vec![phones, tvs])
}
