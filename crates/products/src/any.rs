//! Closed set of product variants, as stored by containers.

use serde::Serialize;
use serde_json::{Map, Value};

use catalog_core::{DomainError, DomainResult};

use crate::catalogued::{Catalogued, ProductKind};
use crate::lawn_grass::LawnGrass;
use crate::product::{Product, ProductBase};
use crate::smartphone::Smartphone;

/// Any catalog product.
///
/// Serializes to a flat record tagged with `"kind"`, the same shape
/// [`CatalogProduct::from_record`] reads back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogProduct {
    Product(Product),
    Smartphone(Smartphone),
    LawnGrass(LawnGrass),
}

impl CatalogProduct {
    /// Build a product from an untyped record.
    ///
    /// The record must be a JSON object; anything else (a string, a number, an
    /// array) is not a product and fails with [`DomainError::TypeMismatch`].
    /// The optional `"kind"` key selects the variant and defaults to a plain
    /// product.
    pub fn from_record(record: &Value) -> DomainResult<Self> {
        match record {
            Value::Object(fields) => Self::new_product(fields),
            other => Err(DomainError::type_mismatch(format!(
                "expected a product record, got {}",
                value_type(other)
            ))),
        }
    }

    /// Combined stock value of two products of the same variant.
    ///
    /// Variants must match exactly: `Smartphone + LawnGrass` fails even though
    /// both are products.
    pub fn try_add(&self, other: &CatalogProduct) -> DomainResult<f64> {
        match (self, other) {
            (CatalogProduct::Product(a), CatalogProduct::Product(b)) => Ok(a + b),
            (CatalogProduct::Smartphone(a), CatalogProduct::Smartphone(b)) => Ok(a + b),
            (CatalogProduct::LawnGrass(a), CatalogProduct::LawnGrass(b)) => Ok(a + b),
            (a, b) => Err(DomainError::type_mismatch(format!(
                "cannot add {} to {}",
                b.kind(),
                a.kind()
            ))),
        }
    }

    pub fn as_smartphone(&self) -> Option<&Smartphone> {
        match self {
            CatalogProduct::Smartphone(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_lawn_grass(&self) -> Option<&LawnGrass> {
        match self {
            CatalogProduct::LawnGrass(p) => Some(p),
            _ => None,
        }
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Catalogued for CatalogProduct {
    fn kind(&self) -> ProductKind {
        match self {
            CatalogProduct::Product(p) => p.kind(),
            CatalogProduct::Smartphone(p) => p.kind(),
            CatalogProduct::LawnGrass(p) => p.kind(),
        }
    }

    fn base(&self) -> &ProductBase {
        match self {
            CatalogProduct::Product(p) => p.base(),
            CatalogProduct::Smartphone(p) => p.base(),
            CatalogProduct::LawnGrass(p) => p.base(),
        }
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        match self {
            CatalogProduct::Product(p) => p.base_mut(),
            CatalogProduct::Smartphone(p) => p.base_mut(),
            CatalogProduct::LawnGrass(p) => p.base_mut(),
        }
    }

    fn signature(&self) -> String {
        match self {
            CatalogProduct::Product(p) => p.signature(),
            CatalogProduct::Smartphone(p) => p.signature(),
            CatalogProduct::LawnGrass(p) => p.signature(),
        }
    }

    /// Dispatches on the `"kind"` key (absent means a plain product).
    fn new_product(fields: &Map<String, Value>) -> DomainResult<Self> {
        let kind = match fields.get("kind") {
            None => ProductKind::Product,
            Some(Value::String(tag)) => tag.parse::<ProductKind>()?,
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "product kind must be a string, got {}",
                    value_type(other)
                )));
            }
        };

        Ok(match kind {
            ProductKind::Product => Product::new_product(fields)?.into(),
            ProductKind::Smartphone => Smartphone::new_product(fields)?.into(),
            ProductKind::LawnGrass => LawnGrass::new_product(fields)?.into(),
        })
    }
}

impl core::fmt::Display for CatalogProduct {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self.base(), f)
    }
}

impl core::ops::Add for &CatalogProduct {
    type Output = DomainResult<f64>;

    fn add(self, rhs: Self) -> DomainResult<f64> {
        self.try_add(rhs)
    }
}

impl From<Product> for CatalogProduct {
    fn from(value: Product) -> Self {
        CatalogProduct::Product(value)
    }
}

impl From<Smartphone> for CatalogProduct {
    fn from(value: Smartphone) -> Self {
        CatalogProduct::Smartphone(value)
    }
}

impl From<LawnGrass> for CatalogProduct {
    fn from(value: LawnGrass) -> Self {
        CatalogProduct::LawnGrass(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn galaxy() -> CatalogProduct {
        Smartphone::new(
            "Samsung Galaxy S23 Ultra",
            "256GB, Серый цвет, 200MP камера",
            180000.0,
            5,
            95.5,
            "S23 Ultra",
            256,
            "Серый",
        )
        .unwrap()
        .into()
    }

    fn iphone() -> CatalogProduct {
        Smartphone::new(
            "Iphone 15",
            "512GB, Gray space",
            210000.0,
            8,
            98.2,
            "15",
            512,
            "Gray space",
        )
        .unwrap()
        .into()
    }

    fn grass() -> CatalogProduct {
        LawnGrass::new(
            "Газонная трава",
            "Элитная трава для газона",
            500.0,
            20,
            "Россия",
            "7 дней",
            "Зеленый",
        )
        .unwrap()
        .into()
    }

    fn plain(price: f64, quantity: u32) -> CatalogProduct {
        Product::new("P", "d", price, quantity).unwrap().into()
    }

    #[test]
    fn same_variant_addition_succeeds() {
        assert_eq!((&galaxy() + &iphone()).unwrap(), 2580000.0);
        assert_eq!(plain(180000.0, 5).try_add(&plain(210000.0, 8)).unwrap(), 2580000.0);
    }

    #[test]
    fn mixed_variant_addition_fails() {
        let err = (&galaxy() + &grass()).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(err.to_string(), "type mismatch: cannot add LawnGrass to Smartphone");

        assert!(plain(1.0, 1).try_add(&galaxy()).unwrap_err().is_type_mismatch());
        assert!(grass().try_add(&plain(1.0, 1)).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn accessors_delegate_to_variant() {
        let mut phone = galaxy();
        assert_eq!(phone.kind(), ProductKind::Smartphone);
        assert_eq!(phone.name(), "Samsung Galaxy S23 Ultra");
        assert_eq!(phone.as_smartphone().unwrap().model(), "S23 Ultra");
        assert!(phone.as_lawn_grass().is_none());

        phone.set_price(-1.0);
        assert_eq!(phone.price(), 180000.0);
        phone.set_price(175000.0);
        assert_eq!(phone.price(), 175000.0);
    }

    #[test]
    fn from_record_dispatches_on_kind() {
        let record = json!({
            "kind": "lawn_grass",
            "name": "Газонная трава",
            "description": "Элитная трава для газона",
            "price": 500.0,
            "quantity": 20,
            "country": "Россия",
            "germination_period": "7 дней",
            "color": "Зеленый"
        });
        assert_eq!(CatalogProduct::from_record(&record).unwrap(), grass());

        let untagged = json!({ "name": "P", "description": "d", "price": 3.0, "quantity": 2 });
        assert_eq!(CatalogProduct::from_record(&untagged).unwrap(), plain(3.0, 2));
    }

    #[test]
    fn from_record_rejects_non_objects() {
        let err = CatalogProduct::from_record(&json!("Not a Product")).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(err.to_string(), "type mismatch: expected a product record, got a string");

        assert!(CatalogProduct::from_record(&json!(42)).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn from_record_rejects_unknown_kind() {
        let record = json!({
            "kind": "television",
            "name": "TV",
            "description": "d",
            "price": 1.0,
            "quantity": 1
        });
        assert!(CatalogProduct::from_record(&record).unwrap_err().is_validation());

        let record = json!({
            "kind": 7,
            "name": "TV",
            "description": "d",
            "price": 1.0,
            "quantity": 1
        });
        assert!(CatalogProduct::from_record(&record).unwrap_err().is_validation());
    }

    #[test]
    fn serialized_record_reads_back() {
        for product in [galaxy(), grass(), plain(99.5, 3)] {
            let record = serde_json::to_value(&product).unwrap();
            assert_eq!(record["kind"], product.kind().tag());
            assert_eq!(CatalogProduct::from_record(&record).unwrap(), product);
        }
    }
}
