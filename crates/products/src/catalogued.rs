//! The product capability set.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use catalog_core::{DomainError, DomainResult};

use crate::product::ProductBase;

/// Concrete product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Product,
    Smartphone,
    LawnGrass,
}

impl ProductKind {
    /// Stable record tag (e.g. `"lawn_grass"`).
    pub fn tag(self) -> &'static str {
        match self {
            ProductKind::Product => "product",
            ProductKind::Smartphone => "smartphone",
            ProductKind::LawnGrass => "lawn_grass",
        }
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ProductKind::Product => "Product",
            ProductKind::Smartphone => "Smartphone",
            ProductKind::LawnGrass => "LawnGrass",
        };
        f.write_str(name)
    }
}

impl core::str::FromStr for ProductKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(ProductKind::Product),
            "smartphone" => Ok(ProductKind::Smartphone),
            "lawn_grass" => Ok(ProductKind::LawnGrass),
            other => Err(DomainError::validation(format!("unknown product kind: {other}"))),
        }
    }
}

/// Everything a value must support to be treated as a product.
///
/// Implementors only provide access to their embedded [`ProductBase`], their
/// kind, a construction signature and a factory; the shared accessors are
/// default methods.
pub trait Catalogued: core::fmt::Display {
    fn kind(&self) -> ProductKind;

    fn base(&self) -> &ProductBase;

    fn base_mut(&mut self) -> &mut ProductBase;

    /// `Kind(arg, arg, ...)` listing the constructor arguments.
    fn signature(&self) -> String;

    /// Build an instance from a field-name-keyed mapping.
    ///
    /// Every variant reads `name`, `description`, `price` and `quantity`, plus
    /// its own extra keys. Unknown keys are ignored.
    fn new_product(fields: &Map<String, Value>) -> DomainResult<Self>
    where
        Self: Sized;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn description(&self) -> &str {
        self.base().description()
    }

    fn price(&self) -> f64 {
        self.base().price()
    }

    /// Soft-validated price write; see [`ProductBase::set_price`].
    fn set_price(&mut self, value: f64) {
        self.base_mut().set_price(value)
    }

    fn quantity(&self) -> u32 {
        self.base().quantity()
    }

    /// `price * quantity`, the operand of product addition.
    fn stock_value(&self) -> f64 {
        self.base().stock_value()
    }
}

/// Implements `+` between two values of the same concrete product type.
///
/// The sum is the combined stock value of both operands. Mixing types does not
/// compile; runtime-checked addition lives on [`CatalogProduct`](crate::CatalogProduct).
macro_rules! impl_same_type_add {
    ($t:ty) => {
        impl core::ops::Add for &$t {
            type Output = f64;

            fn add(self, rhs: Self) -> f64 {
                $crate::Catalogued::stock_value(self) + $crate::Catalogued::stock_value(rhs)
            }
        }

        impl core::ops::Add for $t {
            type Output = f64;

            fn add(self, rhs: Self) -> f64 {
                &self + &rhs
            }
        }
    };
}

pub(crate) use impl_same_type_add;
