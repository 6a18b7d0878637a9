use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use catalog_core::{DomainError, DomainResult, Price, format_amount};

use crate::catalogued::{Catalogued, ProductKind, impl_same_type_add};
use crate::fields::read_fields;

/// Fields shared by every product variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductBase {
    name: String,
    description: String,
    price: Price,
    quantity: u32,
}

impl ProductBase {
    /// Validate and assemble the shared fields.
    ///
    /// Fails when `quantity` is zero or `price` is not strictly positive.
    ///
    /// The price check here is a hard error, unlike [`ProductBase::set_price`]
    /// which only warns and keeps the old value. A new product has no earlier
    /// price to fall back on, and a product without a price is not
    /// representable, so construction refuses instead.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "a product with zero quantity cannot be created",
            ));
        }
        let price = Price::new(price)?;

        Ok(Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price.value()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Replace the price if `value` is strictly positive.
    ///
    /// A non-positive value is not an error: the write is dropped, the previous
    /// price stays in place and a warning is logged.
    pub fn set_price(&mut self, value: f64) {
        match Price::new(value) {
            Ok(price) => self.price = price,
            Err(_) => {
                tracing::warn!(
                    product = %self.name,
                    rejected = value,
                    kept = self.price.value(),
                    "Цена не должна быть нулевой или отрицательной"
                );
            }
        }
    }

    pub fn stock_value(&self) -> f64 {
        self.price.value() * f64::from(self.quantity)
    }

    /// Comma-separated constructor arguments, used by construction signatures.
    pub(crate) fn signature_args(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.name,
            self.description,
            format_amount(self.price.value()),
            self.quantity
        )
    }
}

impl core::fmt::Display for ProductBase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {} руб. Остаток: {} шт.",
            self.name, self.price, self.quantity
        )
    }
}

/// Plain catalog product without extra attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    #[serde(flatten)]
    base: ProductBase,
}

#[derive(Deserialize)]
struct ProductFields {
    name: String,
    description: String,
    price: f64,
    quantity: u32,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> DomainResult<Self> {
        let product = Self {
            base: ProductBase::new(name, description, price, quantity)?,
        };
        tracing::debug!(signature = %product.signature(), "product constructed");
        Ok(product)
    }
}

impl Catalogued for Product {
    fn kind(&self) -> ProductKind {
        ProductKind::Product
    }

    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn signature(&self) -> String {
        format!("{}({})", self.kind(), self.base.signature_args())
    }

    fn new_product(fields: &Map<String, Value>) -> DomainResult<Self> {
        let f: ProductFields = read_fields(fields)?;
        Self::new(f.name, f.description, f.price, f.quantity)
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.base, f)
    }
}

impl_same_type_add!(Product);
