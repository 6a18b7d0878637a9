use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use catalog_core::{DomainResult, format_amount};

use crate::catalogued::{Catalogued, ProductKind, impl_same_type_add};
use crate::fields::read_fields;
use crate::product::ProductBase;

/// Smartphone: a product with performance and hardware attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Smartphone {
    #[serde(flatten)]
    base: ProductBase,
    efficiency: f64,
    model: String,
    memory: u32,
    color: String,
}

#[derive(Deserialize)]
struct SmartphoneFields {
    name: String,
    description: String,
    price: f64,
    quantity: u32,
    efficiency: f64,
    model: String,
    memory: u32,
    color: String,
}

impl Smartphone {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        efficiency: f64,
        model: impl Into<String>,
        memory: u32,
        color: impl Into<String>,
    ) -> DomainResult<Self> {
        let phone = Self {
            base: ProductBase::new(name, description, price, quantity)?,
            efficiency,
            model: model.into(),
            memory,
            color: color.into(),
        };
        tracing::debug!(signature = %phone.signature(), "product constructed");
        Ok(phone)
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Storage capacity in gigabytes.
    pub fn memory(&self) -> u32 {
        self.memory
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Catalogued for Smartphone {
    fn kind(&self) -> ProductKind {
        ProductKind::Smartphone
    }

    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn signature(&self) -> String {
        format!(
            "{}({}, {}, {}, {}, {})",
            self.kind(),
            self.base.signature_args(),
            format_amount(self.efficiency),
            self.model,
            self.memory,
            self.color
        )
    }

    fn new_product(fields: &Map<String, Value>) -> DomainResult<Self> {
        let f: SmartphoneFields = read_fields(fields)?;
        Self::new(
            f.name,
            f.description,
            f.price,
            f.quantity,
            f.efficiency,
            f.model,
            f.memory,
            f.color,
        )
    }
}

impl core::fmt::Display for Smartphone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.base, f)
    }
}

impl_same_type_add!(Smartphone);
