use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use catalog_core::DomainResult;

use crate::catalogued::{Catalogued, ProductKind, impl_same_type_add};
use crate::fields::read_fields;
use crate::product::ProductBase;

/// Lawn grass seed mix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawnGrass {
    #[serde(flatten)]
    base: ProductBase,
    country: String,
    germination_period: String,
    color: String,
}

#[derive(Deserialize)]
struct LawnGrassFields {
    name: String,
    description: String,
    price: f64,
    quantity: u32,
    country: String,
    germination_period: String,
    color: String,
}

impl LawnGrass {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        country: impl Into<String>,
        germination_period: impl Into<String>,
        color: impl Into<String>,
    ) -> DomainResult<Self> {
        let grass = Self {
            base: ProductBase::new(name, description, price, quantity)?,
            country: country.into(),
            germination_period: germination_period.into(),
            color: color.into(),
        };
        tracing::debug!(signature = %grass.signature(), "product constructed");
        Ok(grass)
    }

    /// Country of origin.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Free-form germination period, e.g. `"7 дней"`.
    pub fn germination_period(&self) -> &str {
        &self.germination_period
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Catalogued for LawnGrass {
    fn kind(&self) -> ProductKind {
        ProductKind::LawnGrass
    }

    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn signature(&self) -> String {
        format!(
            "{}({}, {}, {}, {})",
            self.kind(),
            self.base.signature_args(),
            self.country,
            self.germination_period,
            self.color
        )
    }

    fn new_product(fields: &Map<String, Value>) -> DomainResult<Self> {
        let f: LawnGrassFields = read_fields(fields)?;
        Self::new(
            f.name,
            f.description,
            f.price,
            f.quantity,
            f.country,
            f.germination_period,
            f.color,
        )
    }
}

impl core::fmt::Display for LawnGrass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.base, f)
    }
}

impl_same_type_add!(LawnGrass);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn grass() -> LawnGrass {
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
    }

    #[test]
    fn new_stores_base_and_extra_fields() {
        let grass = grass();
        assert_eq!(grass.name(), "Газонная трава");
        assert_eq!(grass.description(), "Элитная трава для газона");
        assert_eq!(grass.price(), 500.0);
        assert_eq!(grass.quantity(), 20);
        assert_eq!(grass.country(), "Россия");
        assert_eq!(grass.germination_period(), "7 дней");
        assert_eq!(grass.color(), "Зеленый");
    }

    #[test]
    fn new_rejects_zero_quantity() {
        let err = LawnGrass::new("X", "d", 1.0, 0, "c", "p", "c").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn addition_of_two_lawn_grasses() {
        let other =
            LawnGrass::new("Газон", "d", 450.0, 10, "США", "5 дней", "Темно-зеленый").unwrap();
        assert_eq!(grass() + other, 500.0 * 20.0 + 450.0 * 10.0);
    }

    #[test]
    fn display_and_signature() {
        let grass = grass();
        assert_eq!(grass.to_string(), "Газонная трава, 500.0 руб. Остаток: 20 шт.");
        assert_eq!(
            grass.signature(),
            "LawnGrass(Газонная трава, Элитная трава для газона, 500.0, 20, Россия, 7 дней, Зеленый)"
        );
    }

    #[test]
    fn new_product_reads_extra_keys() {
        let data = json!({
            "name": "Газонная трава",
            "description": "Элитная трава для газона",
            "price": 500,
            "quantity": 20,
            "country": "Россия",
            "germination_period": "7 дней",
            "color": "Зеленый"
        });
        let grass_from_map = LawnGrass::new_product(data.as_object().unwrap()).unwrap();
        assert_eq!(grass_from_map, grass());
    }
}
