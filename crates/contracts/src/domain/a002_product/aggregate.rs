use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::money;

/// Identifier of a product (`products.product_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Товар с текущей ценой за единицу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Decimal,
}

impl Product {
    /// Unit price in minor units, as stored
    pub fn unit_price_cents(&self) -> Option<i64> {
        money::to_cents(self.unit_price)
    }

    pub fn update(&mut self, dto: &ProductDto) {
        self.product_name = dto.product_name.trim().to_string();
        self.unit_price = dto.unit_price;
    }
}

/// DTO for creating or updating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub product_id: Option<i64>,
    pub product_name: String,
    pub unit_price: Decimal,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.product_name.trim().is_empty() {
            return Err("Product name must not be empty".into());
        }
        if self.unit_price.is_sign_negative() && !self.unit_price.is_zero() {
            return Err("Unit price must not be negative".into());
        }
        if self.unit_price.normalize().scale() > money::MONEY_SCALE {
            return Err("Unit price must have at most two decimal places".into());
        }
        match money::to_cents(self.unit_price) {
            Some(cents) if cents <= money::MAX_UNIT_PRICE_CENTS => Ok(()),
            _ => Err(format!(
                "Unit price must not exceed {}",
                money::from_cents(money::MAX_UNIT_PRICE_CENTS)
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, price: Decimal) -> ProductDto {
        ProductDto {
            product_id: None,
            product_name: name.into(),
            unit_price: price,
        }
    }

    #[test]
    fn test_validate() {
        assert!(dto("Widget", Decimal::new(1999, 2)).validate().is_ok());
        assert!(dto("Free sample", Decimal::ZERO).validate().is_ok());
        assert!(dto("", Decimal::ONE).validate().is_err());
        assert!(dto("Widget", Decimal::new(-1, 0)).validate().is_err());
        assert!(dto("Widget", Decimal::new(10001, 3)).validate().is_err());
    }

    #[test]
    fn test_validate_price_upper_bound() {
        let max = money::from_cents(money::MAX_UNIT_PRICE_CENTS);
        assert!(dto("Yacht", max).validate().is_ok());
        assert!(dto("Yacht", max + Decimal::new(1, 2)).validate().is_err());

        // far beyond i64 cents and near the Decimal limit: an error, not a panic
        let huge = Decimal::from_i128_with_scale(10i128.pow(28), 0);
        let err = dto("Yacht", huge).validate().unwrap_err();
        assert!(err.contains("must not exceed"), "{}", err);
        assert!(dto("Yacht", Decimal::MAX).validate().is_err());
    }

    #[test]
    fn test_price_round_trips_through_json_number() {
        let json = r#"{"product_name":"Widget","unit_price":10.5}"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.unit_price, Decimal::new(105, 1));
        assert_eq!(money::to_cents(dto.unit_price), Some(1050));
    }
}
