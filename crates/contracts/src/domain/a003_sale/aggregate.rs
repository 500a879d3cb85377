use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_employee::aggregate::EmployeeId;
use crate::domain::a002_product::aggregate::ProductId;

/// Identifier of a sale (`sales.sale_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(pub i64);

impl SaleId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Продажа: сотрудник продал `quantity` единиц товара в дату `sale_date`.
///
/// The monetary amount is never stored; it is derived from the product's
/// current unit price whenever a report needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub sale_id: SaleId,
    pub emp_id: EmployeeId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub sale_date: NaiveDate,
}

impl Sale {
    pub fn update(&mut self, dto: &SaleDto) {
        self.emp_id = EmployeeId::new(dto.emp_id);
        self.product_id = ProductId::new(dto.product_id);
        self.quantity = dto.quantity;
        self.sale_date = dto.sale_date;
    }
}

/// Sale row for list screens, with the referenced names resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleListItem {
    #[serde(flatten)]
    pub sale: Sale,
    #[serde(rename = "empName")]
    pub emp_name: Option<String>,
    #[serde(rename = "productName")]
    pub product_name: Option<String>,
}

/// DTO for creating or updating a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDto {
    #[serde(default)]
    pub sale_id: Option<i64>,
    pub emp_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub sale_date: NaiveDate,
}

impl SaleDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity <= 0 {
            return Err("Quantity must be positive".into());
        }
        Ok(())
    }
}
