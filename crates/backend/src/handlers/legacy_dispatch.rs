//! `GET /api.php?do=<tag>` dispatcher kept for the original front end.
//!
//! Every argument travels in the query string. Mutations answer
//! `{"success": true}`, unknown tags answer `[]`.

use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use contracts::dashboards::d400_sales_reports::ReportKind;
use contracts::domain::a001_employee::aggregate::{EmployeeDto, EmployeeId};
use contracts::domain::a002_product::aggregate::{ProductDto, ProductId};
use contracts::domain::a003_sale::aggregate::{SaleDto, SaleId};
use contracts::domain::a004_saved_report::aggregate::SavedReportDto;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::json;

use super::error_status;
use crate::dashboards::{d400_sales_reports, d401_dashboard_summary};
use crate::domain::{a001_employee, a002_product, a003_sale, a004_saved_report};
use crate::shared::data::db::get_connection;
use crate::shared::error::{ServiceError, ServiceResult};

/// Query string arguments of one call
struct Params(HashMap<String, String>);

impl Params {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    fn text(&self, key: &str) -> ServiceResult<String> {
        self.get(key)
            .map(str::to_string)
            .ok_or_else(|| ServiceError::Validation(format!("Missing parameter '{}'", key)))
    }

    fn parse<T: FromStr>(&self, key: &str) -> ServiceResult<T> {
        let raw = self.text(key)?;
        raw.trim()
            .parse()
            .map_err(|_| ServiceError::Validation(format!("Invalid parameter '{}': {}", key, raw)))
    }

    fn date(&self, key: &str) -> ServiceResult<NaiveDate> {
        self.parse::<NaiveDate>(key)
    }

    fn employee_dto(&self, emp_id: Option<i64>) -> ServiceResult<EmployeeDto> {
        Ok(EmployeeDto {
            emp_id,
            emp_name: self.text("emp_name")?,
            title: self.text("title")?,
            hire_date: self.date("hire_date")?,
        })
    }

    fn product_dto(&self, product_id: Option<i64>) -> ServiceResult<ProductDto> {
        Ok(ProductDto {
            product_id,
            product_name: self.text("product_name")?,
            unit_price: self.parse::<Decimal>("unit_price")?,
        })
    }

    fn sale_dto(&self, sale_id: Option<i64>) -> ServiceResult<SaleDto> {
        Ok(SaleDto {
            sale_id,
            emp_id: self.parse("emp_id")?,
            product_id: self.parse("product_id")?,
            quantity: self.parse("quantity")?,
            sale_date: self.date("sale_date")?,
        })
    }
}

fn json_response<T: Serialize>(value: T) -> Response {
    Json(value).into_response()
}

fn success() -> Response {
    json_response(json!({"success": true}))
}

/// GET /api.php
pub async fn dispatch(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, StatusCode> {
    let params = Params(params);
    let tag = params.get("do").unwrap_or_default().to_string();

    match handle(get_connection(), &tag, &params).await {
        Ok(response) => Ok(response),
        Err(e) => Err(error_status(&format!("api.php do={}", tag), e)),
    }
}

async fn handle(db: &DatabaseConnection, tag: &str, params: &Params) -> ServiceResult<Response> {
    let response = match tag {
        // ====================================================================
        // Reads
        // ====================================================================
        "get_employees" => json_response(a001_employee::service::list_all(db).await?),
        "get_products" => json_response(a002_product::service::list_all(db).await?),
        "get_sales" => json_response(a003_sale::service::list_all(db).await?),
        "get_reports" => {
            let report_type = params.get("report_type").unwrap_or_default();
            match ReportKind::parse(report_type, params.get("emp_id")) {
                Some(kind) => {
                    json_response(d400_sales_reports::service::compute_report(db, kind).await?)
                }
                None => json_response(Vec::<()>::new()),
            }
        }
        "get_dashboard_stats" => {
            json_response(d401_dashboard_summary::service::compute_dashboard_summary(db).await)
        }

        // ====================================================================
        // Mutations
        // ====================================================================
        "add_employee" => {
            a001_employee::service::create(db, params.employee_dto(None)?).await?;
            success()
        }
        "add_product" => {
            a002_product::service::create(db, params.product_dto(None)?).await?;
            success()
        }
        "add_sale" => {
            a003_sale::service::create(db, params.sale_dto(None)?).await?;
            success()
        }
        "add_report" => {
            let dto = SavedReportDto {
                report_name: params.text("report_name")?,
                report_date: params.date("report_date")?,
            };
            a004_saved_report::service::create(db, dto).await?;
            success()
        }
        "update_employee" => {
            let dto = params.employee_dto(Some(params.parse("emp_id")?))?;
            a001_employee::service::update(db, dto).await?;
            success()
        }
        "update_product" => {
            let dto = params.product_dto(Some(params.parse("product_id")?))?;
            a002_product::service::update(db, dto).await?;
            success()
        }
        "update_sale" => {
            let dto = params.sale_dto(Some(params.parse("sale_id")?))?;
            a003_sale::service::update(db, dto).await?;
            success()
        }
        "delete_employee" => {
            let id = EmployeeId::new(params.parse("emp_id")?);
            a001_employee::service::delete(db, id).await?;
            success()
        }
        "delete_product" => {
            let id = ProductId::new(params.parse("product_id")?);
            a002_product::service::delete(db, id).await?;
            success()
        }
        "delete_sale" => {
            let id = SaleId::new(params.parse("sale_id")?);
            a003_sale::service::delete(db, id).await?;
            success()
        }
        other => {
            tracing::warn!("Unknown api.php tag: '{}'", other);
            json_response(Vec::<()>::new())
        }
    };
    Ok(response)
}
