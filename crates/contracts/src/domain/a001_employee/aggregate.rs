use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of an employee (`employees.emp_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Сотрудник, оформляющий продажи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_id: EmployeeId,
    pub emp_name: String,
    pub title: String,
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Apply the editable fields of a DTO
    pub fn update(&mut self, dto: &EmployeeDto) {
        self.emp_name = dto.emp_name.trim().to_string();
        self.title = dto.title.trim().to_string();
        self.hire_date = dto.hire_date;
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating or updating an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDto {
    #[serde(default)]
    pub emp_id: Option<i64>,
    pub emp_name: String,
    pub title: String,
    pub hire_date: NaiveDate,
}

impl EmployeeDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.emp_name.trim().is_empty() {
            return Err("Employee name must not be empty".into());
        }
        if self.title.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, title: &str) -> EmployeeDto {
        EmployeeDto {
            emp_id: None,
            emp_name: name.into(),
            title: title.into(),
            hire_date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(dto("Alice", "Sales Rep").validate().is_ok());
        assert!(dto("  ", "Sales Rep").validate().is_err());
        assert!(dto("Alice", "").validate().is_err());
    }

    #[test]
    fn test_deserialize_without_id() {
        let json = r#"{"emp_name":"Bob","title":"Manager","hire_date":"2020-01-15"}"#;
        let dto: EmployeeDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.emp_id, None);
        assert_eq!(dto.hire_date, NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
    }

    #[test]
    fn test_update_trims_fields() {
        let mut employee = Employee {
            emp_id: EmployeeId::new(1),
            emp_name: "Old".into(),
            title: "Old".into(),
            hire_date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        };
        employee.update(&dto(" Alice ", " Lead "));
        assert_eq!(employee.emp_name, "Alice");
        assert_eq!(employee.title, "Lead");
        assert_eq!(employee.emp_id.value(), 1);
    }
}
