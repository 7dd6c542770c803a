//! # Staff
//!
//! Employee records and their repository. Employees are the principals the
//! permission resolver works from; credential verification happens in an
//! external collaborator and is out of scope here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employment status. Anything other than `Active` resolves to zero
/// capabilities regardless of role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

/// An employee record, the authenticated principal of every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,

    /// Short unique login handle, e.g. "NV-001"
    pub code: String,

    pub name: String,

    /// Role NAME by value, not id. May dangle after catalog edits; the
    /// resolver degrades instead of failing.
    pub role: String,

    pub status: EmployeeStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Employee {
    pub fn new(code: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            role: role.into(),
            status: EmployeeStatus::Active,
            phone: None,
            email: None,
            join_date: None,
            address: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

/// Abstracts storage of employee records.
pub trait EmployeeRepository: Send + Sync {
    fn find_by_id(&self, id: Uuid) -> Option<Employee>;

    /// Lookup by login handle.
    fn find_by_code(&self, code: &str) -> Option<Employee>;

    fn all(&self) -> Vec<Employee>;

    fn upsert(&self, employee: Employee);

    /// Returns true if a record was removed.
    fn remove(&self, id: Uuid) -> bool;
}

/// In-memory employee repository for tests and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: std::sync::RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_by_id(&self, id: Uuid) -> Option<Employee> {
        let employees = self.employees.read().unwrap_or_else(|e| e.into_inner());
        employees.iter().find(|e| e.id == id).cloned()
    }

    fn find_by_code(&self, code: &str) -> Option<Employee> {
        let employees = self.employees.read().unwrap_or_else(|e| e.into_inner());
        employees.iter().find(|e| e.code == code).cloned()
    }

    fn all(&self) -> Vec<Employee> {
        let employees = self.employees.read().unwrap_or_else(|e| e.into_inner());
        employees.clone()
    }

    fn upsert(&self, employee: Employee) {
        let mut employees = self.employees.write().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = employees.iter_mut().find(|e| e.id == employee.id) {
            *existing = employee;
        } else {
            employees.push(employee);
        }
    }

    fn remove(&self, id: Uuid) -> bool {
        let mut employees = self.employees.write().unwrap_or_else(|e| e.into_inner());
        let before = employees.len();
        employees.retain(|e| e.id != id);
        employees.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_is_active() {
        let emp = Employee::new("NV-001", "Tran Minh Tuan", "Technician");
        assert!(emp.is_active());
    }

    #[test]
    fn test_repository_upsert_and_lookup() {
        let repo = InMemoryEmployeeRepository::new();
        let emp = Employee::new("NV-001", "Tran Minh Tuan", "Technician");
        let id = emp.id;

        repo.upsert(emp.clone());
        assert_eq!(repo.find_by_code("NV-001").unwrap().id, id);

        let mut renamed = emp;
        renamed.name = "Tran M. Tuan".to_string();
        repo.upsert(renamed);
        assert_eq!(repo.all().len(), 1);
        assert_eq!(repo.find_by_id(id).unwrap().name, "Tran M. Tuan");

        assert!(repo.remove(id));
        assert!(!repo.remove(id));
        assert!(repo.find_by_id(id).is_none());
    }

    #[test]
    fn test_optional_fields_omitted_from_serialized_form() {
        let emp = Employee::new("NV-002", "Nguyen Thi Mai", "Purchaser");
        let json = serde_json::to_string(&emp).unwrap();
        assert!(!json.contains("phone"));
        assert!(!json.contains("join_date"));
    }
}
