use tracing::info;

use crate::error::{AmsError, AmsResult};
use crate::model::employee::Employee;

/// In-memory employee registry. Insertion order is the listing order, which
/// keeps report output deterministic.
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects the insert when either the id or the email is already taken.
    /// Both checks run before anything is stored, so a failed insert leaves
    /// the directory untouched. Email comparison is case-sensitive.
    pub fn add(&mut self, employee: Employee) -> AmsResult<()> {
        if self.employees.iter().any(|e| e.id == employee.id) {
            return Err(AmsError::DuplicateEmployee(format!(
                "Employee id {} already exists",
                employee.id
            )));
        }
        if self.employees.iter().any(|e| e.email == employee.email) {
            return Err(AmsError::DuplicateEmployee(format!(
                "Email {} already in use",
                employee.email
            )));
        }
        info!(employee_id = employee.id, "employee added");
        self.employees.push(employee);
        Ok(())
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// `EmployeeNotFound` unless the id is registered. Mutating operations on
    /// the attendance ledger and the leave tracker run this before touching
    /// their own state.
    pub fn ensure_exists(&self, id: u64) -> AmsResult<()> {
        if self.find_by_id(id).is_none() {
            return Err(AmsError::EmployeeNotFound(id));
        }
        Ok(())
    }
}
