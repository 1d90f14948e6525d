//! Employee repository operations.

use super::Store;
use crate::error::StoreError;
use crate::ident;
use crate::records::{name_key, Employee, EmployeeId, EmployeePatch};

impl Store {
    /// Fetch one employee by id or composite name key.
    pub fn get_employee(&self, key: &str) -> Result<Employee, StoreError> {
        self.find_employee(key)
            .cloned()
            .ok_or(StoreError::EmployeeNotFound)
    }

    /// Snapshot of all employees, insertion order.
    pub fn list_employees(&self) -> Vec<Employee> {
        self.data.employees.clone()
    }

    /// Create an employee and return its new id.
    ///
    /// The normalized full name must not be taken; the check is
    /// case-insensitive and whitespace-normalized.
    pub fn add_employee(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> Result<EmployeeId, StoreError> {
        let wanted = name_key(&format!("{first_name}{last_name}"));
        if self.data.employees.iter().any(|e| e.name_key() == wanted) {
            return Err(StoreError::EmployeeExists);
        }

        let id = EmployeeId(ident::generate(|candidate| {
            self.data.employees.iter().any(|e| e.id.0 == candidate)
        }));

        self.data.employees.push(Employee {
            id: id.clone(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        });
        self.commit();

        Ok(id)
    }

    /// Partially update an employee resolved by id or name key.
    ///
    /// Only supplied, non-empty fields change.
    pub fn update_employee(&mut self, key: &str, patch: EmployeePatch) -> Result<(), StoreError> {
        let index = self
            .find_employee_index(key)
            .ok_or(StoreError::EmployeeNotFound)?;

        let employee = &mut self.data.employees[index];
        if let Some(first_name) = patch.first_name.filter(|f| !f.is_empty()) {
            employee.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name.filter(|l| !l.is_empty()) {
            employee.last_name = last_name;
        }
        self.commit();

        Ok(())
    }

    /// Remove an employee and, in the same commit, every message addressed
    /// to them. Orphaned messages are never left behind, even transiently.
    pub fn remove_employee(&mut self, key: &str) -> Result<(), StoreError> {
        let index = self
            .find_employee_index(key)
            .ok_or(StoreError::EmployeeNotFound)?;

        let removed = self.data.employees.remove(index);
        self.data.messages.retain(|m| m.employee != removed.id);
        self.commit();

        Ok(())
    }
}
