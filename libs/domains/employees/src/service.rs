use domain_departments::{Department, DepartmentRepository};
use std::sync::Arc;
use validator::Validate;

use crate::error::{EmployeeError, EmployeeResult};
use crate::models::{CreateEmployee, Employee, UpdateEmployee};
use crate::repository::EmployeeRepository;

/// Service layer for Employee business logic
///
/// Holds a department repository for the relation lookups only; writes never
/// check that the referenced department exists.
#[derive(Clone)]
pub struct EmployeeService<R: EmployeeRepository> {
    repository: Arc<R>,
    departments: Arc<dyn DepartmentRepository>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repository: R, departments: Arc<dyn DepartmentRepository>) -> Self {
        Self {
            repository: Arc::new(repository),
            departments,
        }
    }

    pub async fn list_employees(&self) -> EmployeeResult<Vec<Employee>> {
        self.repository.list().await
    }

    /// Get an employee by ID
    pub async fn get_employee(&self, id: i32) -> EmployeeResult<Employee> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))
    }

    pub async fn create_employee(&self, input: CreateEmployee) -> EmployeeResult<Employee> {
        input
            .validate()
            .map_err(|e| EmployeeError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Replace name fields and department reference. Never creates a record.
    pub async fn update_employee(&self, id: i32, input: UpdateEmployee) -> EmployeeResult<Employee> {
        input
            .validate()
            .map_err(|e| EmployeeError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    pub async fn delete_employee(&self, id: i32) -> EmployeeResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(EmployeeError::NotFound(id));
        }

        Ok(())
    }

    /// Employees of an existing department
    pub async fn employees_in_department(&self, department_id: i32) -> EmployeeResult<Vec<Employee>> {
        if self.departments.get_by_id(department_id).await?.is_none() {
            return Err(EmployeeError::DepartmentNotFound(department_id));
        }

        self.repository.list_by_department(department_id).await
    }

    /// The department an employee belongs to
    pub async fn employee_department(&self, id: i32) -> EmployeeResult<Department> {
        let (employee, department) = self
            .repository
            .find_with_department(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))?;

        department.ok_or(EmployeeError::DepartmentNotFound(employee.department_id))
    }
}
