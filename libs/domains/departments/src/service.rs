use std::sync::Arc;
use validator::Validate;

use crate::error::{DepartmentError, DepartmentResult};
use crate::models::{CreateDepartment, Department, UpdateDepartment};
use crate::repository::DepartmentRepository;

/// Service layer for Department business logic
#[derive(Clone)]
pub struct DepartmentService<R: DepartmentRepository> {
    repository: Arc<R>,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_departments(&self) -> DepartmentResult<Vec<Department>> {
        self.repository.list().await
    }

    /// Get a department by ID
    pub async fn get_department(&self, id: i32) -> DepartmentResult<Department> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(DepartmentError::NotFound(id))
    }

    pub async fn create_department(&self, input: CreateDepartment) -> DepartmentResult<Department> {
        input
            .validate()
            .map_err(|e| DepartmentError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Replace the department's name. Never creates a record.
    pub async fn update_department(
        &self,
        id: i32,
        input: UpdateDepartment,
    ) -> DepartmentResult<Department> {
        input
            .validate()
            .map_err(|e| DepartmentError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    pub async fn delete_department(&self, id: i32) -> DepartmentResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(DepartmentError::NotFound(id));
        }

        Ok(())
    }
}
