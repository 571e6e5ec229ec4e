use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{DepartmentError, DepartmentResult};
use crate::models::{CreateDepartment, Department, UpdateDepartment};

/// Repository trait for Department persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Insert a department and return it with its assigned id
    async fn create(&self, input: CreateDepartment) -> DepartmentResult<Department>;

    async fn get_by_id(&self, id: i32) -> DepartmentResult<Option<Department>>;

    /// All departments ordered by id ascending
    async fn list(&self) -> DepartmentResult<Vec<Department>>;

    /// Overwrite the mutable fields; `NotFound` if the id is absent
    async fn update(&self, id: i32, input: UpdateDepartment) -> DepartmentResult<Department>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: i32) -> DepartmentResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i32, Department>,
    last_id: i32,
}

/// In-memory implementation of DepartmentRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryDepartmentRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn create(&self, input: CreateDepartment) -> DepartmentResult<Department> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let department = Department {
            id: store.last_id,
            name: input.name,
        };
        store.rows.insert(department.id, department.clone());

        tracing::info!(department_id = department.id, "Created department");
        Ok(department)
    }

    async fn get_by_id(&self, id: i32) -> DepartmentResult<Option<Department>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn list(&self) -> DepartmentResult<Vec<Department>> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateDepartment) -> DepartmentResult<Department> {
        let mut store = self.store.write().await;

        let department = store
            .rows
            .get_mut(&id)
            .ok_or(DepartmentError::NotFound(id))?;
        department.apply_update(input);

        tracing::info!(department_id = id, "Updated department");
        Ok(department.clone())
    }

    async fn delete(&self, id: i32) -> DepartmentResult<bool> {
        let mut store = self.store.write().await;

        if store.rows.remove(&id).is_some() {
            tracing::info!(department_id = id, "Deleted department");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
