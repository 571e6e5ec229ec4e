use async_trait::async_trait;
use domain_departments::{Department, DepartmentRepository, InMemoryDepartmentRepository};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{EmployeeError, EmployeeResult};
use crate::models::{CreateEmployee, Employee, UpdateEmployee};

/// Repository trait for Employee persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert an employee and return it with its assigned id
    async fn create(&self, input: CreateEmployee) -> EmployeeResult<Employee>;

    async fn get_by_id(&self, id: i32) -> EmployeeResult<Option<Employee>>;

    /// All employees ordered by id ascending
    async fn list(&self) -> EmployeeResult<Vec<Employee>>;

    /// Employees whose `department_id` equals `department_id`, by id
    async fn list_by_department(&self, department_id: i32) -> EmployeeResult<Vec<Employee>>;

    /// The employee joined with its department, if both exist.
    ///
    /// `Some((employee, None))` means the reference names no department.
    async fn find_with_department(
        &self,
        id: i32,
    ) -> EmployeeResult<Option<(Employee, Option<Department>)>>;

    /// Overwrite the mutable fields; `NotFound` if the id is absent
    async fn update(&self, id: i32, input: UpdateEmployee) -> EmployeeResult<Employee>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: i32) -> EmployeeResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i32, Employee>,
    last_id: i32,
}

/// In-memory implementation of EmployeeRepository (for development/testing)
///
/// The department reference is not checked on write. Attach a department
/// repository with [`with_departments`](Self::with_departments) to resolve it
/// in [`find_with_department`](EmployeeRepository::find_with_department).
#[derive(Debug, Default, Clone)]
pub struct InMemoryEmployeeRepository {
    store: Arc<RwLock<Store>>,
    departments: Option<InMemoryDepartmentRepository>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_departments(mut self, departments: InMemoryDepartmentRepository) -> Self {
        self.departments = Some(departments);
        self
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, input: CreateEmployee) -> EmployeeResult<Employee> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let employee = Employee {
            id: store.last_id,
            first_name: input.first_name,
            last_name: input.last_name,
            department_id: input.department_id,
        };
        store.rows.insert(employee.id, employee.clone());

        tracing::info!(employee_id = employee.id, "Created employee");
        Ok(employee)
    }

    async fn get_by_id(&self, id: i32) -> EmployeeResult<Option<Employee>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn list(&self) -> EmployeeResult<Vec<Employee>> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn list_by_department(&self, department_id: i32) -> EmployeeResult<Vec<Employee>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .filter(|e| e.department_id == department_id)
            .cloned()
            .collect())
    }

    async fn find_with_department(
        &self,
        id: i32,
    ) -> EmployeeResult<Option<(Employee, Option<Department>)>> {
        let Some(employee) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let department = match &self.departments {
            Some(departments) => departments.get_by_id(employee.department_id).await?,
            None => None,
        };

        Ok(Some((employee, department)))
    }

    async fn update(&self, id: i32, input: UpdateEmployee) -> EmployeeResult<Employee> {
        let mut store = self.store.write().await;

        let employee = store.rows.get_mut(&id).ok_or(EmployeeError::NotFound(id))?;
        employee.apply_update(input);

        tracing::info!(employee_id = id, "Updated employee");
        Ok(employee.clone())
    }

    async fn delete(&self, id: i32) -> EmployeeResult<bool> {
        let mut store = self.store.write().await;

        if store.rows.remove(&id).is_some() {
            tracing::info!(employee_id = id, "Deleted employee");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_departments::CreateDepartment;

    fn create(first_name: &str, department_id: i32) -> CreateEmployee {
        CreateEmployee {
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            department_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_employee() {
        let repo = InMemoryEmployeeRepository::new();

        let employee = repo.create(create("Ada", 1)).await.unwrap();
        assert_eq!(employee.id, 1);

        let fetched = repo.get_by_id(employee.id).await.unwrap();
        assert_eq!(fetched, Some(employee));
    }

    #[tokio::test]
    async fn test_unknown_department_is_accepted() {
        let repo = InMemoryEmployeeRepository::new();
        assert!(repo.create(create("Ada", 999)).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_by_department_filters_and_orders() {
        let repo = InMemoryEmployeeRepository::new();
        repo.create(create("A", 1)).await.unwrap();
        repo.create(create("B", 2)).await.unwrap();
        repo.create(create("C", 1)).await.unwrap();

        let names: Vec<String> = repo
            .list_by_department(1)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.first_name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn test_find_with_department_resolves_reference() {
        let departments = InMemoryDepartmentRepository::new();
        let department = departments
            .create(CreateDepartment {
                name: "Research".to_string(),
            })
            .await
            .unwrap();

        let repo = InMemoryEmployeeRepository::new().with_departments(departments);
        let linked = repo.create(create("Ada", department.id)).await.unwrap();
        let dangling = repo.create(create("Bob", 99)).await.unwrap();

        let (employee, found) = repo.find_with_department(linked.id).await.unwrap().unwrap();
        assert_eq!(employee, linked);
        assert_eq!(found, Some(department));

        let (_, missing) = repo.find_with_department(dangling.id).await.unwrap().unwrap();
        assert!(missing.is_none());

        assert!(repo.find_with_department(1234).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_employee_creates_nothing() {
        let repo = InMemoryEmployeeRepository::new();

        let result = repo
            .update(
                5,
                UpdateEmployee {
                    first_name: "X".to_string(),
                    last_name: "Y".to_string(),
                    department_id: 1,
                },
            )
            .await;

        assert!(matches!(result, Err(EmployeeError::NotFound(5))));
        assert!(repo.list().await.unwrap().is_empty());
    }
}
