use async_trait::async_trait;
use domain_departments::{Department, entity as department};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{EmployeeError, EmployeeResult},
    models::{CreateEmployee, Employee, UpdateEmployee},
    repository::EmployeeRepository,
};

/// Sea-ORM backed repository (SQLite or PostgreSQL)
///
/// The store's foreign key rejects an unknown `department_id`; that surfaces
/// as [`EmployeeError::Database`].
#[derive(Clone)]
pub struct DbEmployeeRepository {
    db: DatabaseConnection,
}

impl DbEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for DbEmployeeRepository {
    async fn create(&self, input: CreateEmployee) -> EmployeeResult<Employee> {
        let model = entity::ActiveModel {
            id: NotSet,
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            department_id: Set(input.department_id),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(
            employee_id = model.id,
            department_id = model.department_id,
            "Created employee"
        );
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> EmployeeResult<Option<Employee>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> EmployeeResult<Vec<Employee>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_by_department(&self, department_id: i32) -> EmployeeResult<Vec<Employee>> {
        let models = entity::Entity::find()
            .filter(entity::Column::DepartmentId.eq(department_id))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_with_department(
        &self,
        id: i32,
    ) -> EmployeeResult<Option<(Employee, Option<Department>)>> {
        let row = entity::Entity::find_by_id(id)
            .find_also_related(department::Entity)
            .one(&self.db)
            .await?;

        Ok(row.map(|(employee, department)| {
            (employee.into(), department.map(Into::into))
        }))
    }

    async fn update(&self, id: i32, input: UpdateEmployee) -> EmployeeResult<Employee> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(EmployeeError::NotFound(id))?;

        let mut active: entity::ActiveModel = model.into();
        active.first_name = Set(input.first_name);
        active.last_name = Set(input.last_name);
        active.department_id = Set(input.department_id);
        let updated = active.update(&self.db).await?;

        tracing::info!(employee_id = id, "Updated employee");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> EmployeeResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(employee_id = id, "Deleted employee");
        }
        Ok(result.rows_affected > 0)
    }
}
