use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{DepartmentError, DepartmentResult},
    models::{CreateDepartment, Department, UpdateDepartment},
    repository::DepartmentRepository,
};

/// Sea-ORM backed repository (SQLite or PostgreSQL)
#[derive(Clone)]
pub struct DbDepartmentRepository {
    db: DatabaseConnection,
}

impl DbDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for DbDepartmentRepository {
    async fn create(&self, input: CreateDepartment) -> DepartmentResult<Department> {
        let model = entity::ActiveModel {
            id: NotSet,
            name: Set(input.name),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(department_id = model.id, "Created department");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> DepartmentResult<Option<Department>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> DepartmentResult<Vec<Department>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateDepartment) -> DepartmentResult<Department> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DepartmentError::NotFound(id))?;

        let mut active: entity::ActiveModel = model.into();
        active.name = Set(input.name);
        let updated = active.update(&self.db).await?;

        tracing::info!(department_id = id, "Updated department");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DepartmentResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(department_id = id, "Deleted department");
        }
        Ok(result.rows_affected > 0)
    }
}
