use domain_departments::entity as department;
use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the `employees` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub department_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "domain_departments::entity::Entity",
        from = "Column::DepartmentId",
        to = "domain_departments::entity::Column::Id"
    )]
    Department,
}

impl Related<department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Mount point of the employee routes
    pub const URL: &'static str = "/employees";
    /// OpenAPI tag
    pub const TAG: &'static str = "employees";
}

impl From<Model> for crate::models::Employee {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            department_id: model.department_id,
        }
    }
}
