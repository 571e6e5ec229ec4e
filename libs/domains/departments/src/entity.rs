use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the `departments` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

// The employees side owns the relation definition
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Mount point of the department routes
    pub const URL: &'static str = "/departments";
    /// OpenAPI tag
    pub const TAG: &'static str = "departments";
}

impl From<Model> for crate::models::Department {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
