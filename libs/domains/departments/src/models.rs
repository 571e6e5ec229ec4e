use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A department that employees belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    /// Store-generated identifier
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Engineering")]
    pub name: String,
}

impl Department {
    /// Overwrite every mutable field; the id never changes
    pub fn apply_update(&mut self, input: UpdateDepartment) {
        self.name = input.name;
    }
}

/// Body of `POST /departments`
///
/// An `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDepartment {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Engineering", min_length = 1, max_length = 100)]
    pub name: String,
}

/// Body of `PUT /departments/{id}`: the full replacement set of fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateDepartment {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Platform Engineering", min_length = 1, max_length = 100)]
    pub name: String,
}
