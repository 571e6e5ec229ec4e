use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An employee assigned to exactly one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    /// Store-generated identifier
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Ada")]
    pub first_name: String,

    #[schema(example = "Lovelace")]
    pub last_name: String,

    /// Id of the owning department
    #[schema(example = 1)]
    pub department_id: i32,
}

impl Employee {
    /// Overwrite every mutable field; the id never changes
    pub fn apply_update(&mut self, input: UpdateEmployee) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.department_id = input.department_id;
    }
}

/// Body of `POST /employees`
///
/// An `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Ada", min_length = 1, max_length = 100)]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Lovelace", min_length = 1, max_length = 100)]
    pub last_name: String,

    #[validate(range(min = 1))]
    #[schema(example = 1, minimum = 1)]
    pub department_id: i32,
}

/// Body of `PUT /employees/{id}`: the full replacement set of fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployee {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Ada", min_length = 1, max_length = 100)]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "King", min_length = 1, max_length = 100)]
    pub last_name: String,

    #[validate(range(min = 1))]
    #[schema(example = 2, minimum = 1)]
    pub department_id: i32,
}
