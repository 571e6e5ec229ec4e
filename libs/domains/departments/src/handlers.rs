use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestStoreResponse, BadRequestValidationResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::DepartmentResult;
use crate::models::{CreateDepartment, Department, UpdateDepartment};
use crate::repository::DepartmentRepository;
use crate::service::DepartmentService;

/// OpenAPI documentation for Departments API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_departments,
        create_department,
        get_department,
        update_department,
        delete_department,
    ),
    components(
        schemas(Department, CreateDepartment, UpdateDepartment),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestStoreResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Department management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the department router with all HTTP endpoints
pub fn router<R: DepartmentRepository + 'static>(service: DepartmentService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .with_state(shared_service)
}

/// `Location` value for a newly created department
fn location_for(department: &Department) -> String {
    format!(
        "{}/{}",
        entity::Model::URL,
        urlencoding::encode(&department.name)
    )
}

/// List all departments
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All departments ordered by id", body = Vec<Department>),
        (status = 400, response = BadRequestStoreResponse)
    )
)]
async fn list_departments<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
) -> DepartmentResult<Json<Vec<Department>>> {
    let departments = service.list_departments().await?;
    Ok(Json(departments))
}

/// Create a new department
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateDepartment,
    responses(
        (status = 201, description = "Department created successfully", body = Department,
            headers(("Location" = String, description = "/departments/{name}"))),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn create_department<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateDepartment>,
) -> DepartmentResult<impl IntoResponse> {
    let department = service.create_department(input).await?;
    let location = location_for(&department);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(department),
    ))
}

/// Get a department by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department found", body = Department),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_department<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
    IdPath(id): IdPath,
) -> DepartmentResult<Json<Department>> {
    let department = service.get_department(id).await?;
    Ok(Json(department))
}

/// Replace a department's fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = UpdateDepartment,
    responses(
        (status = 202, description = "Department updated"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_department<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateDepartment>,
) -> DepartmentResult<StatusCode> {
    service.update_department(id, input).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Delete a department
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Department deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_department<R: DepartmentRepository>(
    State(service): State<Arc<DepartmentService<R>>>,
    IdPath(id): IdPath,
) -> DepartmentResult<StatusCode> {
    service.delete_department(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_encodes_name() {
        let department = Department {
            id: 1,
            name: "Human Resources".to_string(),
        };
        assert_eq!(location_for(&department), "/departments/Human%20Resources");
    }
}
