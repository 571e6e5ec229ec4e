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
use domain_departments::{Department, entity::Model as DepartmentModel};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::EmployeeResult;
use crate::models::{CreateEmployee, Employee, UpdateEmployee};
use crate::repository::EmployeeRepository;
use crate::service::EmployeeService;

/// OpenAPI documentation for Employees API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_employees,
        create_employee,
        get_employee,
        update_employee,
        delete_employee,
        get_employee_department,
    ),
    components(
        schemas(Employee, CreateEmployee, UpdateEmployee, Department),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestStoreResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Employee management endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the employees-of-a-department lookup, nested
/// under the departments mount point
#[derive(OpenApi)]
#[openapi(
    paths(list_department_employees),
    components(schemas(Employee), responses(NotFoundResponse, BadRequestIdResponse))
)]
pub struct DepartmentEmployeesApiDoc;

/// Create the employee router with all HTTP endpoints
pub fn router<R: EmployeeRepository + 'static>(service: EmployeeService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/{id}/department", get(get_employee_department))
        .with_state(shared_service)
}

/// Router for `GET /{id}/employees`, meant to be merged into the
/// departments router before nesting
pub fn department_employees_router<R: EmployeeRepository + 'static>(
    service: EmployeeService<R>,
) -> Router {
    Router::new()
        .route("/{id}/employees", get(list_department_employees))
        .with_state(Arc::new(service))
}

/// `Location` value for a newly created employee
fn location_for(employee: &Employee) -> String {
    format!(
        "{}/{}",
        entity::Model::URL,
        urlencoding::encode(&employee.first_name)
    )
}

/// List all employees
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All employees ordered by id", body = Vec<Employee>),
        (status = 400, response = BadRequestStoreResponse)
    )
)]
async fn list_employees<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
) -> EmployeeResult<Json<Vec<Employee>>> {
    let employees = service.list_employees().await?;
    Ok(Json(employees))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Employee,
            headers(("Location" = String, description = "/employees/{first_name}"))),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn create_employee<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateEmployee>,
) -> EmployeeResult<impl IntoResponse> {
    let employee = service.create_employee(input).await?;
    let location = location_for(&employee);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_employee<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
    IdPath(id): IdPath,
) -> EmployeeResult<Json<Employee>> {
    let employee = service.get_employee(id).await?;
    Ok(Json(employee))
}

/// Replace an employee's fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 202, description = "Employee updated"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_employee<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateEmployee>,
) -> EmployeeResult<StatusCode> {
    service.update_employee(id, input).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_employee<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
    IdPath(id): IdPath,
) -> EmployeeResult<StatusCode> {
    service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the department an employee belongs to
#[utoipa::path(
    get,
    path = "/{id}/department",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "The employee's department", body = Department),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_employee_department<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
    IdPath(id): IdPath,
) -> EmployeeResult<Json<Department>> {
    let department = service.employee_department(id).await?;
    Ok(Json(department))
}

/// List the employees of a department
#[utoipa::path(
    get,
    path = "/{id}/employees",
    tag = DepartmentModel::TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Employees of the department ordered by id", body = Vec<Employee>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn list_department_employees<R: EmployeeRepository>(
    State(service): State<Arc<EmployeeService<R>>>,
    IdPath(department_id): IdPath,
) -> EmployeeResult<Json<Vec<Employee>>> {
    let employees = service.employees_in_department(department_id).await?;
    Ok(Json(employees))
}
