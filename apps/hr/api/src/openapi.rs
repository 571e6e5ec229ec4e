use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    info(
        title = "Human Resources API",
        version = "0.1.0",
        description = "Employees and the departments they belong to"
    ),
    nest(
        (path = domain_departments::entity::Model::URL, api = domain_departments::handlers::ApiDoc),
        (path = domain_departments::entity::Model::URL, api = domain_employees::handlers::DepartmentEmployeesApiDoc),
        (path = domain_employees::entity::Model::URL, api = domain_employees::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/departments",
            "/departments/{id}",
            "/departments/{id}/employees",
            "/employees",
            "/employees/{id}",
            "/employees/{id}/department",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
