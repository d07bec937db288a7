use crate::api::{
    catalog::{self, CATALOG_SIZE, Project},
    handlers::Reply,
    pagination::{PageQuery, Pagination},
};

#[utoipa::path(
    get,
    operation_id = "list_projects",
    path = "/api/v4/projects",
    params(
        ("page" = Option<i64>, Query, description = "Page number, defaults to 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, defaults to 20"),
    ),
    responses(
        (status = 200, description = "Page of projects with pagination headers", body = [Project], content_type = "application/json"),
    ),
    tag = "projects",
)]
/// One page of the catalog. `X-Total` always reports the whole catalog.
#[must_use]
pub fn list(query: &PageQuery, port: u16) -> Reply {
    let (min, max) = query.range();
    let projects: Vec<Project> = catalog::projects(min, max, port).collect();

    Reply::json(&projects, Some(Pagination::new(CATALOG_SIZE, *query)))
}

#[utoipa::path(
    get,
    operation_id = "get_project",
    path = "/api/v4/projects/{id}",
    params(
        ("id" = i64, Path, description = "Project id"),
    ),
    responses(
        (status = 200, description = "List holding the project, empty when the id is unknown", body = [Project], content_type = "application/json"),
    ),
    tag = "projects",
)]
/// Single project lookup, answered as a list without pagination headers.
#[must_use]
pub fn get(project_id: i64, port: u16) -> Reply {
    let projects: Vec<Project> = catalog::projects(project_id, project_id, port).collect();

    Reply::json(&projects, None)
}
