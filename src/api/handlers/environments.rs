use crate::api::{
    environments::{self, Environment},
    handlers::Reply,
};

#[utoipa::path(
    get,
    operation_id = "list_environments",
    path = "/api/v4/projects/{id}/environments",
    params(
        ("id" = i64, Path, description = "Project id"),
    ),
    responses(
        (status = 200, description = "Staging and Production environments of the project", body = [Environment], content_type = "application/json"),
    ),
    tag = "environments",
)]
#[must_use]
pub fn list(project_id: i64) -> Reply {
    Reply::json(&environments::environments(project_id), None)
}
