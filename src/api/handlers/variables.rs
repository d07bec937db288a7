use crate::api::{
    handlers::Reply,
    variables::{self, Variable},
};

#[utoipa::path(
    get,
    operation_id = "list_variables",
    path = "/api/v4/projects/{id}/variables",
    params(
        ("id" = i64, Path, description = "Project id, ignored"),
    ),
    responses(
        (status = 200, description = "CI/CD variables, the same for every project", body = [Variable], content_type = "application/json"),
    ),
    tag = "variables",
)]
#[must_use]
pub fn list() -> Reply {
    Reply::json(&variables::variables(), None)
}
