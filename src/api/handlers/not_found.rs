use crate::api::handlers::Reply;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    error: String,
}

impl Default for NotFound {
    fn default() -> Self {
        Self {
            error: "404 Not Found".to_string(),
        }
    }
}

/// Error body for unknown paths. The status code stays 200.
#[must_use]
pub fn not_found() -> Reply {
    Reply::json(&NotFound::default(), None)
}
