use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const ENVIRONMENT_NAMES: [&str; 2] = ["Staging", "Production"];
const STATE_AVAILABLE: &str = "available";

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub id: i64,
    pub name: String,
    pub state: String,
    pub external_url: Option<String>,
    pub description: Option<String>,
}

/// The two environments of a project, ids `2*project_id-1` and `2*project_id`.
///
/// The project id is not validated; ids wrap on overflow.
#[must_use]
pub fn environments(project_id: i64) -> Vec<Environment> {
    let first_id = project_id.wrapping_mul(2).wrapping_sub(1);

    ENVIRONMENT_NAMES
        .iter()
        .zip(0_i64..)
        .map(|(name, offset)| Environment {
            id: first_id.wrapping_add(offset),
            name: (*name).to_string(),
            state: STATE_AVAILABLE.to_string(),
            external_url: None,
            description: None,
        })
        .collect()
}
