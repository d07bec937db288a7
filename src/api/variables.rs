use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const VARIABLE_KEY: &str = "DEBUG_ENABLED";
const VARIABLE_VALUE: &str = "1";
const SCOPES: [&str; 3] = ["*", "Staging", "Production"];

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub environment_scope: String,
    pub raw: bool,
    pub hidden: bool,
    pub protected: bool,
    pub masked: bool,
}

/// One raw `DEBUG_ENABLED=1` variable per environment scope.
#[must_use]
pub fn variables() -> Vec<Variable> {
    SCOPES
        .iter()
        .map(|scope| Variable {
            key: VARIABLE_KEY.to_string(),
            value: VARIABLE_VALUE.to_string(),
            description: None,
            environment_scope: scope.to_lowercase(),
            raw: true,
            hidden: false,
            protected: false,
            masked: false,
        })
        .collect()
}
