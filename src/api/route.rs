use crate::api::pagination::parse_int;

/// Every path served by the mock starts with this prefix.
pub const API_PREFIX: &str = "/api/v4/projects";

/// Classification of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/api/v4/projects` (id 0) or `/api/v4/projects/{id}`.
    Projects { project_id: i64 },
    /// `/api/v4/projects/{id}/environments`
    Environments { project_id: i64 },
    /// `/api/v4/projects/{id}/variables`, the id is ignored.
    Variables { project_id: i64 },
    NotFound,
}

impl Route {
    /// Classify `path`.
    ///
    /// The path is split on `/` after the leading slash: the fourth segment is
    /// the project id (0 when missing or malformed) and the fifth is the kind,
    /// `projects` when missing. Extra segments are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if !path.starts_with(API_PREFIX) {
            return Self::NotFound;
        }

        let parts: Vec<&str> = path[1..].split('/').collect();
        let project_id = parts.get(3).map_or(0, |segment| parse_int(segment));
        let kind = parts.get(4).copied().unwrap_or("projects");

        match kind {
            "projects" => Self::Projects { project_id },
            "environments" => Self::Environments { project_id },
            "variables" => Self::Variables { project_id },
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Projects { .. } => "projects",
            Self::Environments { .. } => "environments",
            Self::Variables { .. } => "variables",
            Self::NotFound => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_list() {
        assert_eq!(
            Route::parse("/api/v4/projects"),
            Route::Projects { project_id: 0 }
        );
        assert_eq!(
            Route::parse("/api/v4/projects/"),
            Route::Projects { project_id: 0 }
        );
    }

    #[test]
    fn single_project() {
        assert_eq!(
            Route::parse("/api/v4/projects/5"),
            Route::Projects { project_id: 5 }
        );
    }

    #[test]
    fn malformed_id_means_no_filter() {
        assert_eq!(
            Route::parse("/api/v4/projects/abc"),
            Route::Projects { project_id: 0 }
        );
        assert_eq!(
            Route::parse("/api/v4/projects/abc/environments"),
            Route::Environments { project_id: 0 }
        );
    }

    #[test]
    fn environments_and_variables() {
        assert_eq!(
            Route::parse("/api/v4/projects/3/environments"),
            Route::Environments { project_id: 3 }
        );
        assert_eq!(
            Route::parse("/api/v4/projects/1/variables"),
            Route::Variables { project_id: 1 }
        );
        assert_eq!(
            Route::parse("/api/v4/projects/1/variables/extra/segments"),
            Route::Variables { project_id: 1 }
        );
    }

    #[test]
    fn unknown_kind_is_not_found() {
        assert_eq!(
            Route::parse("/api/v4/projects/1/pipelines"),
            Route::NotFound
        );
        assert_eq!(Route::parse("/api/v4/projects/1/"), Route::NotFound);
    }

    #[test]
    fn other_prefixes_are_not_found() {
        assert_eq!(Route::parse("/unknown/path"), Route::NotFound);
        assert_eq!(Route::parse("/"), Route::NotFound);
        assert_eq!(Route::parse(""), Route::NotFound);
        assert_eq!(Route::parse("/api/v4/groups"), Route::NotFound);
    }

    #[test]
    fn prefix_match_is_literal() {
        // the prefix is compared as a string, not per segment
        assert_eq!(
            Route::parse("/api/v4/projectsfoo"),
            Route::Projects { project_id: 0 }
        );
    }

    #[test]
    fn kind_names() {
        assert_eq!(Route::Projects { project_id: 0 }.kind(), "projects");
        assert_eq!(Route::Environments { project_id: 0 }.kind(), "environments");
        assert_eq!(Route::Variables { project_id: 0 }.kind(), "variables");
        assert_eq!(Route::NotFound.kind(), "not_found");
    }
}
