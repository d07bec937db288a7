//! Response headers mimicking a GitLab instance behind nginx.

use crate::api::pagination::Pagination;
use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use tracing::debug;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Per-response values that are not constant.
#[derive(Debug, Clone)]
pub struct ResponseMeta<'a> {
    pub correlation_id: &'a str,
    pub runtime: &'a str,
    pub path: &'a str,
    pub port: u16,
}

/// Build the header set for a response.
///
/// Pagination headers are only present when `pagination` is `Some`; an absent
/// previous or next page is sent as an empty value.
#[must_use]
pub fn compose(meta: &ResponseMeta<'_>, pagination: Option<&Pagination>) -> HeaderMap {
    let mut headers = HeaderMap::new();

    insert(&mut headers, header::CONTENT_TYPE, "application/json");
    insert(&mut headers, header::CACHE_CONTROL, "no-cache");
    insert(&mut headers, HeaderName::from_static("nel"), r#"{"max_age": 0}"#);
    insert(
        &mut headers,
        header::REFERRER_POLICY,
        "strict-origin-when-cross-origin",
    );
    insert(&mut headers, header::SERVER, "nginx");
    insert(
        &mut headers,
        header::STRICT_TRANSPORT_SECURITY,
        "max-age=31536000; preload",
    );
    insert(&mut headers, header::VARY, "Origin");
    insert(&mut headers, header::X_CONTENT_TYPE_OPTIONS, "nosniff");
    insert(&mut headers, header::X_FRAME_OPTIONS, "SAMEORIGIN");
    insert(
        &mut headers,
        HeaderName::from_static("x-gitlab-meta"),
        &format!(
            r#"{{"correlation_id":"{}","version":"1"}}"#,
            meta.correlation_id
        ),
    );
    // configured port and a single slash, unlike the fixed `localhost:8080/` prefix upstream
    insert(
        &mut headers,
        header::LINK,
        &format!("<http://localhost:{}{}>", meta.port, meta.path),
    );
    insert(
        &mut headers,
        HeaderName::from_static(X_REQUEST_ID),
        meta.correlation_id,
    );
    insert(&mut headers, HeaderName::from_static("x-runtime"), meta.runtime);

    if let Some(pagination) = pagination {
        let optional = |page: Option<i64>| page.map(|p| p.to_string()).unwrap_or_default();

        insert(
            &mut headers,
            HeaderName::from_static("x-next-page"),
            &optional(pagination.next_page),
        );
        insert(
            &mut headers,
            HeaderName::from_static("x-prev-page"),
            &optional(pagination.prev_page),
        );
        insert(
            &mut headers,
            HeaderName::from_static("x-total"),
            &pagination.total.to_string(),
        );
        insert(
            &mut headers,
            HeaderName::from_static("x-total-pages"),
            &pagination.total_pages.to_string(),
        );
        insert(
            &mut headers,
            HeaderName::from_static("x-page"),
            &pagination.page.to_string(),
        );
        insert(
            &mut headers,
            HeaderName::from_static("x-per-page"),
            &pagination.per_page.to_string(),
        );
    }

    headers
}

fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(err) => debug!("Failed to parse {} header: {}", name, err),
    }
}
