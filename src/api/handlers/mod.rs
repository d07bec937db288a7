pub mod environments;
pub mod headers;
pub mod not_found;
pub mod projects;
pub mod variables;

use crate::api::{
    Settings, ShutdownSignal, pagination::PageQuery, pagination::Pagination, route::Route, token,
};
use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Serialized body plus the pagination that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub payload: Vec<u8>,
    pub pagination: Option<Pagination>,
}

impl Reply {
    /// Serialize `value`; a failure is logged and leaves the payload empty.
    pub fn json<T: Serialize + ?Sized>(value: &T, pagination: Option<Pagination>) -> Self {
        let payload = serde_json::to_vec(value).unwrap_or_else(|err| {
            error!("Failed to serialize payload: {}", err);
            Vec::new()
        });

        Self {
            payload,
            pagination,
        }
    }
}

/// Compute the reply for a classified request.
#[must_use]
pub fn reply(route: Route, query: &PageQuery, port: u16) -> Reply {
    match route {
        Route::Projects { project_id: 0 } => projects::list(query, port),
        Route::Projects { project_id } => projects::get(project_id, port),
        Route::Environments { project_id } => environments::list(project_id),
        Route::Variables { .. } => variables::list(),
        Route::NotFound => not_found::not_found(),
    }
}

// axum fallback handler, every method and path lands here
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn dispatch(
    uri: Uri,
    request_headers: HeaderMap,
    settings: Extension<Settings>,
    shutdown_tx: Extension<mpsc::UnboundedSender<ShutdownSignal>>,
) -> Response {
    let decoded_path = percent_decode_str(uri.path()).decode_utf8_lossy();
    let path = decoded_path.as_ref();
    info!("Request: {}", path);

    let route = Route::parse(path);
    let query = PageQuery::parse(uri.query());
    debug!(kind = route.kind(), ?query, "classified request");

    let reply = reply(route, &query, settings.port);

    let correlation_id = request_headers
        .get(headers::X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map_or_else(token::correlation_id, ToString::to_string);
    let runtime = token::runtime();

    let response_headers = headers::compose(
        &headers::ResponseMeta {
            correlation_id: &correlation_id,
            runtime: &runtime,
            path,
            port: settings.port,
        },
        reply.pagination.as_ref(),
    );

    maybe_signal_shutdown(&reply.payload, &shutdown_tx);

    (StatusCode::OK, response_headers, reply.payload).into_response()
}

/// Ask the server to stop when a body came out empty. Returns true if it did.
fn maybe_signal_shutdown(
    payload: &[u8],
    shutdown_tx: &mpsc::UnboundedSender<ShutdownSignal>,
) -> bool {
    if !payload.is_empty() {
        return false;
    }

    error!("No data written");
    let _ = shutdown_tx.send(ShutdownSignal::EmptyPayload);
    true
}
