#![allow(clippy::needless_for_each)]

pub mod catalog;
pub mod environments;
pub mod pagination;
pub mod route;
pub mod token;
pub mod variables;

mod handlers;

pub use self::handlers::{Reply, reply};

use anyhow::{Context, Result, anyhow};
use axum::{
    Extension, Router,
    body::Body,
    http::{HeaderName, HeaderValue, Request},
};
use std::{fmt, future::Future};
use tokio::{
    net::TcpListener,
    sync::{mpsc, oneshot},
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetRequestHeaderLayer, trace::TraceLayer};
use tracing::{Span, debug_span, error, info};
use utoipa::OpenApi;

/// Runtime configuration shared with the handlers.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Listening port, also interpolated into generated URLs.
    pub port: u16,
}

/// Reasons for a handler to stop the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// A response body came out empty, which should never happen.
    EmptyPayload,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "no data written"),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::projects::list,
        handlers::projects::get,
        handlers::environments::list,
        handlers::variables::list,
    ),
    components(
        schemas(
            catalog::Project,
            environments::Environment,
            variables::Variable,
            handlers::not_found::NotFound,
        )
    ),
    tags(
        (name = "projects", description = "Synthetic project catalog"),
        (name = "environments", description = "Project environments"),
        (name = "variables", description = "Project CI/CD variables"),
    )
)]
struct ApiDoc;

/// `OpenAPI` document of the emulated endpoints.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = env!("CARGO_PKG_NAME").to_string();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc.info.description = Some(env!("CARGO_PKG_DESCRIPTION").to_string());
    doc
}

/// Build the application with its middleware stack.
///
/// Every request, whatever its method or path, is answered by the fallback
/// handler. A fresh correlation id replaces any `x-request-id` sent by the client.
pub fn router(port: u16, shutdown_tx: mpsc::UnboundedSender<ShutdownSignal>) -> Router {
    Router::new().fallback(handlers::dispatch).layer(
        ServiceBuilder::new()
            .layer(SetRequestHeaderLayer::overriding(
                HeaderName::from_static(handlers::headers::X_REQUEST_ID),
                |_req: &_| HeaderValue::from_str(token::correlation_id().as_str()).ok(),
            ))
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(Extension(Settings { port }))
            .layer(Extension(shutdown_tx)),
    )
}

/// Bind `[::]:port` and serve until ctrl-c.
/// # Errors
/// Returns an error if the listener cannot be bound or the server stops abnormally
pub async fn new(port: u16) -> Result<()> {
    let listener = TcpListener::bind(format!("::0:{port}"))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("Listening on [::]:{}", port);

    serve(listener, port, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// `port` is the one advertised in generated URLs, which lets tests bind an
/// ephemeral port.
/// # Errors
/// Returns an error if the server fails or a handler requested a fatal stop
pub async fn serve<F>(listener: TcpListener, port: u16, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    serve_with_signals(listener, port, shutdown, tx, rx).await
}

/// Serve with a caller-provided handler channel; any signal received on `rx`
/// stops the server and turns into an error.
async fn serve_with_signals<F>(
    listener: TcpListener,
    port: u16,
    shutdown: F,
    tx: mpsc::UnboundedSender<ShutdownSignal>,
    mut rx: mpsc::UnboundedReceiver<ShutdownSignal>,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (fatal_tx, mut fatal_rx) = oneshot::channel();

    let app = router(port, tx);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            tokio::select! {
                Some(signal) = rx.recv() => {
                    error!("Shutting down: {}", signal);
                    let _ = fatal_tx.send(signal);
                }
                () = shutdown => info!("Gracefully shutdown"),
            }
        })
        .await?;

    match fatal_rx.try_recv() {
        Ok(signal) => Err(anyhow!("server stopped: {signal}")),
        Err(_) => Ok(()),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let method = request.method().as_str();
    let request_id = headers
        .get(handlers::headers::X_REQUEST_ID)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", method, path, request_id)
}
