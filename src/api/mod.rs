//! HTTP API for the song catalog.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | /api/songs | [`handlers::create_song`] |
//! | GET | /api/songs/filter | [`handlers::list_songs`] |
//! | GET | /api/songs/{id} | [`handlers::get_song_text`] |
//! | PUT | /api/songs/{id} | [`handlers::update_song`] |
//! | DELETE | /api/songs/{id} | [`handlers::delete_song`] |
//!
//! Every request runs under a deadline. When it expires the handler future
//! is dropped, which cancels any in-flight database or enrichment call.

pub mod error;
pub mod handlers;
pub mod payload;

use std::any::Any;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::service::SongService;
use error::ApiError;

/// Build the router with all routes and middleware.
pub fn router(service: SongService, request_timeout: Duration) -> Router {
    Router::new()
        .route("/api/songs", post(handlers::create_song))
        .route("/api/songs/filter", get(handlers::list_songs))
        .route(
            "/api/songs/{id}",
            get(handlers::get_song_text)
                .put(handlers::update_song)
                .delete(handlers::delete_song),
        )
        .layer(middleware::from_fn_with_state(request_timeout, deadline))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn deadline(State(timeout): State<Duration>, request: Request, next: Next) -> Response {
    let uri = request.uri().clone();
    match tokio::time::timeout(timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(%uri, ?timeout, "Request deadline expired");
            ApiError::Internal("request timed out").into_response()
        }
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");
    ApiError::Internal("internal server error").into_response()
}

/// Serve until Ctrl-C or SIGTERM, then give in-flight requests up to
/// `grace` to finish.
pub async fn serve(listener: TcpListener, app: Router, grace: Duration) -> std::io::Result<()> {
    serve_until(listener, app, shutdown_signal(), grace).await
}

/// Serve until `signal` resolves. Connections still open `grace` after the
/// signal are dropped.
async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let signalled = Arc::new(Notify::new());
    let notify = signalled.clone();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            notify.notify_one();
        })
        .into_future();
    tokio::pin!(server);

    let expired = async {
        signalled.notified().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = &mut server => result,
        _ = expired => {
            tracing::warn!(?grace, "Shutdown deadline expired, dropping open connections");
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal, starting shutdown");
}
