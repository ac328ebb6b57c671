//! # Web Layer
//!
//! axum router for the public page and the admin screens. Handlers are thin:
//! extract the form, call [`ShowcaseApi`], then render or redirect. Every
//! successful mutation answers `303 See Other` to the matching list page.

use crate::api::ShowcaseApi;
use crate::error::ShowcaseError;
use crate::store::fs_backend::FsBackend;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod render;
pub mod templates;

pub use render::{Renderer, SiteInfo};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ShowcaseApi<FsBackend>>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(api: ShowcaseApi<FsBackend>, renderer: Renderer) -> Self {
        Self {
            api: Arc::new(api),
            renderer: Arc::new(renderer),
        }
    }
}

/// Create the router with every page and the static file mount
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        // Products
        .route("/admin", get(handlers::products::list))
        .route("/admin/add", post(handlers::products::add))
        .route("/admin/edit/:id", get(handlers::products::edit_form))
        .route("/admin/edit", post(handlers::products::edit))
        .route("/admin/delete", post(handlers::products::delete))
        // Sections
        .route("/admin/sections", get(handlers::sections::list))
        .route("/admin/sections/add", post(handlers::sections::add))
        .route(
            "/admin/sections/edit/:id",
            get(handlers::sections::edit_form),
        )
        .route("/admin/sections/edit", post(handlers::sections::edit))
        .route("/admin/sections/delete", post(handlers::sections::delete))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl+C
pub async fn serve(router: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    tracing::info!("   Admin: http://{}/admin", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C, shutting down");
}

impl IntoResponse for ShowcaseError {
    fn into_response(self) -> Response {
        let status = match &self {
            ShowcaseError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
