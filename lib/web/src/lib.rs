//! Serves resources under content negotiation by profile with [axum].
//!
//! The [`Negotiated`] extractor runs the negotiation of the [`connegp`] crate for any handler and
//! [`ProfileHeaders`] adds the response headers that advertise the selected and the alternative
//! representations.

use anyhow::Context;
use axum::response::Redirect;
use axum::{routing::get, Router};
use tracing::info;

mod config;
mod error;
mod profiles;
mod state;

pub use config::ServerConfig;
pub use error::ConnegpServerError;
pub use profiles::{AxumNegotiationRequest, Negotiated, ProfileHeaders, CONTENT_PROFILE};
pub use state::AppState;

/// Starts a server that serves the profile catalogue of `config` until it is shut down.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::try_new(config.registry, &config.default_profile, &config.base_iri)?;

    let app = create_router(state);
    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(config.bind.as_str())
        .await
        .with_context(|| format!("Failed to bind to '{}'", config.bind))?;
    info!(addr = %listener.local_addr()?, "Listening");

    Ok(axum::serve(listener, app).await?)
}

/// Creates the routes of the server.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/profiles") }))
        .merge(profiles::create_profiles_routes())
        .with_state(state)
}
