mod alternates;
mod catalogue;
mod html;
mod link;
mod negotiation;
mod rdf;

use crate::error::ConnegpServerError;
use crate::state::AppState;
use alternates::render_alternates;
use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use catalogue::render_catalogue;
use connegp_model::ALTERNATES_PROFILE_URI;

pub use link::{ProfileHeaders, CONTENT_PROFILE};
pub use negotiation::{AxumNegotiationRequest, Negotiated};

pub fn create_profiles_routes() -> Router<AppState> {
    Router::new().route("/profiles", get(handle_profiles_get))
}

/// Serves the profile catalogue in the negotiated profile and media type.
async fn handle_profiles_get(
    State(state): State<AppState>,
    uri: Uri,
    Negotiated(negotiation): Negotiated,
) -> Result<Response, ConnegpServerError> {
    let resource_iri = state.resource_iri(uri.path());
    let registry = state.registry();

    let is_alternates = registry
        .get(&negotiation.profile)
        .is_some_and(|profile| profile.uri() == ALTERNATES_PROFILE_URI);
    let body = if is_alternates {
        render_alternates(
            &negotiation.mediatype,
            &resource_iri,
            registry,
            state.default_profile(),
        )?
    } else {
        render_catalogue(&negotiation.mediatype, registry)?
    };

    let headers = ProfileHeaders::new(&negotiation, registry, &resource_iri);
    Ok((headers, body).into_response())
}
