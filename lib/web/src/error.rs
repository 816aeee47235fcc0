use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use connegp::NegotiationError;

#[derive(thiserror::Error, Debug)]
pub enum ConnegpServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Negotiation(#[from] NegotiationError),
    #[error("The server can not render the media type '{0}'")]
    NotAcceptable(String),
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl IntoResponse for ConnegpServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ConnegpServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ConnegpServerError::Negotiation(error) if error.is_client_error() => {
                (StatusCode::BAD_REQUEST, error.to_string())
            }
            ConnegpServerError::Negotiation(error) => {
                tracing::error!(%error, "Negotiation is not set up correctly");
                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
            }
            ConnegpServerError::NotAcceptable(mediatype) => (
                StatusCode::NOT_ACCEPTABLE,
                format!("The server can not render the media type '{mediatype}'"),
            ),
            ConnegpServerError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, message).into_response()
    }
}
