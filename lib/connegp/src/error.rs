use thiserror::Error;

/// An error that aborts a negotiation.
///
/// Absent headers or query arguments are never an error. They simply express no preference.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NegotiationError {
    #[error(
        "You have requested a profile using an Accept-Profile header that is incorrectly formatted ({0})."
    )]
    MalformedAcceptProfile(String),
    #[error(
        "You have requested a media type using an Accept header that is incorrectly formatted ({0})."
    )]
    MalformedAccept(String),
    #[error(
        "You have requested a profile using a _profile query argument that is incorrectly formatted ({0})."
    )]
    MalformedProfileArgument(String),
    #[error("The request object does not provide access to its {0}.")]
    UnsupportedRequestShape(&'static str),
    #[error("The default profile '{0}' is not part of the profile registry.")]
    UnknownDefaultProfile(String),
}

impl NegotiationError {
    /// Whether the error was caused by the client sending a malformed request.
    ///
    /// All other errors indicate that the negotiation was wired up incorrectly.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NegotiationError::MalformedAcceptProfile(_)
                | NegotiationError::MalformedAccept(_)
                | NegotiationError::MalformedProfileArgument(_)
        )
    }
}
