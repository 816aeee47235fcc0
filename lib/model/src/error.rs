use thiserror::Error;

/// An error raised while declaring profiles or assembling a [`ProfileRegistry`](crate::ProfileRegistry).
///
/// These errors indicate a faulty server-side declaration. They never depend on an incoming
/// request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("The profile URI '{uri}' is not a valid absolute IRI: {reason}")]
    InvalidUri { uri: String, reason: String },
    #[error("The profile token '{0}' is empty or contains whitespace, ',', ';', '<' or '>'")]
    InvalidToken(String),
    #[error("The profile '{0}' does not declare any media type")]
    NoMediaTypes(String),
    #[error("The default media type '{mediatype}' of profile '{token}' is not one of its media types")]
    UndeclaredDefaultMediaType { token: String, mediatype: String },
    #[error("The default language '{language}' of profile '{token}' is not one of its languages")]
    UndeclaredDefaultLanguage { token: String, language: String },
    #[error("The profile token '{0}' is declared more than once")]
    DuplicateToken(String),
    #[error("The profile URI '{0}' is declared more than once")]
    DuplicateUri(String),
    #[error("The default profile '{0}' is not part of the registry")]
    UnknownDefaultProfile(String),
}
