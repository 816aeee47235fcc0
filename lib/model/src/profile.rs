use crate::ProfileError;
use oxiri::Iri;
use serde::{Deserialize, Serialize};

/// The plain, unvalidated declaration of a [`Profile`].
///
/// This is the shape in which profiles are written down, for example in a registry file. Use
/// [`Profile::try_from`] to validate it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileDefinition {
    /// The canonical URI of the profile.
    pub uri: String,
    /// The short identifier used in the `_profile` query argument.
    pub token: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub comment: String,
    /// The media types the profile can be rendered as, most important first.
    pub mediatypes: Vec<String>,
    pub default_mediatype: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub default_language: Option<String>,
}

/// A declared view of a resource that a client can ask for by token or by URI.
///
/// A profile is immutable once created and always satisfies the following invariants:
/// - the URI is an absolute IRI,
/// - the token is non-empty and free of list syntax,
/// - there is at least one media type and the default media type is one of them,
/// - the default language, if any, is one of the declared languages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    uri: String,
    token: String,
    label: String,
    comment: String,
    mediatypes: Vec<String>,
    default_mediatype: String,
    languages: Vec<String>,
    default_language: Option<String>,
}

impl Profile {
    /// The W3C Alternate Representations profile.
    ///
    /// A resource rendered under this profile lists the other profiles it is available in.
    pub fn alternates() -> Self {
        Self {
            uri: ALTERNATES_PROFILE_URI.to_owned(),
            token: ALTERNATES_PROFILE_TOKEN.to_owned(),
            label: "Alternate Representations".to_owned(),
            comment: "The representation of the resource that lists all other representations \
                (profiles and media types)"
                .to_owned(),
            mediatypes: [
                "text/html",
                "application/json",
                "text/turtle",
                "application/ld+json",
                "application/n-triples",
                "application/rdf+xml",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            default_mediatype: "text/html".to_owned(),
            languages: vec!["en".to_owned()],
            default_language: Some("en".to_owned()),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The media types of this profile in declaration order. Never empty.
    pub fn mediatypes(&self) -> &[String] {
        &self.mediatypes
    }

    pub fn default_mediatype(&self) -> &str {
        &self.default_mediatype
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Checks whether `mediatype` is one of the declared media types (exact string equality).
    pub fn supports_mediatype(&self, mediatype: &str) -> bool {
        self.mediatypes.iter().any(|m| m == mediatype)
    }
}

/// The token reserved for [`Profile::alternates`].
pub const ALTERNATES_PROFILE_TOKEN: &str = "alt";
/// The URI of [`Profile::alternates`].
pub const ALTERNATES_PROFILE_URI: &str = "http://www.w3.org/ns/dx/conneg/altr";

impl TryFrom<ProfileDefinition> for Profile {
    type Error = ProfileError;

    fn try_from(definition: ProfileDefinition) -> Result<Self, Self::Error> {
        let ProfileDefinition {
            uri,
            token,
            label,
            comment,
            mediatypes,
            default_mediatype,
            languages,
            default_language,
        } = definition;

        if !is_valid_token(&token) {
            return Err(ProfileError::InvalidToken(token));
        }

        let uri = Iri::parse(uri.clone())
            .map_err(|e| ProfileError::InvalidUri {
                uri,
                reason: e.to_string(),
            })?
            .into_inner();

        let mut unique_mediatypes: Vec<String> = Vec::with_capacity(mediatypes.len());
        for mediatype in mediatypes {
            if !unique_mediatypes.contains(&mediatype) {
                unique_mediatypes.push(mediatype);
            }
        }
        if unique_mediatypes.is_empty() {
            return Err(ProfileError::NoMediaTypes(token));
        }
        if !unique_mediatypes.contains(&default_mediatype) {
            return Err(ProfileError::UndeclaredDefaultMediaType {
                token,
                mediatype: default_mediatype,
            });
        }

        if let Some(language) = &default_language {
            if !languages.contains(language) {
                return Err(ProfileError::UndeclaredDefaultLanguage {
                    token,
                    language: language.clone(),
                });
            }
        }

        Ok(Self {
            uri,
            token,
            label,
            comment,
            mediatypes: unique_mediatypes,
            default_mediatype,
            languages,
            default_language,
        })
    }
}

fn is_valid_token(token: &str) -> bool {
    !token.is_empty()
        && !token
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ',' | ';' | '<' | '>'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skos_definition() -> ProfileDefinition {
        ProfileDefinition {
            uri: "https://www.w3.org/TR/skos-reference/".to_owned(),
            token: "skos".to_owned(),
            label: "SKOS".to_owned(),
            mediatypes: vec!["text/turtle".to_owned(), "application/rdf+xml".to_owned()],
            default_mediatype: "text/turtle".to_owned(),
            ..ProfileDefinition::default()
        }
    }

    #[test]
    fn valid_definition() {
        let profile = Profile::try_from(skos_definition()).unwrap();
        assert_eq!(profile.token(), "skos");
        assert_eq!(profile.uri(), "https://www.w3.org/TR/skos-reference/");
        assert_eq!(profile.default_mediatype(), "text/turtle");
        assert!(profile.supports_mediatype("application/rdf+xml"));
        assert!(!profile.supports_mediatype("text/html"));
    }

    #[test]
    fn duplicate_mediatypes_are_removed() {
        let mut definition = skos_definition();
        definition.mediatypes = vec![
            "text/turtle".to_owned(),
            "application/rdf+xml".to_owned(),
            "text/turtle".to_owned(),
        ];
        let profile = Profile::try_from(definition).unwrap();
        assert_eq!(profile.mediatypes(), ["text/turtle", "application/rdf+xml"]);
    }

    #[test]
    fn default_mediatype_must_be_declared() {
        let mut definition = skos_definition();
        definition.default_mediatype = "text/html".to_owned();
        assert_eq!(
            Profile::try_from(definition),
            Err(ProfileError::UndeclaredDefaultMediaType {
                token: "skos".to_owned(),
                mediatype: "text/html".to_owned()
            })
        );
    }

    #[test]
    fn mediatypes_must_not_be_empty() {
        let mut definition = skos_definition();
        definition.mediatypes.clear();
        assert_eq!(
            Profile::try_from(definition),
            Err(ProfileError::NoMediaTypes("skos".to_owned()))
        );
    }

    #[test]
    fn relative_uri_is_rejected() {
        let mut definition = skos_definition();
        definition.uri = "skos-reference".to_owned();
        assert!(matches!(
            Profile::try_from(definition),
            Err(ProfileError::InvalidUri { .. })
        ));
    }

    #[test]
    fn urn_is_accepted() {
        let mut definition = skos_definition();
        definition.uri = "urn:example:profile:skos".to_owned();
        assert!(Profile::try_from(definition).is_ok());
    }

    #[test]
    fn token_with_list_syntax_is_rejected() {
        for token in ["", "a,b", "a;q=1", "<a>", "a b"] {
            let mut definition = skos_definition();
            definition.token = token.to_owned();
            assert_eq!(
                Profile::try_from(definition),
                Err(ProfileError::InvalidToken(token.to_owned()))
            );
        }
    }

    #[test]
    fn default_language_must_be_declared() {
        let mut definition = skos_definition();
        definition.languages = vec!["en".to_owned()];
        definition.default_language = Some("de".to_owned());
        assert!(matches!(
            Profile::try_from(definition),
            Err(ProfileError::UndeclaredDefaultLanguage { .. })
        ));
    }

    #[test]
    fn alternates_profile_is_valid() {
        let alt = Profile::alternates();
        assert_eq!(alt.token(), ALTERNATES_PROFILE_TOKEN);
        assert!(alt.supports_mediatype(alt.default_mediatype()));
        assert!(alt.supports_mediatype("application/ld+json"));
    }
}
