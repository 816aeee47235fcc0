use crate::{Profile, ProfileDefinition, ProfileError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The set of profiles a resource type can be rendered under.
///
/// Profiles are looked up by token or, in reverse, by URI. Both are unique within a registry.
/// The declaration order is kept so that anything derived from the whole registry (e.g., `Link`
/// headers) is deterministic. It plays no role in negotiation.
#[derive(Clone, Debug, Default)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
    by_token: FxHashMap<String, usize>,
    by_uri: FxHashMap<String, usize>,
}

impl ProfileRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from `profiles`, rejecting duplicate tokens or URIs.
    pub fn try_from_iter(
        profiles: impl IntoIterator<Item = Profile>,
    ) -> Result<Self, ProfileError> {
        let mut registry = Self::new();
        for profile in profiles {
            registry.insert(profile)?;
        }
        Ok(registry)
    }

    /// Adds `profile` to the registry.
    pub fn insert(&mut self, profile: Profile) -> Result<(), ProfileError> {
        if self.by_token.contains_key(profile.token()) {
            return Err(ProfileError::DuplicateToken(profile.token().to_owned()));
        }
        if self.by_uri.contains_key(profile.uri()) {
            return Err(ProfileError::DuplicateUri(profile.uri().to_owned()));
        }

        let index = self.profiles.len();
        self.by_token.insert(profile.token().to_owned(), index);
        self.by_uri.insert(profile.uri().to_owned(), index);
        self.profiles.push(profile);
        Ok(())
    }

    pub fn get(&self, token: &str) -> Option<&Profile> {
        self.by_token.get(token).map(|index| &self.profiles[*index])
    }

    /// Checks whether a profile with the exact `token` is declared.
    pub fn contains(&self, token: &str) -> bool {
        self.by_token.contains_key(token)
    }

    /// Returns the token of the profile whose URI is exactly `uri`.
    pub fn token_for_uri(&self, uri: &str) -> Option<&str> {
        self.by_uri
            .get(uri)
            .map(|index| self.profiles[*index].token())
    }

    /// Iterates over the profiles in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl<'registry> IntoIterator for &'registry ProfileRegistry {
    type Item = &'registry Profile;
    type IntoIter = std::slice::Iter<'registry, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The declaration of a registry together with its default profile, e.g., as read from a file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistryDefinition {
    /// The token of the profile that is used if a request names no available profile.
    pub default_profile: String,
    pub profiles: Vec<ProfileDefinition>,
}

impl RegistryDefinition {
    /// Validates all profiles and returns the registry together with the default profile token.
    pub fn build(self) -> Result<(ProfileRegistry, String), ProfileError> {
        let profiles = self
            .profiles
            .into_iter()
            .map(Profile::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let registry = ProfileRegistry::try_from_iter(profiles)?;
        if !registry.contains(&self.default_profile) {
            return Err(ProfileError::UnknownDefaultProfile(self.default_profile));
        }
        Ok((registry, self.default_profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(token: &str, uri: &str) -> Profile {
        Profile::try_from(ProfileDefinition {
            uri: uri.to_owned(),
            token: token.to_owned(),
            mediatypes: vec!["text/turtle".to_owned()],
            default_mediatype: "text/turtle".to_owned(),
            ..ProfileDefinition::default()
        })
        .unwrap()
    }

    #[test]
    fn lookup_by_token_and_uri() {
        let registry = ProfileRegistry::try_from_iter([
            profile("dcat", "https://www.w3.org/TR/vocab-dcat/"),
            profile("skos", "https://www.w3.org/TR/skos-reference/"),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("skos"));
        assert!(!registry.contains("SKOS"));
        assert_eq!(
            registry.get("dcat").map(Profile::uri),
            Some("https://www.w3.org/TR/vocab-dcat/")
        );
        assert_eq!(
            registry.token_for_uri("https://www.w3.org/TR/skos-reference/"),
            Some("skos")
        );
        assert_eq!(
            registry.token_for_uri("https://www.w3.org/TR/skos-reference"),
            None
        );
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let registry = ProfileRegistry::try_from_iter([
            profile("b", "http://example.com/b"),
            profile("a", "http://example.com/a"),
            profile("c", "http://example.com/c"),
        ])
        .unwrap();
        let tokens = registry.iter().map(Profile::token).collect::<Vec<_>>();
        assert_eq!(tokens, ["b", "a", "c"]);
    }

    #[test]
    fn duplicate_token_is_rejected() {
        let result = ProfileRegistry::try_from_iter([
            profile("a", "http://example.com/a"),
            profile("a", "http://example.com/other"),
        ]);
        assert_eq!(result.err(), Some(ProfileError::DuplicateToken("a".to_owned())));
    }

    #[test]
    fn duplicate_uri_is_rejected() {
        let result = ProfileRegistry::try_from_iter([
            profile("a", "http://example.com/a"),
            profile("b", "http://example.com/a"),
        ]);
        assert_eq!(
            result.err(),
            Some(ProfileError::DuplicateUri("http://example.com/a".to_owned()))
        );
    }

    #[test]
    fn registry_definition_from_json() {
        let definition: RegistryDefinition = serde_json::from_str(
            r#"{
                "default_profile": "skos",
                "profiles": [{
                    "uri": "https://www.w3.org/TR/skos-reference/",
                    "token": "skos",
                    "label": "SKOS",
                    "mediatypes": ["text/turtle", "application/rdf+xml"],
                    "default_mediatype": "text/turtle"
                }]
            }"#,
        )
        .unwrap();

        let (registry, default_profile) = definition.build().unwrap();
        assert_eq!(default_profile, "skos");
        assert_eq!(registry.get("skos").map(Profile::label), Some("SKOS"));
    }

    #[test]
    fn registry_definition_with_unknown_default() {
        let definition = RegistryDefinition {
            default_profile: "dcat".to_owned(),
            profiles: Vec::new(),
        };
        assert_eq!(
            definition.build().err(),
            Some(ProfileError::UnknownDefaultProfile("dcat".to_owned()))
        );
    }
}
