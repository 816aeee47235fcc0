use anyhow::Context;
use connegp_model::{ProfileError, ProfileRegistry};
use oxiri::Iri;
use std::sync::Arc;

/// The state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<ProfileRegistry>,
    default_profile: Arc<str>,
    base_iri: Arc<str>,
}

impl AppState {
    /// Creates a new state, checking that `default_profile` is part of `registry` and that
    /// `base_iri` is an absolute IRI.
    pub fn try_new(
        registry: ProfileRegistry,
        default_profile: &str,
        base_iri: &str,
    ) -> anyhow::Result<Self> {
        if !registry.contains(default_profile) {
            return Err(ProfileError::UnknownDefaultProfile(default_profile.to_owned()).into());
        }
        Iri::parse(base_iri).with_context(|| format!("Invalid base IRI '{base_iri}'"))?;
        Ok(Self {
            registry: Arc::new(registry),
            default_profile: Arc::from(default_profile),
            base_iri: Arc::from(base_iri.trim_end_matches('/')),
        })
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn default_profile(&self) -> &str {
        &self.default_profile
    }

    /// Returns the IRI of the resource served at `path`.
    pub fn resource_iri(&self, path: &str) -> String {
        format!("{}{path}", self.base_iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connegp_model::Profile;

    fn registry() -> ProfileRegistry {
        ProfileRegistry::try_from_iter([Profile::alternates()]).unwrap()
    }

    #[test]
    fn resource_iri_ignores_trailing_slash() {
        let state = AppState::try_new(registry(), "alt", "http://example.com/").unwrap();
        assert_eq!(
            state.resource_iri("/profiles"),
            "http://example.com/profiles"
        );
    }

    #[test]
    fn unknown_default_profile() {
        assert!(AppState::try_new(registry(), "dcat", "http://example.com").is_err());
    }

    #[test]
    fn invalid_base_iri() {
        assert!(AppState::try_new(registry(), "alt", "not an iri").is_err());
        assert!(AppState::try_new(registry(), "alt", "/relative").is_err());
    }
}
