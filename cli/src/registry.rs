use anyhow::Context;
use connegp_model::mediatypes::{
    APPLICATION_JSON, APPLICATION_LD_JSON, APPLICATION_N_TRIPLES, APPLICATION_RDF_XML, TEXT_HTML,
    TEXT_TURTLE,
};
use connegp_model::{
    Profile, ProfileDefinition, ProfileRegistry, RegistryDefinition, ALTERNATES_PROFILE_TOKEN,
    ALTERNATES_PROFILE_URI,
};
use std::fs;
use std::path::Path;

/// Loads the registry from `path` or returns the built-in one.
///
/// The alternates profile is added unless the registry already declares its token or URI.
pub fn load_registry(
    path: Option<&Path>,
    default_profile: Option<String>,
) -> anyhow::Result<(ProfileRegistry, String)> {
    let mut definition = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<RegistryDefinition>(&content)
                .with_context(|| format!("Invalid registry file {}", path.display()))?
        }
        None => builtin_registry(),
    };
    if let Some(default_profile) = default_profile {
        definition.default_profile = default_profile;
    }

    let (mut registry, default_profile) = definition.build()?;
    if !registry.contains(ALTERNATES_PROFILE_TOKEN)
        && registry.token_for_uri(ALTERNATES_PROFILE_URI).is_none()
    {
        registry.insert(Profile::alternates())?;
    }
    Ok((registry, default_profile))
}

fn builtin_registry() -> RegistryDefinition {
    RegistryDefinition {
        default_profile: "dcat".to_owned(),
        profiles: vec![
            ProfileDefinition {
                uri: "https://www.w3.org/TR/vocab-dcat/".to_owned(),
                token: "dcat".to_owned(),
                label: "DCAT".to_owned(),
                comment: "Data Catalog Vocabulary".to_owned(),
                mediatypes: owned([
                    TEXT_HTML,
                    APPLICATION_JSON,
                    TEXT_TURTLE,
                    APPLICATION_LD_JSON,
                    APPLICATION_RDF_XML,
                    APPLICATION_N_TRIPLES,
                ]),
                default_mediatype: TEXT_HTML.to_owned(),
                languages: vec!["en".to_owned()],
                default_language: Some("en".to_owned()),
            },
            ProfileDefinition {
                uri: "http://www.w3.org/2004/02/skos/core".to_owned(),
                token: "skos".to_owned(),
                label: "SKOS".to_owned(),
                comment: "Simple Knowledge Organization System".to_owned(),
                mediatypes: owned([
                    TEXT_TURTLE,
                    APPLICATION_LD_JSON,
                    APPLICATION_RDF_XML,
                    APPLICATION_N_TRIPLES,
                ]),
                default_mediatype: TEXT_TURTLE.to_owned(),
                languages: vec!["en".to_owned()],
                default_language: Some("en".to_owned()),
            },
        ],
    }
}

fn owned<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.into_iter().map(str::to_owned).collect()
}
