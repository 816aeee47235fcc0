use crate::error::ConnegpServerError;
use crate::profiles::html;
use crate::profiles::rdf::{altr, dct, rdf_format, rdfs, serialize_triples};
use anyhow::anyhow;
use connegp_model::mediatypes::{mediatype_name, APPLICATION_JSON, TEXT_HTML};
use connegp_model::{Profile, ProfileRegistry};
use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, LiteralRef, NamedNode, NamedNodeRef, TripleRef};
use serde::Serialize;

/// The JSON representation of the alternates view.
#[derive(Serialize)]
struct AlternatesJson<'data> {
    uri: &'data str,
    profiles: Vec<&'data str>,
    default_profile: &'data str,
}

/// Renders the representations of `resource_iri` that are available through `registry`.
pub fn render_alternates(
    mediatype: &str,
    resource_iri: &str,
    registry: &ProfileRegistry,
    default_profile: &str,
) -> Result<String, ConnegpServerError> {
    match mediatype {
        TEXT_HTML => Ok(alternates_html(resource_iri, registry, default_profile)),
        APPLICATION_JSON => serde_json::to_string(&AlternatesJson {
            uri: resource_iri,
            profiles: registry.iter().map(Profile::token).collect(),
            default_profile,
        })
        .map_err(|e| ConnegpServerError::Internal(anyhow!(e))),
        _ => alternates_rdf(mediatype, resource_iri, registry, default_profile),
    }
}

fn alternates_html(resource_iri: &str, registry: &ProfileRegistry, default_profile: &str) -> String {
    let rows = registry
        .iter()
        .map(|profile| {
            let links = profile
                .mediatypes()
                .iter()
                .map(|mediatype| {
                    let href = format!(
                        "{resource_iri}?_profile={}&_mediatype={mediatype}",
                        profile.token()
                    );
                    let name = mediatype_name(mediatype).unwrap_or(mediatype.as_str());
                    format!(
                        "<a href=\"{}\">{}</a>",
                        html::escape(&href),
                        html::escape(name)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            let marker = if profile.token() == default_profile {
                " (default)"
            } else {
                ""
            };
            format!(
                "<tr><td>{}{marker}</td><td><a href=\"{}\">{}</a></td><td>{links}</td></tr>\n",
                html::escape(profile.token()),
                html::escape(profile.uri()),
                html::escape(profile.label())
            )
        })
        .collect::<String>();
    let body = format!(
        "<table>\n<tr><th>Token</th><th>Profile</th><th>Media types</th></tr>\n{rows}</table>\n"
    );
    html::page(&format!("Alternate Profiles of {resource_iri}"), &body)
}

fn alternates_rdf(
    mediatype: &str,
    resource_iri: &str,
    registry: &ProfileRegistry,
    default_profile: &str,
) -> Result<String, ConnegpServerError> {
    let format = rdf_format(mediatype)?;
    let resource =
        NamedNode::new(resource_iri).map_err(|e| ConnegpServerError::Internal(anyhow!(e)))?;

    let representations = registry
        .iter()
        .flat_map(|profile| {
            profile
                .mediatypes()
                .iter()
                .map(move |mediatype| (BlankNode::default(), profile, mediatype.as_str()))
        })
        .collect::<Vec<_>>();

    let mut graph = vec![TripleRef::new(&resource, rdf::TYPE, rdfs::RESOURCE)];
    for (node, profile, mediatype) in &representations {
        graph.push(TripleRef::new(&resource, altr::HAS_REPRESENTATION, node));
        graph.push(TripleRef::new(node, rdf::TYPE, altr::REPRESENTATION));
        graph.push(TripleRef::new(
            node,
            dct::CONFORMS_TO,
            NamedNodeRef::new_unchecked(profile.uri()),
        ));
        graph.push(TripleRef::new(
            node,
            dct::FORMAT,
            LiteralRef::new_simple_literal(mediatype),
        ));
        if profile.token() == default_profile && *mediatype == profile.default_mediatype() {
            graph.push(TripleRef::new(
                &resource,
                altr::HAS_DEFAULT_REPRESENTATION,
                node,
            ));
        }
    }

    serialize_triples(format, graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use connegp_model::ProfileDefinition;

    fn registry() -> ProfileRegistry {
        let dcat = Profile::try_from(ProfileDefinition {
            uri: "https://www.w3.org/TR/vocab-dcat/".to_owned(),
            token: "dcat".to_owned(),
            label: "DCAT".to_owned(),
            mediatypes: vec!["text/html".to_owned(), "text/turtle".to_owned()],
            default_mediatype: "text/html".to_owned(),
            ..ProfileDefinition::default()
        })
        .unwrap();
        ProfileRegistry::try_from_iter([dcat, Profile::alternates()]).unwrap()
    }

    #[test]
    fn json() {
        let json = render_alternates(
            "application/json",
            "http://example.com/profiles",
            &registry(),
            "dcat",
        )
        .unwrap();
        assert_eq!(
            json,
            r#"{"uri":"http://example.com/profiles","profiles":["dcat","alt"],"default_profile":"dcat"}"#
        );
    }

    #[test]
    fn html_lists_all_representations() {
        let html = render_alternates("text/html", "http://example.com/profiles", &registry(), "dcat")
            .unwrap();
        assert!(html.contains("dcat (default)"));
        assert!(html.contains("?_profile=dcat&amp;_mediatype=text/turtle"));
        assert!(html.contains(">Turtle</a>"));
    }

    #[test]
    fn ntriples() {
        let nt = render_alternates(
            "application/n-triples",
            "http://example.com/profiles",
            &registry(),
            "dcat",
        )
        .unwrap();
        assert_eq!(
            nt.matches("<http://www.w3.org/ns/dx/conneg/altr#hasRepresentation>")
                .count(),
            2 + 6
        );
        assert_eq!(
            nt.matches("<http://www.w3.org/ns/dx/conneg/altr#hasDefaultRepresentation>")
                .count(),
            1
        );
        assert!(nt.contains("<http://purl.org/dc/terms/conformsTo> <https://www.w3.org/TR/vocab-dcat/>"));
    }

    #[test]
    fn json_ld() {
        let json_ld = render_alternates(
            "application/ld+json",
            "http://example.com/profiles",
            &registry(),
            "dcat",
        )
        .unwrap();
        serde_json::from_str::<serde_json::Value>(&json_ld).unwrap();
        assert!(json_ld.contains("http://example.com/profiles"));
        assert!(json_ld.contains("hasRepresentation"));
    }

    #[test]
    fn unsupported_mediatype() {
        let result = render_alternates(
            "application/pdf",
            "http://example.com/profiles",
            &registry(),
            "dcat",
        );
        assert!(matches!(result, Err(ConnegpServerError::NotAcceptable(_))));
    }
}
