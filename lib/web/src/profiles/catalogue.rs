use crate::error::ConnegpServerError;
use crate::profiles::html;
use crate::profiles::rdf::{prof, rdf_format, rdfs, serialize_triples};
use anyhow::anyhow;
use connegp_model::mediatypes::{APPLICATION_JSON, TEXT_HTML};
use connegp_model::{Profile, ProfileRegistry};
use oxrdf::vocab::rdf;
use oxrdf::{LiteralRef, NamedNodeRef, TripleRef};

/// Renders the catalogue of every profile in `registry`.
pub fn render_catalogue(
    mediatype: &str,
    registry: &ProfileRegistry,
) -> Result<String, ConnegpServerError> {
    match mediatype {
        TEXT_HTML => Ok(catalogue_html(registry)),
        APPLICATION_JSON => serde_json::to_string(&registry.iter().collect::<Vec<_>>())
            .map_err(|e| ConnegpServerError::Internal(anyhow!(e))),
        _ => {
            let format = rdf_format(mediatype)?;
            serialize_triples(format, registry.iter().flat_map(profile_triples))
        }
    }
}

fn catalogue_html(registry: &ProfileRegistry) -> String {
    let rows = registry
        .iter()
        .map(|profile| {
            format!(
                "<tr><td>{}</td><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td></tr>\n",
                html::escape(profile.token()),
                html::escape(profile.uri()),
                html::escape(profile.label()),
                html::escape(profile.comment()),
                html::escape(&profile.mediatypes().join(", "))
            )
        })
        .collect::<String>();
    let body = format!(
        "<table>\n<tr><th>Token</th><th>Profile</th><th>Description</th><th>Media types</th></tr>\n{rows}</table>\n"
    );
    html::page("Profiles", &body)
}

fn profile_triples(profile: &Profile) -> Vec<TripleRef<'_>> {
    let subject = NamedNodeRef::new_unchecked(profile.uri());
    let mut triples = vec![
        TripleRef::new(subject, rdf::TYPE, prof::PROFILE),
        TripleRef::new(
            subject,
            prof::HAS_TOKEN,
            LiteralRef::new_simple_literal(profile.token()),
        ),
        TripleRef::new(
            subject,
            rdfs::LABEL,
            LiteralRef::new_simple_literal(profile.label()),
        ),
    ];
    if !profile.comment().is_empty() {
        triples.push(TripleRef::new(
            subject,
            rdfs::COMMENT,
            LiteralRef::new_simple_literal(profile.comment()),
        ));
    }
    triples
}
