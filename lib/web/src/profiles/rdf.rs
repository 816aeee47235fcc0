use crate::error::ConnegpServerError;
use anyhow::anyhow;
use connegp_model::mediatypes::{
    rdf_serialization_name, APPLICATION_LD_JSON, APPLICATION_N_TRIPLES, APPLICATION_RDF_XML,
    TEXT_N3, TEXT_TURTLE,
};
use oxrdf::TripleRef;
use oxrdfio::{RdfFormat, RdfSerializer};

pub mod altr {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/ns/dx/conneg/altr#";

    pub const REPRESENTATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dx/conneg/altr#Representation");
    pub const HAS_REPRESENTATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dx/conneg/altr#hasRepresentation");
    pub const HAS_DEFAULT_REPRESENTATION: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/ns/dx/conneg/altr#hasDefaultRepresentation",
    );
}

pub mod prof {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/ns/dx/prof/";

    pub const PROFILE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dx/prof/Profile");
    pub const HAS_TOKEN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dx/prof/hasToken");
}

pub mod dct {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://purl.org/dc/terms/";

    pub const CONFORMS_TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/conformsTo");
    pub const FORMAT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/format");
}

pub mod rdfs {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

    pub const RESOURCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#Resource");
    pub const LABEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");
    pub const COMMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#comment");
}

/// Returns the RDF format of `mediatype` if the server can serialize it.
///
/// Commonly seen incorrect media types (e.g., `text/ttl`) are mapped through
/// [`rdf_serialization_name`].
pub fn rdf_format(mediatype: &str) -> Result<RdfFormat, ConnegpServerError> {
    RdfFormat::from_media_type(mediatype)
        .or_else(|| {
            let canonical = match rdf_serialization_name(mediatype)? {
                "turtle" => TEXT_TURTLE,
                "n3" => TEXT_N3,
                "nt" => APPLICATION_N_TRIPLES,
                "json-ld" => APPLICATION_LD_JSON,
                "xml" => APPLICATION_RDF_XML,
                _ => return None,
            };
            RdfFormat::from_media_type(canonical)
        })
        .ok_or_else(|| ConnegpServerError::NotAcceptable(mediatype.to_owned()))
}

/// Serializes `triples` in `format`.
pub fn serialize_triples<'triple>(
    format: RdfFormat,
    triples: impl IntoIterator<Item = TripleRef<'triple>>,
) -> Result<String, ConnegpServerError> {
    let mut serializer = RdfSerializer::from_format(format);
    for (prefix, namespace) in [
        ("altr", altr::NAMESPACE),
        ("dct", dct::NAMESPACE),
        ("prof", prof::NAMESPACE),
        ("rdfs", rdfs::NAMESPACE),
    ] {
        serializer = serializer
            .with_prefix(prefix, namespace)
            .map_err(|e| ConnegpServerError::Internal(anyhow!(e)))?;
    }

    let mut serializer = serializer.for_writer(Vec::new());
    for triple in triples {
        serializer
            .serialize_triple(triple)
            .map_err(|e| ConnegpServerError::Internal(anyhow!(e)))?;
    }
    let bytes = serializer
        .finish()
        .map_err(|e| ConnegpServerError::Internal(anyhow!(e)))?;
    String::from_utf8(bytes).map_err(|e| ConnegpServerError::Internal(anyhow!(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_formats() {
        assert_eq!(rdf_format("text/turtle").unwrap(), RdfFormat::Turtle);
        assert_eq!(
            rdf_format("application/n-triples").unwrap(),
            RdfFormat::NTriples
        );
        assert!(rdf_format("application/ld+json").is_ok());
    }

    #[test]
    fn incorrect_mediatypes_are_mapped() {
        assert_eq!(rdf_format("text/ttl").unwrap(), RdfFormat::Turtle);
        assert_eq!(rdf_format("text/plain").unwrap(), RdfFormat::NTriples);
        assert_eq!(rdf_format("application/rdf xml").unwrap(), RdfFormat::RdfXml);
        assert_eq!(rdf_format("application/rdf").unwrap(), RdfFormat::RdfXml);
        assert!(rdf_format("application/ld json").is_ok());
    }

    #[test]
    fn unknown_mediatype() {
        assert!(matches!(
            rdf_format("application/pdf"),
            Err(ConnegpServerError::NotAcceptable(_))
        ));
    }
}
