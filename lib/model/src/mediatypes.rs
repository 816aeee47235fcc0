//! Well-known media types of RDF-serving applications.

pub const TEXT_HTML: &str = "text/html";
pub const TEXT_TURTLE: &str = "text/turtle";
pub const TEXT_N3: &str = "text/n3";
pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_LD_JSON: &str = "application/ld+json";
pub const APPLICATION_N_TRIPLES: &str = "application/n-triples";
pub const APPLICATION_RDF_XML: &str = "application/rdf+xml";

/// The media types of the common RDF serializations.
pub const RDF_MEDIATYPES: [&str; 4] = [
    TEXT_TURTLE,
    APPLICATION_RDF_XML,
    APPLICATION_LD_JSON,
    APPLICATION_N_TRIPLES,
];

/// Returns a human-readable name of a well-known media type.
pub fn mediatype_name(mediatype: &str) -> Option<&'static str> {
    Some(match mediatype {
        TEXT_HTML => "HTML",
        TEXT_TURTLE => "Turtle",
        APPLICATION_RDF_XML => "RDF/XML",
        APPLICATION_LD_JSON => "JSON-LD",
        APPLICATION_JSON => "JSON",
        APPLICATION_N_TRIPLES => "N-triples",
        _ => return None,
    })
}

/// Checks whether `mediatype` is one of [`RDF_MEDIATYPES`].
pub fn is_rdf_mediatype(mediatype: &str) -> bool {
    RDF_MEDIATYPES.contains(&mediatype)
}

/// Returns the file extension of an RDF media type.
pub fn rdf_file_extension(mediatype: &str) -> Option<&'static str> {
    Some(match mediatype {
        TEXT_TURTLE => "ttl",
        APPLICATION_RDF_XML => "rdf",
        APPLICATION_LD_JSON => "jsonld",
        APPLICATION_N_TRIPLES => "nt",
        _ => return None,
    })
}

/// Returns the name of the RDF serialization for `mediatype`.
///
/// Besides the registered media types, this also maps a few commonly seen but incorrect ones,
/// including the variants where a `+` got decoded into a space.
pub fn rdf_serialization_name(mediatype: &str) -> Option<&'static str> {
    Some(match mediatype {
        TEXT_TURTLE | "text/ttl" => "turtle",
        TEXT_N3 => "n3",
        APPLICATION_N_TRIPLES | "text/ntriples" | "text/n-triples" => "nt",
        // text/plain is the deprecated media type of N-Triples
        "text/plain" => "nt",
        APPLICATION_LD_JSON | APPLICATION_JSON | "application/ld json" => "json-ld",
        APPLICATION_RDF_XML | "application/rdf" | "application/rdf xml" => "xml",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rdf_mediatypes_have_extensions_and_serializations() {
        for mediatype in RDF_MEDIATYPES {
            assert!(is_rdf_mediatype(mediatype));
            assert!(rdf_file_extension(mediatype).is_some());
            assert!(rdf_serialization_name(mediatype).is_some());
            assert!(mediatype_name(mediatype).is_some());
        }
    }

    #[test]
    fn html_is_not_rdf() {
        assert!(!is_rdf_mediatype(TEXT_HTML));
        assert_eq!(rdf_file_extension(TEXT_HTML), None);
        assert_eq!(mediatype_name(TEXT_HTML), Some("HTML"));
    }

    #[test]
    fn incorrect_mediatypes_are_mapped() {
        assert_eq!(rdf_serialization_name("application/rdf xml"), Some("xml"));
        assert_eq!(rdf_serialization_name("text/plain"), Some("nt"));
        assert_eq!(rdf_serialization_name("text/csv"), None);
    }
}
