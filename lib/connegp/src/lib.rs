//! Content negotiation by profile as described in the W3C
//! [Content Negotiation by Profile](https://www.w3.org/TR/dx-prof-conneg/) specification.
//!
//! Given a request and the [`ProfileRegistry`] of a resource, [`negotiate`] selects exactly one
//! profile and one of its media types. Clients express their preferences through
//! - the `_profile` query argument (e.g., `_profile=dcat` or `_profile=<https://www.w3.org/TR/vocab-dcat/>`),
//! - the `Accept-Profile` header (e.g., `Accept-Profile: <https://www.w3.org/TR/vocab-dcat/>;q=0.8`),
//! - the `_mediatype` query argument (e.g., `_mediatype=text/turtle`),
//! - the `Accept` header.
//!
//! Query arguments take precedence over headers. If no channel names anything available, the
//! default profile and its default media type are used.
//!
//! ```
//! use connegp::{negotiate, RequestSnapshot};
//! use connegp_model::{Profile, ProfileDefinition, ProfileRegistry};
//!
//! let dcat = Profile::try_from(ProfileDefinition {
//!     uri: "https://www.w3.org/TR/vocab-dcat/".to_owned(),
//!     token: "dcat".to_owned(),
//!     mediatypes: vec!["text/html".to_owned(), "text/turtle".to_owned()],
//!     default_mediatype: "text/html".to_owned(),
//!     ..ProfileDefinition::default()
//! })?;
//! let registry = ProfileRegistry::try_from_iter([dcat])?;
//!
//! let request = RequestSnapshot::new().with_header("Accept", "text/turtle");
//! let negotiation = negotiate(&request, &registry, "dcat")?;
//! assert_eq!(negotiation.profile, "dcat");
//! assert_eq!(negotiation.mediatype, "text/turtle");
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod error;
mod negotiate;
pub mod parser;
mod request;

pub use connegp_model as model;
pub use connegp_model::{Profile, ProfileRegistry};
pub use error::NegotiationError;
pub use negotiate::{negotiate, Negotiation};
pub use request::{
    HeaderSource, NegotiationSource, QueryParamSource, RequestSnapshot, ACCEPT, ACCEPT_PROFILE,
    MEDIATYPE_QUERY_ARG, PROFILE_QUERY_ARG,
};
