//! The data model of content negotiation by profile: declared [`Profile`]s and the
//! [`ProfileRegistry`] a resource type offers them in.

mod error;
pub mod mediatypes;
mod profile;
mod registry;

pub use error::*;
pub use profile::*;
pub use registry::*;
