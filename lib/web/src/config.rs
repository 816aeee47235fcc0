use connegp_model::ProfileRegistry;

/// Holds the configuration for a Connegp web server.
pub struct ServerConfig {
    /// The profiles the served resources are available in.
    pub registry: ProfileRegistry,
    /// The token of the profile that is used if a request names no available profile.
    pub default_profile: String,
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// The IRI under which the server is reachable. Used to name the served resources.
    pub base_iri: String,
    /// Whether CORS is enabled.
    pub cors: bool,
}
