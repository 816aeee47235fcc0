use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "connegp")]
/// Serves a profile catalogue under content negotiation by profile
pub struct Args {
    /// Logs every negotiation decision
    ///
    /// The `RUST_LOG` environment variable takes precedence over this flag.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host and port to listen to
        #[arg(short, long, default_value = "localhost:7878", value_hint = ValueHint::Hostname)]
        bind: String,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
        /// JSON file declaring the profiles and the default profile
        ///
        /// Without this file a built-in registry with the `dcat`, `skos` and `alt` profiles is
        /// served.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        profiles: Option<PathBuf>,
        /// Token of the profile used when a request names no available profile
        ///
        /// Overrides the default profile of the registry.
        #[arg(long)]
        default_profile: Option<String>,
        /// IRI under which the server is reachable
        ///
        /// By default `http://<bind>` is used.
        #[arg(long, value_hint = ValueHint::Url)]
        base_iri: Option<String>,
    },
}
