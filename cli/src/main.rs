use crate::cli::{Args, Command};
use clap::Parser;
use connegp_web::ServerConfig;
use registry::load_registry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod registry;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let matches = Args::parse();

    let filter = if matches.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match matches.command {
        Command::Serve {
            bind,
            cors,
            profiles,
            default_profile,
            base_iri,
        } => {
            let (registry, default_profile) = load_registry(profiles.as_deref(), default_profile)?;
            tracing::debug!(
                profiles = registry.len(),
                default_profile = default_profile.as_str(),
                "Loaded profile registry"
            );
            let base_iri = base_iri.unwrap_or_else(|| format!("http://{bind}"));
            connegp_web::serve(ServerConfig {
                registry,
                default_profile,
                bind,
                base_iri,
                cors,
            })
            .await
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use assert_fs::NamedTempFile;
    use predicates::prelude::*;

    fn cli_command() -> Command {
        let mut command = Command::new(env!("CARGO"));
        command.arg("run").arg("--bin").arg("connegp");
        command.arg("--");
        command
    }

    #[test]
    fn cli_help() {
        cli_command()
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("profile catalogue"));
    }

    #[test]
    fn cli_serve_unknown_default_profile() {
        cli_command()
            .arg("serve")
            .arg("--default-profile")
            .arg("void")
            .assert()
            .failure()
            .stderr(predicate::str::contains("void"));
    }

    #[test]
    fn cli_serve_invalid_base_iri() {
        cli_command()
            .arg("serve")
            .arg("--base-iri")
            .arg("not an iri")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid base IRI"));
    }

    #[test]
    fn cli_serve_invalid_registry_file() -> Result<()> {
        let file = NamedTempFile::new("profiles.json")?;
        file.write_str(r#"{"default_profile": "a", "profiles": [{"token": "a"}]}"#)?;
        cli_command()
            .arg("serve")
            .arg("--profiles")
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid registry file"));
        Ok(())
    }

    #[test]
    fn cli_serve_invalid_profile() -> Result<()> {
        let file = NamedTempFile::new("profiles.json")?;
        file.write_str(
            r#"{
                "default_profile": "a",
                "profiles": [{
                    "uri": "not an iri",
                    "token": "a",
                    "mediatypes": ["text/html"],
                    "default_mediatype": "text/html"
                }]
            }"#,
        )?;
        cli_command()
            .arg("serve")
            .arg("--profiles")
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("not an iri"));
        Ok(())
    }

    #[test]
    fn clap_debug() {
        use clap::CommandFactory;

        Args::command().debug_assert()
    }
}
