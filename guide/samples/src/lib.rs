// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Samples showing how to use regional secrets in Secret Manager.
//!
//! Each sample is a function receiving a [RegionalClient], and there is a
//! binary for each sample. The binaries receive the project, location, and
//! secret ids as positional arguments:
//!
//! ```text
//! create_regional_secret my-project us-central1 my-secret --ttl 5m
//! ```

use secretmanager_regional::RegionalClient;

pub mod access_regional_secret_version;
pub mod add_regional_secret_version;
pub mod create_regional_secret;
pub mod delete_regional_secret;
pub mod get_regional_secret;
pub mod list_regional_secret_versions;
pub mod regional_quickstart;
pub mod update_regional_secret;

/// The arguments shared by all the sample binaries.
#[derive(Clone, Debug, clap::Args)]
pub struct Args {
    /// The id of a Google Cloud project. For example: `my-project`.
    pub project_id: String,
    /// The id of a Google Cloud region. For example: `us-central1`.
    pub location_id: String,
    /// The id of the secret.
    pub secret_id: String,
}

impl Args {
    /// Creates a client for the regional endpoint in [location_id][Self::location_id].
    pub async fn client(&self) -> anyhow::Result<RegionalClient> {
        let client = RegionalClient::new(&self.location_id).await?;
        Ok(client)
    }
}

/// Initializes logging for the sample binaries.
///
/// Logs go to stderr, filtered by `RUST_LOG`. Only warnings are logged when
/// `RUST_LOG` is not set.
pub fn enable_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::filter::LevelFilter;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, clap::Parser)]
    struct Cli {
        #[command(flatten)]
        args: Args,
    }

    #[test]
    fn parse() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["sample", "my-project", "us-central1", "my-secret"])?;
        assert_eq!(cli.args.project_id, "my-project");
        assert_eq!(cli.args.location_id, "us-central1");
        assert_eq!(cli.args.secret_id, "my-secret");
        Ok(())
    }

    #[test]
    fn missing_arguments() {
        let got = Cli::try_parse_from(["sample", "my-project", "us-central1"]);
        let err = got.unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument,
            "{err}"
        );
        assert_ne!(err.exit_code(), 0);
    }
}
