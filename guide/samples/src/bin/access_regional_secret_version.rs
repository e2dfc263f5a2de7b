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

use clap::Parser;
use regional_samples::{Args, enable_tracing};

/// Prints the payload of a regional secret version.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    args: Args,
    /// A version number, or `latest`.
    #[arg(long, default_value = "latest")]
    version: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    enable_tracing();
    let client = cli.args.client().await?;
    regional_samples::access_regional_secret_version::sample(
        &client,
        &cli.args.project_id,
        &cli.args.secret_id,
        &cli.version,
    )
    .await?;
    Ok(())
}
