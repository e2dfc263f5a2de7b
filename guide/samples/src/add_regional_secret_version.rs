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

use google_cloud_secretmanager_v1::model::SecretVersion;
use secretmanager_regional::RegionalClient;

// [START secretmanager_add_regional_secret_version] ANCHOR: secretmanager_add_regional_secret_version
/// Adds a version to a regional secret.
///
/// # Parameters
/// - `client`: a client for the regional endpoint.
/// - `project_id`: the id of a Google Cloud project, or its numeric ID.
/// - `secret_id`: the id of an existing secret.
/// - `payload`: the secret data.
pub async fn sample(
    client: &RegionalClient,
    project_id: &str,
    secret_id: &str,
    payload: &str,
) -> anyhow::Result<SecretVersion> {
    let version = client
        .add_secret_version(project_id, secret_id, payload.to_string())
        .await?;
    println!("Added regional secret version: {}", version.name);
    Ok(version)
}
// [END secretmanager_add_regional_secret_version] ANCHOR_END: secretmanager_add_regional_secret_version
