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

// [START secretmanager_regional_quickstart] ANCHOR: secretmanager_regional_quickstart
/// Creates a regional secret, adds a version, and reads the version back.
///
/// # Parameters
/// - `client`: a client for the regional endpoint.
/// - `project_id`: the id of a Google Cloud project, or its numeric ID.
///   For example: `my-project`.
/// - `secret_id`: the id of the new secret.
pub async fn sample(
    client: &secretmanager_regional::RegionalClient,
    project_id: &str,
    secret_id: &str,
) -> anyhow::Result<String> {
    let secret = client.create_secret(project_id, secret_id, None).await?;
    tracing::info!(secret = %secret.name, "created regional secret");

    let version = client
        .add_secret_version(project_id, secret_id, "hello world!")
        .await?;
    tracing::info!(version = %version.name, "added regional secret version");

    let response = client
        .access_secret_version(
            project_id,
            secret_id,
            secretmanager_regional::resource::LATEST_VERSION,
        )
        .await?;
    let data = response.payload.map(|p| p.data).unwrap_or_default();
    let plaintext = String::from_utf8_lossy(&data).to_string();
    println!("Plaintext: {plaintext}");
    Ok(plaintext)
}
// [END secretmanager_regional_quickstart] ANCHOR_END: secretmanager_regional_quickstart
