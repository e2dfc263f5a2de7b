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

use secretmanager_regional::RegionalClient;

// [START secretmanager_access_regional_secret_version] ANCHOR: secretmanager_access_regional_secret_version
/// Reads the payload of a regional secret version.
///
/// `version` is a version number, or `latest`.
pub async fn sample(
    client: &RegionalClient,
    project_id: &str,
    secret_id: &str,
    version: &str,
) -> anyhow::Result<String> {
    let response = client
        .access_secret_version(project_id, secret_id, version)
        .await?;
    let data = response.payload.map(|p| p.data).unwrap_or_default();
    let plaintext = String::from_utf8_lossy(&data).to_string();
    println!("Plaintext: {plaintext}");
    Ok(plaintext)
}
// [END secretmanager_access_regional_secret_version] ANCHOR_END: secretmanager_access_regional_secret_version
