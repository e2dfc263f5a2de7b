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

// [START secretmanager_list_regional_secret_versions] ANCHOR: secretmanager_list_regional_secret_versions
/// Lists all the versions of a regional secret, newest first.
pub async fn sample(
    client: &RegionalClient,
    project_id: &str,
    secret_id: &str,
) -> anyhow::Result<Vec<SecretVersion>> {
    use futures::TryStreamExt;

    let mut versions = client
        .list_secret_versions(project_id, secret_id)?
        .into_stream();
    let mut found = Vec::new();
    while let Some(version) = versions.try_next().await? {
        println!("Found secret version: {}", version.name);
        found.push(version);
    }
    Ok(found)
}
// [END secretmanager_list_regional_secret_versions] ANCHOR_END: secretmanager_list_regional_secret_versions
