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

use google_cloud_secretmanager_v1::model::Secret;
use secretmanager_regional::RegionalClient;

// [START secretmanager_update_regional_secret] ANCHOR: secretmanager_update_regional_secret
/// Adds the `secretmanager=rocks` label to a regional secret.
///
/// Existing labels are preserved.
pub async fn sample(
    client: &RegionalClient,
    project_id: &str,
    secret_id: &str,
) -> anyhow::Result<Secret> {
    let secret = client
        .update_secret_labels(project_id, secret_id, [("secretmanager", "rocks")])
        .await?;
    println!("Updated regional secret: {}", secret.name);
    Ok(secret)
}
// [END secretmanager_update_regional_secret] ANCHOR_END: secretmanager_update_regional_secret
