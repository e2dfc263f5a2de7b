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
use std::time::Duration;

// [START secretmanager_create_regional_secret] ANCHOR: secretmanager_create_regional_secret
/// Creates a regional secret.
///
/// # Parameters
/// - `client`: a client for the regional endpoint.
/// - `project_id`: the id of a Google Cloud project, or its numeric ID.
/// - `secret_id`: the id of the new secret.
/// - `ttl`: if set, the service deletes the secret after this time.
pub async fn sample(
    client: &RegionalClient,
    project_id: &str,
    secret_id: &str,
    ttl: Option<Duration>,
) -> anyhow::Result<Secret> {
    let secret = client.create_secret(project_id, secret_id, ttl).await?;
    println!("Created regional secret: {}", secret.name);
    Ok(secret)
}
// [END secretmanager_create_regional_secret] ANCHOR_END: secretmanager_create_regional_secret
