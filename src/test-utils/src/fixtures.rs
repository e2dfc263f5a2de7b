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

//! Temporary secrets for tests.
//!
//! Each fixture owns one secret id. Creating and deleting secrets is
//! eventually consistent in some regions, the fixture waits for
//! [HarnessConfig::settle_delay] before each of these operations.

use crate::resource_names::random_secret_id;
use crate::runtime_config::HarnessConfig;
use futures::FutureExt;
use google_cloud_secretmanager_v1::model::Secret;
use secretmanager_regional::{RegionalClient, Result, resource};
use std::panic::AssertUnwindSafe;
use std::time::Duration;

/// A temporary regional secret.
#[derive(Clone, Debug)]
pub struct SecretFixture {
    client: RegionalClient,
    project_id: String,
    secret_id: String,
    settle_delay: Duration,
}

impl SecretFixture {
    /// Reserves a new, random, secret id.
    ///
    /// No secret is created. Use this function to test samples that create
    /// the secret themselves, and then call [teardown][Self::teardown].
    pub fn reserve(client: &RegionalClient, config: &HarnessConfig) -> Self {
        Self {
            client: client.clone().with_retry_options(config.retry.clone()),
            project_id: config.project_id.clone(),
            secret_id: random_secret_id(),
            settle_delay: config.settle_delay,
        }
    }

    /// Creates a secret with a new random id, and the TTL in `config`.
    pub async fn create(client: &RegionalClient, config: &HarnessConfig) -> Result<(Self, Secret)> {
        let fixture = Self::reserve(client, config);
        tokio::time::sleep(fixture.settle_delay).await;
        let secret = fixture
            .client
            .create_secret(&fixture.project_id, &fixture.secret_id, config.ttl)
            .await?;
        tracing::info!(secret = %secret.name, "created test secret");
        Ok((fixture, secret))
    }

    /// Deletes the secret.
    ///
    /// A secret that is already gone is not an error, the test may have
    /// deleted it.
    pub async fn teardown(&self) -> Result<()> {
        tokio::time::sleep(self.settle_delay).await;
        match self
            .client
            .delete_secret(&self.project_id, &self.secret_id)
            .await
        {
            Ok(()) => {
                tracing::info!(secret_id = %self.secret_id, "deleted test secret");
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                tracing::info!(secret_id = %self.secret_id, "test secret already deleted");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(secret_id = %self.secret_id, "cannot delete test secret: {e}");
                Err(e)
            }
        }
    }

    /// Creates a secret, runs `body`, and deletes the secret.
    ///
    /// The secret is deleted even if `body` fails or panics. Errors from
    /// `body` are returned in preference to errors from the cleanup. Panics
    /// resume once the secret is deleted.
    pub async fn scoped<F, T>(
        client: &RegionalClient,
        config: &HarnessConfig,
        body: F,
    ) -> anyhow::Result<T>
    where
        F: AsyncFnOnce(&SecretFixture, Secret) -> anyhow::Result<T>,
    {
        let (fixture, secret) = Self::create(client, config).await?;
        let result = AssertUnwindSafe(body(&fixture, secret))
            .catch_unwind()
            .await;
        let cleanup = fixture.teardown().await;
        let value = match result {
            Ok(r) => r?,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        cleanup?;
        Ok(value)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn location_id(&self) -> &str {
        self.client.location_id()
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    /// The full resource name of the secret.
    pub fn name(&self) -> Result<String> {
        resource::resolve_secret_path(&self.project_id, self.location_id(), &self.secret_id)
    }

    /// The client used by the fixture, configured with the retry options
    /// from [HarnessConfig].
    pub fn client(&self) -> &RegionalClient {
        &self.client
    }
}
