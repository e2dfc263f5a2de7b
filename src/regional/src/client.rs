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

use crate::error::{Error, Result};
use crate::list::SecretVersions;
use crate::operation::Operation;
use crate::resource;
use crate::retry_options::RetryOptions;
use google_cloud_gax::options::RequestOptionsBuilder;
use google_cloud_secretmanager_v1::client::SecretManagerService;
use google_cloud_secretmanager_v1::model::{
    AccessSecretVersionResponse, Secret, SecretPayload, SecretVersion,
};
use std::time::Duration;

/// A Secret Manager client bound to a regional endpoint.
///
/// Every RPC runs in a retry loop, configured by [RetryOptions]. The
/// client-level retry policy of the underlying client is
/// [NeverRetry][google_cloud_gax::retry_policy::NeverRetry], so requests are
/// not retried twice.
///
/// # Example
/// ```no_run
/// # async fn sample() -> secretmanager_regional::Result<()> {
/// use secretmanager_regional::RegionalClient;
/// let client = RegionalClient::new("us-central1").await?;
/// let secret = client.create_secret("my-project", "my-secret", None).await?;
/// let version = client
///     .add_secret_version("my-project", "my-secret", "hello world!")
///     .await?;
/// println!("created {} and {}", secret.name, version.name);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct RegionalClient {
    inner: SecretManagerService,
    location_id: String,
    retry_options: RetryOptions,
}

impl RegionalClient {
    /// Creates a client for the regional endpoint in `location_id`.
    ///
    /// Uses the default credentials.
    pub async fn new<L: Into<String>>(location_id: L) -> Result<Self> {
        let location_id = location_id.into();
        let endpoint = resource::endpoint_url(&location_id)?;
        let inner = SecretManagerService::builder()
            .with_endpoint(&endpoint)
            .with_tracing()
            .with_retry_policy(google_cloud_gax::retry_policy::NeverRetry)
            .build()
            .await
            .map_err(|source| Error::Client { endpoint, source })?;
        tracing::info!(%location_id, "created regional Secret Manager client");
        Ok(Self::from_parts(inner, location_id))
    }

    /// Wraps an existing client.
    ///
    /// The client should already be configured for the regional endpoint of
    /// `location_id`. Tests use this function to wrap clients created with
    /// [SecretManagerService::from_stub].
    pub fn from_client<L: Into<String>>(
        inner: SecretManagerService,
        location_id: L,
    ) -> Result<Self> {
        let location_id = location_id.into();
        resource::resolve_endpoint(&location_id)?;
        Ok(Self::from_parts(inner, location_id))
    }

    fn from_parts(inner: SecretManagerService, location_id: String) -> Self {
        Self {
            inner,
            location_id,
            retry_options: RetryOptions::default(),
        }
    }

    /// Replaces the retry options used by all the RPCs.
    pub fn with_retry_options(mut self, v: RetryOptions) -> Self {
        self.retry_options = v;
        self
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    pub fn retry_options(&self) -> &RetryOptions {
        &self.retry_options
    }

    /// The underlying client, for RPCs without a helper.
    pub fn inner(&self) -> &SecretManagerService {
        &self.inner
    }

    /// Runs `attempt` in a retry loop with the options for this client.
    pub async fn execute_with_retry<F, T>(&self, operation: Operation, attempt: F) -> Result<T>
    where
        F: AsyncFnMut(Option<Duration>) -> google_cloud_gax::Result<T> + Send,
    {
        crate::retry_loop::execute_with_retry(&self.retry_options, operation, attempt).await
    }

    /// Creates a regional secret.
    ///
    /// If `ttl` is set the service deletes the secret once it expires.
    pub async fn create_secret(
        &self,
        project_id: &str,
        secret_id: &str,
        ttl: Option<Duration>,
    ) -> Result<Secret> {
        let parent = resource::resolve_location_path(project_id, &self.location_id)?;
        if secret_id.is_empty() {
            return Err(Error::invalid_argument("secret must not be empty"));
        }
        let mut secret = Secret::new();
        if let Some(ttl) = ttl {
            let ttl = google_cloud_wkt::Duration::try_from(ttl)
                .map_err(|e| Error::invalid_argument(format!("invalid ttl {ttl:?}: {e}")))?;
            secret = secret.set_ttl(ttl);
        }
        self.execute_with_retry(Operation::CreateSecret, async |remaining| {
            self.inner
                .create_secret()
                .set_parent(&parent)
                .set_secret_id(secret_id)
                .set_secret(secret.clone())
                .with_optional_timeout(remaining)
                .send()
                .await
        })
        .await
    }

    pub async fn get_secret(&self, project_id: &str, secret_id: &str) -> Result<Secret> {
        let name = resource::resolve_secret_path(project_id, &self.location_id, secret_id)?;
        self.get_secret_by_name(&name).await
    }

    async fn get_secret_by_name(&self, name: &str) -> Result<Secret> {
        self.execute_with_retry(Operation::GetSecret, async |remaining| {
            self.inner
                .get_secret()
                .set_name(name)
                .with_optional_timeout(remaining)
                .send()
                .await
        })
        .await
    }

    /// Adds (or replaces) labels in a regional secret.
    ///
    /// The new labels are merged with the existing ones, and only the
    /// `labels` field is updated. The update is conditional on the ETag of
    /// the secret, as returned by `GetSecret`.
    pub async fn update_secret_labels<I, K, V>(
        &self,
        project_id: &str,
        secret_id: &str,
        labels: I,
    ) -> Result<Secret>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let name = resource::resolve_secret_path(project_id, &self.location_id, secret_id)?;
        let current = self.get_secret_by_name(&name).await?;
        let mut merged = current.labels;
        merged.extend(labels.into_iter().map(|(k, v)| (k.into(), v.into())));
        let secret = Secret::new()
            .set_name(&name)
            .set_etag(current.etag)
            .set_labels(merged);
        self.execute_with_retry(Operation::UpdateSecret, async |remaining| {
            self.inner
                .update_secret()
                .set_secret(secret.clone())
                .set_update_mask(
                    google_cloud_wkt::FieldMask::default().set_paths(vec!["labels".to_string()]),
                )
                .with_optional_timeout(remaining)
                .send()
                .await
        })
        .await
    }

    pub async fn delete_secret(&self, project_id: &str, secret_id: &str) -> Result<()> {
        let name = resource::resolve_secret_path(project_id, &self.location_id, secret_id)?;
        self.execute_with_retry(Operation::DeleteSecret, async |remaining| {
            self.inner
                .delete_secret()
                .set_name(&name)
                .with_optional_timeout(remaining)
                .send()
                .await
        })
        .await
    }

    /// Adds a new version to a regional secret.
    ///
    /// The payload is sent with its CRC32C checksum, the service rejects
    /// corrupted payloads.
    pub async fn add_secret_version<P>(
        &self,
        project_id: &str,
        secret_id: &str,
        payload: P,
    ) -> Result<SecretVersion>
    where
        P: Into<bytes::Bytes>,
    {
        let parent = resource::resolve_secret_path(project_id, &self.location_id, secret_id)?;
        let data: bytes::Bytes = payload.into();
        let checksum = crc32c::crc32c(&data);
        let payload = SecretPayload::new()
            .set_data(data)
            .set_data_crc32c(checksum as i64);
        self.execute_with_retry(Operation::AddSecretVersion, async |remaining| {
            self.inner
                .add_secret_version()
                .set_parent(&parent)
                .set_payload(payload.clone())
                .with_optional_timeout(remaining)
                .send()
                .await
        })
        .await
    }

    /// Accesses the payload of a secret version.
    ///
    /// `version` is a version number or [LATEST_VERSION][resource::LATEST_VERSION].
    pub async fn access_secret_version(
        &self,
        project_id: &str,
        secret_id: &str,
        version: &str,
    ) -> Result<AccessSecretVersionResponse> {
        let name =
            resource::resolve_version_path(project_id, &self.location_id, secret_id, version)?;
        self.execute_with_retry(Operation::AccessSecretVersion, async |remaining| {
            self.inner
                .access_secret_version()
                .set_name(&name)
                .with_optional_timeout(remaining)
                .send()
                .await
        })
        .await
    }

    /// Lists the versions of a regional secret.
    ///
    /// No RPC is made until the first item is requested. Each page is fetched
    /// with the retry options of this client.
    pub fn list_secret_versions(
        &self,
        project_id: &str,
        secret_id: &str,
    ) -> Result<SecretVersions> {
        let parent = resource::resolve_secret_path(project_id, &self.location_id, secret_id)?;
        let request = self.inner.list_secret_versions().set_parent(&parent);
        let request = self.retry_options.apply(request);
        Ok(SecretVersions::new(parent, request))
    }
}

/// Sets the attempt timeout, if there is one.
pub(crate) trait WithOptionalTimeout: RequestOptionsBuilder + Sized {
    fn with_optional_timeout(self, timeout: Option<Duration>) -> Self {
        match timeout {
            Some(t) => self.with_attempt_timeout(t),
            None => self,
        }
    }
}

impl<T: RequestOptionsBuilder> WithOptionalTimeout for T {}
