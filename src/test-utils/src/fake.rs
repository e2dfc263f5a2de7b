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

//! An in-memory implementation of the Secret Manager stub.
//!
//! The fake supports the RPCs used by the regional samples. It is not a
//! service emulator: it keeps the minimal state to make the samples and the
//! fixtures work, and it can inject errors to exercise the retry loop.
//!
//! # Example
//! ```
//! # use secretmanager_regional_test_utils::fake::FakeSecretManager;
//! # use secretmanager_regional::RegionalClient;
//! use google_cloud_secretmanager_v1::client::SecretManagerService;
//! let fake = FakeSecretManager::new();
//! let client = RegionalClient::from_client(
//!     SecretManagerService::from_stub(fake.clone()),
//!     "us-central1",
//! )?;
//! # Ok::<(), secretmanager_regional::Error>(())
//! ```

use bytes::Bytes;
use google_cloud_gax as gax;
use google_cloud_secretmanager_v1 as sm;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::options::RequestOptions;
use gax::response::Response;
use secretmanager_regional::Operation;
use sm::model::{
    AccessSecretVersionRequest, AccessSecretVersionResponse, AddSecretVersionRequest,
    CreateSecretRequest, DeleteSecretRequest, GetSecretRequest, ListSecretVersionsRequest,
    ListSecretVersionsResponse, Secret, SecretPayload, SecretVersion, UpdateSecretRequest,
};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

/// The page size when the request does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// An in-memory Secret Manager.
///
/// Clones share the same state, keep a clone to inspect the state after the
/// fake is moved into a client.
#[derive(Clone, Debug)]
pub struct FakeSecretManager {
    state: Arc<Mutex<State>>,
    page_size: usize,
}

#[derive(Debug, Default)]
struct State {
    secrets: BTreeMap<String, Stored>,
    errors: HashMap<Operation, VecDeque<Code>>,
    calls: HashMap<Operation, usize>,
    generation: u64,
}

#[derive(Debug)]
struct Stored {
    secret: Secret,
    versions: Vec<(SecretVersion, Bytes)>,
}

impl FakeSecretManager {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Changes the page size used when the request does not set one.
    pub fn with_page_size(mut self, v: usize) -> Self {
        self.page_size = v.max(1);
        self
    }

    /// Makes the next `count` calls for `operation` fail with `code`.
    ///
    /// Injected errors are consumed before the request is validated.
    pub fn inject_errors(&self, operation: Operation, code: Code, count: usize) {
        let mut state = self.lock();
        state
            .errors
            .entry(operation)
            .or_default()
            .extend(std::iter::repeat_n(code, count));
    }

    /// The number of calls made for `operation`, including failed calls.
    pub fn call_count(&self, operation: Operation) -> usize {
        self.lock().calls.get(&operation).copied().unwrap_or(0)
    }

    /// Returns the secret with the given name, if it exists.
    pub fn secret(&self, name: &str) -> Option<Secret> {
        self.lock().secrets.get(name).map(|s| s.secret.clone())
    }

    /// The names of all the secrets.
    pub fn secret_names(&self) -> Vec<String> {
        self.lock().secrets.keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("fake state lock is poisoned")
    }

    // Records the call, and returns the next injected error, if any.
    fn start(&self, operation: Operation) -> gax::Result<MutexGuard<'_, State>> {
        let mut state = self.lock();
        *state.calls.entry(operation).or_default() += 1;
        if let Some(code) = state
            .errors
            .get_mut(&operation)
            .and_then(|queue| queue.pop_front())
        {
            return Err(error(code, format!("injected error for {operation}")));
        }
        Ok(state)
    }
}

impl Default for FakeSecretManager {
    fn default() -> Self {
        Self::new()
    }
}

fn error<M: Into<String>>(code: Code, message: M) -> Error {
    Error::service(Status::default().set_code(code).set_message(message))
}

fn not_found(name: &str) -> Error {
    error(Code::NotFound, format!("{name} not found"))
}

fn checksum(data: &Bytes) -> i64 {
    crc32c::crc32c(data) as i64
}

impl State {
    fn next_etag(&mut self) -> String {
        self.generation += 1;
        format!("\"{}\"", self.generation)
    }

    fn stored(&mut self, name: &str) -> gax::Result<&mut Stored> {
        self.secrets.get_mut(name).ok_or_else(|| not_found(name))
    }
}

impl sm::stub::SecretManagerService for FakeSecretManager {
    async fn create_secret(
        &self,
        req: CreateSecretRequest,
        _options: RequestOptions,
    ) -> gax::Result<Response<Secret>> {
        let mut state = self.start(Operation::CreateSecret)?;
        if req.parent.is_empty() || req.secret_id.is_empty() {
            return Err(error(
                Code::InvalidArgument,
                "parent and secret_id are required",
            ));
        }
        let name = format!("{}/secrets/{}", req.parent, req.secret_id);
        if state.secrets.contains_key(&name) {
            return Err(error(Code::AlreadyExists, format!("{name} already exists")));
        }
        let etag = state.next_etag();
        let secret = req
            .secret
            .unwrap_or_default()
            .set_name(&name)
            .set_etag(etag);
        state.secrets.insert(
            name,
            Stored {
                secret: secret.clone(),
                versions: Vec::new(),
            },
        );
        Ok(Response::from(secret))
    }

    async fn get_secret(
        &self,
        req: GetSecretRequest,
        _options: RequestOptions,
    ) -> gax::Result<Response<Secret>> {
        let mut state = self.start(Operation::GetSecret)?;
        let stored = state.stored(&req.name)?;
        Ok(Response::from(stored.secret.clone()))
    }

    async fn update_secret(
        &self,
        req: UpdateSecretRequest,
        _options: RequestOptions,
    ) -> gax::Result<Response<Secret>> {
        let mut state = self.start(Operation::UpdateSecret)?;
        let update = req
            .secret
            .ok_or_else(|| error(Code::InvalidArgument, "missing secret"))?;
        let paths = req.update_mask.map(|m| m.paths).unwrap_or_default();
        if paths.is_empty() {
            return Err(error(Code::InvalidArgument, "missing update mask"));
        }
        let etag = state.next_etag();
        let stored = state.stored(&update.name)?;
        if !update.etag.is_empty() && update.etag != stored.secret.etag {
            return Err(error(Code::Aborted, "etag mismatch"));
        }
        for path in paths {
            match path.as_str() {
                "labels" => stored.secret.labels = update.labels.clone(),
                "annotations" => stored.secret.annotations = update.annotations.clone(),
                p => {
                    return Err(error(
                        Code::InvalidArgument,
                        format!("unsupported update mask path {p}"),
                    ));
                }
            }
        }
        stored.secret.etag = etag;
        Ok(Response::from(stored.secret.clone()))
    }

    async fn delete_secret(
        &self,
        req: DeleteSecretRequest,
        _options: RequestOptions,
    ) -> gax::Result<Response<()>> {
        let mut state = self.start(Operation::DeleteSecret)?;
        state
            .secrets
            .remove(&req.name)
            .ok_or_else(|| not_found(&req.name))?;
        Ok(Response::from(()))
    }

    async fn add_secret_version(
        &self,
        req: AddSecretVersionRequest,
        _options: RequestOptions,
    ) -> gax::Result<Response<SecretVersion>> {
        let mut state = self.start(Operation::AddSecretVersion)?;
        let payload = req.payload.unwrap_or_default();
        if payload
            .data_crc32c
            .is_some_and(|crc| crc != checksum(&payload.data))
        {
            return Err(error(Code::InvalidArgument, "data corruption detected"));
        }
        let stored = state.stored(&req.parent)?;
        let version = SecretVersion::new()
            .set_name(format!(
                "{}/versions/{}",
                req.parent,
                stored.versions.len() + 1
            ))
            .set_state(sm::model::secret_version::State::Enabled);
        stored.versions.push((version.clone(), payload.data));
        Ok(Response::from(version))
    }

    async fn access_secret_version(
        &self,
        req: AccessSecretVersionRequest,
        _options: RequestOptions,
    ) -> gax::Result<Response<AccessSecretVersionResponse>> {
        let mut state = self.start(Operation::AccessSecretVersion)?;
        let (secret, version) = req
            .name
            .rsplit_once("/versions/")
            .ok_or_else(|| error(Code::InvalidArgument, format!("bad name {}", req.name)))?;
        let stored = state.stored(secret)?;
        let found = match version {
            secretmanager_regional::resource::LATEST_VERSION => stored.versions.last(),
            v => v
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| stored.versions.get(i)),
        };
        let (version, data) = found.ok_or_else(|| not_found(&req.name))?;
        let response = AccessSecretVersionResponse::new()
            .set_name(&version.name)
            .set_payload(
                SecretPayload::new()
                    .set_data(data.clone())
                    .set_data_crc32c(checksum(data)),
            );
        Ok(Response::from(response))
    }

    async fn list_secret_versions(
        &self,
        req: ListSecretVersionsRequest,
        _options: RequestOptions,
    ) -> gax::Result<Response<ListSecretVersionsResponse>> {
        let page_size = match req.page_size {
            n if n > 0 => n as usize,
            _ => self.page_size,
        };
        let mut state = self.start(Operation::ListSecretVersions)?;
        let stored = state.stored(&req.parent)?;
        let offset = match req.page_token.as_str() {
            "" => 0,
            t => t
                .parse::<usize>()
                .map_err(|_| error(Code::InvalidArgument, format!("bad page token {t}")))?,
        };
        // Newest versions first.
        let all = stored
            .versions
            .iter()
            .rev()
            .map(|(v, _)| v.clone())
            .collect::<Vec<_>>();
        let page = all
            .iter()
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect::<Vec<_>>();
        let next = offset + page.len();
        let next_page_token = if next < all.len() {
            next.to_string()
        } else {
            String::new()
        };
        Ok(Response::from(
            ListSecretVersionsResponse::new()
                .set_versions(page)
                .set_next_page_token(next_page_token)
                .set_total_size(all.len() as i32),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_gax::exponential_backoff::ExponentialBackoffBuilder;
    use pretty_assertions::assert_eq;
    use secretmanager_regional::{ErrorKind, RegionalClient, RetryOptions};
    use sm::client::SecretManagerService;
    use std::time::Duration;

    type TestResult = anyhow::Result<()>;

    const PROJECT: &str = "test-project";
    const SECRET_NAME: &str = "projects/test-project/locations/us-central1/secrets/test-secret";

    fn client(fake: &FakeSecretManager) -> anyhow::Result<RegionalClient> {
        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp();
        let stub = SecretManagerService::from_stub(fake.clone());
        let client = RegionalClient::from_client(stub, "us-central1")?
            .with_retry_options(RetryOptions::default().with_backoff_policy(backoff));
        Ok(client)
    }

    #[tokio::test]
    async fn lifecycle() -> TestResult {
        let fake = FakeSecretManager::new();
        let client = client(&fake)?;

        let secret = client.create_secret(PROJECT, "test-secret", None).await?;
        assert_eq!(secret.name, SECRET_NAME);
        assert!(!secret.etag.is_empty(), "{secret:?}");
        assert_eq!(fake.secret_names(), vec![SECRET_NAME.to_string()]);

        let err = client
            .create_secret(PROJECT, "test-secret", None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists, "{err:?}");

        let got = client.get_secret(PROJECT, "test-secret").await?;
        assert_eq!(got, secret);

        let updated = client
            .update_secret_labels(PROJECT, "test-secret", [("secretmanager", "rocks")])
            .await?;
        assert_eq!(
            updated.labels.get("secretmanager").map(String::as_str),
            Some("rocks")
        );
        assert_ne!(updated.etag, secret.etag);

        client.delete_secret(PROJECT, "test-secret").await?;
        assert!(fake.secret(SECRET_NAME).is_none());
        let err = client.delete_secret(PROJECT, "test-secret").await.unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn versions() -> TestResult {
        let fake = FakeSecretManager::new().with_page_size(2);
        let client = client(&fake)?;
        client.create_secret(PROJECT, "test-secret", None).await?;
        for i in 1..=5 {
            let v = client
                .add_secret_version(PROJECT, "test-secret", format!("payload-{i}"))
                .await?;
            assert_eq!(v.name, format!("{SECRET_NAME}/versions/{i}"));
        }

        let latest = client
            .access_secret_version(PROJECT, "test-secret", "latest")
            .await?;
        assert_eq!(latest.name, format!("{SECRET_NAME}/versions/5"));
        let payload = latest.payload.unwrap_or_default();
        assert_eq!(payload.data, Bytes::from_static(b"payload-5"));
        assert_eq!(payload.data_crc32c, Some(checksum(&payload.data)));

        let second = client
            .access_secret_version(PROJECT, "test-secret", "2")
            .await?;
        let payload = second.payload.unwrap_or_default();
        assert_eq!(payload.data, Bytes::from_static(b"payload-2"));

        let err = client
            .access_secret_version(PROJECT, "test-secret", "42")
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");

        let names = client
            .list_secret_versions(PROJECT, "test-secret")?
            .all()
            .await?
            .into_iter()
            .map(|v| v.name)
            .collect::<Vec<_>>();
        let want = (1..=5)
            .rev()
            .map(|i| format!("{SECRET_NAME}/versions/{i}"))
            .collect::<Vec<_>>();
        assert_eq!(names, want);
        // Three pages of at most 2 versions.
        assert_eq!(fake.call_count(Operation::ListSecretVersions), 3);
        Ok(())
    }

    #[tokio::test]
    async fn access_missing_secret() -> TestResult {
        let fake = FakeSecretManager::new();
        let client = client(&fake)?;
        let err = client
            .access_secret_version(PROJECT, "test-secret", "latest")
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        let err = client
            .list_secret_versions(PROJECT, "test-secret")?
            .all()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn injected_errors() -> TestResult {
        let fake = FakeSecretManager::new();
        fake.inject_errors(Operation::CreateSecret, Code::Unavailable, 2);
        let client = client(&fake)?;
        let secret = client.create_secret(PROJECT, "test-secret", None).await?;
        assert_eq!(secret.name, SECRET_NAME);
        assert_eq!(fake.call_count(Operation::CreateSecret), 3);

        fake.inject_errors(Operation::GetSecret, Code::PermissionDenied, 1);
        let err = client.get_secret(PROJECT, "test-secret").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied, "{err:?}");
        assert_eq!(fake.call_count(Operation::GetSecret), 1);
        Ok(())
    }

    #[tokio::test]
    async fn corrupted_payload() -> TestResult {
        use sm::stub::SecretManagerService as _;
        let fake = FakeSecretManager::new();
        let client = client(&fake)?;
        client.create_secret(PROJECT, "test-secret", None).await?;

        let req = AddSecretVersionRequest::new()
            .set_parent(SECRET_NAME)
            .set_payload(SecretPayload::new().set_data("abc").set_data_crc32c(42_i64));
        let got = fake
            .add_secret_version(req, RequestOptions::default())
            .await;
        let code = got.as_ref().err().and_then(|e| e.status()).map(|s| s.code);
        assert_eq!(code, Some(Code::InvalidArgument), "{got:?}");
        Ok(())
    }
}
