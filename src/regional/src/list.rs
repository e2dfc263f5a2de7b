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

//! Lazy listing of secret versions.

use crate::error::{Error, Result};
use crate::operation::Operation;
use futures::StreamExt;
use futures::stream::BoxStream;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_secretmanager_v1::builder::secret_manager_service::ListSecretVersions;
use google_cloud_secretmanager_v1::model::SecretVersion;

/// The versions of a secret, fetched one page at a time.
///
/// Pages are fetched by the client library paginator, in the retry loop of
/// the client library configured with the [RetryOptions] of the
/// [RegionalClient]. The sequence is finite, it ends after the last page or
/// after the first error. To restart the listing call
/// [list_secret_versions][RegionalClient::list_secret_versions] again.
///
/// # Example
/// ```no_run
/// # async fn sample(client: &secretmanager_regional::RegionalClient) -> secretmanager_regional::Result<()> {
/// let mut versions = client.list_secret_versions("my-project", "my-secret")?;
/// while let Some(version) = versions.next().await.transpose()? {
///     println!("Found secret version: {}", version.name);
/// }
/// # Ok(()) }
/// ```
///
/// [RetryOptions]: crate::RetryOptions
/// [RegionalClient]: crate::RegionalClient
/// [RegionalClient::list_secret_versions]: crate::RegionalClient::list_secret_versions
pub struct SecretVersions {
    parent: String,
    request: ListSecretVersions,
    items: Option<BoxStream<'static, google_cloud_gax::Result<SecretVersion>>>,
}

impl SecretVersions {
    pub(crate) fn new(parent: String, request: ListSecretVersions) -> Self {
        Self {
            parent,
            request,
            items: None,
        }
    }

    /// Sets the maximum number of versions requested in each page.
    ///
    /// Has no effect once the first page is fetched.
    pub fn with_page_size(mut self, v: i32) -> Self {
        self.request = self.request.set_page_size(v);
        self
    }

    /// The secret whose versions are listed.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Returns the next version, fetching a new page if needed.
    ///
    /// Returns `None` once all the versions have been returned, or after an
    /// error.
    pub async fn next(&mut self) -> Option<Result<SecretVersion>> {
        let request = &self.request;
        let items = self.items.get_or_insert_with(|| {
            let paginator = request.clone().by_item();
            futures::stream::unfold(paginator, |mut paginator| async move {
                paginator.next().await.map(|item| (item, paginator))
            })
            .boxed()
        });
        let item = items.next().await?;
        if let Ok(v) = &item {
            tracing::trace!(parent = %self.parent, version = %v.name, "listed secret version");
        }
        Some(item.map_err(|e| Error::rpc(Operation::ListSecretVersions, e)))
    }

    /// Converts the sequence into a [Stream][futures::Stream].
    pub fn into_stream(self) -> impl futures::Stream<Item = Result<SecretVersion>> + Unpin {
        Box::pin(futures::stream::unfold(self, |mut versions| async move {
            versions.next().await.map(|item| (item, versions))
        }))
    }

    /// Collects all the versions, stopping at the first error.
    pub async fn all(mut self) -> Result<Vec<SecretVersion>> {
        let mut result = Vec::new();
        while let Some(v) = self.next().await {
            result.push(v?);
        }
        Ok(result)
    }
}

impl std::fmt::Debug for SecretVersions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretVersions")
            .field("parent", &self.parent)
            .field("request", &self.request)
            .field("started", &self.items.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry_policy::TransientErrors;
    use crate::{ErrorKind, RegionalClient, RetryOptions};
    use futures::StreamExt;
    use google_cloud_gax as gax;
    use google_cloud_gax::error::rpc::{Code, Status};
    use google_cloud_gax::exponential_backoff::ExponentialBackoffBuilder;
    use google_cloud_gax::retry_policy::RetryPolicyExt;
    use google_cloud_secretmanager_v1 as sm;
    use std::time::Duration;

    type TestResult = anyhow::Result<()>;

    const PARENT: &str = "projects/test-project/locations/us-central1/secrets/test-secret";

    mockall::mock! {
        #[derive(Debug)]
        SecretManagerService {}
        impl sm::stub::SecretManagerService for SecretManagerService {
            async fn list_secret_versions(&self, req: sm::model::ListSecretVersionsRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<sm::model::ListSecretVersionsResponse>>;
        }
    }

    fn make_versions(count: i32, start: i32) -> Vec<SecretVersion> {
        (start..(start + count))
            .map(|v| SecretVersion::new().set_name(format!("{PARENT}/versions/{v}")))
            .collect()
    }

    fn page(
        versions: Vec<SecretVersion>,
        token: &str,
    ) -> gax::Result<gax::response::Response<sm::model::ListSecretVersionsResponse>> {
        Ok(gax::response::Response::from(
            sm::model::ListSecretVersionsResponse::new()
                .set_versions(versions)
                .set_next_page_token(token),
        ))
    }

    fn client(mock: MockSecretManagerService) -> anyhow::Result<RegionalClient> {
        let client = RegionalClient::from_client(
            sm::client::SecretManagerService::from_stub(mock),
            "us-central1",
        )?
        .with_retry_options(
            RetryOptions::default()
                .with_retry_policy(TransientErrors.with_attempt_limit(3))
                .with_backoff_policy(
                    ExponentialBackoffBuilder::new()
                        .with_initial_delay(Duration::from_millis(1))
                        .with_maximum_delay(Duration::from_millis(1))
                        .clamp(),
                ),
        );
        Ok(client)
    }

    fn expect_three_pages(mock: &mut MockSecretManagerService, seq: &mut mockall::Sequence) {
        mock.expect_list_secret_versions()
            .once()
            .in_sequence(seq)
            .withf(|r, _| r.parent == PARENT && r.page_token.is_empty())
            .returning(|_, _| page(make_versions(2, 0), "test-page-001"));
        mock.expect_list_secret_versions()
            .once()
            .in_sequence(seq)
            .withf(|r, _| r.parent == PARENT && r.page_token == "test-page-001")
            .returning(|_, _| page(make_versions(2, 2), "test-page-002"));
        mock.expect_list_secret_versions()
            .once()
            .in_sequence(seq)
            .withf(|r, _| r.parent == PARENT && r.page_token == "test-page-002")
            .returning(|_, _| page(make_versions(1, 4), ""));
    }

    #[tokio::test]
    async fn follows_page_tokens() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockSecretManagerService::new();
        expect_three_pages(&mut mock, &mut seq);

        let client = client(mock)?;
        let mut versions = client.list_secret_versions("test-project", "test-secret")?;
        assert_eq!(versions.parent(), PARENT);
        let mut names = Vec::new();
        while let Some(v) = versions.next().await.transpose()? {
            names.push(v.name);
        }
        let want = make_versions(5, 0)
            .into_iter()
            .map(|v| v.name)
            .collect::<Vec<_>>();
        assert_eq!(names, want);
        assert!(versions.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn restart() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockSecretManagerService::new();
        expect_three_pages(&mut mock, &mut seq);
        expect_three_pages(&mut mock, &mut seq);

        let client = client(mock)?;
        let first = client
            .list_secret_versions("test-project", "test-secret")?
            .all()
            .await?;
        let second = client
            .list_secret_versions("test-project", "test-secret")?
            .all()
            .await?;
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn stream() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockSecretManagerService::new();
        expect_three_pages(&mut mock, &mut seq);

        let client = client(mock)?;
        let names = client
            .list_secret_versions("test-project", "test-secret")?
            .into_stream()
            .map(|v| v.map(|v| v.name))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(names.len(), 5);
        assert!(names[0].ends_with("/versions/0"), "{names:?}");
        Ok(())
    }

    #[tokio::test]
    async fn page_size() -> TestResult {
        let mut mock = MockSecretManagerService::new();
        mock.expect_list_secret_versions()
            .once()
            .withf(|r, _| r.page_size == 7)
            .returning(|_, _| page(Vec::new(), ""));

        let client = client(mock)?;
        let got = client
            .list_secret_versions("test-project", "test-secret")?
            .with_page_size(7)
            .all()
            .await?;
        assert!(got.is_empty(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn pages_use_retry_options() -> TestResult {
        let mut mock = MockSecretManagerService::new();
        mock.expect_list_secret_versions()
            .once()
            .withf(|_, o| {
                o.idempotent() == Some(true)
                    && o.retry_policy().is_some()
                    && o.backoff_policy().is_some()
                    && o.retry_throttler().is_some()
            })
            .returning(|_, _| page(make_versions(2, 0), ""));

        let client = client(mock)?;
        let got = client
            .list_secret_versions("test-project", "test-secret")?
            .all()
            .await?;
        assert_eq!(got.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn ends_after_error() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockSecretManagerService::new();
        mock.expect_list_secret_versions()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| page(make_versions(1, 0), "test-page-001"));
        mock.expect_list_secret_versions()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(gax::error::Error::service(
                    Status::default().set_code(Code::NotFound),
                ))
            });

        let client = client(mock)?;
        let mut versions = client.list_secret_versions("test-project", "test-secret")?;
        assert!(matches!(versions.next().await, Some(Ok(_))));
        let err = versions.next().await;
        assert!(
            matches!(&err, Some(Err(e)) if e.kind() == ErrorKind::NotFound),
            "{err:?}"
        );
        assert!(versions.next().await.is_none());
        Ok(())
    }

    #[test]
    fn invalid_arguments() -> TestResult {
        let client = client(MockSecretManagerService::new())?;
        let got = client.list_secret_versions("", "test-secret");
        assert!(
            matches!(&got, Err(e) if e.kind() == ErrorKind::InvalidArgument),
            "{got:?}"
        );
        Ok(())
    }
}
