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

use anyhow::{Context, Result};
use secretmanager_regional::RetryOptions;
use std::time::Duration;

const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const ACCOUNT_VAR: &str = "GCLOUD_SECRETS_SERVICE_ACCOUNT";
const REGION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_REGION";
const DEFAULT_REGION: &str = "us-central1";

/// The TTL for secrets created by the tests.
///
/// Secrets leaked by a crashed test are deleted by the service.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// The delay before creating and before deleting test resources.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(5);

/// The configuration for tests creating regional secrets.
///
/// Use [HarnessConfig::from_env] in integration tests, and
/// [HarnessConfig::new] in tests running against a fake.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    pub project_id: String,
    pub location_id: String,
    pub ttl: Option<Duration>,
    pub service_account: String,
    pub settle_delay: Duration,
    pub retry: RetryOptions,
}

impl HarnessConfig {
    /// Creates a configuration with the default TTL, settle delay, and retry
    /// options.
    pub fn new<P, L, S>(project_id: P, location_id: L, service_account: S) -> Self
    where
        P: Into<String>,
        L: Into<String>,
        S: Into<String>,
    {
        Self {
            project_id: project_id.into(),
            location_id: location_id.into(),
            ttl: Some(DEFAULT_TTL),
            service_account: service_account.into(),
            settle_delay: DEFAULT_SETTLE_DELAY,
            retry: RetryOptions::default(),
        }
    }

    /// Loads the configuration from the environment.
    ///
    /// Requires `GOOGLE_CLOUD_PROJECT` and `GCLOUD_SECRETS_SERVICE_ACCOUNT`.
    /// The location is `GOOGLE_CLOUD_RUST_TEST_REGION`, or `us-central1` if
    /// not set.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(project_id()?, region_id(), service_account()?))
    }

    pub fn with_ttl(mut self, v: Option<Duration>) -> Self {
        self.ttl = v;
        self
    }

    pub fn with_settle_delay(mut self, v: Duration) -> Self {
        self.settle_delay = v;
        self
    }

    pub fn with_retry(mut self, v: RetryOptions) -> Self {
        self.retry = v;
        self
    }

    /// The service account, formatted as an IAM policy member.
    pub fn iam_member(&self) -> String {
        format!("serviceAccount:{}", self.service_account)
    }
}

/// Returns the project id used for the integration tests.
pub fn project_id() -> Result<String> {
    std::env::var(PROJECT_VAR).with_context(|| format!("{PROJECT_VAR} is not set"))
}

/// Returns the service account used in IAM tests.
pub fn service_account() -> Result<String> {
    std::env::var(ACCOUNT_VAR).with_context(|| format!("{ACCOUNT_VAR} is not set"))
}

/// Returns the preferred region id used for the integration tests.
pub fn region_id() -> String {
    std::env::var(REGION_VAR)
        .ok()
        .unwrap_or(DEFAULT_REGION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    #[serial]
    #[test]
    fn project() {
        let _env = ScopedEnv::remove(PROJECT_VAR);
        let got = project_id();
        assert!(got.is_err(), "{got:?}");
        let _env = ScopedEnv::set(PROJECT_VAR, "abc");
        let got = project_id();
        assert!(got.as_ref().is_ok_and(|v| v == "abc"), "{got:?}");
    }

    #[serial]
    #[test]
    fn account() {
        let _env = ScopedEnv::remove(ACCOUNT_VAR);
        let got = service_account();
        assert!(got.is_err(), "{got:?}");
        let _env = ScopedEnv::set(ACCOUNT_VAR, "abc");
        let got = service_account();
        assert!(got.as_ref().is_ok_and(|v| v == "abc"), "{got:?}");
    }

    #[serial]
    #[test]
    fn region() {
        let _env = ScopedEnv::remove(REGION_VAR);
        let got = region_id();
        assert_eq!(got, DEFAULT_REGION);
        let _env = ScopedEnv::set(REGION_VAR, "abc");
        let got = region_id();
        assert_eq!(got, "abc");
    }

    #[serial]
    #[test]
    fn from_env() {
        let _project = ScopedEnv::set(PROJECT_VAR, "test-project");
        let _account = ScopedEnv::set(ACCOUNT_VAR, "test-sa@test-project.iam.gserviceaccount.com");
        let _region = ScopedEnv::remove(REGION_VAR);
        let got = HarnessConfig::from_env();
        let got = match got {
            Ok(c) => c,
            Err(e) => panic!("unexpected error {e:?}"),
        };
        assert_eq!(got.project_id, "test-project");
        assert_eq!(got.location_id, DEFAULT_REGION);
        assert_eq!(got.ttl, Some(DEFAULT_TTL));
        assert_eq!(got.settle_delay, Duration::from_secs(5));
        assert_eq!(
            got.iam_member(),
            "serviceAccount:test-sa@test-project.iam.gserviceaccount.com"
        );
    }

    #[serial]
    #[test]
    fn from_env_missing_project() {
        let _project = ScopedEnv::remove(PROJECT_VAR);
        let _account = ScopedEnv::set(ACCOUNT_VAR, "abc");
        let got = HarnessConfig::from_env();
        assert!(got.is_err(), "{got:?}");
        let msg = format!("{:?}", got.unwrap_err());
        assert!(msg.contains(PROJECT_VAR), "{msg}");
    }

    #[serial]
    #[test]
    fn from_env_missing_account() {
        let _project = ScopedEnv::set(PROJECT_VAR, "abc");
        let _account = ScopedEnv::remove(ACCOUNT_VAR);
        let got = HarnessConfig::from_env();
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn builders() {
        let got = HarnessConfig::new("p", "us-east1", "sa")
            .with_ttl(None)
            .with_settle_delay(Duration::ZERO)
            .with_retry(RetryOptions::default());
        assert_eq!(got.ttl, None);
        assert_eq!(got.settle_delay, Duration::ZERO);
        assert_eq!(got.location_id, "us-east1");
    }
}
