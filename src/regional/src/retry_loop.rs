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

//! Runs operations in the client library's retry loop.

use crate::error::{Error, Result};
use crate::operation::Operation;
use crate::retry_options::RetryOptions;
use google_cloud_gax::error::Error as RpcError;
use google_cloud_gax::retry_policy::RetryPolicy;
use google_cloud_gax::retry_result::RetryResult;
use google_cloud_gax::retry_state::RetryState;
use google_cloud_gax::throttle_result::ThrottleResult;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

/// Runs `attempt` in a retry loop configured by `options`.
///
/// `attempt` performs a single remote call for `operation`. It receives the
/// time remaining in the retry policy, to use as the per-attempt timeout.
/// Only [transient][crate::ErrorKind::Transient] errors are retried with the
/// default options. Each retry is logged at the `WARN` level. The loop never
/// sleeps past the time budget, if the next delay does not fit it returns
/// the last error.
///
/// The final error is classified and tagged with `operation`. Errors
/// returned because the policy was exhausted are
/// [transient][crate::ErrorKind::Transient].
///
/// # Example
/// ```no_run
/// # use secretmanager_regional::{execute_with_retry, Operation, RetryOptions};
/// # use google_cloud_secretmanager_v1::client::SecretManagerService;
/// # async fn sample(client: &SecretManagerService, name: &str) -> secretmanager_regional::Result<()> {
/// use google_cloud_gax::options::RequestOptionsBuilder;
/// let options = RetryOptions::default();
/// let secret = execute_with_retry(&options, Operation::GetSecret, async |remaining| {
///     let builder = client.get_secret().set_name(name);
///     let builder = match remaining {
///         Some(t) => builder.with_attempt_timeout(t),
///         None => builder,
///     };
///     builder.send().await
/// })
/// .await?;
/// println!("{secret:?}");
/// # Ok(()) }
/// ```
pub async fn execute_with_retry<F, T>(
    options: &RetryOptions,
    operation: Operation,
    attempt: F,
) -> Result<T>
where
    F: AsyncFnMut(Option<Duration>) -> google_cloud_gax::Result<T> + Send,
{
    let span = tracing::info_span!(
        "execute_with_retry",
        %operation,
        attempt_count = tracing::field::Empty,
        delay = tracing::field::Empty,
    );
    let sleep = async |delay: Duration| {
        tracing::Span::current().record("delay", tracing::field::debug(delay));
        tokio::time::sleep(delay).await
    };
    let retry_policy = Arc::new(LogRetries {
        operation,
        inner: options.retry_policy(),
    });
    google_cloud_gax::retry_loop_internal::retry_loop(
        attempt,
        sleep,
        true,
        options.retry_throttler(),
        retry_policy,
        options.backoff_policy(),
    )
    .instrument(span)
    .await
    .map_err(|e| Error::rpc(operation, e))
}

// Logs the errors that continue the loop.
#[derive(Debug)]
struct LogRetries {
    operation: Operation,
    inner: Arc<dyn RetryPolicy>,
}

impl RetryPolicy for LogRetries {
    fn on_error(&self, state: &RetryState, error: RpcError) -> RetryResult {
        let flow = self.inner.on_error(state, error);
        if let RetryResult::Continue(e) = &flow {
            let attempt_count = state.attempt_count;
            tracing::Span::current().record("attempt_count", attempt_count);
            tracing::warn!(
                operation = %self.operation,
                attempt_count,
                "retrying after transient error: {e}"
            );
        }
        flow
    }

    fn on_throttle(&self, state: &RetryState, error: RpcError) -> ThrottleResult {
        self.inner.on_throttle(state, error)
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        self.inner.remaining_time(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::retry_policy::TransientErrors;
    use google_cloud_gax::error::rpc::{Code, Status};
    use google_cloud_gax::exponential_backoff::ExponentialBackoffBuilder;
    use google_cloud_gax::retry_policy::{LimitedElapsedTime, RetryPolicyExt};
    use tokio::time::Instant;

    type TestResult = anyhow::Result<()>;

    fn rpc_error(code: Code) -> RpcError {
        RpcError::service(Status::default().set_code(code).set_message("test-only"))
    }

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, state: &RetryState, error: RpcError) -> RetryResult;
            fn remaining_time(&self, state: &RetryState) -> Option<Duration>;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn transient_then_success() -> TestResult {
        let options = RetryOptions::default();
        let mut count = 0;
        let start = Instant::now();
        let got = execute_with_retry(&options, Operation::AddSecretVersion, async |remaining| {
            count += 1;
            assert!(remaining.is_some(), "{remaining:?}");
            if count < 3 {
                return Err(rpc_error(Code::Unavailable));
            }
            Ok(count)
        })
        .await?;
        assert_eq!(got, 3);
        // Jittered delays after the first and second failures, at most 1s + 2s.
        assert!(start.elapsed() <= Duration::from_secs(3), "{:?}", start.elapsed());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted() -> TestResult {
        let options =
            RetryOptions::default().with_retry_policy(TransientErrors.with_attempt_limit(4));
        let mut count = 0;
        let got: Result<()> = execute_with_retry(&options, Operation::CreateSecret, async |_| {
            count += 1;
            Err(rpc_error(Code::ResourceExhausted))
        })
        .await;
        let err = got.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        assert_eq!(err.operation(), Some(Operation::CreateSecret));
        assert_eq!(count, 4);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn time_budget() -> TestResult {
        let options = RetryOptions::default()
            .with_retry_policy(LimitedElapsedTime::custom(
                TransientErrors,
                Duration::from_secs(10),
            ))
            .with_backoff_policy(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_secs(4))
                    .with_maximum_delay(Duration::from_secs(4))
                    .build()?,
            );
        let start = Instant::now();
        let mut count = 0;
        let attempt = async |remaining: Option<Duration>| -> google_cloud_gax::Result<()> {
            count += 1;
            assert!(
                remaining.is_some_and(|r| r <= Duration::from_secs(10)),
                "{remaining:?}"
            );
            Err(rpc_error(Code::Unavailable))
        };
        let got = execute_with_retry(&options, Operation::DeleteSecret, attempt).await;
        let err = got.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        assert!(count >= 3, "{count}");
        assert!(
            start.elapsed() <= Duration::from_secs(10),
            "{:?}",
            start.elapsed()
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn permanent() -> TestResult {
        let options = RetryOptions::default();
        let mut count = 0;
        let got: Result<()> = execute_with_retry(&options, Operation::CreateSecret, async |_| {
            count += 1;
            Err(rpc_error(Code::AlreadyExists))
        })
        .await;
        let err = got.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists, "{err:?}");
        assert_eq!(count, 1);
        let status = err.as_rpc().and_then(|e| e.status());
        assert!(matches!(status, Some(s) if s.code == Code::AlreadyExists), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn uses_custom_policies() -> TestResult {
        let mut policy = MockPolicy::new();
        policy.expect_remaining_time().return_const(None);
        policy
            .expect_on_error()
            .times(2)
            .withf(|state, _| state.attempt_count < 3)
            .returning(|_, e| RetryResult::Continue(e));
        policy
            .expect_on_error()
            .once()
            .withf(|state, _| state.attempt_count == 3)
            .returning(|_, e| RetryResult::Exhausted(e));
        let options = RetryOptions::default().with_retry_policy(policy);

        let mut count = 0;
        let got: Result<()> = execute_with_retry(&options, Operation::GetSecret, async |remaining| {
            count += 1;
            assert_eq!(remaining, None);
            Err(rpc_error(Code::Internal))
        })
        .await;
        let err = got.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other, "{err:?}");
        assert_eq!(count, 3);
        Ok(())
    }
}
