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

use crate::retry_policy::TransientErrors;
use google_cloud_gax::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use google_cloud_gax::exponential_backoff::ExponentialBackoffBuilder;
use google_cloud_gax::options::RequestOptionsBuilder;
use google_cloud_gax::retry_policy::{RetryPolicy, RetryPolicyArg, RetryPolicyExt};
use google_cloud_gax::retry_throttler::{CircuitBreaker, RetryThrottlerArg, SharedRetryThrottler};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// The total time budget in the default retry policy.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(120);
/// The maximum number of attempts in the default retry policy.
pub const DEFAULT_ATTEMPT_LIMIT: u32 = 10;
/// The first delay in the default backoff policy.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
/// The cap on delays in the default backoff policy.
pub const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(30);
/// The growth factor in the default backoff policy.
pub const DEFAULT_SCALING: f64 = 2.0;

/// The retry, backoff, and throttling policies used by [execute_with_retry].
///
/// The defaults retry [transient errors][TransientErrors] for up to
/// 120 seconds or 10 attempts, whichever comes first. The backoff starts at
/// 1 second, doubles on each failure, and is capped at 30 seconds. Retry
/// attempts are not throttled.
///
/// # Example
/// ```
/// # use secretmanager_regional::RetryOptions;
/// # use secretmanager_regional::retry_policy::TransientErrors;
/// use google_cloud_gax::exponential_backoff::ExponentialBackoffBuilder;
/// use google_cloud_gax::retry_policy::RetryPolicyExt;
/// use std::time::Duration;
/// let options = RetryOptions::default()
///     .with_retry_policy(TransientErrors.with_attempt_limit(3))
///     .with_backoff_policy(
///         ExponentialBackoffBuilder::new()
///             .with_initial_delay(Duration::from_millis(10))
///             .with_maximum_delay(Duration::from_millis(100))
///             .clamp(),
///     );
/// ```
///
/// [execute_with_retry]: crate::execute_with_retry
#[derive(Clone, Debug)]
pub struct RetryOptions {
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    retry_throttler: SharedRetryThrottler,
}

impl RetryOptions {
    pub fn new() -> Self {
        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_delay(DEFAULT_INITIAL_DELAY)
            .with_maximum_delay(DEFAULT_MAXIMUM_DELAY)
            .with_scaling(DEFAULT_SCALING)
            .clamp();
        Self {
            retry_policy: Arc::new(
                TransientErrors
                    .with_time_limit(DEFAULT_TIME_LIMIT)
                    .with_attempt_limit(DEFAULT_ATTEMPT_LIMIT),
            ),
            backoff_policy: Arc::new(backoff),
            // Failures cost no tokens, the breaker never opens.
            retry_throttler: Arc::new(Mutex::new(CircuitBreaker::clamp(1, 0, 0))),
        }
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        let arg: RetryPolicyArg = v.into();
        self.retry_policy = arg.into();
        self
    }

    /// Replaces the backoff policy.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        let arg: BackoffPolicyArg = v.into();
        self.backoff_policy = arg.into();
        self
    }

    /// Replaces the retry throttler.
    ///
    /// Throttlers keep state, clones of these options share the throttler.
    pub fn with_retry_throttler<V: Into<RetryThrottlerArg>>(mut self, v: V) -> Self {
        let arg: RetryThrottlerArg = v.into();
        self.retry_throttler = arg.into();
        self
    }

    pub fn retry_policy(&self) -> Arc<dyn RetryPolicy> {
        self.retry_policy.clone()
    }

    pub fn backoff_policy(&self) -> Arc<dyn BackoffPolicy> {
        self.backoff_policy.clone()
    }

    pub fn retry_throttler(&self) -> SharedRetryThrottler {
        self.retry_throttler.clone()
    }

    // Requests configured this way are retried by the client library.
    pub(crate) fn apply<B: RequestOptionsBuilder>(&self, builder: B) -> B {
        builder
            .with_idempotency(true)
            .with_retry_policy(self.retry_policy())
            .with_backoff_policy(self.backoff_policy())
            .with_retry_throttler(self.retry_throttler())
    }
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self::new()
    }
}
