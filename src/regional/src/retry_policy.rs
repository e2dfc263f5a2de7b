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

//! Retry policies classifying errors by [ErrorKind].
//!
//! The policies implement [google_cloud_gax::retry_policy::RetryPolicy], and
//! compose with the decorators in that module:
//!
//! ```
//! # use secretmanager_regional::retry_policy::TransientErrors;
//! use google_cloud_gax::retry_policy::RetryPolicyExt;
//! use std::time::Duration;
//! let policy = TransientErrors
//!     .with_time_limit(Duration::from_secs(60))
//!     .with_attempt_limit(5);
//! ```

use crate::error::ErrorKind;
use google_cloud_gax::error::Error as RpcError;
use google_cloud_gax::retry_policy::RetryPolicy;
use google_cloud_gax::retry_result::RetryResult;
use google_cloud_gax::retry_state::RetryState;

/// Retries unavailable, overloaded, and timed out operations.
///
/// Any error classified as [ErrorKind::Transient] continues the loop. That
/// includes `UNAVAILABLE`, `RESOURCE_EXHAUSTED`, `DEADLINE_EXCEEDED`,
/// client-side timeouts, and I/O errors. All other errors are permanent.
///
/// The policy ignores idempotency, all the Secret Manager operations used in
/// this crate are safe to retry after these errors.
///
/// This policy never stops the loop on its own, decorate it with
/// [with_attempt_limit] or [with_time_limit].
///
/// [with_attempt_limit]: google_cloud_gax::retry_policy::RetryPolicyExt::with_attempt_limit
/// [with_time_limit]: google_cloud_gax::retry_policy::RetryPolicyExt::with_time_limit
#[derive(Clone, Debug)]
pub struct TransientErrors;

impl RetryPolicy for TransientErrors {
    fn on_error(&self, _state: &RetryState, error: RpcError) -> RetryResult {
        if ErrorKind::from_rpc(&error) == ErrorKind::Transient {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}

/// A classifier built from a predicate on the [ErrorKind].
///
/// Errors matching the predicate continue the loop, all other errors are
/// permanent.
///
/// # Example
/// ```
/// # use secretmanager_regional::retry_policy::RetryableErrors;
/// # use secretmanager_regional::ErrorKind;
/// use google_cloud_gax::retry_policy::RetryPolicyExt;
/// // Also retry `NotFound`, to wait for a newly created resource to appear.
/// let policy = RetryableErrors::new(|kind| {
///     matches!(kind, ErrorKind::Transient | ErrorKind::NotFound)
/// })
/// .with_attempt_limit(5);
/// ```
pub struct RetryableErrors {
    predicate: Box<dyn Fn(ErrorKind) -> bool + Send + Sync>,
}

impl RetryableErrors {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(ErrorKind) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl std::fmt::Debug for RetryableErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryableErrors").finish_non_exhaustive()
    }
}

impl RetryPolicy for RetryableErrors {
    fn on_error(&self, _state: &RetryState, error: RpcError) -> RetryResult {
        if (self.predicate)(ErrorKind::from_rpc(&error)) {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}
