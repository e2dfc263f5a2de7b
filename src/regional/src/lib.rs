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

//! Helpers to call the regional Secret Manager API.
//!
//! Regional secrets are served by a per-location endpoint, and their resource
//! names include the location. This crate contains:
//!
//! - [resource]: functions to compute the regional endpoint and the resource
//!   names for secrets and secret versions.
//! - [RegionalClient]: a thin wrapper around the generated
//!   [SecretManagerService][google_cloud_secretmanager_v1::client::SecretManagerService]
//!   client, bound to a regional endpoint, where every RPC runs in a retry
//!   loop.
//! - [RetryOptions] and [retry_policy]: the policies controlling the retry
//!   loop. They build on the policies in [google_cloud_gax].
//!
//! # Example
//! ```no_run
//! # async fn sample() -> secretmanager_regional::Result<()> {
//! use secretmanager_regional::RegionalClient;
//! let client = RegionalClient::new("us-central1").await?;
//! let secret = client.get_secret("my-project", "my-secret").await?;
//! println!("{}", secret.name);
//! # Ok(()) }
//! ```

pub mod client;
pub mod error;
pub mod list;
pub mod operation;
pub mod resource;
pub mod retry_loop;
pub mod retry_options;
pub mod retry_policy;

pub use client::RegionalClient;
pub use error::{Error, ErrorKind, Result};
pub use list::SecretVersions;
pub use operation::Operation;
pub use retry_loop::execute_with_retry;
pub use retry_options::RetryOptions;
