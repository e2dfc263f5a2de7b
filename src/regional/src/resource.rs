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

//! Regional endpoints and resource names.
//!
//! Regional secrets live in a location-specific endpoint, for example
//! `secretmanager.us-central1.rep.googleapis.com`, and their names include the
//! location:
//!
//! ```text
//! projects/{project}/locations/{location}/secrets/{secret}/versions/{version}
//! ```
//!
//! The functions in this module are pure. They only check that identifiers
//! are not empty, and that the location can be used as part of a hostname.
//!
//! # Example
//! ```
//! # use secretmanager_regional::resource::*;
//! let name = resolve_secret_path("my-project", "us-central1", "my-secret")?;
//! assert_eq!(name, "projects/my-project/locations/us-central1/secrets/my-secret");
//! assert_eq!(trailing_segment(&name), "my-secret");
//! # Ok::<(), secretmanager_regional::Error>(())
//! ```

use crate::{Error, Result};

/// The version alias for the most recently created version of a secret.
pub const LATEST_VERSION: &str = "latest";

const ENDPOINT_PREFIX: &str = "secretmanager";
const ENDPOINT_SUFFIX: &str = "rep.googleapis.com";

/// Returns the regional endpoint (a hostname) for `location`.
///
/// # Example
/// ```
/// # use secretmanager_regional::resource::resolve_endpoint;
/// assert_eq!(
///     resolve_endpoint("us-central1")?,
///     "secretmanager.us-central1.rep.googleapis.com"
/// );
/// assert!(resolve_endpoint("").is_err());
/// # Ok::<(), secretmanager_regional::Error>(())
/// ```
pub fn resolve_endpoint(location: &str) -> Result<String> {
    check_location(location)?;
    Ok(format!("{ENDPOINT_PREFIX}.{location}.{ENDPOINT_SUFFIX}"))
}

/// Returns the regional endpoint for `location` as an `https://` URL.
///
/// This is the format expected by the client builder.
pub fn endpoint_url(location: &str) -> Result<String> {
    Ok(format!("https://{}", resolve_endpoint(location)?))
}

/// The parent for secrets in `location`.
pub fn resolve_location_path(project: &str, location: &str) -> Result<String> {
    check_identifier("project", project)?;
    check_location(location)?;
    Ok(format!("projects/{project}/locations/{location}"))
}

/// The full name of a regional secret.
pub fn resolve_secret_path(project: &str, location: &str, secret: &str) -> Result<String> {
    let parent = resolve_location_path(project, location)?;
    check_identifier("secret", secret)?;
    Ok(format!("{parent}/secrets/{secret}"))
}

/// The full name of a regional secret version.
///
/// `version` is either a version number or an alias such as
/// [LATEST_VERSION].
pub fn resolve_version_path(
    project: &str,
    location: &str,
    secret: &str,
    version: &str,
) -> Result<String> {
    let secret = resolve_secret_path(project, location, secret)?;
    check_identifier("version", version)?;
    Ok(format!("{secret}/versions/{version}"))
}

/// Returns the last `/`-separated segment of a resource name.
pub fn trailing_segment(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

fn check_identifier(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_argument(format!("{what} must not be empty")));
    }
    Ok(())
}

fn check_location(location: &str) -> Result<()> {
    check_identifier("location", location)?;
    if let Some(c) = location
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
    {
        return Err(Error::invalid_argument(format!(
            "location `{location}` contains invalid character {c:?}"
        )));
    }
    Ok(())
}
