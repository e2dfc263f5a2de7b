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

//! Helper functions to generate random resource names.

/// A common prefix for resource ids.
///
/// Where possible, we use this prefix for randomly generated resource ids.
pub const PREFIX: &str = "rust-secret-";

/// The maximum length for a secret ID.
const SECRET_ID_LENGTH: usize = 255;

/// Generate a random secret id.
///
/// The id is the common prefix followed by a v4 UUID, unique for each run.
pub fn random_secret_id() -> String {
    format!("{PREFIX}{}", uuid::Uuid::new_v4())
}
