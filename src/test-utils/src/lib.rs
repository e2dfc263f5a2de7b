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

//! Test utilities for the regional Secret Manager samples.
//!
//! Tests create temporary secrets, exercise them, and delete them. The
//! [fixtures::SecretFixture] type sequences those steps, using the
//! configuration in [runtime_config::HarnessConfig]. Tests that do not need
//! the real service use [fake::FakeSecretManager].

pub mod fake;
pub mod fixtures;
pub mod resource_names;
pub mod runtime_config;
pub mod tracing;
