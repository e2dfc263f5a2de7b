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

/// The remote operation performed by a (retried) call.
///
/// Used to annotate errors and tracing spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operation {
    CreateSecret,
    GetSecret,
    UpdateSecret,
    DeleteSecret,
    AddSecretVersion,
    AccessSecretVersion,
    ListSecretVersions,
}

impl Operation {
    /// The RPC name, as it appears in the service definition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateSecret => "CreateSecret",
            Self::GetSecret => "GetSecret",
            Self::UpdateSecret => "UpdateSecret",
            Self::DeleteSecret => "DeleteSecret",
            Self::AddSecretVersion => "AddSecretVersion",
            Self::AccessSecretVersion => "AccessSecretVersion",
            Self::ListSecretVersions => "ListSecretVersions",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
