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

//! The error type for regional Secret Manager helpers.
//!
//! Remote failures keep the original [google_cloud_gax::error::Error] as their
//! source, and are classified into an [ErrorKind]. Applications typically
//! branch on the kind:
//!
//! ```
//! # use secretmanager_regional::{Error, ErrorKind};
//! fn is_benign(e: &Error) -> bool {
//!     matches!(e.kind(), ErrorKind::NotFound | ErrorKind::AlreadyExists)
//! }
//! ```

use crate::operation::Operation;
use google_cloud_gax::error::Error as RpcError;
use google_cloud_gax::error::rpc::Code;

/// A specialized `Result` for the regional helpers.
pub type Result<T> = std::result::Result<T, Error>;

/// The classification of an [Error].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A local validation failed, no RPC was attempted.
    InvalidArgument,
    /// The resource does not exist, or was already deleted.
    NotFound,
    /// A resource with the same name already exists.
    AlreadyExists,
    /// The service is unavailable, overloaded, or the request timed out.
    ///
    /// Returned after the retry loop gives up.
    Transient,
    /// The caller lacks permission for the operation.
    PermissionDenied,
    /// The credentials are missing, invalid, or expired.
    Unauthenticated,
    /// Any other error.
    Other,
}

impl ErrorKind {
    /// Classifies an error returned by the client library.
    pub fn from_rpc(error: &RpcError) -> Self {
        if error.is_timeout() || error.is_io() || error.is_exhausted() {
            return Self::Transient;
        }
        if error.is_authentication() {
            return Self::Unauthenticated;
        }
        match error.status().map(|s| s.code) {
            Some(Code::NotFound) => Self::NotFound,
            Some(Code::AlreadyExists) => Self::AlreadyExists,
            Some(Code::Unavailable | Code::ResourceExhausted | Code::DeadlineExceeded) => {
                Self::Transient
            }
            Some(Code::PermissionDenied) => Self::PermissionDenied,
            Some(Code::Unauthenticated) => Self::Unauthenticated,
            Some(Code::InvalidArgument) => Self::InvalidArgument,
            _ => Self::Other,
        }
    }
}

/// The error type for the regional helpers.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An identifier or parameter was rejected before making any RPC.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The client for a regional endpoint could not be created.
    #[error("cannot create client for endpoint {endpoint}")]
    Client {
        endpoint: String,
        #[source]
        source: google_cloud_gax::client_builder::Error,
    },

    /// An RPC failed, possibly after several attempts.
    #[error("{operation} failed ({kind:?})")]
    Rpc {
        operation: Operation,
        kind: ErrorKind,
        #[source]
        source: RpcError,
    },
}

impl Error {
    pub(crate) fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Wraps an RPC error, classifying it.
    pub fn rpc(operation: Operation, source: RpcError) -> Self {
        let kind = ErrorKind::from_rpc(&source);
        Self::Rpc {
            operation,
            kind,
            source,
        }
    }

    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Client { source, .. } if source.is_default_credentials() => {
                ErrorKind::Unauthenticated
            }
            Self::Client { .. } => ErrorKind::Other,
            Self::Rpc { kind, .. } => *kind,
        }
    }

    /// Returns true if the resource was not found.
    ///
    /// Teardown code typically treats this as success.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Returns true if the error is [ErrorKind::Transient].
    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }

    /// The operation that failed, if the error came from an RPC.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Rpc { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// The underlying error from the client library, if any.
    pub fn as_rpc(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc { source, .. } => Some(source),
            _ => None,
        }
    }
}
