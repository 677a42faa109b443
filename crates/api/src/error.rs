// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by a [`crate::ReadApi`] call.
///
/// Every variant is fatal for the collector that issued the call; the
/// pipeline never retries.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {path} failed: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {path} timed out")]
    Timeout { path: String },

    #[error("authentication rejected by {path} (HTTP {status})")]
    Unauthorized { path: String, status: u16 },

    #[error("unexpected HTTP status {status} from {path}")]
    Status { path: String, status: u16 },

    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} not found in API response")]
    NotFound(&'static str),
}

impl ApiError {
    pub(crate) fn from_reqwest(path: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { path: path.to_string() }
        } else {
            Self::Http {
                path: path.to_string(),
                source,
            }
        }
    }

    /// Whether the platform rejected the configured credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
