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

use std::io;
use thiserror::Error;
use vergeos_api::ApiError;

pub type Result<T> = std::result::Result<T, ExporterError>;

/// Errors that stop the exporter.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("{0} is required")]
    MissingCredential(&'static str),

    #[error("invalid metrics path {0:?}: must start with '/' and must not be '/'")]
    InvalidMetricsPath(String),

    #[error("authentication failed: check username/password for {url}")]
    Authentication {
        url: String,
        #[source]
        source: ApiError,
    },

    #[error("failed to connect to VergeOS API at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: ApiError,
    },

    #[error("VergeOS API at {url} did not answer within {secs}s")]
    StartupTimeout { url: String, secs: u64 },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),

    #[error("failed to initialize logging: {0}")]
    Tracing(String),
}

impl ExporterError {
    /// Classifies a failed startup connectivity check.
    pub fn startup(url: &str, source: ApiError) -> Self {
        if source.is_auth_error() {
            Self::Authentication {
                url: url.to_string(),
                source,
            }
        } else {
            Self::Connect {
                url: url.to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_error_classification() {
        let auth = ExporterError::startup(
            "https://verge.local",
            ApiError::Unauthorized {
                path: "/api/v4/settings".to_string(),
                status: 401,
            },
        );
        assert!(matches!(auth, ExporterError::Authentication { .. }));
        assert_eq!(auth.to_string(), "authentication failed: check username/password for https://verge.local");

        let other = ExporterError::startup("https://verge.local", ApiError::NotFound("cloud_name"));
        assert!(matches!(other, ExporterError::Connect { .. }));
    }
}
