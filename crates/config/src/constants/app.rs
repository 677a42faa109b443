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

/// Application name
/// Default value: VergeOS Exporter
pub const APP_NAME: &str = "VergeOS Exporter";

/// Application version, taken from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration logger level
/// Default value: info
/// Environment variable: RUST_LOG
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default address the exporter listens on.
/// Default value: 0.0.0.0:9888
/// Environment variable: VERGEOS_LISTEN_ADDRESS
/// Command line argument: --web.listen-address
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:9888";

/// Default path under which metrics are exposed.
/// Default value: /metrics
/// Environment variable: VERGEOS_METRICS_PATH
/// Command line argument: --web.telemetry-path
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// Default base URL of the VergeOS API.
/// Default value: http://localhost
/// Environment variable: VERGEOS_URL
/// Command line argument: --verge.url
pub const DEFAULT_VERGEOS_URL: &str = "http://localhost";

/// Default timeout for a single call against the VergeOS API, in seconds.
/// Default value: 30
/// Environment variable: VERGEOS_SCRAPE_TIMEOUT_SECS
/// Command line argument: --scrape.timeout
pub const DEFAULT_SCRAPE_TIMEOUT_SECS: u64 = 30;

/// Whether self-signed certificates presented by the VergeOS API are accepted.
/// VergeOS installs ship with a self-signed certificate.
/// Default value: true
/// Environment variable: VERGEOS_INSECURE
/// Command line argument: --insecure
pub const DEFAULT_INSECURE: bool = true;

/// How long a resolved system name stays cached, in seconds.
/// `0` keeps the first resolved name for the lifetime of the process.
/// Default value: 0
/// Environment variable: VERGEOS_SYSTEM_NAME_TTL_SECS
/// Command line argument: --system-name.ttl
pub const DEFAULT_SYSTEM_NAME_TTL_SECS: u64 = 0;

/// Timeout for the credential check performed once at startup, in seconds.
pub const STARTUP_CHECK_TIMEOUT_SECS: u64 = 10;
