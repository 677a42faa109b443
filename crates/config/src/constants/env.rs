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

/// Environment variable name for the VergeOS API base URL.
/// - Example: `export VERGEOS_URL=https://verge.example.com`
pub const ENV_VERGEOS_URL: &str = "VERGEOS_URL";

/// Environment variable name for the VergeOS API user.
pub const ENV_VERGEOS_USERNAME: &str = "VERGEOS_USERNAME";

/// Environment variable name for the VergeOS API password.
pub const ENV_VERGEOS_PASSWORD: &str = "VERGEOS_PASSWORD";

/// Environment variable name for the listen address of the exporter.
/// - Example: `export VERGEOS_LISTEN_ADDRESS=127.0.0.1:9888`
pub const ENV_LISTEN_ADDRESS: &str = "VERGEOS_LISTEN_ADDRESS";

/// Environment variable name for the metrics path.
pub const ENV_METRICS_PATH: &str = "VERGEOS_METRICS_PATH";

/// Environment variable name for the per-request timeout against the VergeOS API.
/// - Unit: seconds (u64).
/// - Semantics: a call that does not complete in time fails its collector for the current scrape.
pub const ENV_SCRAPE_TIMEOUT_SECS: &str = "VERGEOS_SCRAPE_TIMEOUT_SECS";

/// Environment variable name controlling acceptance of self-signed certificates.
/// - Valid values: `true`/`false`, `1`/`0`, `yes`/`no`.
pub const ENV_INSECURE: &str = "VERGEOS_INSECURE";

/// Environment variable name for the system name cache TTL.
/// - Unit: seconds (u64).
/// - Semantics: `0` caches the first resolved name forever; any other value re-resolves it once expired.
pub const ENV_SYSTEM_NAME_TTL_SECS: &str = "VERGEOS_SYSTEM_NAME_TTL_SECS";
