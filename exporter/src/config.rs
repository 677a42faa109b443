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

use crate::error::{ExporterError, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::fmt;
use std::time::Duration;
use vergeos_api::ClientConfig;
use vergeos_config::{
    DEFAULT_INSECURE, DEFAULT_LISTEN_ADDRESS, DEFAULT_METRICS_PATH, DEFAULT_SCRAPE_TIMEOUT_SECS, DEFAULT_SYSTEM_NAME_TTL_SECS,
    DEFAULT_VERGEOS_URL, ENV_INSECURE, ENV_LISTEN_ADDRESS, ENV_METRICS_PATH, ENV_SCRAPE_TIMEOUT_SECS, ENV_SYSTEM_NAME_TTL_SECS,
    ENV_VERGEOS_PASSWORD, ENV_VERGEOS_URL, ENV_VERGEOS_USERNAME, VERSION,
};

/// Command line options. Every flag can also be set through its environment variable.
#[derive(Clone, Parser)]
#[command(name = "vergeos-exporter", version = VERSION, about = "Prometheus exporter for VergeOS")]
pub struct Opt {
    /// Base URL of the VergeOS API.
    #[arg(long = "verge.url", env = ENV_VERGEOS_URL, default_value = DEFAULT_VERGEOS_URL)]
    pub url: String,

    /// Username for VergeOS API authentication.
    #[arg(long = "verge.username", env = ENV_VERGEOS_USERNAME, default_value = "")]
    pub username: String,

    /// Password for VergeOS API authentication.
    #[arg(long = "verge.password", env = ENV_VERGEOS_PASSWORD, default_value = "", hide_env_values = true)]
    pub password: String,

    /// Address to listen on for the web interface and telemetry.
    #[arg(long = "web.listen-address", env = ENV_LISTEN_ADDRESS, default_value = DEFAULT_LISTEN_ADDRESS)]
    pub listen_address: String,

    /// Path under which to expose metrics.
    #[arg(long = "web.telemetry-path", env = ENV_METRICS_PATH, default_value = DEFAULT_METRICS_PATH)]
    pub metrics_path: String,

    /// Timeout in seconds for each VergeOS API request.
    #[arg(long = "scrape.timeout", env = ENV_SCRAPE_TIMEOUT_SECS, default_value_t = DEFAULT_SCRAPE_TIMEOUT_SECS)]
    pub scrape_timeout_secs: u64,

    /// Skip TLS certificate verification.
    #[arg(long, env = ENV_INSECURE, default_value_t = DEFAULT_INSECURE, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub insecure: bool,

    /// Seconds to keep the resolved system name; 0 keeps it forever.
    #[arg(long = "system-name.ttl", env = ENV_SYSTEM_NAME_TTL_SECS, default_value_t = DEFAULT_SYSTEM_NAME_TTL_SECS)]
    pub system_name_ttl_secs: u64,
}

impl Opt {
    /// Checks values clap cannot: credentials must be non-empty and the
    /// metrics path must not shadow the landing page.
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(ExporterError::MissingCredential("verge.username"));
        }
        if self.password.is_empty() {
            return Err(ExporterError::MissingCredential("verge.password"));
        }
        if !self.metrics_path.starts_with('/') || self.metrics_path == "/" {
            return Err(ExporterError::InvalidMetricsPath(self.metrics_path.clone()));
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.url, &self.username, &self.password)
            .with_timeout(Duration::from_secs(self.scrape_timeout_secs))
            .with_insecure(self.insecure)
    }

    pub fn system_name_ttl(&self) -> Option<Duration> {
        match self.system_name_ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl fmt::Debug for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("listen_address", &self.listen_address)
            .field("metrics_path", &self.metrics_path)
            .field("scrape_timeout_secs", &self.scrape_timeout_secs)
            .field("insecure", &self.insecure)
            .field("system_name_ttl_secs", &self.system_name_ttl_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ENVS: [&str; 8] = [
        ENV_VERGEOS_URL,
        ENV_VERGEOS_USERNAME,
        ENV_VERGEOS_PASSWORD,
        ENV_LISTEN_ADDRESS,
        ENV_METRICS_PATH,
        ENV_SCRAPE_TIMEOUT_SECS,
        ENV_INSECURE,
        ENV_SYSTEM_NAME_TTL_SECS,
    ];

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(ALL_ENVS, || {
            let opt = Opt::parse_from(["vergeos-exporter", "--verge.username", "admin", "--verge.password", "secret"]);
            assert_eq!(opt.url, DEFAULT_VERGEOS_URL);
            assert_eq!(opt.listen_address, "0.0.0.0:9888");
            assert_eq!(opt.metrics_path, "/metrics");
            assert_eq!(opt.scrape_timeout_secs, 30);
            assert!(opt.insecure);
            assert_eq!(opt.system_name_ttl(), None);
            assert!(opt.validate().is_ok());
        });
    }

    #[test]
    fn test_env_fallback() {
        temp_env::with_vars(
            [
                (ENV_VERGEOS_URL, Some("https://verge.example.com")),
                (ENV_VERGEOS_USERNAME, Some("monitor")),
                (ENV_VERGEOS_PASSWORD, Some("hunter2")),
                (ENV_INSECURE, Some("no")),
                (ENV_SYSTEM_NAME_TTL_SECS, Some("600")),
            ],
            || {
                let opt = Opt::parse_from(["vergeos-exporter"]);
                assert_eq!(opt.url, "https://verge.example.com");
                assert_eq!(opt.username, "monitor");
                assert!(!opt.insecure);
                assert_eq!(opt.system_name_ttl(), Some(Duration::from_secs(600)));

                let config = opt.client_config();
                assert_eq!(config.timeout, Duration::from_secs(30));
                assert!(!config.insecure);
            },
        );
    }

    #[test]
    fn test_flags_override_env() {
        temp_env::with_vars([(ENV_LISTEN_ADDRESS, Some("127.0.0.1:1"))], || {
            let opt = Opt::parse_from(["vergeos-exporter", "--web.listen-address", "127.0.0.1:9999", "--insecure", "false"]);
            assert_eq!(opt.listen_address, "127.0.0.1:9999");
            assert!(!opt.insecure);
        });
    }

    #[test]
    fn test_validation() {
        temp_env::with_vars_unset(ALL_ENVS, || {
            let opt = Opt::parse_from(["vergeos-exporter", "--verge.username", "admin"]);
            assert!(matches!(opt.validate(), Err(ExporterError::MissingCredential("verge.password"))));

            let opt = Opt::parse_from([
                "vergeos-exporter",
                "--verge.username",
                "admin",
                "--verge.password",
                "secret",
                "--web.telemetry-path",
                "/",
            ]);
            assert!(matches!(opt.validate(), Err(ExporterError::InvalidMetricsPath(_))));
        });
    }

    #[test]
    fn test_debug_redacts_password() {
        temp_env::with_vars_unset(ALL_ENVS, || {
            let opt = Opt::parse_from(["vergeos-exporter", "--verge.password", "hunter2"]);
            assert!(!format!("{opt:?}").contains("hunter2"));
        });
    }
}
