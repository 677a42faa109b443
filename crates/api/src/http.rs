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

//! reqwest-backed implementation of [`ReadApi`].

use crate::client::ReadApi;
use crate::error::{ApiError, Result};
use crate::records::{Cluster, ClusterStatus, ClusterTier, MachineDrive, PhysicalNode, Setting, StorageTier, SystemInfo};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};
use vergeos_config::{DEFAULT_INSECURE, DEFAULT_SCRAPE_TIMEOUT_SECS, VERSION};

/// Setting key holding the display name of the system.
const CLOUD_NAME_KEY: &str = "cloud_name";

/// A GET request against the API: path plus fixed query pairs.
struct Endpoint {
    path: &'static str,
    query: &'static [(&'static str, &'static str)],
}

const SETTINGS: Endpoint = Endpoint {
    path: "/api/v4/settings",
    query: &[("fields", "most"), ("filter", "key eq \"cloud_name\"")],
};

const VERSION_INFO: Endpoint = Endpoint {
    path: "/version.json",
    query: &[],
};

const STORAGE_TIERS: Endpoint = Endpoint {
    path: "/api/v4/storage_tiers",
    query: &[("fields", "all")],
};

const CLUSTER_TIERS: Endpoint = Endpoint {
    path: "/api/v4/cluster_tiers",
    query: &[("fields", "all,status[all]")],
};

const MACHINE_DRIVES: Endpoint = Endpoint {
    path: "/api/v4/machine_drives",
    query: &[
        (
            "fields",
            "$key,name,machine#parent#$key as node,machine#type as type,machine#name as node_display,\
             status#status as statuslist,physical_status#vsan_tier as vsan_tier,\
             physical_status#vsan_repairing as vsan_repairing",
        ),
        ("filter", "type eq 'node'"),
    ],
};

const CLUSTERS: Endpoint = Endpoint {
    path: "/api/v4/clusters",
    query: &[("fields", "all")],
};

const CLUSTER_STATUS: Endpoint = Endpoint {
    path: "/api/v4/cluster_status",
    query: &[("fields", "all")],
};

const PHYSICAL_NODES: Endpoint = Endpoint {
    path: "/api/v4/nodes",
    query: &[("fields", "most"), ("filter", "physical eq true")],
};

/// Connection settings for [`HttpReadApi`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    pub url: String,
    pub username: String,
    pub password: String,
    /// Deadline for a single request, connect through body.
    pub timeout: Duration,
    /// Accept self-signed certificates.
    pub insecure: bool,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            timeout: Duration::from_secs(DEFAULT_SCRAPE_TIMEOUT_SECS),
            insecure: DEFAULT_INSECURE,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("insecure", &self.insecure)
            .finish()
    }
}

/// [`ReadApi`] over HTTP with basic authentication.
#[derive(Clone)]
pub struct HttpReadApi {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpReadApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .user_agent(format!("vergeos-exporter/{VERSION}"))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            username: config.username,
            password: config.password,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(level = "debug", skip(self, endpoint), fields(path = endpoint.path))]
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let path = endpoint.path;
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(endpoint.query)
            .basic_auth(&self.username, Some(&self.password))
            .header("X-JSON-Non-Compact", "1")
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(path, e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ApiError::from_reqwest(path, e))?;
        debug!(bytes = body.len(), "received response");

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

impl fmt::Debug for HttpReadApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpReadApi")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ReadApi for HttpReadApi {
    async fn cloud_name(&self) -> Result<String> {
        let settings: Vec<Setting> = self.get_json(&SETTINGS).await?;
        let index = settings.iter().position(|s| s.key == CLOUD_NAME_KEY).unwrap_or(0);
        settings
            .into_iter()
            .nth(index)
            .map(|s| s.value)
            .ok_or(ApiError::NotFound(CLOUD_NAME_KEY))
    }

    async fn system_info(&self) -> Result<SystemInfo> {
        self.get_json(&VERSION_INFO).await
    }

    async fn storage_tiers(&self) -> Result<Vec<StorageTier>> {
        self.get_json(&STORAGE_TIERS).await
    }

    async fn cluster_tiers(&self) -> Result<Vec<ClusterTier>> {
        self.get_json(&CLUSTER_TIERS).await
    }

    async fn machine_drives(&self) -> Result<Vec<MachineDrive>> {
        self.get_json(&MACHINE_DRIVES).await
    }

    async fn clusters(&self) -> Result<Vec<Cluster>> {
        self.get_json(&CLUSTERS).await
    }

    async fn cluster_statuses(&self) -> Result<Vec<ClusterStatus>> {
        self.get_json(&CLUSTER_STATUS).await
    }

    async fn physical_nodes(&self) -> Result<Vec<PhysicalNode>> {
        self.get_json(&PHYSICAL_NODES).await
    }
}
