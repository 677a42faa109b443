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

//! Per-scrape orchestration across families.
//!
//! Every call to [`Scraper::scrape`] runs each family's pipeline
//! (fetch, filter, classify, aggregate, emit) from scratch and concurrently.
//! Families share nothing except the system name cache, and a failed family
//! contributes no samples to that scrape.

use crate::aggregate::{aggregate_drive_states, join_details, resolve_node_clusters};
use crate::cache::SystemNameCache;
use crate::collectors::{
    FamilyReport, collect_cluster_metrics, collect_drive_state_metrics, collect_node_metrics, collect_scrape_metrics,
    collect_storage_metrics, collect_system_metrics,
};
use crate::error::CollectError;
use crate::filter::{authoritative_keys, filter_phantoms};
use crate::format::PrometheusMetric;
use futures::TryFutureExt;
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};
use vergeos_api::ReadApi;

/// A group of related metrics collected and failing together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Storage,
    DriveState,
    Cluster,
    Node,
    System,
}

impl Family {
    pub const ALL: [Family; 5] = [Family::Storage, Family::DriveState, Family::Cluster, Family::Node, Family::System];

    /// Value of the `collector` label on scrape meta samples.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::DriveState => "drive_state",
            Self::Cluster => "cluster",
            Self::Node => "node",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collects all families against one [`ReadApi`].
pub struct Scraper {
    api: Arc<dyn ReadApi>,
    system_name: SystemNameCache,
}

impl Scraper {
    pub fn new(api: Arc<dyn ReadApi>, system_name: SystemNameCache) -> Self {
        Self { api, system_name }
    }

    /// Resolves the system name through the shared cache.
    pub async fn system_name(&self) -> vergeos_api::Result<String> {
        self.system_name.get_or_fetch(self.api.as_ref()).await
    }

    /// Runs one scrape of every family and returns its samples, followed by
    /// the scrape meta samples.
    #[instrument(level = "debug", skip(self))]
    pub async fn scrape(&self) -> Vec<PrometheusMetric> {
        let outcomes = join_all(Family::ALL.into_iter().map(|family| async move {
            let started = Instant::now();
            let result = self.collect(family).await;
            (family, result, started.elapsed())
        }))
        .await;

        let mut metrics = Vec::new();
        let mut reports = Vec::with_capacity(outcomes.len());
        for (family, result, duration) in outcomes {
            let success = match result {
                Ok(samples) => {
                    debug!(collector = %family, samples = samples.len(), "collector finished");
                    metrics.extend(samples);
                    true
                }
                Err(err) => {
                    warn!(collector = %family, error = %err, "collector failed, no samples for this scrape");
                    false
                }
            };
            reports.push(FamilyReport {
                collector: family.as_str(),
                success,
                duration,
            });
        }

        metrics.extend(collect_scrape_metrics(&reports));
        metrics
    }

    /// Runs one family's pipeline. Either every sample of the family is
    /// returned or none is.
    #[instrument(level = "debug", skip(self, family), fields(collector = %family))]
    pub async fn collect(&self, family: Family) -> Result<Vec<PrometheusMetric>, CollectError> {
        let system_name = self.system_name().await.map_err(CollectError::fetch("system name"))?;

        match family {
            Family::Storage => self.collect_storage(&system_name).await,
            Family::DriveState => self.collect_drive_states(&system_name).await,
            Family::Cluster => self.collect_clusters(&system_name).await,
            Family::Node => self.collect_nodes(&system_name).await,
            Family::System => self.collect_system(&system_name).await,
        }
    }

    async fn collect_storage(&self, system_name: &str) -> Result<Vec<PrometheusMetric>, CollectError> {
        let (tiers, details) = futures::try_join!(
            self.api.storage_tiers().map_err(CollectError::fetch("storage tiers")),
            self.api.cluster_tiers().map_err(CollectError::fetch("cluster tiers")),
        )?;

        let details = filter_phantoms("storage", &authoritative_keys(&tiers), details);
        let rows = join_details("storage", tiers, details);
        Ok(collect_storage_metrics(system_name, &rows))
    }

    async fn collect_drive_states(&self, system_name: &str) -> Result<Vec<PrometheusMetric>, CollectError> {
        let drives = self
            .api
            .machine_drives()
            .map_err(CollectError::fetch("machine drives"))
            .await?;

        let buckets = aggregate_drive_states(&drives);
        Ok(collect_drive_state_metrics(system_name, &buckets))
    }

    async fn collect_clusters(&self, system_name: &str) -> Result<Vec<PrometheusMetric>, CollectError> {
        let (clusters, statuses) = futures::try_join!(
            self.api.clusters().map_err(CollectError::fetch("clusters")),
            self.api.cluster_statuses().map_err(CollectError::fetch("cluster status")),
        )?;

        let statuses = filter_phantoms("cluster", &authoritative_keys(&clusters), statuses);
        let rows = join_details("cluster", clusters, statuses);
        Ok(collect_cluster_metrics(system_name, &rows))
    }

    async fn collect_nodes(&self, system_name: &str) -> Result<Vec<PrometheusMetric>, CollectError> {
        let (nodes, clusters) = futures::try_join!(
            self.api.physical_nodes().map_err(CollectError::fetch("physical nodes")),
            self.api.clusters().map_err(CollectError::fetch("clusters")),
        )?;

        let rows = resolve_node_clusters(nodes, &clusters);
        Ok(collect_node_metrics(system_name, &rows))
    }

    async fn collect_system(&self, system_name: &str) -> Result<Vec<PrometheusMetric>, CollectError> {
        let info = self
            .api
            .system_info()
            .map_err(CollectError::fetch("system info"))
            .await?;

        Ok(collect_system_metrics(system_name, &info))
    }
}
