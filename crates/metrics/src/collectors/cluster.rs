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

//! Cluster definition and runtime status metrics.

use super::family_sample;
use crate::MetricType;
use crate::aggregate::ClusterRow;
use crate::classify::{bool_value, cluster_healthy, cluster_online};
use crate::format::PrometheusMetric;

const METRIC_CLUSTERS_TOTAL: &str = "vergeos_clusters_total";
const METRIC_ENABLED: &str = "vergeos_cluster_enabled";
const METRIC_RAM_PER_UNIT: &str = "vergeos_cluster_ram_per_unit";
const METRIC_CORES_PER_UNIT: &str = "vergeos_cluster_cores_per_unit";
const METRIC_TARGET_RAM_PCT: &str = "vergeos_cluster_target_ram_pct";

const METRIC_STATUS: &str = "vergeos_cluster_status";
const METRIC_HEALTH: &str = "vergeos_cluster_health";
const METRIC_TOTAL_RAM: &str = "vergeos_cluster_total_ram";
const METRIC_USED_RAM: &str = "vergeos_cluster_used_ram";
const METRIC_CORES_TOTAL: &str = "vergeos_cluster_cores_total";
const METRIC_USED_CORES: &str = "vergeos_cluster_used_cores";
const METRIC_RUNNING_MACHINES: &str = "vergeos_cluster_running_machines";
const METRIC_TOTAL_NODES: &str = "vergeos_cluster_total_nodes";
const METRIC_ONLINE_NODES: &str = "vergeos_cluster_online_nodes";
const METRIC_ONLINE_RAM: &str = "vergeos_cluster_online_ram";
const METRIC_ONLINE_CORES: &str = "vergeos_cluster_online_cores";
const METRIC_PHYS_RAM_USED: &str = "vergeos_cluster_phys_ram_used";

const HELP_CLUSTERS_TOTAL: &str = "Total number of clusters";
const HELP_ENABLED: &str = "Cluster enabled status (1=enabled, 0=disabled)";
const HELP_RAM_PER_UNIT: &str = "RAM per unit in bytes";
const HELP_CORES_PER_UNIT: &str = "Cores per unit";
const HELP_TARGET_RAM_PCT: &str = "Target RAM percentage";

const HELP_STATUS: &str = "Cluster status (1=online, 0=offline)";
const HELP_HEALTH: &str = "Cluster health status (1=healthy, 0=unhealthy)";
const HELP_TOTAL_RAM: &str = "Total RAM in bytes";
const HELP_USED_RAM: &str = "Used RAM in bytes";
const HELP_CORES_TOTAL: &str = "Total number of CPU cores";
const HELP_USED_CORES: &str = "Number of CPU cores in use";
const HELP_RUNNING_MACHINES: &str = "Total number of running machines";
const HELP_TOTAL_NODES: &str = "Total number of nodes";
const HELP_ONLINE_NODES: &str = "Number of online nodes";
const HELP_ONLINE_RAM: &str = "Online RAM in bytes";
const HELP_ONLINE_CORES: &str = "Number of online cores";
const HELP_PHYS_RAM_USED: &str = "Physical RAM used in bytes";

/// Collects cluster metrics from joined cluster rows.
///
/// `vergeos_clusters_total` carries only `system_name`. Everything else is
/// labelled `cluster` with the cluster name; status-derived samples are
/// skipped for clusters without a status record this cycle. The join keys
/// status records by cluster, so a row carries at most one.
#[must_use]
pub fn collect_cluster_metrics(system_name: &str, clusters: &[ClusterRow]) -> Vec<PrometheusMetric> {
    let mut metrics = Vec::with_capacity(1 + clusters.len() * 17);

    metrics.push(family_sample(
        system_name,
        METRIC_CLUSTERS_TOTAL,
        MetricType::Gauge,
        HELP_CLUSTERS_TOTAL,
        clusters.len() as f64,
    ));

    for row in clusters {
        let cluster = &row.entity;

        let definition = [
            (METRIC_ENABLED, HELP_ENABLED, bool_value(cluster.enabled)),
            (METRIC_RAM_PER_UNIT, HELP_RAM_PER_UNIT, cluster.ram_per_unit as f64),
            (METRIC_CORES_PER_UNIT, HELP_CORES_PER_UNIT, cluster.cores_per_unit as f64),
            (METRIC_TARGET_RAM_PCT, HELP_TARGET_RAM_PCT, cluster.target_ram_pct),
        ];

        let status = row.details.iter().flat_map(|status| {
            [
                (METRIC_STATUS, HELP_STATUS, bool_value(cluster_online(&status.status))),
                (METRIC_HEALTH, HELP_HEALTH, bool_value(cluster_healthy(&status.state))),
                (METRIC_TOTAL_RAM, HELP_TOTAL_RAM, status.total_ram as f64),
                (METRIC_USED_RAM, HELP_USED_RAM, status.used_ram as f64),
                (METRIC_CORES_TOTAL, HELP_CORES_TOTAL, status.total_cores as f64),
                (METRIC_USED_CORES, HELP_USED_CORES, status.used_cores as f64),
                (METRIC_RUNNING_MACHINES, HELP_RUNNING_MACHINES, status.running_machines as f64),
                (METRIC_TOTAL_NODES, HELP_TOTAL_NODES, status.total_nodes as f64),
                (METRIC_ONLINE_NODES, HELP_ONLINE_NODES, status.online_nodes as f64),
                (METRIC_ONLINE_RAM, HELP_ONLINE_RAM, status.online_ram as f64),
                (METRIC_ONLINE_CORES, HELP_ONLINE_CORES, status.online_cores as f64),
                (METRIC_PHYS_RAM_USED, HELP_PHYS_RAM_USED, status.phys_ram_used as f64),
            ]
        });

        for (name, help, value) in definition.into_iter().chain(status) {
            metrics.push(
                family_sample(system_name, name, MetricType::Gauge, help, value).with_label_owned("cluster", cluster.name.clone()),
            );
        }
    }

    metrics
}
