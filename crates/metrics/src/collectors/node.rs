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

//! Physical node metrics.

use super::family_sample;
use crate::MetricType;
use crate::aggregate::{NodeRow, count_nodes_per_cluster};
use crate::classify::{bool_value, ipmi_ok};
use crate::format::PrometheusMetric;

const METRIC_NODES_TOTAL: &str = "vergeos_nodes_total";
const METRIC_IPMI_STATUS: &str = "vergeos_node_ipmi_status";
const METRIC_RAM_TOTAL: &str = "vergeos_node_ram_total";
const METRIC_RAM_ALLOCATED: &str = "vergeos_node_ram_allocated";

const HELP_NODES_TOTAL: &str = "Total number of physical nodes";
const HELP_IPMI_STATUS: &str = "IPMI status of the node (1=ok, 0=other)";
const HELP_RAM_TOTAL: &str = "Total RAM in MB";
const HELP_RAM_ALLOCATED: &str = "VM RAM in MB (vm_ram field)";

/// Label value of the node count across all clusters.
const ALL_CLUSTERS: &str = "all";

/// Collects node metrics.
///
/// `vergeos_nodes_total` is emitted once with `cluster="all"` and once per
/// cluster that has at least one node. Per-node samples are labelled
/// `cluster` and `node_name`.
#[must_use]
pub fn collect_node_metrics(system_name: &str, nodes: &[NodeRow]) -> Vec<PrometheusMetric> {
    let per_cluster = count_nodes_per_cluster(nodes);
    let mut metrics = Vec::with_capacity(1 + per_cluster.len() + nodes.len() * 3);

    metrics.push(
        family_sample(system_name, METRIC_NODES_TOTAL, MetricType::Gauge, HELP_NODES_TOTAL, nodes.len() as f64)
            .with_label("cluster", ALL_CLUSTERS),
    );
    for (cluster, count) in per_cluster {
        metrics.push(
            family_sample(system_name, METRIC_NODES_TOTAL, MetricType::Gauge, HELP_NODES_TOTAL, count as f64)
                .with_label_owned("cluster", cluster.to_string()),
        );
    }

    for row in nodes {
        let node = &row.node;
        let samples = [
            (METRIC_IPMI_STATUS, HELP_IPMI_STATUS, bool_value(ipmi_ok(&node.ipmi_status))),
            (METRIC_RAM_TOTAL, HELP_RAM_TOTAL, node.ram as f64),
            (METRIC_RAM_ALLOCATED, HELP_RAM_ALLOCATED, node.vm_ram as f64),
        ];
        for (name, help, value) in samples {
            metrics.push(
                family_sample(system_name, name, MetricType::Gauge, help, value)
                    .with_label_owned("cluster", row.cluster_name.clone())
                    .with_label_owned("node_name", node.name.clone()),
            );
        }
    }

    metrics
}
