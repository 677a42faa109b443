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

//! vSAN drive state counts per node and tier.

use super::family_sample;
use crate::MetricType;
use crate::aggregate::{DriveBucketKey, DriveStateCounts};
use crate::classify::DriveState;
use crate::format::PrometheusMetric;
use std::collections::BTreeMap;

fn metric_name(state: DriveState) -> &'static str {
    match state {
        DriveState::Online => "vergeos_vsan_drive_online_count",
        DriveState::Offline => "vergeos_vsan_drive_offline_count",
        DriveState::Repairing => "vergeos_vsan_drive_repairing_count",
        DriveState::Initializing => "vergeos_vsan_drive_initializing_count",
        DriveState::Verifying => "vergeos_vsan_drive_verifying_count",
        DriveState::NoRedundant => "vergeos_vsan_drive_noredundant_count",
        DriveState::OutOfSpace => "vergeos_vsan_drive_outofspace_count",
    }
}

fn metric_help(state: DriveState) -> &'static str {
    match state {
        DriveState::Online => "Number of drives in the 'online' state per node and tier",
        DriveState::Offline => "Number of drives in the 'offline' state per node and tier",
        DriveState::Repairing => "Number of drives in the 'repairing' state per node and tier",
        DriveState::Initializing => "Number of drives in the 'initializing' state per node and tier",
        DriveState::Verifying => "Number of drives in the 'verifying' state per node and tier",
        DriveState::NoRedundant => "Number of drives in the 'noredundant' state per node and tier",
        DriveState::OutOfSpace => "Number of drives in the 'outofspace' state per node and tier",
    }
}

/// Emits one sample per state for every observed (node, tier) bucket,
/// labelled `node_name` and `tier`. States without drives are emitted as 0.
#[must_use]
pub fn collect_drive_state_metrics(
    system_name: &str,
    buckets: &BTreeMap<DriveBucketKey, DriveStateCounts>,
) -> Vec<PrometheusMetric> {
    let mut metrics = Vec::with_capacity(buckets.len() * DriveState::ALL.len());

    for state in DriveState::ALL {
        for (key, counts) in buckets {
            metrics.push(
                family_sample(system_name, metric_name(state), MetricType::Gauge, metric_help(state), counts.get(state) as f64)
                    .with_label_owned("node_name", key.node_name.clone())
                    .with_label_owned("tier", key.tier.to_string()),
            );
        }
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_rows() {
        let mut counts = DriveStateCounts::default();
        counts.increment(DriveState::Offline);
        let mut buckets = BTreeMap::new();
        buckets.insert(
            DriveBucketKey {
                node_name: "node2".to_string(),
                tier: 0,
            },
            counts,
        );

        let metrics = collect_drive_state_metrics("lab", &buckets);
        assert_eq!(metrics.len(), 7);
        for state in DriveState::ALL {
            let sample = metrics.iter().find(|m| m.name == metric_name(state)).unwrap();
            let expected = if state == DriveState::Offline { 1.0 } else { 0.0 };
            assert_eq!(sample.value, expected, "state {state}");
            assert_eq!(sample.label("node_name"), Some("node2"));
            assert_eq!(sample.label("tier"), Some("0"));
        }
    }

    #[test]
    fn test_no_buckets_no_samples() {
        assert!(collect_drive_state_metrics("lab", &BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_names_match_states() {
        for state in DriveState::ALL {
            assert_eq!(metric_name(state), format!("vergeos_vsan_drive_{}_count", state.as_str()));
            assert!(metric_help(state).contains(state.as_str()));
        }
    }
}
