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

//! vSAN tier capacity and status metrics.

use super::family_sample;
use crate::MetricType;
use crate::aggregate::TierRow;
use crate::classify::bool_value;
use crate::format::PrometheusMetric;

const METRIC_CAPACITY: &str = "vergeos_vsan_tier_capacity";
const METRIC_USED: &str = "vergeos_vsan_tier_used";
const METRIC_ALLOCATED: &str = "vergeos_vsan_tier_allocated";
const METRIC_DEDUPE_RATIO: &str = "vergeos_vsan_tier_dedupe_ratio";

const METRIC_TRANSACTION: &str = "vergeos_vsan_tier_transaction";
const METRIC_REPAIRS: &str = "vergeos_vsan_tier_repairs";
const METRIC_STATE: &str = "vergeos_vsan_tier_state";
const METRIC_BAD_DRIVES: &str = "vergeos_vsan_bad_drives";
const METRIC_ENCRYPTION: &str = "vergeos_vsan_encryption_status";
const METRIC_REDUNDANT: &str = "vergeos_vsan_redundant";
const METRIC_LAST_WALK: &str = "vergeos_vsan_last_walk_time_ms";
const METRIC_LAST_FULLWALK: &str = "vergeos_vsan_last_fullwalk_time_ms";
const METRIC_FULLWALK_STATUS: &str = "vergeos_vsan_fullwalk_status";
const METRIC_FULLWALK_PROGRESS: &str = "vergeos_vsan_fullwalk_progress";
const METRIC_SPACE_THROTTLE: &str = "vergeos_vsan_cur_space_throttle_ms";

const HELP_CAPACITY: &str = "VSAN tier capacity in bytes";
const HELP_USED: &str = "VSAN tier used space in bytes";
const HELP_ALLOCATED: &str = "VSAN tier allocated space in bytes";
const HELP_DEDUPE_RATIO: &str = "VSAN tier deduplication ratio";

const HELP_TRANSACTION: &str = "VSAN tier transaction count";
const HELP_REPAIRS: &str = "Number of repairs in VSAN tier";
const HELP_STATE: &str = "VSAN tier state (1=working, 0=not working)";
const HELP_BAD_DRIVES: &str = "Number of bad drives in VSAN tier";
const HELP_ENCRYPTION: &str = "VSAN tier encryption status (1=encrypted, 0=not encrypted)";
const HELP_REDUNDANT: &str = "VSAN tier redundancy status (1=redundant, 0=not redundant)";
const HELP_LAST_WALK: &str = "Last walk time in milliseconds";
const HELP_LAST_FULLWALK: &str = "Last full walk time in milliseconds";
const HELP_FULLWALK_STATUS: &str = "VSAN tier fullwalk status (1=in progress, 0=not in progress)";
const HELP_FULLWALK_PROGRESS: &str = "VSAN tier fullwalk progress percentage";
const HELP_SPACE_THROTTLE: &str = "Current space throttle in milliseconds";

/// Collects tier metrics from joined storage tier rows.
///
/// Capacity samples are labelled `tier` and `description` and are emitted
/// once for every configured tier. Status samples are labelled `tier`,
/// `cluster` (the cluster key) and `status`, one set per cluster tier record
/// carrying a status block.
///
/// The dedupe ratio is reported by the platform in hundredths.
#[must_use]
pub fn collect_storage_metrics(system_name: &str, tiers: &[TierRow]) -> Vec<PrometheusMetric> {
    let details: usize = tiers.iter().map(|row| row.details.len()).sum();
    let mut metrics = Vec::with_capacity(tiers.len() * 4 + details * 11);

    for row in tiers {
        let tier = &row.entity;
        let tier_label = tier.tier.to_string();

        let capacity = [
            (METRIC_CAPACITY, HELP_CAPACITY, tier.capacity as f64),
            (METRIC_USED, HELP_USED, tier.used as f64),
            (METRIC_ALLOCATED, HELP_ALLOCATED, tier.allocated as f64),
            (METRIC_DEDUPE_RATIO, HELP_DEDUPE_RATIO, f64::from(tier.dedupe_ratio) / 100.0),
        ];
        for (name, help, value) in capacity {
            metrics.push(
                family_sample(system_name, name, MetricType::Gauge, help, value)
                    .with_label_owned("tier", tier_label.clone())
                    .with_label_owned("description", tier.description.clone()),
            );
        }

        for detail in &row.details {
            let Some(status) = detail.status.as_ref() else {
                continue;
            };
            let cluster_label = detail.cluster.to_string();

            let samples = [
                (METRIC_TRANSACTION, MetricType::Counter, HELP_TRANSACTION, status.transaction as f64),
                (METRIC_REPAIRS, MetricType::Gauge, HELP_REPAIRS, status.repairs as f64),
                (METRIC_STATE, MetricType::Gauge, HELP_STATE, bool_value(status.working)),
                (METRIC_BAD_DRIVES, MetricType::Gauge, HELP_BAD_DRIVES, status.bad_drives),
                (METRIC_ENCRYPTION, MetricType::Gauge, HELP_ENCRYPTION, bool_value(status.encrypted)),
                (METRIC_REDUNDANT, MetricType::Gauge, HELP_REDUNDANT, bool_value(status.redundant)),
                (METRIC_LAST_WALK, MetricType::Gauge, HELP_LAST_WALK, status.last_walk_time_ms as f64),
                (METRIC_LAST_FULLWALK, MetricType::Gauge, HELP_LAST_FULLWALK, status.last_fullwalk_time_ms as f64),
                (METRIC_FULLWALK_STATUS, MetricType::Gauge, HELP_FULLWALK_STATUS, bool_value(status.fullwalk)),
                (METRIC_FULLWALK_PROGRESS, MetricType::Gauge, HELP_FULLWALK_PROGRESS, status.progress),
                (METRIC_SPACE_THROTTLE, MetricType::Gauge, HELP_SPACE_THROTTLE, status.cur_space_throttle_ms),
            ];
            for (name, metric_type, help, value) in samples {
                metrics.push(
                    family_sample(system_name, name, metric_type, help, value)
                        .with_label_owned("tier", tier_label.clone())
                        .with_label_owned("cluster", cluster_label.clone())
                        .with_label_owned("status", status.status.clone()),
                );
            }
        }
    }

    metrics
}
