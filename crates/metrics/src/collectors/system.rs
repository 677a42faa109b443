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

use super::family_sample;
use crate::MetricType;
use crate::format::PrometheusMetric;
use vergeos_api::SystemInfo;

const METRIC_VERSION: &str = "vergeos_system_version";
const METRIC_INFO: &str = "vergeos_system_info";

const HELP_VERSION: &str = "Current version of the VergeOS system (always 1, version in label)";
const HELP_INFO: &str = "Information about the VergeOS system";

/// Collects the platform version and build info as constant `1` samples.
#[must_use]
pub fn collect_system_metrics(system_name: &str, info: &SystemInfo) -> Vec<PrometheusMetric> {
    vec![
        family_sample(system_name, METRIC_VERSION, MetricType::Gauge, HELP_VERSION, 1.0)
            .with_label_owned("version", info.version.clone()),
        family_sample(system_name, METRIC_INFO, MetricType::Gauge, HELP_INFO, 1.0)
            .with_label_owned("version", info.version.clone())
            .with_label_owned("hash", info.hash.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_info_labels() {
        let info = SystemInfo {
            version: "26.1.2".to_string(),
            hash: "abc123".to_string(),
        };
        let metrics = collect_system_metrics("lab", &info);
        assert_eq!(metrics.len(), 2);

        let labels: Vec<&str> = metrics[1].labels.iter().map(|(k, _)| *k).collect();
        assert_eq!(labels, vec!["system_name", "version", "hash"]);
        assert_eq!(metrics[1].label("hash"), Some("abc123"));
        assert!(metrics.iter().all(|m| m.value == 1.0));
    }
}
