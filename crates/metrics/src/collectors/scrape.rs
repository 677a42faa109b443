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

//! Self-observability samples for each scrape.

use crate::MetricType;
use crate::format::PrometheusMetric;
use std::time::Duration;

const METRIC_SUCCESS: &str = "vergeos_scrape_collector_success";
const METRIC_DURATION: &str = "vergeos_scrape_collector_duration_seconds";

const HELP_SUCCESS: &str = "Whether the collector succeeded during the last scrape (1=success, 0=failure)";
const HELP_DURATION: &str = "Time spent by the collector during the last scrape in seconds";

/// Outcome of one family during one scrape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyReport {
    pub collector: &'static str,
    pub success: bool,
    pub duration: Duration,
}

/// Emits a success and a duration sample per family, labelled `collector`.
///
/// These samples carry no `system_name`, which may itself be unavailable.
#[must_use]
pub fn collect_scrape_metrics(reports: &[FamilyReport]) -> Vec<PrometheusMetric> {
    let mut metrics = Vec::with_capacity(reports.len() * 2);
    for report in reports {
        metrics.push(
            PrometheusMetric::new(METRIC_SUCCESS, MetricType::Gauge, HELP_SUCCESS, if report.success { 1.0 } else { 0.0 })
                .with_label("collector", report.collector),
        );
    }
    for report in reports {
        metrics.push(
            PrometheusMetric::new(METRIC_DURATION, MetricType::Gauge, HELP_DURATION, report.duration.as_secs_f64())
                .with_label("collector", report.collector),
        );
    }
    metrics
}
