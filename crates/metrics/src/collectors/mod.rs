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

//! Metric emitters, one per family.
//!
//! Each collector is a pure function from one cycle's resolved dataset to
//! the samples of its family. Collectors never consult earlier cycles, so a
//! sample exists only while the entity behind it is still listed.
//!
//! Every family sample carries `system_name` as its first label.
//!
//! # Example
//!
//! ```
//! use vergeos_api::SystemInfo;
//! use vergeos_metrics::collectors::collect_system_metrics;
//! use vergeos_metrics::render_metrics;
//!
//! let info = SystemInfo {
//!     version: "26.1.2".to_string(),
//!     hash: "abc123".to_string(),
//! };
//! let metrics = collect_system_metrics("lab", &info);
//! let text = render_metrics(&metrics);
//! assert!(text.contains("vergeos_system_version{system_name=\"lab\",version=\"26.1.2\"} 1"));
//! ```

mod cluster;
mod drive_state;
mod node;
mod scrape;
mod storage;
mod system;

pub use cluster::collect_cluster_metrics;
pub use drive_state::collect_drive_state_metrics;
pub use node::collect_node_metrics;
pub use scrape::{FamilyReport, collect_scrape_metrics};
pub use storage::collect_storage_metrics;
pub use system::collect_system_metrics;

use crate::{MetricType, PrometheusMetric};

/// First label of every family sample.
pub const LABEL_SYSTEM_NAME: &str = "system_name";

fn family_sample(system_name: &str, name: &'static str, metric_type: MetricType, help: &'static str, value: f64) -> PrometheusMetric {
    PrometheusMetric::new(name, metric_type, help, value).with_label_owned(LABEL_SYSTEM_NAME, system_name.to_string())
}
