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

//! Collection pipeline of the VergeOS exporter.
//!
//! Each scrape rebuilds every sample from that scrape's API responses. The
//! stages are kept separate and, apart from fetching, pure:
//!
//! - [`filter`]: drops detail records referencing entities that are not listed
//! - [`classify`]: resolves raw state signals into canonical states
//! - [`aggregate`]: joins details to entities and counts drives per state
//! - [`collectors`]: turns the resolved dataset into [`PrometheusMetric`]s
//!
//! [`Scraper`] runs the stages for every family and [`render_metrics`]
//! produces the text exposition.

pub mod aggregate;
pub mod cache;
pub mod classify;
pub mod collectors;
mod error;
pub mod filter;
mod format;
mod metric_type;
mod scrape;

pub use cache::SystemNameCache;
pub use error::CollectError;
pub use format::{PrometheusMetric, render_metrics};
pub use metric_type::MetricType;
pub use scrape::{Family, Scraper};
