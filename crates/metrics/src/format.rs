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

//! Samples and the Prometheus text exposition renderer.

use crate::MetricType;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Write;

/// A single Prometheus sample: name, label set, value and value kind.
///
/// Names and help texts are compile-time constants owned by the collectors.
/// Label values are usually owned strings taken from API records.
#[derive(Debug, Clone, PartialEq)]
pub struct PrometheusMetric {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
    /// Label pairs in emission order.
    pub labels: Vec<(&'static str, Cow<'static, str>)>,
    pub value: f64,
}

impl PrometheusMetric {
    #[inline]
    pub const fn new(name: &'static str, metric_type: MetricType, help: &'static str, value: f64) -> Self {
        Self {
            name,
            metric_type,
            help,
            labels: Vec::new(),
            value,
        }
    }

    #[inline]
    pub fn with_label(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.labels.push((key, value.into()));
        self
    }

    /// Adds a label with an owned string value.
    #[inline]
    pub fn with_label_owned(mut self, key: &'static str, value: String) -> Self {
        self.labels.push((key, Cow::Owned(value)));
        self
    }

    /// Value of the label `key`, if present.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_ref())
    }
}

/// Renders samples in the Prometheus text exposition format.
///
/// Samples sharing a name are written together under a single `# HELP` and
/// `# TYPE` header, in order of first appearance. Relative order within a
/// name is preserved.
pub fn render_metrics(metrics: &[PrometheusMetric]) -> String {
    let mut order: Vec<&'static str> = Vec::new();
    let mut groups: HashMap<&'static str, Vec<&PrometheusMetric>> = HashMap::new();
    for metric in metrics {
        groups
            .entry(metric.name)
            .or_insert_with(|| {
                order.push(metric.name);
                Vec::new()
            })
            .push(metric);
    }

    let mut output = String::new();
    for name in order {
        let Some(group) = groups.get(name) else { continue };
        let Some(first) = group.first() else { continue };

        let _ = writeln!(output, "# HELP {} {}", name, escape_help(first.help));
        let _ = writeln!(output, "# TYPE {} {}", name, first.metric_type.as_str());

        for metric in group {
            if metric.labels.is_empty() {
                let _ = writeln!(output, "{} {}", name, format_value(metric.value));
            } else {
                let labels: Vec<String> = metric
                    .labels
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label_value(v)))
                    .collect();
                let _ = writeln!(output, "{}{{{}}} {}", name, labels.join(","), format_value(metric.value));
            }
        }
    }

    output
}

/// Escapes a label value for use between double quotes: backslash, quote
/// and newline. System and cluster names come straight from the platform.
fn escape_label_value(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escapes a `# HELP` line. Quotes stay literal there.
fn escape_help(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Sample value in exposition syntax. Counts and byte totals print without a
/// fraction; non-finite values use `NaN`, `+Inf` and `-Inf`.
fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string()
    } else if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}
