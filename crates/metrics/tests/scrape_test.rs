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

mod common;

use common::{FakeApi, cluster_status, cluster_tier, lab_snapshot, physical_node};
use std::collections::BTreeSet;
use std::sync::Arc;
use vergeos_api::ClusterTier;
use vergeos_metrics::{Family, PrometheusMetric, Scraper, SystemNameCache, render_metrics};

const DURATION_METRIC: &str = "vergeos_scrape_collector_duration_seconds";

fn scraper(api: &Arc<FakeApi>) -> Scraper {
    Scraper::new(api.clone(), SystemNameCache::default())
}

fn named<'a>(metrics: &'a [PrometheusMetric], name: &str) -> Vec<&'a PrometheusMetric> {
    metrics.iter().filter(|m| m.name == name).collect()
}

fn success(metrics: &[PrometheusMetric], collector: &str) -> Option<f64> {
    metrics
        .iter()
        .find(|m| m.name == "vergeos_scrape_collector_success" && m.label("collector") == Some(collector))
        .map(|m| m.value)
}

fn is_storage_sample(m: &PrometheusMetric) -> bool {
    m.name.starts_with("vergeos_vsan_") && !m.name.starts_with("vergeos_vsan_drive_")
}

/// Rendered output without the timing samples, which differ between runs.
fn stable_render(metrics: &[PrometheusMetric]) -> String {
    let stable: Vec<PrometheusMetric> = metrics.iter().filter(|m| m.name != DURATION_METRIC).cloned().collect();
    render_metrics(&stable)
}

#[tokio::test]
async fn test_phantom_tiers_produce_no_samples() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    let metrics = scraper(&api).scrape().await;

    let tiers: BTreeSet<&str> = metrics.iter().filter(|m| is_storage_sample(m)).filter_map(|m| m.label("tier")).collect();
    assert_eq!(tiers, BTreeSet::from(["0", "3"]));

    let bad_drives = named(&metrics, "vergeos_vsan_bad_drives");
    assert_eq!(bad_drives.len(), 2);
    assert!(bad_drives.iter().all(|m| m.value == 0.0));
}

#[tokio::test]
async fn test_tier_status_reported_for_every_cluster() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    api.update(|s| {
        s.cluster_tiers.push(ClusterTier {
            cluster: 2,
            ..cluster_tier(20, 0, "repairing", false, 2.0)
        })
    });
    let metrics = scraper(&api).scrape().await;

    let mut tier0: Vec<(&str, &str, f64)> = named(&metrics, "vergeos_vsan_bad_drives")
        .into_iter()
        .filter(|m| m.label("tier") == Some("0"))
        .filter_map(|m| Some((m.label("cluster")?, m.label("status")?, m.value)))
        .collect();
    tier0.sort_by(|a, b| a.0.cmp(b.0));
    assert_eq!(tier0, vec![("1", "online", 0.0), ("2", "repairing", 2.0)]);

    let capacity = named(&metrics, "vergeos_vsan_tier_capacity");
    assert_eq!(capacity.iter().filter(|m| m.label("tier") == Some("0")).count(), 1);
    assert_eq!(success(&metrics, "storage"), Some(1.0));
}

#[tokio::test]
async fn test_drive_state_buckets_with_repair_override() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    let metrics = scraper(&api).scrape().await;

    let count = |state: &str, node: &str| {
        let name = format!("vergeos_vsan_drive_{state}_count");
        metrics
            .iter()
            .find(|m| m.name == name && m.label("node_name") == Some(node) && m.label("tier") == Some("0"))
            .map(|m| m.value)
    };

    assert_eq!(count("online", "node1"), Some(3.0));
    assert_eq!(count("offline", "node1"), Some(0.0));
    assert_eq!(count("offline", "node2"), Some(1.0));
    assert_eq!(count("online", "node2"), Some(0.0));
    assert_eq!(count("repairing", "node3"), Some(1.0));
    assert_eq!(count("online", "node3"), Some(0.0));

    let drive_samples = metrics.iter().filter(|m| m.name.starts_with("vergeos_vsan_drive_")).count();
    assert_eq!(drive_samples, 3 * 7);
}

#[tokio::test]
async fn test_every_sample_starts_with_system_name() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    let metrics = scraper(&api).scrape().await;

    for metric in metrics.iter().filter(|m| !m.name.starts_with("vergeos_scrape_")) {
        assert_eq!(metric.labels.first().map(|(k, v)| (*k, v.as_ref())), Some(("system_name", "lab")), "{}", metric.name);
    }
    for family in Family::ALL {
        assert_eq!(success(&metrics, family.as_str()), Some(1.0), "{family}");
    }
}

#[tokio::test]
async fn test_identical_input_renders_identically() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    let scraper = scraper(&api);

    let first = stable_render(&scraper.scrape().await);
    let second = stable_render(&scraper.scrape().await);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_failed_family_emits_nothing_and_others_survive() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    api.update(|s| s.failing.push("cluster_tiers"));

    let metrics = scraper(&api).scrape().await;

    assert!(!metrics.iter().any(is_storage_sample), "no partial storage family");
    assert_eq!(success(&metrics, "storage"), Some(0.0));

    assert_eq!(success(&metrics, "cluster"), Some(1.0));
    assert_eq!(named(&metrics, "vergeos_clusters_total")[0].value, 2.0);
    assert_eq!(named(&metrics, "vergeos_vsan_drive_online_count").len(), 3);
    assert_eq!(named(&metrics, "vergeos_system_info").len(), 1);
}

#[tokio::test]
async fn test_detail_without_key_fails_family() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    api.update(|s| s.missing_keys.push("cluster_tiers"));

    let metrics = scraper(&api).scrape().await;

    assert!(!metrics.iter().any(is_storage_sample));
    assert_eq!(success(&metrics, "storage"), Some(0.0));
    assert_eq!(success(&metrics, "drive_state"), Some(1.0));
}

#[tokio::test]
async fn test_shared_cluster_list_failure_affects_both_users() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    api.update(|s| s.failing.push("clusters"));

    let metrics = scraper(&api).scrape().await;

    assert_eq!(success(&metrics, "cluster"), Some(0.0));
    assert_eq!(success(&metrics, "node"), Some(0.0));
    assert!(!metrics.iter().any(|m| m.name.starts_with("vergeos_cluster") || m.name.starts_with("vergeos_node")));
    assert_eq!(success(&metrics, "storage"), Some(1.0));
}

#[tokio::test]
async fn test_system_name_failure_fails_every_family() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    api.update(|s| s.failing.push("settings"));

    let metrics = scraper(&api).scrape().await;

    assert!(metrics.iter().all(|m| m.name.starts_with("vergeos_scrape_")));
    for family in Family::ALL {
        assert_eq!(success(&metrics, family.as_str()), Some(0.0));
    }
}

#[tokio::test]
async fn test_removed_entities_leave_no_stale_series() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    let scraper = scraper(&api);

    let first = scraper.scrape().await;
    assert!(first.iter().any(|m| m.label("cluster") == Some("dev")));
    assert!(first.iter().any(|m| m.label("node_name") == Some("node3")));
    assert!(first.iter().any(|m| is_storage_sample(m) && m.label("tier") == Some("3")));

    api.update(|s| {
        s.clusters.retain(|c| c.name != "dev");
        s.cluster_statuses = vec![cluster_status(1)];
        s.physical_nodes = vec![physical_node(100, "node1", 1), physical_node(101, "node2", 1)];
        s.machine_drives.retain(|d| d.node_display != "node3");
        s.storage_tiers.retain(|t| t.tier != 3);
    });

    let second = scraper.scrape().await;
    assert!(!second.iter().any(|m| m.label("cluster") == Some("dev")));
    assert!(!second.iter().any(|m| m.label("node_name") == Some("node3")));
    assert!(!second.iter().any(|m| is_storage_sample(m) && m.label("tier") == Some("3")));
    assert_eq!(named(&second, "vergeos_clusters_total")[0].value, 1.0);
}

#[tokio::test]
async fn test_recovered_family_returns_next_scrape() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    api.update(|s| s.failing.push("machine_drives"));
    let scraper = scraper(&api);

    let failed = scraper.scrape().await;
    assert_eq!(success(&failed, "drive_state"), Some(0.0));
    assert!(named(&failed, "vergeos_vsan_drive_online_count").is_empty());

    api.update(|s| s.failing.clear());
    let recovered = scraper.scrape().await;
    assert_eq!(success(&recovered, "drive_state"), Some(1.0));
    assert_eq!(named(&recovered, "vergeos_vsan_drive_online_count").len(), 3);
}

#[tokio::test]
async fn test_single_family_collect() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    let metrics = scraper(&api).collect(Family::System).await.unwrap();

    let text = render_metrics(&metrics);
    assert!(text.contains("vergeos_system_info{system_name=\"lab\",version=\"26.1.2\",hash=\"abc123\"} 1\n"));
}

#[tokio::test]
async fn test_render_output_of_cluster_family() {
    let api = Arc::new(FakeApi::new(lab_snapshot()));
    let metrics = scraper(&api).collect(Family::Cluster).await.unwrap();
    let text = render_metrics(&metrics);

    assert_eq!(text.matches("# TYPE vergeos_cluster_status gauge").count(), 1);
    assert!(text.contains("vergeos_cluster_status{system_name=\"lab\",cluster=\"prod\"} 1\n"));
    assert!(text.contains("vergeos_cluster_status{system_name=\"lab\",cluster=\"dev\"} 1\n"));
    assert!(text.contains("vergeos_clusters_total{system_name=\"lab\"} 2\n"));
}
