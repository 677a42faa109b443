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

//! In-memory [`ReadApi`] used by the pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use vergeos_api::{
    ApiError, Cluster, ClusterStatus, ClusterTier, ClusterTierStatus, MachineDrive, PhysicalNode, ReadApi, Result,
    StorageTier, SystemInfo,
};

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub cloud_name: String,
    pub system_info: SystemInfo,
    pub storage_tiers: Vec<StorageTier>,
    pub cluster_tiers: Vec<ClusterTier>,
    pub machine_drives: Vec<MachineDrive>,
    pub clusters: Vec<Cluster>,
    pub cluster_statuses: Vec<ClusterStatus>,
    pub physical_nodes: Vec<PhysicalNode>,
    /// Endpoint names that fail with a transport-like error.
    pub failing: Vec<&'static str>,
    /// Endpoint names whose records arrive without their identity key.
    pub missing_keys: Vec<&'static str>,
}

#[derive(Debug, Default)]
pub struct FakeApi {
    snapshot: Mutex<Snapshot>,
    cloud_name_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            cloud_name_calls: AtomicUsize::new(0),
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut Snapshot)) {
        f(&mut self.snapshot.lock().unwrap());
    }

    pub fn cloud_name_calls(&self) -> usize {
        self.cloud_name_calls.load(Ordering::SeqCst)
    }

    fn read<T>(&self, endpoint: &'static str, f: impl FnOnce(&Snapshot) -> T) -> Result<T> {
        let snapshot = self.snapshot.lock().unwrap();
        if snapshot.failing.contains(&endpoint) {
            return Err(ApiError::Status {
                path: format!("/api/v4/{endpoint}"),
                status: 503,
            });
        }
        if snapshot.missing_keys.contains(&endpoint) {
            let source = serde_json::from_str::<Vec<ClusterTier>>(r#"[{"$key": 5, "cluster": 1}]"#)
                .expect_err("record without tier must not decode");
            return Err(ApiError::Decode {
                path: format!("/api/v4/{endpoint}"),
                source,
            });
        }
        Ok(f(&snapshot))
    }
}

#[async_trait]
impl ReadApi for FakeApi {
    async fn cloud_name(&self) -> Result<String> {
        self.cloud_name_calls.fetch_add(1, Ordering::SeqCst);
        self.read("settings", |s| s.cloud_name.clone())
    }

    async fn system_info(&self) -> Result<SystemInfo> {
        self.read("version", |s| s.system_info.clone())
    }

    async fn storage_tiers(&self) -> Result<Vec<StorageTier>> {
        self.read("storage_tiers", |s| s.storage_tiers.clone())
    }

    async fn cluster_tiers(&self) -> Result<Vec<ClusterTier>> {
        self.read("cluster_tiers", |s| s.cluster_tiers.clone())
    }

    async fn machine_drives(&self) -> Result<Vec<MachineDrive>> {
        self.read("machine_drives", |s| s.machine_drives.clone())
    }

    async fn clusters(&self) -> Result<Vec<Cluster>> {
        self.read("clusters", |s| s.clusters.clone())
    }

    async fn cluster_statuses(&self) -> Result<Vec<ClusterStatus>> {
        self.read("cluster_status", |s| s.cluster_statuses.clone())
    }

    async fn physical_nodes(&self) -> Result<Vec<PhysicalNode>> {
        self.read("nodes", |s| s.physical_nodes.clone())
    }
}

pub fn storage_tier(tier: i64) -> StorageTier {
    StorageTier {
        tier,
        description: format!("Tier {tier}"),
        capacity: 10_000,
        used: 2_500,
        allocated: 5_000,
        dedupe_ratio: 100,
    }
}

pub fn cluster_tier(key: i64, tier: i64, status: &str, redundant: bool, bad_drives: f64) -> ClusterTier {
    ClusterTier {
        key,
        cluster: 1,
        tier,
        status: Some(ClusterTierStatus {
            status: status.to_string(),
            transaction: 1_000 + key as u64,
            working: true,
            redundant,
            bad_drives,
            ..Default::default()
        }),
    }
}

pub fn drive(key: i64, node: &str, tier: i64, status: &str, repairing: i64) -> MachineDrive {
    MachineDrive {
        key,
        name: format!("drive{key}"),
        node_display: node.to_string(),
        status: status.to_string(),
        vsan_tier: Some(tier),
        vsan_repairing: repairing,
    }
}

pub fn cluster(key: i64, name: &str) -> Cluster {
    Cluster {
        key,
        name: name.to_string(),
        enabled: true,
        ram_per_unit: 4096,
        cores_per_unit: 1,
        target_ram_pct: 80.0,
    }
}

pub fn cluster_status(cluster: i64) -> ClusterStatus {
    ClusterStatus {
        cluster,
        status: "online".to_string(),
        state: "online".to_string(),
        total_nodes: 2,
        online_nodes: 2,
        ..Default::default()
    }
}

pub fn physical_node(key: i64, name: &str, cluster: i64) -> PhysicalNode {
    PhysicalNode {
        key,
        name: name.to_string(),
        cluster,
        ipmi_status: "ok".to_string(),
        ram: 65_536,
        vm_ram: 32_768,
    }
}

/// A healthy two-cluster system with tiers 0 and 3.
pub fn lab_snapshot() -> Snapshot {
    Snapshot {
        cloud_name: "lab".to_string(),
        system_info: SystemInfo {
            version: "26.1.2".to_string(),
            hash: "abc123".to_string(),
        },
        storage_tiers: vec![storage_tier(0), storage_tier(3)],
        cluster_tiers: vec![
            cluster_tier(10, 0, "online", true, 0.0),
            cluster_tier(11, 1, "online", true, 7.0),
            cluster_tier(12, 2, "online", true, 9.0),
            cluster_tier(13, 3, "online", true, 0.0),
        ],
        machine_drives: vec![
            drive(1, "node1", 0, "online", 0),
            drive(2, "node1", 0, "online", 0),
            drive(3, "node1", 0, "online", 0),
            drive(4, "node2", 0, "offline", 0),
            drive(5, "node3", 0, "online", 1),
        ],
        clusters: vec![cluster(1, "prod"), cluster(2, "dev")],
        cluster_statuses: vec![cluster_status(1), cluster_status(2)],
        physical_nodes: vec![
            physical_node(100, "node1", 1),
            physical_node(101, "node2", 1),
            physical_node(102, "node3", 2),
        ],
        failing: Vec::new(),
        missing_keys: Vec::new(),
    }
}
