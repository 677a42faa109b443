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

//! Aggregation of filtered records into per-cycle datasets.
//!
//! Two shapes are produced: per-entity passthrough rows, where each entity
//! carries every valid detail record that references it, and grouped counts,
//! where drives are bucketed by node and tier and counted per canonical state.

use crate::classify::{DRIVE_STATE_COUNT, DriveState, classify_drive};
use crate::filter::{DetailRecord, Entity};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;
use vergeos_api::{Cluster, ClusterStatus, ClusterTier, MachineDrive, PhysicalNode, StorageTier};

/// An authoritative entity and the detail records that were valid for it this cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Joined<E, D> {
    pub entity: E,
    pub details: Vec<D>,
}

pub type TierRow = Joined<StorageTier, ClusterTier>;
pub type ClusterRow = Joined<Cluster, ClusterStatus>;

/// Pairs every entity with the detail records that reference it.
///
/// `details` must already be filtered against `entities`. A storage tier
/// keeps one cluster tier record per cluster. Only a record repeating the
/// [`DetailRecord::record_id`] of an earlier one is dropped, since both would
/// describe the same series; that drop is logged. Entity and detail order
/// are preserved.
pub fn join_details<E, D>(family: &'static str, entities: Vec<E>, details: Vec<D>) -> Vec<Joined<E, D>>
where
    E: Entity,
    D: DetailRecord<Key = E::Key>,
{
    let mut seen: HashSet<D::Id> = HashSet::with_capacity(details.len());
    let mut by_key: HashMap<E::Key, Vec<D>> = HashMap::with_capacity(details.len());
    for detail in details {
        let id = detail.record_id();
        if !seen.insert(id) {
            debug!(family, key = ?detail.entity_key(), id = ?id, "dropping repeated detail record");
            continue;
        }
        by_key.entry(detail.entity_key()).or_default().push(detail);
    }

    entities
        .into_iter()
        .map(|entity| {
            let details = by_key.remove(&entity.key()).unwrap_or_default();
            Joined { entity, details }
        })
        .collect()
}

/// Grouping key for drive state counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriveBucketKey {
    pub node_name: String,
    pub tier: i64,
}

/// Per-state drive counts for one [`DriveBucketKey`]. Every state is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveStateCounts {
    counts: [u64; DRIVE_STATE_COUNT],
}

impl DriveStateCounts {
    pub fn get(&self, state: DriveState) -> u64 {
        self.counts[state.index()]
    }

    pub fn increment(&mut self, state: DriveState) {
        self.counts[state.index()] += 1;
    }

    /// All states with their counts, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (DriveState, u64)> + '_ {
        DriveState::ALL.into_iter().map(|state| (state, self.get(state)))
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Counts drives per (node, tier) and canonical state.
///
/// Drives without a tier assignment (missing or negative `vsan_tier`) are
/// skipped and create no bucket. Drives with an unclassified state still
/// create their bucket but are not counted in any state.
pub fn aggregate_drive_states(drives: &[MachineDrive]) -> BTreeMap<DriveBucketKey, DriveStateCounts> {
    let mut buckets: BTreeMap<DriveBucketKey, DriveStateCounts> = BTreeMap::new();

    for drive in drives {
        let Some(tier) = drive.vsan_tier.filter(|tier| *tier >= 0) else {
            continue;
        };

        let counts = buckets
            .entry(DriveBucketKey {
                node_name: drive.node_display.clone(),
                tier,
            })
            .or_default();

        match classify_drive(&drive.status, drive.vsan_repairing) {
            Some(state) => counts.increment(state),
            None => debug!(
                drive = %drive.name,
                node = %drive.node_display,
                status = %drive.status,
                "drive state not tracked, not counted"
            ),
        }
    }

    buckets
}

/// A physical node with its resolved cluster name.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRow {
    pub cluster_name: String,
    pub node: PhysicalNode,
}

/// Resolves each node's cluster key to a name, falling back to `cluster_<key>`
/// when the cluster is not in `clusters`.
pub fn resolve_node_clusters(nodes: Vec<PhysicalNode>, clusters: &[Cluster]) -> Vec<NodeRow> {
    let names: HashMap<i64, &str> = clusters.iter().map(|c| (c.key, c.name.as_str())).collect();

    nodes
        .into_iter()
        .map(|node| {
            let cluster_name = match names.get(&node.cluster) {
                Some(name) if !name.is_empty() => (*name).to_string(),
                _ => format!("cluster_{}", node.cluster),
            };
            NodeRow { cluster_name, node }
        })
        .collect()
}

/// Node count per resolved cluster name.
pub fn count_nodes_per_cluster(rows: &[NodeRow]) -> BTreeMap<&str, u64> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.cluster_name.as_str()).or_insert(0) += 1;
    }
    counts
}
