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

//! Record shapes returned by the VergeOS API.
//!
//! Only the fields the exporter reads are modelled. Unknown fields are
//! ignored, absent fields take their default, and `null` is treated as absent
//! for scalar fields because the API emits `null` for unset columns.
//!
//! Identity fields (`$key`, and the keys detail records are joined on) have no
//! default: a record without one fails to decode.

use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of the settings table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Setting {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// Platform build information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SystemInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,
}

/// A configured vSAN storage tier.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StorageTier {
    pub tier: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capacity: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allocated: u64,
    /// Deduplication ratio in hundredths (`150` is 1.5x).
    #[serde(default, deserialize_with = "null_as_default")]
    pub dedupe_ratio: u32,
}

/// A tier as seen from one cluster, carrying the tier's live status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClusterTier {
    #[serde(rename = "$key")]
    pub key: i64,
    pub cluster: i64,
    pub tier: i64,
    #[serde(default)]
    pub status: Option<ClusterTierStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClusterTierStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub repairs: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub working: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub bad_drives: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub encrypted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub redundant: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub last_walk_time_ms: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_fullwalk_time_ms: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub fullwalk: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub progress: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cur_space_throttle_ms: f64,
}

/// A drive attached to a physical node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MachineDrive {
    #[serde(rename = "$key")]
    pub key: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Display name of the node the drive belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub node_display: String,
    /// State reported by the drive itself.
    #[serde(rename = "statuslist", default, deserialize_with = "null_as_default")]
    pub status: String,
    /// vSAN tier the drive serves; `None` or negative when unassigned.
    #[serde(default)]
    pub vsan_tier: Option<i64>,
    /// Number of in-flight repairs on the drive.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vsan_repairing: i64,
}

/// A defined cluster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Cluster {
    #[serde(rename = "$key")]
    pub key: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ram_per_unit: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cores_per_unit: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_ram_pct: f64,
}

/// Runtime status of a cluster, referencing it by key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClusterStatus {
    pub cluster: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_nodes: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub online_nodes: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub running_machines: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_ram: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub online_ram: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used_ram: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_cores: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub online_cores: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used_cores: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phys_ram_used: u64,
}

/// A physical node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PhysicalNode {
    #[serde(rename = "$key")]
    pub key: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Key of the cluster the node belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cluster: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipmi_status: String,
    /// Physical RAM in MB.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ram: u64,
    /// RAM allocated to virtual machines in MB.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vm_ram: u64,
}
