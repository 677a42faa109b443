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

use crate::Result;
use crate::records::{Cluster, ClusterStatus, ClusterTier, MachineDrive, PhysicalNode, StorageTier, SystemInfo};
use async_trait::async_trait;

/// Read side of the VergeOS API as seen by the collectors.
///
/// Each method returns the complete current list for one record family, or
/// fails outright. Implementations own transport concerns (authentication,
/// timeouts, encoding); callers never retry.
#[async_trait]
pub trait ReadApi: Send + Sync {
    /// Display name of the whole system (the `cloud_name` setting).
    async fn cloud_name(&self) -> Result<String>;

    /// Platform version information.
    async fn system_info(&self) -> Result<SystemInfo>;

    /// Configured storage tiers. Authoritative for tier membership.
    async fn storage_tiers(&self) -> Result<Vec<StorageTier>>;

    /// Per-cluster tier status records. May reference tiers that are not configured.
    async fn cluster_tiers(&self) -> Result<Vec<ClusterTier>>;

    /// Drives attached to physical nodes, with their vSAN state signals.
    async fn machine_drives(&self) -> Result<Vec<MachineDrive>>;

    /// Defined clusters. Authoritative for cluster membership.
    async fn clusters(&self) -> Result<Vec<Cluster>>;

    /// Runtime status records, one per cluster key.
    async fn cluster_statuses(&self) -> Result<Vec<ClusterStatus>>;

    /// Physical nodes.
    async fn physical_nodes(&self) -> Result<Vec<PhysicalNode>>;
}
