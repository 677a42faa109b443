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

//! Phantom-reference filtering.
//!
//! The primary listing of a family is the only source of truth for which
//! entities exist in a cycle. Detail records are kept only when the entity
//! they reference is in that listing; nothing is ever synthesized from detail
//! data alone.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;
use vergeos_api::{Cluster, ClusterStatus, ClusterTier, StorageTier};

/// A member of a family's authoritative set.
pub trait Entity {
    type Key: Copy + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}

/// A secondary record that references an [`Entity`] by key.
pub trait DetailRecord {
    type Key: Copy + Eq + Hash + Debug;
    type Id: Copy + Eq + Hash + Debug;

    /// Key of the entity this record describes.
    fn entity_key(&self) -> Self::Key;

    /// Identity of the record itself. Records sharing an id would emit the
    /// same series.
    fn record_id(&self) -> Self::Id;
}

impl Entity for StorageTier {
    type Key = i64;

    fn key(&self) -> i64 {
        self.tier
    }
}

impl DetailRecord for ClusterTier {
    type Key = i64;
    type Id = (i64, i64);

    fn entity_key(&self) -> i64 {
        self.tier
    }

    fn record_id(&self) -> (i64, i64) {
        (self.cluster, self.tier)
    }
}

impl Entity for Cluster {
    type Key = i64;

    fn key(&self) -> i64 {
        self.key
    }
}

impl DetailRecord for ClusterStatus {
    type Key = i64;
    type Id = i64;

    fn entity_key(&self) -> i64 {
        self.cluster
    }

    fn record_id(&self) -> i64 {
        self.cluster
    }
}

/// Key set of an authoritative listing.
pub fn authoritative_keys<E: Entity>(entities: &[E]) -> HashSet<E::Key> {
    entities.iter().map(Entity::key).collect()
}

/// Keeps the detail records whose key is in `authoritative`, in input order.
///
/// Every dropped record is logged at debug level with its family and key.
pub fn filter_phantoms<D: DetailRecord>(family: &'static str, authoritative: &HashSet<D::Key>, details: Vec<D>) -> Vec<D> {
    details
        .into_iter()
        .filter(|record| {
            let key = record.entity_key();
            let known = authoritative.contains(&key);
            if !known {
                debug!(family, key = ?key, "dropping detail record for unknown entity");
            }
            known
        })
        .collect()
}
