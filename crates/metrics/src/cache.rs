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

//! Cache for the system display name.
//!
//! The name labels every sample of every family, so it is fetched at most
//! once per cache miss and shared across concurrent collectors. Entries
//! either live for the process lifetime or expire after a configured TTL.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};
use vergeos_api::{ReadApi, Result};

#[derive(Debug, Clone)]
struct CacheEntry {
    name: String,
    fetched_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Option<Duration>) -> bool {
        ttl.is_some_and(|ttl| self.fetched_at.elapsed() >= ttl)
    }
}

/// Lazily populated system name, guarded by a single async mutex.
#[derive(Debug)]
pub struct SystemNameCache {
    entry: Mutex<Option<CacheEntry>>,
    ttl: Option<Duration>,
}

impl SystemNameCache {
    /// `None` keeps the first fetched name for the process lifetime.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            entry: Mutex::new(None),
            ttl,
        }
    }

    /// Returns the cached name, fetching it from `api` on a miss.
    ///
    /// The lock is held across the fetch so concurrent callers wait for one
    /// request instead of issuing their own. A failed fetch leaves the cache
    /// empty.
    pub async fn get_or_fetch(&self, api: &dyn ReadApi) -> Result<String> {
        let mut guard = self.entry.lock().await;
        if let Some(entry) = guard.as_ref().filter(|entry| !entry.is_expired(self.ttl)) {
            return Ok(entry.name.clone());
        }

        debug!("fetching system name");
        let name = api.cloud_name().await?;
        if guard.as_ref().is_none_or(|entry| entry.name != name) {
            info!(system_name = %name, "resolved system name");
        }
        *guard = Some(CacheEntry {
            name: name.clone(),
            fetched_at: Instant::now(),
        });
        Ok(name)
    }
}

impl Default for SystemNameCache {
    fn default() -> Self {
        Self::new(None)
    }
}
