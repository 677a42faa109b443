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

//! Read-only access to the VergeOS REST API.
//!
//! The exporter only ever lists records; it never mutates the platform. The
//! [`ReadApi`] trait is the seam between the collection pipeline and the
//! transport: the pipeline is written against the trait, [`HttpReadApi`] is the
//! production implementation, and tests substitute in-memory fakes.

mod client;
mod error;
mod http;
pub mod records;

pub use client::ReadApi;
pub use error::{ApiError, Result};
pub use http::{ClientConfig, HttpReadApi};
pub use records::{
    Cluster, ClusterStatus, ClusterTier, ClusterTierStatus, MachineDrive, PhysicalNode, Setting, StorageTier, SystemInfo,
};
