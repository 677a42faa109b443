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

//! State classification.
//!
//! Each function here resolves one or more raw state signals into a single
//! value. All of them are pure.

use std::fmt;

/// Number of tracked drive states.
pub const DRIVE_STATE_COUNT: usize = 7;

/// Canonical vSAN drive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DriveState {
    Online,
    Offline,
    Repairing,
    Initializing,
    Verifying,
    NoRedundant,
    OutOfSpace,
}

impl DriveState {
    /// Every tracked state, in emission order.
    pub const ALL: [DriveState; DRIVE_STATE_COUNT] = [
        DriveState::Online,
        DriveState::Offline,
        DriveState::Repairing,
        DriveState::Initializing,
        DriveState::Verifying,
        DriveState::NoRedundant,
        DriveState::OutOfSpace,
    ];

    /// Status string as reported by the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Repairing => "repairing",
            Self::Initializing => "initializing",
            Self::Verifying => "verifying",
            Self::NoRedundant => "noredundant",
            Self::OutOfSpace => "outofspace",
        }
    }

    /// Parses a reported status. Matching is exact; anything else is unclassified.
    pub fn from_reported(reported: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == reported)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DriveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a drive's canonical state.
///
/// An active repair (`repairing > 0`) wins over whatever status the drive
/// reports. Otherwise the reported status is used when it names a tracked
/// state, and `None` is returned when it does not.
pub fn classify_drive(reported: &str, repairing: i64) -> Option<DriveState> {
    if repairing > 0 {
        return Some(DriveState::Repairing);
    }
    DriveState::from_reported(reported)
}

/// A cluster counts as online when its status is `online`.
pub fn cluster_online(status: &str) -> bool {
    status == "online"
}

/// A cluster counts as healthy when its state is `online`.
pub fn cluster_healthy(state: &str) -> bool {
    state == "online"
}

pub fn ipmi_ok(ipmi_status: &str) -> bool {
    ipmi_status == "ok"
}

#[inline]
pub fn bool_value(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}
