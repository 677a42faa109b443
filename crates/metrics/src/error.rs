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

use thiserror::Error;
use vergeos_api::ApiError;

/// Failure of one family during one scrape.
///
/// A family that fails emits no samples for that scrape; other families are
/// unaffected.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to fetch {what}: {source}")]
    Fetch {
        what: &'static str,
        #[source]
        source: ApiError,
    },
}

impl CollectError {
    pub fn fetch(what: &'static str) -> impl FnOnce(ApiError) -> Self {
        move |source| Self::Fetch { what, source }
    }
}
