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

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    CtrlC,
    Sigterm,
}

#[cfg(unix)]
pub async fn wait_for_shutdown() -> ShutdownSignal {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(err) => {
            warn!(error = %err, "failed to install SIGTERM handler, only Ctrl-C will stop the exporter");
            return wait_for_ctrl_c().await;
        }
    };

    tokio::select! {
        signal = wait_for_ctrl_c() => signal,
        _ = sigterm.recv() => {
            info!("received SIGTERM");
            ShutdownSignal::Sigterm
        }
    }
}

#[cfg(not(unix))]
pub async fn wait_for_shutdown() -> ShutdownSignal {
    wait_for_ctrl_c().await
}

async fn wait_for_ctrl_c() -> ShutdownSignal {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl-C"),
        Err(err) => warn!(error = %err, "failed to listen for Ctrl-C"),
    }
    ShutdownSignal::CtrlC
}

/// Cancels `token` once a shutdown signal arrives.
pub async fn cancel_on_signal(token: CancellationToken) {
    let signal = wait_for_shutdown().await;
    info!(?signal, "shutdown requested");
    token.cancel();
}
