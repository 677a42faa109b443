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

//! Prometheus exporter for VergeOS.

pub mod config;
pub mod error;
pub mod server;
pub mod shutdown;

pub use config::Opt;
pub use error::{ExporterError, Result};

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use vergeos_api::HttpReadApi;
use vergeos_config::{APP_NAME, STARTUP_CHECK_TIMEOUT_SECS, VERSION};
use vergeos_metrics::{Scraper, SystemNameCache};

/// Validates options, checks connectivity and serves metrics until a
/// shutdown signal arrives.
pub async fn start(opt: Opt) -> Result<()> {
    opt.validate()?;
    info!(version = VERSION, url = %opt.url, "starting {APP_NAME}");
    debug!(?opt, "options");

    let api = Arc::new(HttpReadApi::new(opt.client_config())?);
    let scraper = Arc::new(Scraper::new(api, SystemNameCache::new(opt.system_name_ttl())));

    let system_name = check_connection(&opt.url, &scraper).await?;
    info!(%system_name, "connected to VergeOS");

    let listener = TcpListener::bind(&opt.listen_address)
        .await
        .map_err(|source| ExporterError::Bind {
            address: opt.listen_address.clone(),
            source,
        })?;
    let local_addr = listener.local_addr().map_err(ExporterError::Serve)?;
    info!(address = %local_addr, metrics_path = %opt.metrics_path, "listening");

    let token = CancellationToken::new();
    tokio::spawn(shutdown::cancel_on_signal(token.clone()));

    server::serve(listener, server::router(scraper, &opt.metrics_path), token).await?;
    info!("{APP_NAME} stopped");
    Ok(())
}

/// Resolves the system name once before serving. Any failure is fatal so
/// that bad credentials or an unreachable API surface at startup.
pub async fn check_connection(url: &str, scraper: &Scraper) -> Result<String> {
    let secs = STARTUP_CHECK_TIMEOUT_SECS;
    match tokio::time::timeout(Duration::from_secs(secs), scraper.system_name()).await {
        Ok(Ok(name)) => Ok(name),
        Ok(Err(source)) => Err(ExporterError::startup(url, source)),
        Err(_) => Err(ExporterError::StartupTimeout { url: url.to_string(), secs }),
    }
}
