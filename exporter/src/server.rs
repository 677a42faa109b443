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

//! HTTP surface: the metrics endpoint and a landing page.

use crate::error::{ExporterError, Result};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use http::header;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use vergeos_config::APP_NAME;
use vergeos_metrics::{Scraper, render_metrics};

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

#[derive(Clone)]
struct AppState {
    scraper: Arc<Scraper>,
    metrics_path: Arc<str>,
}

/// Builds the router. `metrics_path` must start with `/`.
pub fn router(scraper: Arc<Scraper>, metrics_path: &str) -> Router {
    let state = AppState {
        scraper,
        metrics_path: Arc::from(metrics_path),
    };

    Router::new()
        .route("/", get(landing_page))
        .route(metrics_path, get(metrics))
        .with_state(state)
}

/// Every request runs a full scrape; nothing is served from earlier scrapes.
async fn metrics(State(state): State<AppState>) -> Response {
    let samples = state.scraper.scrape().await;
    let body = render_metrics(&samples);
    debug!(samples = samples.len(), bytes = body.len(), "served metrics");

    ([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], body).into_response()
}

async fn landing_page(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>\n<head><title>{APP_NAME}</title></head>\n<body>\n<h1>{APP_NAME}</h1>\n<p><a href=\"{path}\">Metrics</a></p>\n</body>\n</html>\n",
        path = state.metrics_path
    ))
}

/// Serves `app` on `listener` until `token` is cancelled.
pub async fn serve(listener: TcpListener, app: Router, token: CancellationToken) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            token.cancelled().await;
            info!("http server shutting down");
        })
        .await
        .map_err(ExporterError::Serve)
}
