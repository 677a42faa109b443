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

use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use vergeos_config::DEFAULT_LOG_LEVEL;
use vergeos_exporter::{ExporterError, Opt, Result};

fn setup_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let enable_color = std::io::stdout().is_terminal();

    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(env_filter)
        .with_ansi(enable_color)
        .try_init()
        .map_err(|err| ExporterError::Tracing(err.to_string()))
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    setup_tracing()?;

    run(opt)
}

#[tokio::main]
async fn run(opt: Opt) -> Result<()> {
    if let Err(err) = vergeos_exporter::start(opt).await {
        tracing::error!(error = %err, "exporter failed");
        return Err(err);
    }
    Ok(())
}
