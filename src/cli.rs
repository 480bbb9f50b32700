// Copyright 2025 Fernando Borretti
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

use std::process::exit;

use clap::Parser;
use tokio::spawn;

use crate::error::Fallible;
use crate::serve::server::ServerConfig;
use crate::serve::server::start_server;
use crate::utils::wait_for_server;

/// Create flashcards and quiz yourself through a local web interface.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The host address to bind to. Default is 127.0.0.1.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// The port to use for the web server. Default is 8000.
    #[arg(long, default_value_t = 8000)]
    port: u16,
    /// Whether to open the browser automatically. Default is true.
    #[arg(long)]
    open_browser: Option<bool>,
    /// Start the session with the sample deck loaded.
    #[arg(long)]
    load_defaults: bool,
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    if cli.open_browser.unwrap_or(true) {
        // Start a separate task to open the browser once the server is up.
        let browser_host = cli.host.clone();
        let port = cli.port;
        spawn(async move {
            match wait_for_server(&browser_host, port).await {
                Ok(_) => {
                    let _ = open::that(format!("http://{browser_host}:{port}/"));
                }
                Err(e) => {
                    eprintln!("Failed to connect to server: {e}");
                    exit(-1)
                }
            }
        });
    }
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        load_defaults: cli.load_defaults,
    };
    start_server(config).await
}
