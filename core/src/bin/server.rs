//! lifeos-server binary - serves the categorization API.
//!
//! Reads `config.json` and `items.json` from `$LIFEOS_HOME` (or `~/.lifeos`).

use anyhow::Context;
use lifeos::ai::check_claude_available;
use lifeos::config::{data_root, Config};
use lifeos::server::{run_server, AppState};
use lifeos::store::JsonFileStore;
use log::{info, warn};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = data_root()?;
    let config = Config::load(&root.join("config.json"))?;
    let store = JsonFileStore::open(&root)
        .with_context(|| format!("opening item store in {}", root.display()))?;

    let generator = config.classifier.generator();
    if generator.is_some() && config.classifier.command.is_none() && !check_claude_available() {
        warn!("claude CLI not found; every request will fall back to keyword rules");
    }
    info!(
        "AI classification {}, data in {}",
        if generator.is_some() { "enabled" } else { "disabled" },
        root.display()
    );

    let state = Arc::new(AppState {
        auth_token: config.server.auth_token.clone(),
        store: Arc::new(store),
        generator,
        max_concurrent: config.classifier.max_concurrent,
        timeout_secs: config.classifier.timeout_secs,
    });

    let addr = format!("{}:{}", config.server.host, config.server.port);
    run_server(&addr, state, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
    .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
