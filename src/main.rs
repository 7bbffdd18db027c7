use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use matchday::http::{self, AppState};
use matchday::repo::MatchRepository;
use matchday::{sync_fixtures, Config, MemoryMatchStore, UpstreamClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing::subscriber::set_global_default(FmtSubscriber::default())?;

    let config = Config::from_env()?;
    let store = Arc::new(MemoryMatchStore::new(config.offset));
    let client = UpstreamClient::new(config.upstream_base_url.clone());

    // Seed the listing before accepting traffic; an unreachable upstream
    // serves an empty page rather than blocking startup.
    if let Err(err) = sync_fixtures(&client, &store, &config.seasons, Utc::now()).await {
        error!(%err, "initial fixtures sync failed");
    }

    let sync_store = store.clone();
    let seasons = config.seasons.clone();
    let interval = Duration::from_secs(config.sync_interval_secs.max(1));
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            if let Err(err) = sync_fixtures(&client, &sync_store, &seasons, Utc::now()).await {
                error!(%err, "scheduled fixtures sync failed");
            }
        }
    });

    let state = AppState {
        repo: store as Arc<dyn MatchRepository>,
        offset: config.offset,
        clock: Utc::now,
    };
    let app = http::router(state);

    info!(addr = %config.bind_addr, "starting server");
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
