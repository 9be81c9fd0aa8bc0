use station_nowcast::config::Config;
use station_nowcast::fetcher::Fetcher;
use station_nowcast::forecast::{nowcast, Normalizer};
use station_nowcast::report::SlotSummary;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,station_nowcast=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path =
        std::env::var("NOWCAST_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config = Config::load(&config_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load configuration from {}: {}\n\n\
             Make sure:\n\
             1. The file exists (or point NOWCAST_CONFIG at it)\n\
             2. All referenced environment variables are set\n\
             3. source.adm4 is a BMKG village code such as 33.05.05.2009",
            config_path,
            e
        )
    })?;
    info!("Configuration loaded from {}", config_path);

    tokio::select! {
        result = run(&config) => {
            if let Err(e) = &result {
                error!("Nowcast failed: {}", e);
            }
            result
        }
        _ = shutdown_signal() => {
            info!("Interrupted before the nowcast completed");
            Ok(())
        }
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    let fetcher = Fetcher::new(
        &config.source.base_url,
        Duration::from_secs(config.source.request_timeout_seconds),
    )?
    .with_max_retries(config.source.max_retries);

    let payload = fetcher.fetch_forecast(&config.source.adm4).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to fetch forecast for region {}: {}",
            config.source.adm4,
            e
        )
    })?;

    let (records, stats) = Normalizer::normalize_with_stats(&payload);
    info!(
        "Payload layout {}: {} forecast records ({} elements dropped)",
        stats.shape, stats.mapped, stats.dropped
    );

    let analysis_date = records
        .first()
        .map(|r| r.analysis_date.clone())
        .unwrap_or_default();
    let slots = nowcast(records, config.display.limit);

    if slots.is_empty() {
        warn!("No forecast data available for region {}", config.source.adm4);
        return Ok(());
    }

    let station = if config.station.name.is_empty() {
        config.source.adm4.as_str()
    } else {
        config.station.name.as_str()
    };
    println!("BMKG Nowcasting - {}", station);
    if !analysis_date.is_empty() {
        println!("Analysis: {}", analysis_date);
    }
    for record in &slots {
        println!(
            "{}",
            SlotSummary::from_record(record, config.station.pressure_hpa)
        );
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, stopping");
        }
        _ = terminate => {
            info!("Received SIGTERM, stopping");
        }
    }
}
