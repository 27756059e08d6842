use nids_server::{
    AppState, Dashboard, DashboardActor, ServerError, ShutdownCoordinator, build_router, logger,
};

use nids_channel::{ChannelHub, HubConfig};
use nids_config::Config;

use std::error::Error;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting nids-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;
    info!("Prometheus recorder installed");

    // One hub for the whole process, handed to everything that needs it
    let hub = ChannelHub::new(HubConfig {
        channel_capacity: config.channels.buffer_capacity,
    });

    let shutdown = ShutdownCoordinator::new();

    let mut dashboard = Dashboard::new(&config.feeds)?;
    dashboard.activate_all(&hub)?;

    let (actor, dashboard_handle) = DashboardActor::new(
        dashboard,
        hub.clone(),
        shutdown.clone(),
        config.dashboard.command_buffer,
    );
    let actor_task = actor.spawn();

    let app_state = AppState {
        hub,
        dashboard: dashboard_handle,
        shutdown: shutdown.clone(),
        prometheus: Some(prometheus),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    let mut shutdown_guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_guard.wait().await;
            info!("HTTP server draining");
        })
        .await?;

    // The server can also stop on its own; make sure the actor follows
    shutdown.shutdown();
    if let Err(e) = actor_task.await {
        warn!("Dashboard actor ended abnormally: {}", e);
    }

    info!("Graceful shutdown complete");
    Ok(())
}
