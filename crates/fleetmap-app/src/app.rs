//! Main application orchestration.
//!
//! Wires the HTTP feed source into the map view, activates the view
//! for the process lifetime, and serves the dashboard. Ctrl-c
//! deactivates the view before exit so in-flight fetches are
//! discarded rather than applied mid-teardown.

use crate::config::AppConfig;
use crate::error::AppResult;
use fleetmap_feed::HttpFeedSource;
use fleetmap_view::MapView;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Main application.
pub struct Application {
    config: AppConfig,
    view: Arc<MapView<HttpFeedSource>>,
}

impl Application {
    /// Create a new application from a validated configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;

        let source = HttpFeedSource::with_timeout(
            &config.feed.base_url,
            Duration::from_millis(config.feed.request_timeout_ms),
        )?;
        let view = Arc::new(MapView::with_interval(
            source,
            Duration::from_millis(config.feed.poll_interval_ms),
        ));

        Ok(Self { config, view })
    }

    /// Run until ctrl-c.
    pub async fn run(&self) -> AppResult<()> {
        info!(
            base_url = %self.config.feed.base_url,
            poll_interval_ms = self.config.feed.poll_interval_ms,
            "Starting map view"
        );
        self.view.activate();

        if self.config.dashboard.enabled {
            let store = self.view.store();
            let dashboard_config = self.config.dashboard.clone();
            tokio::spawn(async move {
                if let Err(e) = fleetmap_dashboard::run_server(store, dashboard_config).await {
                    error!(error = %e, "Dashboard server failed");
                }
            });
        } else {
            info!("Dashboard disabled");
        }

        tokio::signal::ctrl_c().await?;

        info!("Shutdown requested");
        self.view.deactivate();

        Ok(())
    }
}
