use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast;
use tray_integration::icons::{IconCache, IconKind};
use tray_integration::lifecycle::{AboutPage, ShutdownController};
use tray_integration::tray::TrayManager;
use tray_integration::{IntegrationConfig, LifecycleRegistry, LifecycleRouter, PlatformIntegration};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting tray integration...");

    let config = match IntegrationConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {:#}", e);
            IntegrationConfig::default()
        }
    };

    let integration = PlatformIntegration::from_config(&config);
    let scale = integration.current_scale_factor();
    log::info!(
        "Platform {:?}, theme {:?}, display scale {}x",
        integration.platform(),
        integration.current_theme(),
        scale
    );

    let mut icons = IconCache::from_config(&config.icons, scale);
    integration.adapt_icons(&mut icons);

    let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<i32>(1);

    let registry = LifecycleRegistry::new();
    let router = Arc::new(LifecycleRouter::new());
    registry.register_about_handler(Arc::new(AboutPage::new(config.about.url.clone())), &*router);
    registry.register_quit_handler(Arc::new(ShutdownController::new(shutdown_tx)), &*router);

    let _tray = TrayManager::new(icons.tray_icon(IconKind::TrayDefault)?, router)?;

    log::info!("Tray integration started successfully");

    #[cfg(target_os = "macos")]
    tray_integration::tray::platform::run_event_loop();

    let code = shutdown_rx.recv().await.unwrap_or(0);
    registry.clear();
    log::info!("Shutdown signal received (code {}), exiting...", code);
    Ok(())
}
