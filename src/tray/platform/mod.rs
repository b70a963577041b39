#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub use macos::run_event_loop;

use crate::lifecycle::{LifecycleEvent, LifecycleRouter};
use anyhow::Result;
use std::sync::Arc;
use tray_icon::Icon;

#[cfg(not(target_os = "linux"))]
use tray_icon::{menu::MenuEvent, TrayIcon, TrayIconBuilder};

const TOOLTIP: &str = "Tray Integration";

pub enum PlatformTray {
    #[cfg(target_os = "linux")]
    Linux,
    #[cfg(not(target_os = "linux"))]
    Standard(TrayIcon),
}

#[cfg(target_os = "linux")]
pub fn create_tray(icon: Icon, router: Arc<LifecycleRouter>) -> Result<PlatformTray> {
    linux::create_tray(icon, router)?;
    Ok(PlatformTray::Linux)
}

#[cfg(not(target_os = "linux"))]
pub fn create_tray(icon: Icon, router: Arc<LifecycleRouter>) -> Result<PlatformTray> {
    let menu = crate::tray::menu::build_menu()?;

    let tray_icon = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(TOOLTIP)
        .with_icon(icon)
        .build()?;

    #[cfg(target_os = "windows")]
    spawn_menu_event_handler(router, windows::stop_event_loop);

    #[cfg(target_os = "macos")]
    spawn_menu_event_handler(router, macos::stop_event_loop);

    Ok(PlatformTray::Standard(tray_icon))
}

#[cfg(not(target_os = "linux"))]
fn spawn_menu_event_handler(router: Arc<LifecycleRouter>, on_quit: fn()) {
    let menu_receiver = MenuEvent::receiver();

    std::thread::spawn(move || {
        while let Ok(event) = menu_receiver.recv() {
            if handle_menu_event(&event.id.0, &router) {
                on_quit();
                break;
            }
        }
    });
}

/// Routes one menu event; true once the Quit action has run.
fn handle_menu_event(event_id: &str, router: &LifecycleRouter) -> bool {
    log::debug!("Menu event: {}", event_id);

    let handled = router.route(event_id);
    handled && LifecycleEvent::from_menu_id(event_id) == Some(LifecycleEvent::Quit)
}
