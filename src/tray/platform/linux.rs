use super::TOOLTIP;
use crate::lifecycle::LifecycleRouter;
use anyhow::Result;
use gtk::{self, glib};
use std::sync::Arc;
use tray_icon::menu::{MenuEvent, MenuEventReceiver};
use tray_icon::{Icon, TrayIconBuilder};

pub fn create_tray(icon: Icon, router: Arc<LifecycleRouter>) -> Result<()> {
    std::thread::spawn(move || {
        if gtk::init().is_err() {
            log::error!("Failed to initialize GTK");
            return;
        }

        let menu = match crate::tray::menu::build_menu() {
            Ok(menu) => menu,
            Err(e) => {
                log::error!("Failed to build menu: {}", e);
                return;
            }
        };

        let tray_icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(TOOLTIP)
            .with_icon(icon)
            .build();

        let tray_icon = match tray_icon {
            Ok(icon) => icon,
            Err(e) => {
                log::error!("Failed to create tray icon: {}", e);
                return;
            }
        };

        setup_event_loop(router);
        std::mem::forget(tray_icon);
        gtk::main();
    });

    Ok(())
}

fn setup_event_loop(router: Arc<LifecycleRouter>) {
    let menu_receiver = MenuEvent::receiver();

    glib::timeout_add_local(std::time::Duration::from_millis(100), move || {
        process_pending_events(menu_receiver, &router)
    });
}

fn process_pending_events(receiver: &MenuEventReceiver, router: &LifecycleRouter) -> glib::ControlFlow {
    while let Ok(event) = receiver.try_recv() {
        if super::handle_menu_event(&event.id.0, router) {
            gtk::main_quit();
            return glib::ControlFlow::Break;
        }
    }
    glib::ControlFlow::Continue
}
