use crate::lifecycle::LifecycleEvent;
use anyhow::Result;
use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem};

pub fn build_menu() -> Result<Menu> {
    let menu = Menu::new();

    menu.append(&lifecycle_item(LifecycleEvent::About))?;
    menu.append(&PredefinedMenuItem::separator())?;
    menu.append(&lifecycle_item(LifecycleEvent::Quit))?;

    Ok(menu)
}

fn lifecycle_item(event: LifecycleEvent) -> MenuItem {
    MenuItem::with_id(event.menu_id(), event.label(), true, None)
}
