pub mod menu;
pub mod platform;

use crate::lifecycle::LifecycleRouter;
use anyhow::Result;
use std::sync::Arc;
use tray_icon::Icon;

pub struct TrayManager {
    _tray: platform::PlatformTray,
}

impl TrayManager {
    pub fn new(icon: Icon, router: Arc<LifecycleRouter>) -> Result<Self> {
        let tray = platform::create_tray(icon, router)?;
        Ok(Self { _tray: tray })
    }
}
