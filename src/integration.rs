use crate::appearance::{AppearanceProber, ThemeState};
use crate::config::IntegrationConfig;
use crate::display::{self, DisplayScaleSource};
use crate::icons::{self, IconStore};
use crate::platform::Platform;

/// Entry point for the theme and display queries. Holds only its
/// collaborators; every call asks the OS afresh.
pub struct PlatformIntegration {
    platform: Platform,
    prober: AppearanceProber,
    scale_source: Box<dyn DisplayScaleSource>,
}

impl PlatformIntegration {
    pub fn new(platform: Platform, prober: AppearanceProber, scale_source: Box<dyn DisplayScaleSource>) -> Self {
        Self {
            platform,
            prober,
            scale_source,
        }
    }

    pub fn from_config(config: &IntegrationConfig) -> Self {
        let platform = Platform::current();
        Self::new(
            platform,
            AppearanceProber::for_platform(platform, config.appearance.timeout()),
            display::platform_source(),
        )
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn current_theme(&self) -> ThemeState {
        self.prober.current_theme()
    }

    pub fn adapt_icons(&self, store: &mut dyn IconStore) -> usize {
        icons::adapt_icons(self.platform, &self.prober, store)
    }

    pub fn current_scale_factor(&self) -> u32 {
        display::current_scale_factor(self.scale_source.as_ref())
    }
}
