pub mod appearance;
pub mod config;
pub mod display;
pub mod error;
pub mod icons;
pub mod integration;
pub mod lifecycle;
pub mod paths;
pub mod platform;
pub mod tray;

pub use appearance::{AppearanceProber, ThemeState};
pub use config::IntegrationConfig;
pub use error::PlatformError;
pub use integration::PlatformIntegration;
pub use lifecycle::{LifecycleRegistry, LifecycleRouter};
