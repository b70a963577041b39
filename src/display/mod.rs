#[cfg(target_os = "macos")]
mod macos;

use crate::error::PlatformError;

/// Reports the pixel scale of the primary display.
pub trait DisplayScaleSource: Send + Sync {
    fn scale_factor(&self) -> Result<f64, PlatformError>;
}

/// Source for platforms without a primary-display scale query.
pub struct UnsupportedScale;

impl DisplayScaleSource for UnsupportedScale {
    fn scale_factor(&self) -> Result<f64, PlatformError> {
        Err(PlatformError::unavailable("display scale query is not implemented on this platform"))
    }
}

#[cfg(target_os = "macos")]
pub fn platform_source() -> Box<dyn DisplayScaleSource> {
    Box::new(macos::MainScreenScale)
}

#[cfg(not(target_os = "macos"))]
pub fn platform_source() -> Box<dyn DisplayScaleSource> {
    Box::new(UnsupportedScale)
}

/// Integer scale for picking icon resolution. Never below 1; a failed or
/// nonsensical query falls back to 1.
pub fn current_scale_factor(source: &dyn DisplayScaleSource) -> u32 {
    match source.scale_factor().and_then(to_integer_scale) {
        Ok(scale) => scale,
        Err(e) => {
            log::warn!("Unable to determine screen scale factor, defaulting to 1: {}", e);
            1
        }
    }
}

fn to_integer_scale(raw: f64) -> Result<u32, PlatformError> {
    if !raw.is_finite() || raw < 1.0 {
        return Err(PlatformError::type_mismatch(format!("scale factor {}", raw)));
    }
    Ok(raw.round().min(u32::MAX as f64) as u32)
}
