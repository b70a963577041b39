use super::DisplayScaleSource;
use crate::error::PlatformError;
use objc2::msg_send;
use objc2::rc::Retained;
use objc2::runtime::{AnyClass, AnyObject};

/// `NSScreen.mainScreen.backingScaleFactor`, resolved through the runtime
/// so a missing AppKit is an error rather than a link failure.
pub struct MainScreenScale;

impl DisplayScaleSource for MainScreenScale {
    fn scale_factor(&self) -> Result<f64, PlatformError> {
        let class = AnyClass::get(c"NSScreen")
            .ok_or_else(|| PlatformError::unavailable("NSScreen class is not loaded"))?;

        let screen: Option<Retained<AnyObject>> = unsafe { msg_send![class, mainScreen] };
        let screen = screen.ok_or_else(|| PlatformError::type_mismatch("mainScreen returned nil"))?;

        let factor: f64 = unsafe { msg_send![&screen, backingScaleFactor] };
        Ok(factor)
    }
}
