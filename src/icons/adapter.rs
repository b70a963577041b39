use super::IconStore;
use crate::appearance::AppearanceProber;
use crate::platform::Platform;

/// Inverts black tray glyphs when a theme-aware desktop is in dark mode.
/// Returns how many icons were inverted.
///
/// The classifier verdict is what prevents double inversion: an inverted
/// glyph is no longer black, so calling this again under the same theme
/// leaves the store untouched.
pub fn adapt_icons(platform: Platform, prober: &AppearanceProber, store: &mut dyn IconStore) -> usize {
    if !platform.is_theme_aware() {
        return 0;
    }

    let theme = prober.current_theme();
    if !theme.is_dark() {
        log::debug!("Desktop theme is {:?}, tray icons left as shipped", theme);
        return 0;
    }

    let mut inverted = 0;
    for kind in store.kinds() {
        if store.is_tray_icon(kind) && store.is_black(kind) {
            store.invert_colors(kind);
            inverted += 1;
        }
    }

    if inverted > 0 {
        log::info!("Inverted {} tray icon(s) for dark menu bar", inverted);
    }
    inverted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::SettingsQuery;
    use crate::error::PlatformError;
    use crate::icons::{BlackClassifier, IconCache, IconKind};

    struct Dark;

    impl SettingsQuery for Dark {
        fn dark_preference(&self) -> Result<String, PlatformError> {
            Ok("Dark".to_string())
        }
    }

    #[test]
    fn non_theme_aware_platforms_are_untouched() {
        let prober = AppearanceProber::new(Box::new(Dark));

        for platform in [Platform::Linux, Platform::Windows, Platform::Other] {
            let mut cache = IconCache::render(16, BlackClassifier::default());
            assert_eq!(adapt_icons(platform, &prober, &mut cache), 0, "{:?}", platform);
            assert!(cache.is_black(IconKind::TrayDefault));
        }
    }

    #[test]
    fn dark_macos_inverts_black_tray_icons_once() {
        let prober = AppearanceProber::new(Box::new(Dark));
        let mut cache = IconCache::render(16, BlackClassifier::default());

        assert_eq!(adapt_icons(Platform::MacOs, &prober, &mut cache), 3);
        assert_eq!(adapt_icons(Platform::MacOs, &prober, &mut cache), 0);
        assert!(cache.is_black(IconKind::Logo));
    }
}
