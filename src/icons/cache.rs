use super::image::{BlackClassifier, IconImage};
use super::{IconKind, IconStore};
use crate::config::IconConfig;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tray_icon::Icon;

const GLYPH: [u8; 4] = [0, 0, 0, 255];
const WARNING_DOT: [u8; 4] = [230, 150, 0, 255];
const DANGER_DOT: [u8; 4] = [210, 30, 30, 255];
const WINDOW_FILL: [u8; 4] = [40, 110, 220, 255];

pub const MAX_RENDER_SIZE: u32 = 4096;

pub struct IconCache {
    images: BTreeMap<IconKind, IconImage>,
    classifier: BlackClassifier,
}

impl IconCache {
    pub fn new(classifier: BlackClassifier) -> Self {
        Self {
            images: BTreeMap::new(),
            classifier,
        }
    }

    /// Draws every icon kind at `size` pixels. Tray glyphs are black, the
    /// way menu-bar assets for light backgrounds are shipped.
    pub fn render(size: u32, classifier: BlackClassifier) -> Self {
        let mut cache = Self::new(classifier);
        for kind in IconKind::ALL {
            cache.insert(kind, render_kind(kind, size));
        }
        cache
    }

    pub fn from_config(config: &IconConfig, scale: u32) -> Self {
        let classifier = BlackClassifier::new(config.black_threshold, config.black_ratio);
        Self::render(render_size(config.size, scale), classifier)
    }

    pub fn insert(&mut self, kind: IconKind, image: IconImage) {
        self.images.insert(kind, image);
    }

    pub fn tray_icon(&self, kind: IconKind) -> Result<Icon> {
        self.images
            .get(&kind)
            .with_context(|| format!("No image cached for {:?}", kind))?
            .to_tray_icon()
    }
}

impl IconStore for IconCache {
    fn kinds(&self) -> Vec<IconKind> {
        self.images.keys().copied().collect()
    }

    fn image(&self, kind: IconKind) -> Option<&IconImage> {
        self.images.get(&kind)
    }

    fn invert_colors(&mut self, kind: IconKind) {
        if let Some(image) = self.images.get_mut(&kind) {
            image.invert();
        }
    }

    fn is_black(&self, kind: IconKind) -> bool {
        self.images
            .get(&kind)
            .is_some_and(|image| self.classifier.is_black(image))
    }
}

/// Pixel edge for `size` logical pixels at `scale`, kept within 1..=MAX_RENDER_SIZE.
pub fn render_size(size: u32, scale: u32) -> u32 {
    size.saturating_mul(scale.max(1)).clamp(1, MAX_RENDER_SIZE)
}

fn render_kind(kind: IconKind, size: u32) -> IconImage {
    let mut image = IconImage::blank(size);
    let center = size as i32 / 2;
    let radius = (size as i32 * 2) / 5;

    match kind {
        IconKind::Window => image.fill_circle(center, center, radius, WINDOW_FILL),
        _ => image.fill_circle(center, center, radius, GLYPH),
    }

    match kind {
        IconKind::TrayWarning => add_status_dot(&mut image, WARNING_DOT),
        IconKind::TrayDanger => add_status_dot(&mut image, DANGER_DOT),
        _ => {}
    }

    image
}

fn add_status_dot(image: &mut IconImage, color: [u8; 4]) {
    let size = image.width() as i32;
    let dot_radius = (size / 8).max(1);
    let dot_center_x = size - dot_radius - 2;
    let dot_center_y = dot_radius + 2;
    image.fill_circle(dot_center_x, dot_center_y, dot_radius, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_every_kind_at_requested_size() {
        let cache = IconCache::render(32, BlackClassifier::default());

        assert_eq!(cache.kinds(), IconKind::ALL.to_vec());
        for kind in IconKind::ALL {
            let image = cache.image(kind).unwrap();
            assert_eq!((image.width(), image.height()), (32, 32), "{:?}", kind);
        }
    }

    #[test]
    fn rendered_glyphs_classify_as_expected() {
        let cases = [
            (IconKind::TrayDefault, true),
            (IconKind::TrayWarning, true),
            (IconKind::TrayDanger, true),
            (IconKind::Window, false),
            (IconKind::Logo, true),
        ];

        for size in [16, 32, 64] {
            let cache = IconCache::render(size, BlackClassifier::default());
            for (kind, expected) in cases {
                assert_eq!(cache.is_black(kind), expected, "{:?} at {}px", kind, size);
            }
        }
    }

    #[test]
    fn from_config_scales_icon_size() {
        let config = IconConfig::default();

        let cache = IconCache::from_config(&config, 2);

        assert_eq!(cache.image(IconKind::TrayDefault).unwrap().width(), config.size * 2);
    }

    #[test]
    fn render_size_cases() {
        let cases = [
            (32, 1, 32),
            (32, 0, 32),
            (32, 2, 64),
            (0, 2, 1),
            (1024, 4, MAX_RENDER_SIZE),
            (4_000_000_000, 2, MAX_RENDER_SIZE),
            (u32::MAX, u32::MAX, MAX_RENDER_SIZE),
        ];

        for (size, scale, expected) in cases {
            assert_eq!(render_size(size, scale), expected, "{} at {}x", size, scale);
        }
    }

    #[test]
    fn missing_kind_is_not_black_and_has_no_icon() {
        let cache = IconCache::new(BlackClassifier::default());

        assert!(!cache.is_black(IconKind::TrayDefault));
        assert!(cache.tray_icon(IconKind::TrayDefault).is_err());
    }

    #[test]
    fn invert_colors_only_touches_requested_kind() {
        let mut cache = IconCache::render(16, BlackClassifier::default());
        let logo_before = cache.image(IconKind::Logo).unwrap().clone();

        cache.invert_colors(IconKind::TrayDefault);

        assert!(!cache.is_black(IconKind::TrayDefault));
        assert_eq!(cache.image(IconKind::Logo).unwrap(), &logo_before);
    }
}
