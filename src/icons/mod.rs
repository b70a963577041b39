pub mod adapter;
pub mod cache;
pub mod image;

pub use adapter::adapt_icons;
pub use cache::IconCache;
pub use image::{BlackClassifier, IconImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconKind {
    TrayDefault,
    TrayWarning,
    TrayDanger,
    Window,
    Logo,
}

impl IconKind {
    pub const ALL: [IconKind; 5] = [
        IconKind::TrayDefault,
        IconKind::TrayWarning,
        IconKind::TrayDanger,
        IconKind::Window,
        IconKind::Logo,
    ];

    pub fn is_tray_icon(&self) -> bool {
        matches!(self, IconKind::TrayDefault | IconKind::TrayWarning | IconKind::TrayDanger)
    }
}

/// Holder of the application's icon variants.
pub trait IconStore {
    fn kinds(&self) -> Vec<IconKind>;

    fn is_tray_icon(&self, kind: IconKind) -> bool {
        kind.is_tray_icon()
    }

    fn image(&self, kind: IconKind) -> Option<&IconImage>;

    fn invert_colors(&mut self, kind: IconKind);

    /// True when the current image of `kind` is a predominantly black glyph.
    fn is_black(&self, kind: IconKind) -> bool;
}
