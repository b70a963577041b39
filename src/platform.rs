#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Only macOS ships tray assets meant for light menu bars, so it is the
    /// one family where icons need correcting on the client.
    pub fn is_theme_aware(&self) -> bool {
        matches!(self, Platform::MacOs)
    }
}
