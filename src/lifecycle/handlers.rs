use super::{AboutTarget, ExitController};
use tokio::sync::broadcast;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends the exit code on the daemon's shutdown channel.
pub struct ShutdownController {
    shutdown_tx: broadcast::Sender<i32>,
}

impl ShutdownController {
    pub fn new(shutdown_tx: broadcast::Sender<i32>) -> Self {
        Self { shutdown_tx }
    }
}

impl ExitController for ShutdownController {
    fn exit(&self, code: i32) {
        log::info!("Quitting application with code {}", code);
        if self.shutdown_tx.send(code).is_err() {
            log::warn!("Nobody is listening for shutdown");
        }
    }
}

/// About "dialog" for a tray app with no windows of its own: opens the
/// configured page in the browser.
pub struct AboutPage {
    url: Option<String>,
}

impl AboutPage {
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }

    pub fn about_text() -> String {
        format!("{} v{}", APP_NAME, APP_VERSION)
    }
}

impl AboutTarget for AboutPage {
    fn set_visible(&self, visible: bool) {
        if !visible {
            return;
        }

        let Some(url) = &self.url else {
            log::info!("{}", Self::about_text());
            return;
        };

        if let Err(e) = open::that(url) {
            log::warn!("Failed to open about page {}: {}", url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exit_sends_code_to_subscribers() {
        let (tx, mut rx) = broadcast::channel(1);
        let controller = ShutdownController::new(tx);

        controller.exit(0);

        assert_eq!(rx.recv().await.unwrap(), 0);
    }

    #[test]
    fn exit_without_subscribers_does_not_panic() {
        let (tx, rx) = broadcast::channel(1);
        drop(rx);

        ShutdownController::new(tx).exit(0);
    }

    #[test]
    fn about_text_names_package_and_version() {
        assert_eq!(AboutPage::about_text(), format!("tray-integration v{}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn hiding_or_showing_without_url_does_not_open_anything() {
        let page = AboutPage::new(None);
        page.set_visible(false);
        page.set_visible(true);
    }
}
