pub mod handlers;
pub mod router;

pub use handlers::{AboutPage, ShutdownController};
pub use router::LifecycleRouter;

use anyhow::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

pub type Callback = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    About,
    Quit,
}

impl LifecycleEvent {
    pub fn menu_id(&self) -> &'static str {
        match self {
            LifecycleEvent::About => "__about__",
            LifecycleEvent::Quit => "__quit__",
        }
    }

    pub fn from_menu_id(id: &str) -> Option<Self> {
        match id {
            "__about__" => Some(LifecycleEvent::About),
            "__quit__" => Some(LifecycleEvent::Quit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LifecycleEvent::About => "About",
            LifecycleEvent::Quit => "Quit",
        }
    }
}

/// A dialog the native "About" action should bring up.
pub trait AboutTarget: Send + Sync {
    fn set_visible(&self, visible: bool);
}

/// Whatever shuts the application down for the native "Quit" action.
pub trait ExitController: Send + Sync {
    fn exit(&self, code: i32);
}

/// Hooks an action up to a native lifecycle event.
pub trait CallbackInstaller {
    fn install(&self, event: LifecycleEvent, action: Callback) -> Result<()>;
}

/// Handles behind the native About and Quit actions. Owned by startup and
/// passed to whoever wires the native callbacks; each slot holds at most one
/// handle and a later registration replaces an earlier one.
#[derive(Default)]
pub struct LifecycleRegistry {
    about: Mutex<Option<Arc<dyn AboutTarget>>>,
    quit: Mutex<Option<Arc<dyn ExitController>>>,
}

impl LifecycleRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn register_about_handler(self: &Arc<Self>, dialog: Arc<dyn AboutTarget>, installer: &dyn CallbackInstaller) {
        *lock(&self.about) = Some(dialog);

        let registry = Arc::downgrade(self);
        let action: Callback = Arc::new(move || with_registry(&registry, LifecycleRegistry::show_about));
        if let Err(e) = installer.install(LifecycleEvent::About, action) {
            log::error!("Failed to install About handler, menu item stays inert: {:#}", e);
        }
    }

    pub fn register_quit_handler(self: &Arc<Self>, controller: Arc<dyn ExitController>, installer: &dyn CallbackInstaller) {
        *lock(&self.quit) = Some(controller);

        let registry = Arc::downgrade(self);
        let action: Callback = Arc::new(move || with_registry(&registry, LifecycleRegistry::request_exit));
        if let Err(e) = installer.install(LifecycleEvent::Quit, action) {
            log::error!("Failed to install Quit handler, menu item stays inert: {:#}", e);
        }
    }

    pub fn show_about(&self) {
        let dialog = lock(&self.about).clone();
        match dialog {
            Some(dialog) => dialog.set_visible(true),
            None => log::debug!("About requested with no dialog registered"),
        }
    }

    pub fn request_exit(&self) {
        let controller = lock(&self.quit).clone();
        match controller {
            Some(controller) => controller.exit(0),
            None => log::debug!("Quit requested with no controller registered"),
        }
    }

    pub fn has_about_handler(&self) -> bool {
        lock(&self.about).is_some()
    }

    pub fn has_quit_handler(&self) -> bool {
        lock(&self.quit).is_some()
    }

    /// Drops both handles; installed callbacks become no-ops.
    pub fn clear(&self) {
        lock(&self.about).take();
        lock(&self.quit).take();
    }
}

fn with_registry(registry: &Weak<LifecycleRegistry>, f: fn(&LifecycleRegistry)) {
    if let Some(registry) = registry.upgrade() {
        f(&registry);
    }
}

fn lock<T>(slot: &Mutex<T>) -> MutexGuard<'_, T> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_ids_round_trip() {
        for event in [LifecycleEvent::About, LifecycleEvent::Quit] {
            assert_eq!(LifecycleEvent::from_menu_id(event.menu_id()), Some(event));
        }
    }

    #[test]
    fn unknown_menu_ids_are_not_lifecycle_events() {
        let cases = ["", "about", "__reload__", "__quit__ ", "plugin::__quit__"];

        for id in cases {
            assert_eq!(LifecycleEvent::from_menu_id(id), None, "id: {:?}", id);
        }
    }

    #[test]
    fn empty_registry_ignores_requests() {
        let registry = LifecycleRegistry::new();

        registry.show_about();
        registry.request_exit();

        assert!(!registry.has_about_handler());
        assert!(!registry.has_quit_handler());
    }
}
