use super::{Callback, CallbackInstaller, LifecycleEvent};
use anyhow::Result;
use std::sync::Mutex;

struct EventRoute {
    event: LifecycleEvent,
    action: Callback,
}

/// Dispatches menu event ids to the lifecycle actions installed for them.
#[derive(Default)]
pub struct LifecycleRouter {
    routes: Mutex<Vec<EventRoute>>,
}

impl LifecycleRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the action for `event_id`. Returns false when nothing handled it.
    pub fn route(&self, event_id: &str) -> bool {
        let Some(event) = LifecycleEvent::from_menu_id(event_id) else {
            log::warn!("No route found for event: {}", event_id);
            return false;
        };

        let action = match self.routes.lock() {
            Ok(routes) => routes.iter().find(|r| r.event == event).map(|r| r.action.clone()),
            Err(poisoned) => poisoned
                .into_inner()
                .iter()
                .find(|r| r.event == event)
                .map(|r| r.action.clone()),
        };

        match action {
            Some(action) => {
                log::debug!("Dispatching {:?}", event);
                action();
                true
            }
            None => {
                log::debug!("{:?} fired with no action installed", event);
                false
            }
        }
    }

    pub fn is_installed(&self, event: LifecycleEvent) -> bool {
        self.routes
            .lock()
            .map(|routes| routes.iter().any(|r| r.event == event))
            .unwrap_or(false)
    }
}

impl CallbackInstaller for LifecycleRouter {
    fn install(&self, event: LifecycleEvent, action: Callback) -> Result<()> {
        let mut routes = self
            .routes
            .lock()
            .map_err(|_| anyhow::anyhow!("Lifecycle routes are poisoned"))?;

        match routes.iter_mut().find(|r| r.event == event) {
            Some(route) => route.action = action,
            None => routes.push(EventRoute { event, action }),
        }
        Ok(())
    }
}
