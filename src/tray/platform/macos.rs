use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::{class, msg_send};

fn shared_application() -> Retained<AnyObject> {
    unsafe { msg_send![class!(NSApplication), sharedApplication] }
}

/// Runs NSApplication on the calling thread, which must be the main one.
/// Returns only if the application stops without terminating the process.
pub fn run_event_loop() {
    let app = shared_application();
    let _: () = unsafe { msg_send![&app, run] };
}

/// Quit from the menu: lets AppKit tear the process down.
pub fn stop_event_loop() {
    let app = shared_application();
    let _: () = unsafe { msg_send![&app, terminate: std::ptr::null::<AnyObject>()] };
}
