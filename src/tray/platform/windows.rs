/// No run loop of our own to stop; the shutdown channel ends the process.
pub fn stop_event_loop() {}
