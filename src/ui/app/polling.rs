use super::AdminApp;

impl AdminApp {
    /// Reduce whatever the runtime has posted so far without waiting.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            any = true;
        }
        any
    }
}
