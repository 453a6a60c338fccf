use log::debug;
use std::time::Duration;

use crate::quiz::mode::Mode;
use crate::quiz::session::{State, Token};

#[derive(Debug)]
pub struct GeneratingState {
    pub token: Token,
    pub url: String,
    pub mode: Mode,
}

impl GeneratingState {
    pub fn new(token: Token, url: String, mode: Mode) -> Self {
        GeneratingState { token, url, mode }
    }
}

impl State for GeneratingState {
    fn on_begin(&mut self) {
        debug!(
            "Requested {} quiz for {} ({:?})",
            self.mode, self.url, self.token
        );
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
