use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::output::Output;
use crate::quiz::session::{QuizSession, TickOutcome, Token};

pub type SessionHandle<O> = Arc<Mutex<QuizSession<O>>>;

/// Drives the countdown of one session. The thread stops on its own once the session it was
/// scheduled for has been submitted or replaced.
pub fn schedule_ticks<O>(session: SessionHandle<O>, token: Token, interval: Duration) -> JoinHandle<()>
where
    O: Output + Clone + Send + 'static,
{
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            thread::sleep(interval);
            let now = Instant::now();
            let dt = now.duration_since(last_tick);
            last_tick = now;
            let outcome = session.lock().tick(token, dt);
            if outcome != TickOutcome::Running {
                debug!("Countdown {:?} stopped: {:?}", token, outcome);
                break;
            }
        }
    })
}
