//! Provides a cancellable progress indicator for in-flight scans

use std::{
    io::{self, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

/// Time between animation steps. The token is checked before every step so
/// cancellation is observed within one step
pub const ANIMATION_STEP: Duration = Duration::from_millis(200);

const DOT_STEPS: usize = 5;

/// A single-use stop signal shared between the scan control flow and the
/// progress thread. The scan side asserts it once after reply collection
/// completes; the progress side only ever reads it
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Returns a new unasserted token
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Asserts the stop signal. Returns true when this call was the one
    /// that asserted it and false when it was already asserted
    pub fn cancel(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    /// Returns true once the stop signal has been asserted
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Renders an updating "Scanning network" status line until cancelled
///
/// The animation grows a trail of dots over five steps and shrinks it back
/// over five more. Rendering failures are ignored - the reporter must never
/// be the cause of a scan failure
pub struct ProgressReporter {
    label: String,
    token: CancelToken,
}

impl ProgressReporter {
    /// Returns a new reporter for the provided label, observing the
    /// provided token
    pub fn new(label: String, token: CancelToken) -> Self {
        Self { label, token }
    }

    fn render(&self, dots: usize) {
        let mut stdout = io::stdout();
        let _ = write!(
            stdout,
            "\r[*] Scanning network: {} {}{}",
            self.label,
            ".".repeat(dots),
            " ".repeat(DOT_STEPS - dots),
        );
        let _ = stdout.flush();
    }

    fn run(self) {
        loop {
            // dots grow one by one, then shrink one by one
            for dots in (1..=DOT_STEPS).chain((0..DOT_STEPS).rev()) {
                if self.token.is_cancelled() {
                    let _ = writeln!(io::stdout());
                    return;
                }

                self.render(dots);
                thread::sleep(ANIMATION_STEP);
            }
        }
    }

    /// Starts the animation in a background thread. The thread exits within
    /// one animation step of the token being asserted
    pub fn start_in_thread(self) -> JoinHandle<()> {
        thread::spawn(move || self.run())
    }
}

#[cfg(test)]
#[path = "./progress_tests.rs"]
mod tests;
