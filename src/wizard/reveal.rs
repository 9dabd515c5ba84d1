//! One-shot reveal timer.
//!
//! Arms a background thread that flips a shared flag after a fixed delay.
//! The handle owns the timer: dropping it (or calling [`RevealTimer::cancel`])
//! disconnects the channel the thread is parked on, so a timer canceled
//! before expiry never sets its flag. A fresh session gets a fresh timer and
//! a fresh flag, so a stale timer can never leak into it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to an armed one-shot timer.
#[derive(Debug)]
pub struct RevealTimer {
    cancel_tx: mpsc::Sender<()>,
    fired: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl RevealTimer {
    /// Arm a timer that fires once after `delay`.
    pub fn arm(delay: Duration) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let thread = thread::spawn(move || {
            // Timeout means the delay elapsed without a cancel signal;
            // a message or a disconnect means the timer was canceled.
            if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                flag.store(true, Ordering::SeqCst);
            }
        });

        Self {
            cancel_tx,
            fired,
            thread: Some(thread),
        }
    }

    /// Whether the delay has elapsed without cancellation.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Cancel the timer. After this returns, the flag will never flip.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        // Wakes the timer thread immediately; if it already fired, the
        // send fails harmlessly.
        let _ = self.cancel_tx.send(());
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RevealTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_after_delay() {
        let timer = RevealTimer::arm(Duration::from_millis(10));
        assert!(!timer.has_fired());
        thread::sleep(Duration::from_millis(60));
        assert!(timer.has_fired());
    }

    #[test]
    fn timer_does_not_fire_before_delay() {
        let timer = RevealTimer::arm(Duration::from_secs(30));
        assert!(!timer.has_fired());
    }

    #[test]
    fn canceled_timer_never_fires() {
        let timer = RevealTimer::arm(Duration::from_millis(20));
        let flag = Arc::clone(&timer.fired);
        timer.cancel();
        thread::sleep(Duration::from_millis(80));
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let timer = RevealTimer::arm(Duration::from_millis(20));
        let flag = Arc::clone(&timer.fired);
        drop(timer);
        thread::sleep(Duration::from_millis(80));
        assert!(!flag.load(Ordering::SeqCst));
    }
}
