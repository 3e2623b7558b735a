//! A small terminal spinner shown while excuses are "crafted".
//!
//! Generation itself is instant. The pause is cosmetic and can be turned
//! off with a zero delay.

use std::io::{IsTerminal, Write};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Sparkle frames.
const FRAMES: &[&str] = &["✶", "✸", "✹", "✺", "✹", "✷"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(100);

/// A spinner running in a background task. Writes to stderr.
pub struct Spinner {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl Spinner {
    /// Start a spinner with the given message.
    pub fn start(message: &str) -> Self {
        let (cancel, mut cancelled) = watch::channel(false);
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            for frame in FRAMES.iter().cycle() {
                // \x1b[2K clears the line, \r returns to its start
                eprint!("\x1b[2K\r{frame} {message}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancelled.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self { handle, cancel }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}

/// Wait `delay`, animating `message` when stderr is a terminal.
pub async fn pause(message: &str, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    if !std::io::stderr().is_terminal() {
        tokio::time::sleep(delay).await;
        return;
    }
    let spinner = Spinner::start(message);
    tokio::time::sleep(delay).await;
    spinner.stop().await;
}
