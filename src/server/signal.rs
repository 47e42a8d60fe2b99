// Signal handling module
//
// Supported signals:
// - SIGINT:  Graceful shutdown (Ctrl+C)
// - SIGTERM: Graceful shutdown
//
// There is no reload path; configuration is fixed for the process lifetime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Fired once when shutdown is requested; the accept loop selects on it
    pub shutdown: Arc<Notify>,
    /// Set before the notification so late observers can still check it
    pub shutdown_requested: Arc<AtomicBool>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request shutdown directly.
    ///
    /// The signal listener calls this on SIGINT/SIGTERM; tests call it to
    /// drive shutdown without sending a real process signal. `notify_one`
    /// stores a permit, so the accept loop observes the request even if it
    /// is not parked on `notified()` at this instant.
    pub fn trigger_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        self.shutdown.notify_one();
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the signal listener (Unix).
///
/// Spawns a background task that waits for SIGINT or SIGTERM and triggers
/// shutdown once.
#[cfg(unix)]
pub fn spawn_signal_listener(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigint.recv() => {
                println!("\n[Signal] SIGINT received (Ctrl+C)");
            }
            _ = sigterm.recv() => {
                println!("\n[Signal] SIGTERM received");
            }
        }

        handler.trigger_shutdown();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn spawn_signal_listener(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            println!("\n[Signal] Ctrl+C received");
            handler.trigger_shutdown();
        }
    });
}
