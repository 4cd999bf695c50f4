// Signal-Handler: SIGINT/SIGTERM fordern den Shutdown an
use anyhow::{Context, Result};
use prlight_core::StopToken;

/// Installiert den Handler für SIGINT und SIGTERM
///
/// Der Handler läuft in einem eigenen Thread von `ctrlc` und setzt nur das
/// Token. Den Strip löscht die Run-Loop bzw. `main`. Darf pro Prozess nur
/// einmal aufgerufen werden.
pub fn install_signal_handler(stop: &'static StopToken) -> Result<()> {
    ctrlc::set_handler(move || {
        if stop.is_cancelled() {
            log::warn!("Shutdown already in progress");
        } else {
            log::info!("Catching signal, shutting down");
        }
        stop.cancel();
    })
    .context("installing SIGINT/SIGTERM handler")
}
