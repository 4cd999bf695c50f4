//! Status-Monitor - Adapter zwischen Status-Quelle und Run-Loop

use core::time::Duration;

use crate::traits::StatusSource;
use crate::types::StatusSample;

/// Standard-Intervall zwischen zwei Polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Fragt die Status-Quelle genau einmal pro `poll()` ab
///
/// Kein Retry, kein Zustand zwischen zwei Aufrufen. Das Intervall wird nur
/// gespeichert, der Ticker gehört der Run-Loop.
pub struct StatusMonitor<S> {
    source: S,
    interval: Duration,
}

impl<S: StatusSource> StatusMonitor<S> {
    pub fn new(source: S, interval: Duration) -> Self {
        Self { source, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Eine Abfrage; jeder Fehler der Quelle wird zu `SourceError`
    pub async fn poll(&mut self) -> StatusSample<S::Error> {
        let sample = StatusSample::from(self.source.check_failing().await);
        match &sample {
            StatusSample::Failing(failing) => log::debug!("Poll: failing={}", failing),
            StatusSample::SourceError(e) => log::warn!("Poll: status source error: {}", e),
        }
        sample
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
