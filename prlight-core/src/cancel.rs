//! Shutdown-Anforderung für Run-Loop und Animationen
//!
//! Ein einzelnes Token ersetzt Stop-Channels: der Signal-Handler ruft
//! `cancel()`, die Run-Loop wartet auf `cancelled()` und der Strand prüft
//! `is_cancelled()` zwischen zwei Frames.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

pub struct StopToken {
    cancelled: AtomicBool,
    // Weckt genau einen Wartenden (die Run-Loop)
    wake: Signal<CriticalSectionRawMutex, ()>,
}

impl StopToken {
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            wake: Signal::new(),
        }
    }

    /// Fordert den Shutdown an. Mehrfaches Aufrufen ist harmlos.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.wake.signal(());
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Wartet bis `cancel()` aufgerufen wurde
    pub async fn cancelled(&self) {
        while !self.is_cancelled() {
            self.wake.wait().await;
        }
    }
}

impl Default for StopToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_futures::select::{Either, select};
    use embassy_futures::yield_now;

    #[test]
    fn test_new_token_is_not_cancelled() {
        let token = StopToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_is_sticky_and_idempotent() {
        let token = StopToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
        // Bereits abgebrochen: cancelled() kehrt sofort zurück
        block_on(token.cancelled());
    }

    #[test]
    fn test_cancelled_wakes_waiter() {
        let token = StopToken::new();
        let result = block_on(select(token.cancelled(), async {
            yield_now().await;
            token.cancel();
            core::future::pending::<()>().await
        }));
        assert!(matches!(result, Either::First(())));
    }
}
