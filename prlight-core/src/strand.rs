//! Strand - exklusiver Besitzer des LED-Strips
//!
//! Der Strand ist die einzige Stelle, die das Gerät anfasst. Jede Sequenz von
//! Geräte-Aufrufen (Animation oder Dauerfarbe) läuft komplett unter dem
//! Mutex, damit sich zwei `apply()`-Aufrufe nie überlappen.
//!
//! ## Zustandsautomat
//!
//! | Zustand vorher | Sample          | Animation | Zustand nachher |
//! |----------------|-----------------|-----------|-----------------|
//! | Unknown/Passing| `Failing(true)` | Pulse     | Failing         |
//! | Failing        | `Failing(true)` | keine     | Failing         |
//! | Failing        | `Failing(false)`| Swap      | Passing         |
//! | Unknown/Passing| `Failing(false)`| keine     | Passing         |
//! | beliebig       | `SourceError`   | Rainbow   | unverändert     |

use core::fmt::Display;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::cancel::StopToken;
use crate::config::{AnimationConfig, StrandConfig};
use crate::logic::{RainbowCursor, pulse_levels, swap_color};
use crate::traits::{LedError, LedStrip};
use crate::types::{Animation, DisplayState, StatusSample};

pub struct Strand<D, T> {
    pixel_count: usize,
    max_brightness: u8,
    animation: AnimationConfig,
    inner: Mutex<CriticalSectionRawMutex, Inner<D, T>>,
}

/// Alles, was nur unter dem Lock angefasst werden darf
struct Inner<D, T> {
    device: D,
    delay: T,
    state: DisplayState,
    rainbow: RainbowCursor,
    released: bool,
}

impl<D: LedStrip, T: DelayNs> Inner<D, T> {
    fn fill(&mut self, pixel_count: usize, color: RGB8) -> Result<(), LedError> {
        for index in 0..pixel_count {
            self.device.set_pixel(index, color)?;
        }
        Ok(())
    }

    fn clear_and_flush(&mut self) -> Result<(), LedError> {
        self.device.clear()?;
        self.device.flush()
    }
}

impl<D: LedStrip, T: DelayNs> Strand<D, T> {
    /// Initialisiert das Gerät, löscht es und überträgt den leeren Frame
    ///
    /// Schlägt das fehl, ist keine Anzeige möglich. Der Aufrufer sollte den
    /// Prozess beenden.
    pub fn init(mut device: D, delay: T, config: StrandConfig) -> Result<Self, LedError> {
        if config.pixel_count == 0 {
            return Err(LedError::InitFailed);
        }
        device.init(config.pixel_count, config.max_brightness)?;
        device.clear()?;
        device.flush()?;
        log::info!(
            "LED strip ready: {} pixels, max brightness {}",
            config.pixel_count,
            config.max_brightness
        );

        Ok(Self {
            pixel_count: config.pixel_count,
            max_brightness: config.max_brightness,
            animation: config.animation,
            inner: Mutex::new(Inner {
                device,
                delay,
                state: DisplayState::Unknown,
                rainbow: RainbowCursor::new(),
                released: false,
            }),
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    /// Aktuell angezeigter Zustand (wartet auf laufende Animationen)
    pub async fn state(&self) -> DisplayState {
        self.inner.lock().await.state
    }

    /// Zeigt ein Poll-Ergebnis an
    ///
    /// Animationen laufen nur bei einem Zustandswechsel. Ist `stop` gesetzt,
    /// werden verbleibende Animations-Frames übersprungen; die Dauerfarbe wird
    /// trotzdem gesetzt. Liefert die abgespielte Animation zurück.
    pub async fn apply<E: Display>(
        &self,
        sample: &StatusSample<E>,
        stop: &StopToken,
    ) -> Result<Option<Animation>, LedError> {
        let mut inner = self.inner.lock().await;
        if inner.released {
            return Err(LedError::Released);
        }

        match sample {
            StatusSample::SourceError(e) => {
                // Kein Zustandswechsel: ein einzelner Netzwerkfehler darf beim
                // nächsten erfolgreichen Poll keinen Pulse/Swap auslösen.
                log::warn!("Status unknown ({}), keeping {}", e, inner.state);
                self.rainbow(&mut inner, stop).await?;
                Ok(Some(Animation::Rainbow))
            }
            StatusSample::Failing(true) => {
                let animation = if inner.state != DisplayState::Failing {
                    log::info!("Transition: {} -> failing", inner.state);
                    self.pulse(&mut inner, stop).await?;
                    Some(Animation::Pulse)
                } else {
                    None
                };
                inner.fill(self.pixel_count, self.animation.failing_color)?;
                inner.device.flush()?;
                inner.state = DisplayState::Failing;
                log::info!("Failing...");
                Ok(animation)
            }
            StatusSample::Failing(false) => {
                let animation = if inner.state == DisplayState::Failing {
                    log::info!("Transition: failing -> passing");
                    self.swap(&mut inner, stop).await?;
                    Some(Animation::Swap)
                } else {
                    None
                };
                inner.fill(self.pixel_count, self.animation.passing_color)?;
                inner.device.flush()?;
                inner.state = DisplayState::Passing;
                log::info!("Passing!");
                Ok(animation)
            }
        }
    }

    /// Wartet auf laufende Animationen, löscht den Strip und gibt ihn frei
    ///
    /// Idempotent: weitere Aufrufe tun nichts.
    pub async fn shutdown(&self) -> Result<(), LedError> {
        let mut inner = self.inner.lock().await;
        if inner.released {
            log::debug!("LED strip already released");
            return Ok(());
        }
        inner.released = true;

        // Freigeben auch wenn das Löschen fehlschlägt
        let cleared = inner.clear_and_flush();
        let released = inner.device.shutdown();
        log::info!("LED strip cleared and released");
        cleared.and(released)
    }

    // ========================================================================
    // Animationen (nur mit gehaltenem Lock aufrufen)
    // ========================================================================

    /// Rotes Atmen: Helligkeit rampt `pulse_cycles` mal auf und ab
    async fn pulse(&self, inner: &mut Inner<D, T>, stop: &StopToken) -> Result<(), LedError> {
        let cfg = &self.animation;
        for level in pulse_levels(cfg.min_brightness, self.max_brightness, cfg.pulse_cycles) {
            if stop.is_cancelled() {
                log::debug!("Pulse cut short by shutdown");
                break;
            }
            inner.device.set_brightness(level)?;
            inner.fill(self.pixel_count, cfg.failing_color)?;
            inner.device.flush()?;
            inner.delay.delay_ms(cfg.pulse_step_ms).await;
        }
        inner.device.set_brightness(self.max_brightness)
    }

    /// Grün/Blau im Wechsel auf geraden und ungeraden Pixeln
    async fn swap(&self, inner: &mut Inner<D, T>, stop: &StopToken) -> Result<(), LedError> {
        let cfg = &self.animation;
        for iteration in 0..usize::from(cfg.swap_iterations) {
            if stop.is_cancelled() {
                log::debug!("Swap cut short by shutdown");
                break;
            }
            for index in 0..self.pixel_count {
                let color = swap_color(index, iteration, cfg.passing_color, cfg.swap_color);
                inner.device.set_pixel(index, color)?;
            }
            inner.device.flush()?;
            inner.delay.delay_ms(cfg.swap_frame_ms).await;
        }
        Ok(())
    }

    /// Palette wandert Pixel für Pixel über den Strip, begrenzte Frame-Anzahl
    async fn rainbow(&self, inner: &mut Inner<D, T>, stop: &StopToken) -> Result<(), LedError> {
        let cfg = &self.animation;
        for _ in 0..cfg.rainbow_frames {
            if stop.is_cancelled() {
                log::debug!("Rainbow cut short by shutdown");
                break;
            }
            for (index, color) in inner.rainbow.advance(self.pixel_count) {
                inner.device.set_pixel(index, color)?;
            }
            inner.device.flush()?;
            inner.delay.delay_ms(cfg.rainbow_frame_ms).await;
        }
        Ok(())
    }
}
