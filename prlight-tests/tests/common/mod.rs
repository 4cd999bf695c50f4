//! Gemeinsame Test-Doubles für die Integration Tests
//!
//! `RecordingStrip` zeichnet jeden Geräte-Aufruf auf. Das Log liegt hinter
//! einem `Arc<Mutex<_>>`, damit der Test es lesen kann, während der Strand
//! das Gerät besitzt.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use embedded_hal_async::delay::DelayNs;
use prlight_core::{AnimationConfig, LedError, LedStrip, StatusSource, Strand, StrandConfig};
use rgb::RGB8;

pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

// ============================================================================
// Recording LED Strip
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Init { pixel_count: usize, brightness: u8 },
    SetPixel(usize, RGB8),
    SetBrightness(u8),
    Clear,
    Flush,
    Shutdown,
}

#[derive(Debug, Default)]
pub struct Log {
    pub calls: Vec<Call>,
    /// Pixel-Puffer bei jedem erfolgreichen Flush
    pub frames: Vec<Vec<RGB8>>,
    pub brightness: u8,
    pub released: bool,
    pixels: Vec<RGB8>,
    /// Flushes ab diesem Frame-Index schlagen fehl
    fail_from_frame: Option<usize>,
}

impl Log {
    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.iter().position(pred)
    }

    pub fn rposition(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.iter().rposition(pred)
    }

    /// Vergisst alle bisherigen Aufrufe (Frames bleiben)
    pub fn reset_calls(&mut self) {
        self.calls.clear();
    }
}

pub type SharedLog = Arc<Mutex<Log>>;

pub struct RecordingStrip {
    log: SharedLog,
}

impl RecordingStrip {
    pub fn new() -> (Self, SharedLog) {
        let log = SharedLog::default();
        (Self { log: Arc::clone(&log) }, log)
    }

    /// Der Flush mit Index `frame` (0 = Flush in `Strand::init`) und alle
    /// weiteren schlagen fehl
    pub fn failing_from(frame: usize) -> (Self, SharedLog) {
        let (strip, log) = Self::new();
        log.lock().unwrap().fail_from_frame = Some(frame);
        (strip, log)
    }

    fn log(&self) -> MutexGuard<'_, Log> {
        self.log.lock().unwrap()
    }
}

impl LedStrip for RecordingStrip {
    fn init(&mut self, pixel_count: usize, brightness: u8) -> Result<(), LedError> {
        let mut log = self.log();
        log.calls.push(Call::Init { pixel_count, brightness });
        if pixel_count == 0 {
            return Err(LedError::InitFailed);
        }
        log.pixels = vec![OFF; pixel_count];
        log.brightness = brightness;
        Ok(())
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
        let mut log = self.log();
        log.calls.push(Call::SetPixel(index, color));
        let pixel = log.pixels.get_mut(index).ok_or(LedError::IndexOutOfRange)?;
        *pixel = color;
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), LedError> {
        let mut log = self.log();
        log.calls.push(Call::SetBrightness(level));
        log.brightness = level;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), LedError> {
        let mut log = self.log();
        log.calls.push(Call::Clear);
        log.pixels.fill(OFF);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LedError> {
        let mut log = self.log();
        log.calls.push(Call::Flush);
        if log.fail_from_frame.is_some_and(|limit| log.frames.len() >= limit) {
            return Err(LedError::WriteFailed);
        }
        let frame = log.pixels.clone();
        log.frames.push(frame);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), LedError> {
        let mut log = self.log();
        log.calls.push(Call::Shutdown);
        log.released = true;
        Ok(())
    }
}

// ============================================================================
// Delay
// ============================================================================

/// Gibt bei jeder Animations-Pause einmal an den Executor ab
///
/// Damit kommen nebenläufige Futures (join) mitten in einer Animation zum
/// Zug, ohne dass echte Zeit vergeht.
pub struct YieldDelay;

impl DelayNs for YieldDelay {
    async fn delay_ns(&mut self, _ns: u32) {
        embassy_futures::yield_now().await;
    }
}

// ============================================================================
// Scripted Status Source
// ============================================================================

/// Liefert vorgegebene Ergebnisse der Reihe nach und zählt die Abfragen
pub struct ScriptedSource {
    pub script: VecDeque<Result<bool, &'static str>>,
    pub queries: usize,
}

impl ScriptedSource {
    pub fn new(script: &[Result<bool, &'static str>]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            queries: 0,
        }
    }
}

impl StatusSource for ScriptedSource {
    type Error = &'static str;

    async fn check_failing(&mut self) -> Result<bool, &'static str> {
        self.queries += 1;
        self.script.pop_front().unwrap_or(Err("script exhausted"))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Kurze Animationen für schnelle Tests
pub fn short_animation() -> AnimationConfig {
    AnimationConfig {
        pulse_cycles: 1,
        swap_iterations: 4,
        rainbow_frames: 5,
        ..AnimationConfig::default()
    }
    .without_delays()
}

pub fn config(pixel_count: usize, animation: AnimationConfig) -> StrandConfig {
    StrandConfig {
        pixel_count,
        max_brightness: 64,
        animation,
    }
}

pub fn strand(
    pixel_count: usize,
    animation: AnimationConfig,
) -> (Strand<RecordingStrip, YieldDelay>, SharedLog) {
    let (strip, log) = RecordingStrip::new();
    let strand = Strand::init(strip, YieldDelay, config(pixel_count, animation)).unwrap();
    (strand, log)
}

pub fn solid(pixel_count: usize, color: RGB8) -> Vec<RGB8> {
    vec![color; pixel_count]
}
