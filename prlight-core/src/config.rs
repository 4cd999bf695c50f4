//! Animations- und Strand-Konfiguration
//!
//! Die Zeiten und Wiederholungen der Animationen sind Policy, keine
//! Naturkonstanten. Die Defaults entsprechen dem bewährten Verhalten auf
//! einem 16er WS2812 Strip.

use rgb::RGB8;

use crate::types::{BLUE, GREEN, RED};

/// Minimale Helligkeit beim Pulse (nie ganz aus)
pub const DEFAULT_MIN_BRIGHTNESS: u8 = 5;

/// Maximale Helligkeit (0-255), gedimmt für Augenschonung
pub const DEFAULT_MAX_BRIGHTNESS: u8 = 64;

/// Anzahl der LEDs im Strip
pub const DEFAULT_PIXEL_COUNT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Untergrenze der Helligkeit beim Pulse
    pub min_brightness: u8,
    /// Anzahl der Auf-/Ab-Rampen beim Pulse
    pub pulse_cycles: u8,
    /// Pause pro Helligkeitsstufe in ms
    pub pulse_step_ms: u32,
    /// Anzahl der Swap-Frames
    pub swap_iterations: u16,
    /// Pause pro Swap-Frame in ms
    pub swap_frame_ms: u32,
    /// Anzahl der Regenbogen-Frames (muss endlich sein, damit weiter gepollt wird)
    pub rainbow_frames: u16,
    /// Pause pro Regenbogen-Frame in ms
    pub rainbow_frame_ms: u32,
    /// Dauerfarbe bei Failing
    pub failing_color: RGB8,
    /// Dauerfarbe bei Passing
    pub passing_color: RGB8,
    /// Zweite Farbe des Swap (erste ist `passing_color`)
    pub swap_color: RGB8,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            min_brightness: DEFAULT_MIN_BRIGHTNESS,
            pulse_cycles: 3,
            pulse_step_ms: 14,
            swap_iterations: 20,
            swap_frame_ms: 250,
            rainbow_frames: 145,
            rainbow_frame_ms: 66,
            failing_color: RED,
            passing_color: GREEN,
            swap_color: BLUE,
        }
    }
}

impl AnimationConfig {
    /// Alle Pausen auf 0 ms, z.B. für Tests
    pub fn without_delays(mut self) -> Self {
        self.pulse_step_ms = 0;
        self.swap_frame_ms = 0;
        self.rainbow_frame_ms = 0;
        self
    }
}

/// Parameter für `Strand::init`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrandConfig {
    pub pixel_count: usize,
    pub max_brightness: u8,
    pub animation: AnimationConfig,
}

impl Default for StrandConfig {
    fn default() -> Self {
        Self {
            pixel_count: DEFAULT_PIXEL_COUNT,
            max_brightness: DEFAULT_MAX_BRIGHTNESS,
            animation: AnimationConfig::default(),
        }
    }
}
