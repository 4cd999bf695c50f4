//! prlight Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und den Strand-Controller, der
//! Poll-Ergebnisse auf einen LED-Strip abbildet.

#![no_std]

pub mod cancel;
pub mod config;
pub mod logic;
pub mod monitor;
pub mod strand;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use cancel::StopToken;
pub use config::{AnimationConfig, StrandConfig};
pub use logic::{RainbowCursor, pulse_levels, swap_color};
pub use monitor::{DEFAULT_POLL_INTERVAL, StatusMonitor};
pub use strand::Strand;
pub use traits::{LedError, LedStrip, StatusSource};
pub use types::{Animation, DisplayState, StatusSample};
