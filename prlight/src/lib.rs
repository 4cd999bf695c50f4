// Library-Root: Adapter, Status-Quelle und Run-Loop für den Linux-Host
//
// Die Logik (Zustandsautomat, Animationen) liegt in prlight-core. Hier
// leben nur die Teile, die std brauchen: CLI, SPI/Terminal-Ausgabe,
// GitHub-Client und Signal-Handling.

// Module
pub mod config;
pub mod github;
pub mod hal;
pub mod tasks;

// Re-exports von prlight-core
pub use prlight_core::{
    Animation, AnimationConfig, DisplayState, LedError, LedStrip, StatusMonitor, StatusSample,
    StatusSource, StopToken, Strand, StrandConfig,
};
