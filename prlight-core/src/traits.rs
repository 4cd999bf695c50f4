//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware- und Netzwerk-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Gerät konnte nicht initialisiert werden
    InitFailed,
    /// Schreiben/Übertragen eines Frames ist fehlgeschlagen
    WriteFailed,
    /// Pixel-Index liegt außerhalb des Strips
    IndexOutOfRange,
    /// Gerät wurde bereits über `shutdown()` freigegeben
    Released,
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InitFailed => write!(f, "LED device initialisation failed"),
            Self::WriteFailed => write!(f, "LED device write failed"),
            Self::IndexOutOfRange => write!(f, "pixel index out of range"),
            Self::Released => write!(f, "LED device already released"),
        }
    }
}

impl core::error::Error for LedError {}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::InitFailed => defmt::write!(fmt, "InitFailed"),
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
            LedError::IndexOutOfRange => defmt::write!(fmt, "IndexOutOfRange"),
            LedError::Released => defmt::write!(fmt, "Released"),
        }
    }
}

/// Trait für adressierbare LED-Strips (WS2812/Neopixel)
///
/// Pixel und Helligkeit werden gepuffert, erst `flush()` überträgt den Frame.
///
/// # Implementierungen
/// - **Production:** SmartStrip mit Ws2812Spi (SPI) oder ConsoleWriter (Terminal)
/// - **Testing:** RecordingStrip (in-memory, zeichnet Aufrufe auf)
pub trait LedStrip: Send {
    /// Bereitet das Gerät für `pixel_count` Pixel bei gegebener Helligkeit vor
    fn init(&mut self, pixel_count: usize, brightness: u8) -> Result<(), LedError>;

    /// Setzt ein Pixel im Puffer
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError>;

    /// Setzt die globale Helligkeit (0-255) für folgende Frames
    fn set_brightness(&mut self, level: u8) -> Result<(), LedError>;

    /// Setzt alle Pixel im Puffer auf aus
    fn clear(&mut self) -> Result<(), LedError>;

    /// Überträgt den Puffer und wartet bis der Frame gesendet ist
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn flush(&mut self) -> Result<(), LedError>;

    /// Gibt das Gerät frei
    fn shutdown(&mut self) -> Result<(), LedError>;
}

/// Trait für die Status-Quelle (z.B. GitHub-Suche)
///
/// Eine einzelne, idempotente Abfrage. Retry/Backoff ist Sache des Aufrufers.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    type Error: core::fmt::Debug + core::fmt::Display;

    /// `Ok(true)` wenn der Autor offene, fehlschlagende Pull Requests hat
    async fn check_failing(&mut self) -> Result<bool, Self::Error>;
}
