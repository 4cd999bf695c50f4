//! Core Types für die Status-Anzeige
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Was der Strip gerade anzeigt
///
/// Unabhängig vom letzten Poll-Ergebnis, damit Übergänge (Flanken)
/// erkannt werden können.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Noch kein erfolgreicher Poll (Startzustand)
    #[default]
    Unknown,
    /// Keine offenen, fehlschlagenden Pull Requests
    Passing,
    /// Mindestens ein offener Pull Request schlägt fehl
    Failing,
}

impl DisplayState {
    /// Zustand, der nach einem erfolgreichen Poll angezeigt werden soll
    pub fn from_failing(failing: bool) -> Self {
        if failing { Self::Failing } else { Self::Passing }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Passing => "passing",
            Self::Failing => "failing",
        }
    }
}

impl core::fmt::Display for DisplayState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ergebnis eines einzelnen Polls
///
/// Entweder ein Ergebnis oder ein Fehler, niemals beides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSample<E> {
    /// `true` wenn mindestens ein PR fehlschlägt
    Failing(bool),
    /// Die Quelle konnte nicht abgefragt werden
    SourceError(E),
}

impl<E> StatusSample<E> {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::SourceError(_))
    }
}

impl<E> From<Result<bool, E>> for StatusSample<E> {
    fn from(result: Result<bool, E>) -> Self {
        match result {
            Ok(failing) => Self::Failing(failing),
            Err(e) => Self::SourceError(e),
        }
    }
}

/// Animationen, die der Strand abspielen kann
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Rotes "Atmen" bei einem neuen Fehlschlag
    Pulse,
    /// Grün/Blau-Wechsel bei Erholung
    Swap,
    /// Regenbogen-Lauf, wenn der Status unbekannt ist
    Rainbow,
}

// ============================================================================
// Farben
// ============================================================================

pub const RED: RGB8 = RGB8 { r: 0xff, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 0xff, b: 0 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 0xff };
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Gedimmte Palette für den Regenbogen-Lauf
pub const RAINBOW_PALETTE: [RGB8; 8] = [
    RGB8 { r: 0x20, g: 0x00, b: 0x00 }, // Rot
    RGB8 { r: 0x20, g: 0x10, b: 0x00 }, // Orange
    RGB8 { r: 0x20, g: 0x20, b: 0x00 }, // Gelb
    RGB8 { r: 0x00, g: 0x20, b: 0x00 }, // Grün
    RGB8 { r: 0x00, g: 0x20, b: 0x20 }, // Hellblau
    RGB8 { r: 0x00, g: 0x00, b: 0x20 }, // Blau
    RGB8 { r: 0x10, g: 0x00, b: 0x10 }, // Lila
    RGB8 { r: 0x20, g: 0x00, b: 0x10 }, // Pink
];

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Animation {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Animation::Pulse => defmt::write!(fmt, "Pulse"),
            Animation::Swap => defmt::write!(fmt, "Swap"),
            Animation::Rainbow => defmt::write!(fmt, "Rainbow"),
        }
    }
}
