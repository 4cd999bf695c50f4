//! Pure Animation Logic
//!
//! Funktionen ohne Hardware-Dependencies (testbar!). Der Strand ruft sie
//! pro Frame auf und schreibt das Ergebnis auf das Gerät.

use rgb::RGB8;

use crate::types::RAINBOW_PALETTE;

/// Helligkeitsverlauf für den Pulse: `cycles` mal von `min` nach `max` und zurück
///
/// Ist `max` kleiner als `min`, wird `max` als Untergrenze genommen.
///
/// ```
/// # use prlight_core::pulse_levels;
/// let levels: Vec<u8> = pulse_levels(5, 7, 1).collect();
/// assert_eq!(levels, [5, 6, 7, 6, 5]);
/// ```
pub fn pulse_levels(min: u8, max: u8, cycles: u8) -> impl Iterator<Item = u8> {
    let low = min.min(max);
    (0..cycles).flat_map(move |_| (low..=max).chain((low..max).rev()))
}

/// Farbe eines Pixels im Swap-Frame
///
/// Gerade Pixel bekommen in geraden Iterationen `first`, ungerade `second`.
/// Mit jeder Iteration wechselt die Zuordnung.
pub fn swap_color(index: usize, iteration: usize, first: RGB8, second: RGB8) -> RGB8 {
    if (index % 2 == 0) == (iteration % 2 == 0) {
        first
    } else {
        second
    }
}

/// Positionen der Regenbogen-Farben auf dem Strip
///
/// Jede Palettenfarbe wandert pro Frame ein Pixel weiter. Gehört dem Strand,
/// damit aufeinanderfolgende Regenbogen-Läufe dort weitermachen, wo der
/// letzte aufgehört hat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainbowCursor {
    positions: [usize; RAINBOW_PALETTE.len()],
}

impl RainbowCursor {
    pub const fn new() -> Self {
        Self {
            positions: [0, 1, 2, 3, 4, 5, 6, 7],
        }
    }

    /// Rückt alle Farben ein Pixel weiter und liefert (Index, Farbe) pro Farbe
    pub fn advance(&mut self, pixel_count: usize) -> [(usize, RGB8); RAINBOW_PALETTE.len()] {
        let count = pixel_count.max(1);
        let mut frame = [(0, RGB8::default()); RAINBOW_PALETTE.len()];
        for (slot, pos) in self.positions.iter_mut().enumerate() {
            *pos = (*pos + 1) % count;
            frame[slot] = (*pos, RAINBOW_PALETTE[slot]);
        }
        frame
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

impl Default for RainbowCursor {
    fn default() -> Self {
        Self::new()
    }
}
