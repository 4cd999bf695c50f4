// SmartLED Strip - LedStrip über einen SmartLedsWrite-Writer
//
// Puffert Pixel und Helligkeit und überträgt erst bei flush() den ganzen
// Frame. Der eigentliche Draht (SPI, Terminal, Mock) steckt im Writer,
// damit Tests ohne Hardware laufen.

use core::fmt::Debug;

use prlight_core::{LedError, LedStrip};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Skaliert eine Farbe mit der globalen Helligkeit (255 = unverändert)
pub fn scale(color: RGB8, brightness: u8) -> RGB8 {
    let factor = u16::from(brightness) + 1;
    let channel = |c: u8| ((u16::from(c) * factor) >> 8) as u8;
    RGB8 {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// LED-Strip mit Pixel-Puffer vor einem SmartLedsWrite-Writer
///
/// Production nutzt `Ws2812Spi` oder `ConsoleWriter`, Tests den
/// `MockLedWriter`.
pub struct SmartStrip<W> {
    writer: W,
    pixels: Vec<RGB8>,
    brightness: u8,
    released: bool,
}

impl<W> SmartStrip<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: Vec::new(),
            brightness: u8::MAX,
            released: false,
        }
    }

    /// Aktueller Puffer (ungeskaliert)
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W> LedStrip for SmartStrip<W>
where
    W: SmartLedsWrite<Color = RGB8> + Send,
    W::Error: Debug,
{
    fn init(&mut self, pixel_count: usize, brightness: u8) -> Result<(), LedError> {
        if pixel_count == 0 {
            return Err(LedError::InitFailed);
        }
        self.pixels = vec![OFF; pixel_count];
        self.brightness = brightness;
        self.released = false;
        Ok(())
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(LedError::IndexOutOfRange)?;
        *pixel = color;
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), LedError> {
        self.brightness = level;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), LedError> {
        self.pixels.fill(OFF);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LedError> {
        if self.released {
            return Err(LedError::Released);
        }
        let brightness = self.brightness;
        self.writer
            .write(self.pixels.iter().map(|&c| scale(c, brightness)))
            .map_err(|e| {
                log::error!("Failed to write LED frame: {:?}", e);
                LedError::WriteFailed
            })
    }

    fn shutdown(&mut self) -> Result<(), LedError> {
        self.pixels = Vec::new();
        self.released = true;
        Ok(())
    }
}

// ============================================================================
// Mock Implementation (nur für Tests)
// ============================================================================

#[cfg(test)]
pub struct MockLedWriter {
    /// Alle übertragenen Frames (für Assertions in Tests)
    pub frames: Vec<Vec<RGB8>>,
    /// Simuliere Fehler beim nächsten write()
    pub fail_next_write: bool,
}

#[cfg(test)]
impl MockLedWriter {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            fail_next_write: false,
        }
    }

    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

#[cfg(test)]
impl SmartLedsWrite for MockLedWriter {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), ()>
    where
        T: IntoIterator<Item = I>,
        I: Into<RGB8>,
    {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(());
        }
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
