// WS2812 über SPI
//
// Jedes Datenbit wird als 4 SPI-Bits kodiert (0 = 1000, 1 = 1110). Bei
// 3.2 MHz SPI-Takt ergibt das ~312 ns pro SPI-Bit und damit gültige
// T0H/T1H-Zeiten. Nach dem Frame hält eine Null-Sequenz die Leitung lange
// genug low für den Reset (> 280 µs).

use embedded_hal::spi::SpiBus;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

/// SPI-Bytes pro Farbkanal (8 Datenbits * 4 SPI-Bits)
pub const BYTES_PER_CHANNEL: usize = 4;

/// SPI-Bytes pro Pixel (G, R, B)
pub const BYTES_PER_PIXEL: usize = 3 * BYTES_PER_CHANNEL;

/// Null-Bytes nach jedem Frame (140 * 8 * 312 ns ≈ 350 µs)
pub const RESET_BYTES: usize = 140;

// Zwei Datenbits pro SPI-Byte, höchstwertiges Bit zuerst
const PATTERNS: [u8; 4] = [0b1000_1000, 0b1000_1110, 0b1110_1000, 0b1110_1110];

fn encode_channel(value: u8, out: &mut Vec<u8>) {
    for shift in [6, 4, 2, 0] {
        out.push(PATTERNS[usize::from((value >> shift) & 0b11)]);
    }
}

/// Kodiert einen kompletten Frame inklusive Reset-Sequenz
pub fn encode_frame<I>(pixels: I, out: &mut Vec<u8>)
where
    I: IntoIterator<Item = RGB8>,
{
    out.clear();
    for color in pixels {
        // WS2812 erwartet GRB
        encode_channel(color.g, out);
        encode_channel(color.r, out);
        encode_channel(color.b, out);
    }
    out.resize(out.len() + RESET_BYTES, 0);
}

/// SmartLedsWrite-Implementierung für WS2812 an einem SPI-Bus
pub struct Ws2812Spi<S> {
    spi: S,
    // Wiederverwendeter Sendepuffer
    frame: Vec<u8>,
}

impl<S: SpiBus<u8>> Ws2812Spi<S> {
    pub fn new(spi: S) -> Self {
        Self {
            spi,
            frame: Vec::new(),
        }
    }

    pub fn into_inner(self) -> S {
        self.spi
    }
}

impl<S: SpiBus<u8>> SmartLedsWrite for Ws2812Spi<S> {
    type Error = S::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        encode_frame(iterator.into_iter().map(Into::into), &mut self.frame);
        self.spi.write(&self.frame)?;
        self.spi.flush()
    }
}

// ============================================================================
// Linux spidev
// ============================================================================

#[cfg(target_os = "linux")]
pub use linux_spi::open_spidev;

#[cfg(target_os = "linux")]
mod linux_spi {
    use anyhow::{Context, Result};
    use linux_embedded_hal::SpidevBus;
    use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};

    /// Öffnet und konfiguriert ein spidev-Gerät (z.B. /dev/spidev0.0)
    pub fn open_spidev(path: &str, speed_hz: u32) -> Result<SpidevBus> {
        let mut spi =
            SpidevBus::open(path).with_context(|| format!("opening SPI device {path}"))?;
        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(speed_hz)
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        spi.configure(&options)
            .with_context(|| format!("configuring SPI device {path}"))?;
        log::info!("SPI device {} opened at {} Hz", path, speed_hz);
        Ok(spi)
    }
}

// ============================================================================
// Tests
// ============================================================================
