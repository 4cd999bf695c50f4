// Hardware Abstraction Layer (HAL) Module
//
// LedStrip-Implementierung (SmartStrip) plus die Writer, die den Frame
// tatsächlich ausgeben: WS2812 über SPI oder das Terminal.

pub mod console;
pub mod led_writer;
pub mod ws2812_spi;

pub use console::ConsoleWriter;
pub use led_writer::{SmartStrip, scale};
pub use ws2812_spi::Ws2812Spi;

#[cfg(target_os = "linux")]
pub use ws2812_spi::open_spidev;

#[cfg(test)]
pub use led_writer::MockLedWriter;
