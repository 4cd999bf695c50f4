// Terminal-Ausgabe statt LED-Hardware
//
// Jeder Frame überschreibt die aktuelle Zeile (\r) mit einem farbigen
// Punkt pro Pixel (ANSI 24-Bit Farbe). Praktisch ohne SPI-Hardware.

use std::io::{self, Stdout, Write};

use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

const PIXEL_GLYPH: char = '●';

pub struct ConsoleWriter<W> {
    out: W,
}

impl ConsoleWriter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SmartLedsWrite for ConsoleWriter<W> {
    type Error = io::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> io::Result<()>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        write!(self.out, "\r")?;
        for item in iterator {
            let c: RGB8 = item.into();
            write!(self.out, "\x1b[38;2;{};{};{}m{}", c.r, c.g, c.b, PIXEL_GLYPH)?;
        }
        write!(self.out, "\x1b[0m")?;
        self.out.flush()
    }
}
