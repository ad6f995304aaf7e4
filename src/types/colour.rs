//! Colour type at decode precision.

use std::fmt;

/// An RGBA colour value with 16 bits per channel, not premultiplied.
///
/// This is the precision the extractor tallies at: two pixels that differ in
/// any channel, alpha included, are different colours. Display formats
/// premultiply by alpha and down-sample to 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Colour {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Colour {
    /// Create a new colour from 16-bit RGBA components.
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from 16-bit RGB components.
    pub const fn rgb(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b, a: u16::MAX }
    }

    /// Widen an 8-bit RGBA pixel by bit replication (`0xAB` -> `0xABAB`).
    pub const fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::new(
            widen(rgba[0]),
            widen(rgba[1]),
            widen(rgba[2]),
            widen(rgba[3]),
        )
    }

    /// Create a colour from a 16-bit RGBA pixel.
    pub const fn from_rgba16(rgba: [u16; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Convert to a 16-bit RGBA array.
    pub fn to_rgba16(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Swatch colour: each channel premultiplied by alpha, then the low
    /// byte dropped. A half-transparent red shows as dark red.
    pub fn swatch_rgb8(self) -> [u8; 3] {
        [
            premultiply(self.r, self.a),
            premultiply(self.g, self.a),
            premultiply(self.b, self.a),
        ]
    }

    /// CSS hex notation of the swatch colour, e.g. `#ff0000`.
    pub fn hex(self) -> String {
        let [r, g, b] = self.swatch_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// CSS functional notation of the swatch colour, e.g. `rgb(255,0,0)`.
    pub fn css_rgb(self) -> String {
        let [r, g, b] = self.swatch_rgb8();
        format!("rgb({},{},{})", r, g, b)
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == u16::MAX
    }
}

const fn widen(v: u8) -> u16 {
    (v as u16) << 8 | v as u16
}

fn premultiply(channel: u16, alpha: u16) -> u8 {
    ((u32::from(channel) * u32::from(alpha) / 0xFFFF) >> 8) as u8
}

/// Full precision: `#RRRRGGGGBBBB`, with a trailing `AAAA` unless opaque.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:04X}{:04X}{:04X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:04X}{:04X}{:04X}{:04X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}
