pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Logical canvas width in cells.
pub const CANVAS_WIDTH: usize = 11;
/// Logical canvas height in cells.
pub const CANVAS_HEIGHT: usize = 12;
/// Number of canvas cells, populated or not.
pub const CELL_COUNT: usize = CANVAS_WIDTH * CANVAS_HEIGHT;
/// Number of physical LEDs behind the canvas.
pub const LED_COUNT: usize = 54;
/// Vertical/horizontal pitch ratio of the physical hex layout.
pub const HEX_ASPECT: f64 = 0.812_898_812_5;

/// Straight (non premultiplied by convention of the caller) ARGB pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb8 {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb8 {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Packed `0xAARRGGBB` word.
    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_u32(word: u32) -> Self {
        Self {
            a: (word >> 24) as u8,
            r: (word >> 16) as u8,
            g: (word >> 8) as u8,
            b: word as u8,
        }
    }

    /// Pixel as stored in a frame buffer: B, G, R, A.
    pub const fn to_bgra(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    pub const fn from_bgra(px: [u8; 4]) -> Self {
        Self {
            a: px[3],
            r: px[2],
            g: px[1],
            b: px[0],
        }
    }
}

/// Opaque drawing color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const MAGENTA: Self = Self::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Full-or-nothing channels, the way palette entries are usually written.
    pub const fn from_flags(r: bool, g: bool, b: bool) -> Self {
        const fn level(on: bool) -> u8 {
            if on { 255 } else { 0 }
        }
        Self::new(level(r), level(g), level(b))
    }
}

impl From<Rgb8> for Argb8 {
    fn from(c: Rgb8) -> Self {
        Argb8::opaque(c.r, c.g, c.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
