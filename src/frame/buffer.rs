use crate::foundation::core::{Argb8, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_COUNT};
use crate::foundation::error::{HexError, HexResult};

/// Bytes in one frame buffer (4 per cell).
pub const FRAME_BYTES: usize = CELL_COUNT * 4;

/// One rendered canvas image.
///
/// Pixels are row-major, 4 bytes each in B, G, R, A order (a little-endian `0xAARRGGBB`
/// word), premultiplied the way the rasterizer produced them. A frame never changes after
/// it is built.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
}

impl Frame {
    /// Take ownership of a raw B,G,R,A buffer.
    pub fn from_bgra(data: Vec<u8>) -> HexResult<Self> {
        if data.len() != FRAME_BYTES {
            return Err(HexError::validation(format!(
                "frame buffer must be {FRAME_BYTES} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self { data })
    }

    /// Build a frame from one pixel per cell, row-major.
    pub fn from_pixels<I>(pixels: I) -> HexResult<Self>
    where
        I: IntoIterator<Item = Argb8>,
    {
        let mut data = alloc_frame_bytes()?;
        let mut n = 0usize;
        for px in pixels {
            let at = n * 4;
            let dst = data
                .get_mut(at..at + 4)
                .ok_or_else(|| HexError::validation(format!("more than {CELL_COUNT} pixels")))?;
            dst.copy_from_slice(&px.to_bgra());
            n += 1;
        }
        if n != CELL_COUNT {
            return Err(HexError::validation(format!(
                "expected {CELL_COUNT} pixels, got {n}"
            )));
        }
        Ok(Self { data })
    }

    /// Every cell set to `px`.
    pub fn solid(px: Argb8) -> HexResult<Self> {
        Self::from_pixels(std::iter::repeat_n(px, CELL_COUNT))
    }

    pub fn width(&self) -> usize {
        CANVAS_WIDTH
    }

    pub fn height(&self) -> usize {
        CANVAS_HEIGHT
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Argb8> {
        if x >= CANVAS_WIDTH || y >= CANVAS_HEIGHT {
            return None;
        }
        let at = (y * CANVAS_WIDTH + x) * 4;
        let px = &self.data[at..at + 4];
        Some(Argb8::from_bgra([px[0], px[1], px[2], px[3]]))
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = Argb8> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| Argb8::from_bgra([px[0], px[1], px[2], px[3]]))
    }

    pub fn as_bgra(&self) -> &[u8] {
        &self.data
    }

    /// R, G, B, A byte order, for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FRAME_BYTES);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
        out
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &CANVAS_WIDTH)
            .field("height", &CANVAS_HEIGHT)
            .finish_non_exhaustive()
    }
}

/// Zeroed frame-sized buffer; reports allocation failure instead of aborting.
pub(crate) fn alloc_frame_bytes() -> HexResult<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(FRAME_BYTES)?;
    data.resize(FRAME_BYTES, 0);
    Ok(data)
}

#[cfg(test)]
#[path = "../../tests/unit/frame/buffer.rs"]
mod tests;
