use crate::foundation::core::Argb8;

/// Alpha byte the strip driver expects in every word; the pixel's own alpha is discarded.
pub const DEVICE_ALPHA: u8 = 1;

/// Repack a canvas pixel as a strip driver word: `(DEVICE_ALPHA << 24) | RGB`.
pub fn device_word(px: Argb8) -> u32 {
    Argb8 {
        a: DEVICE_ALPHA,
        ..px
    }
    .to_u32()
}

/// First index of the xterm 6x6x6 color cube.
pub const ANSI_CUBE_BASE: u8 = 16;

/// Nearest-below entry of the xterm 216-color cube, in `16..=231`.
pub fn ansi_cube_index(r: u8, g: u8, b: u8) -> u8 {
    let level = |c: u8| c / 51;
    ANSI_CUBE_BASE + 36 * level(r) + 6 * level(g) + level(b)
}

/// Cube index of a device word, ignoring its alpha byte.
pub fn ansi_cube_index_of_word(word: u32) -> u8 {
    let px = Argb8::from_u32(word);
    ansi_cube_index(px.r, px.g, px.b)
}

#[cfg(test)]
#[path = "../../tests/unit/color/encode.rs"]
mod tests;
