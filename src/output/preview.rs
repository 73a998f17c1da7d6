use std::io::Write;

use crate::color::encode::{ansi_cube_index_of_word, device_word};
use crate::foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::foundation::error::{HexError, HexResult};
use crate::frame::buffer::Frame;
use crate::geometry::lut::PixelMap;

const CURSOR_HOME: &str = "\x1b[H";
const RESET: &str = "\x1b[0m";
const BLANK_CELL: &str = "        ";

/// Terminal preview options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreviewOpts {
    /// Tint each word with its 256-color approximation.
    pub color: bool,
    /// Leave an empty line under every row so the stagger reads as a hex grid.
    pub double_spaced: bool,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            color: true,
            double_spaced: false,
        }
    }
}

/// Prints frames as a table of device words, redrawn in place.
pub struct AnsiPreview<W: Write> {
    out: W,
    opts: PreviewOpts,
}

impl<W: Write> AnsiPreview<W> {
    pub fn new(out: W, opts: PreviewOpts) -> Self {
        Self { out, opts }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_frame(&mut self, frame: &Frame, map: &PixelMap) -> HexResult<()> {
        self.write_frame(frame, map)
            .map_err(|e| HexError::Other(anyhow::Error::new(e).context("write preview")))
    }

    fn write_frame(&mut self, frame: &Frame, map: &PixelMap) -> std::io::Result<()> {
        write!(self.out, "{CURSOR_HOME}")?;
        for y in 0..CANVAS_HEIGHT {
            for x in 0..CANVAS_WIDTH {
                let word = match (map.lookup(x, y), frame.pixel(x, y)) {
                    (Some(_), Some(px)) => device_word(px),
                    _ => {
                        write!(self.out, "{BLANK_CELL}")?;
                        continue;
                    }
                };
                if self.opts.color {
                    let idx = ansi_cube_index_of_word(word);
                    write!(self.out, "\x1b[38;5;{idx}m{word:08X} {RESET}")?;
                } else {
                    write!(self.out, "{word:08X} ")?;
                }
            }
            writeln!(self.out)?;
            if self.opts.double_spaced {
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/preview.rs"]
mod tests;
