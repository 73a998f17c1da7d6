//! Canvas cell to physical LED lookup.
//!
//! The matrix is wired as a serpentine strip over a staggered (hex-like) grid, so only
//! every other cell of the logical canvas carries an LED.

use crate::foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH, CELL_COUNT, LED_COUNT};
use crate::foundation::error::{HexError, HexResult};

/// Index of a physical LED on the strip, always `< LED_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedIndex(pub u8);

impl LedIndex {
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}

macro_rules! cells {
    (@cell _) => { None };
    (@cell $led:literal) => { Some($led) };
    ($($cell:tt),* $(,)?) => { [$(cells!(@cell $cell)),*] };
}

/// Wiring of the production board, row-major.
#[rustfmt::skip]
pub const STANDARD_LAYOUT: [Option<u8>; CELL_COUNT] = cells![
    _, _, _, 0, _, 1, _, 2, _, _, _,
    _, _, 6, _, 5, _, 4, _, 3, _, _,
    _, _, 7, _, 8, _, 9, _,10, _, _,
    _,15, _,14, _,13, _,12, _,11, _,
    _,16, _,17, _,18, _,19, _,20, _,
   26, _,25, _,24, _,23, _,22, _,21,
   27, _,28, _,29, _,30, _,31, _,32,
    _,37, _,36, _,35, _,34, _,33, _,
    _,38, _,39, _,40, _,41, _,42, _,
    _, _,46, _,45, _,44, _,43, _, _,
    _, _,47, _,48, _,49, _,50, _, _,
    _, _, _,53, _,52, _,51, _, _, _,
];

/// Read-only cell to LED table; a bijection from populated cells onto `0..LED_COUNT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMap {
    cells: [Option<LedIndex>; CELL_COUNT],
}

impl PixelMap {
    /// Load the production wiring.
    pub fn standard() -> HexResult<Self> {
        Self::from_table(&STANDARD_LAYOUT)
    }

    /// Validate and load a row-major wiring table.
    pub fn from_table(table: &[Option<u8>]) -> HexResult<Self> {
        if table.len() != CELL_COUNT {
            return Err(HexError::geometry(format!(
                "pixel map has {} cells, canvas is {CANVAS_WIDTH}x{CANVAS_HEIGHT} ({CELL_COUNT})",
                table.len()
            )));
        }

        let mut seen = [false; LED_COUNT];
        let mut cells = [None; CELL_COUNT];
        for (i, entry) in table.iter().enumerate() {
            let Some(led) = *entry else {
                continue;
            };
            let slot = seen.get_mut(usize::from(led)).ok_or_else(|| {
                HexError::geometry(format!(
                    "cell ({}, {}) maps to led {led}, strip has {LED_COUNT}",
                    i % CANVAS_WIDTH,
                    i / CANVAS_WIDTH
                ))
            })?;
            if *slot {
                return Err(HexError::geometry(format!("led {led} is mapped twice")));
            }
            *slot = true;
            cells[i] = Some(LedIndex(led));
        }

        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(HexError::geometry(format!(
                "led {missing} is not reachable from any cell"
            )));
        }

        Ok(Self { cells })
    }

    /// LED behind cell `(x, y)`; `None` for unpopulated or out-of-canvas cells.
    pub fn lookup(&self, x: usize, y: usize) -> Option<LedIndex> {
        if x >= CANVAS_WIDTH || y >= CANVAS_HEIGHT {
            return None;
        }
        self.cells[y * CANVAS_WIDTH + x]
    }

    /// Populated cells in row-major order as `(x, y, led)`.
    pub fn populated(&self) -> impl Iterator<Item = (usize, usize, LedIndex)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, led)| {
            led.map(|led| (i % CANVAS_WIDTH, i / CANVAS_WIDTH, led))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/lut.rs"]
mod tests;
