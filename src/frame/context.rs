use crate::foundation::error::{HexError, HexResult};
use crate::frame::buffer::Frame;

/// Playback direction of an [`AnimationContext`] cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `+1` or `-1`.
    pub fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Owned, ordered frame store with a playback cursor.
///
/// A context is the only owner of its frames. Frames move in through [`append`] or
/// [`insert_at`] and are dropped by [`clear`] or when the context itself is dropped.
///
/// Invariant: `cursor < len()`, or `cursor == 0` when empty.
///
/// [`append`]: AnimationContext::append
/// [`insert_at`]: AnimationContext::insert_at
/// [`clear`]: AnimationContext::clear
#[derive(Debug, Default)]
pub struct AnimationContext {
    frames: Vec<Frame>,
    cursor: usize,
    direction: Direction,
}

impl AnimationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(frames: usize) -> HexResult<Self> {
        let mut ctx = Self::new();
        ctx.frames.try_reserve(frames)?;
        Ok(ctx)
    }

    /// Add `frame` at the end. The cursor does not move.
    ///
    /// On allocation failure the context is left untouched and `frame` is dropped.
    pub fn append(&mut self, frame: Frame) -> HexResult<()> {
        self.frames.try_reserve(1)?;
        self.frames.push(frame);
        Ok(())
    }

    /// Append `frames` in order, all or nothing.
    pub fn extend(&mut self, frames: Vec<Frame>) -> HexResult<()> {
        self.frames.try_reserve(frames.len())?;
        self.frames.extend(frames);
        Ok(())
    }

    /// Insert `frame` before position `index`, shifting later frames back by one.
    ///
    /// A cursor pointing at or past `index` keeps pointing at the same frame.
    pub fn insert_at(&mut self, frame: Frame, index: usize) -> HexResult<()> {
        if index > self.frames.len() {
            return Err(HexError::validation(format!(
                "insert index {index} is past the end ({})",
                self.frames.len()
            )));
        }
        self.frames.try_reserve(1)?;
        let shift_cursor = !self.frames.is_empty() && self.cursor >= index;
        self.frames.insert(index, frame);
        if shift_cursor {
            self.cursor += 1;
        }
        Ok(())
    }

    /// Drop every frame and reset playback state.
    pub fn clear(&mut self) {
        let released = self.frames.len();
        self.frames = Vec::new();
        self.cursor = 0;
        self.direction = Direction::Forward;
        tracing::debug!(released, "animation context cleared");
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Frame under the cursor.
    pub fn current(&self) -> Option<&Frame> {
        self.frames.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_cursor(&mut self, index: usize) -> HexResult<()> {
        if index >= self.frames.len() {
            return Err(HexError::validation(format!(
                "cursor {index} out of range for {} frames",
                self.frames.len()
            )));
        }
        self.cursor = index;
        Ok(())
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Step the cursor one frame in the playback direction, bouncing off either end.
    pub fn advance(&mut self) -> Option<&Frame> {
        let len = self.frames.len();
        if len < 2 {
            self.cursor = 0;
            return self.current();
        }

        let next = self.cursor as isize + self.direction.step();
        if next < 0 || next >= len as isize {
            self.direction = self.direction.reversed();
            self.cursor = (self.cursor as isize + self.direction.step()) as usize;
        } else {
            self.cursor = next as usize;
        }
        self.current()
    }

    /// Give up ownership of every frame, in order.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/context.rs"]
mod tests;
