use crate::effects::transitions::{interpolate_frames, validate_fps};
use crate::foundation::core::{Argb8, CELL_COUNT};
use crate::foundation::error::{HexError, HexResult};
use crate::foundation::math::SplitMix64;
use crate::frame::buffer::Frame;
use crate::frame::context::AnimationContext;

/// Source of uniformly distributed color channel values.
pub trait ChannelSource {
    fn next_channel(&mut self) -> u8;
}

impl ChannelSource for SplitMix64 {
    fn next_channel(&mut self) -> u8 {
        (self.next_u64() % 256) as u8
    }
}

const BRIGHT: u8 = 127;
const GRAY_SPREAD: u8 = 50;

/// Steer a raw random color away from washed-out pastels and grays.
///
/// 1. All channels above 127: the smallest channel is zeroed.
/// 2. All channels within 50 of each other: the smallest is zeroed, then the largest
///    is set to 255.
///
/// Ties pick red before green before blue.
pub fn correct_random_color(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let mut c = [r, g, b];

    if c.iter().all(|&v| v > BRIGHT) {
        c[min_channel(c)] = 0;
    }

    let near = |a: u8, b: u8| a.abs_diff(b) < GRAY_SPREAD;
    if near(c[0], c[1]) && near(c[0], c[2]) && near(c[1], c[2]) {
        c[min_channel(c)] = 0;
        c[max_channel(c)] = 255;
    }

    (c[0], c[1], c[2])
}

fn min_channel(c: [u8; 3]) -> usize {
    if c[0] <= c[1] && c[0] <= c[2] {
        0
    } else if c[1] <= c[0] && c[1] <= c[2] {
        1
    } else {
        2
    }
}

fn max_channel(c: [u8; 3]) -> usize {
    if c[0] >= c[1] && c[0] >= c[2] {
        0
    } else if c[1] >= c[0] && c[1] >= c[2] {
        1
    } else {
        2
    }
}

/// Fully opaque frame of independently random, corrected pixels.
///
/// Channels are drawn red, green, blue per pixel, pixels in row-major order.
pub fn draw_random_color_frame(
    ctx: &mut AnimationContext,
    source: &mut dyn ChannelSource,
) -> HexResult<()> {
    let pixels = (0..CELL_COUNT).map(|_| {
        let r = source.next_channel();
        let g = source.next_channel();
        let b = source.next_channel();
        let (r, g, b) = correct_random_color(r, g, b);
        Argb8::opaque(r, g, b)
    });
    ctx.append(Frame::from_pixels(pixels)?)
}

/// Random frames joined by `fps`-frame fades.
///
/// Layout: `R0, R0→R1 x fps, R1, R1→R2 x fps, R2, ...`, i.e. each fade is spliced in
/// before the random frame it leads to, so `num_frames + (num_frames - 1) * fps` frames
/// are appended. Fewer than two frames is a no-op.
#[tracing::instrument(skip(ctx, source))]
pub fn make_random_color_sequence(
    ctx: &mut AnimationContext,
    source: &mut dyn ChannelSource,
    num_frames: usize,
    fps: u32,
) -> HexResult<()> {
    validate_fps(fps)?;
    if num_frames < 2 {
        tracing::debug!(num_frames, "random color sequence needs two frames, skipping");
        return Ok(());
    }

    draw_random_color_frame(ctx, source)?;
    for _ in 1..num_frames {
        draw_random_color_frame(ctx, source)?;

        let newest = ctx.len() - 1;
        let (from, to) = match (ctx.get(newest - 1), ctx.get(newest)) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(HexError::validation("random sequence lost its frames")),
        };

        let mut fade = AnimationContext::with_capacity(fps as usize)?;
        interpolate_frames(from, to, fps, &mut fade)?;

        // The newest random frame stays last and seeds the next fade.
        for (k, frame) in fade.into_frames().into_iter().enumerate() {
            ctx.insert_at(frame, newest + k)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/generators/random.rs"]
mod tests;
