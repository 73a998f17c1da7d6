use std::f64::consts::TAU;

use crate::foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH, Rgb8};
use crate::foundation::error::HexResult;
use crate::frame::context::AnimationContext;
use crate::generators::require_frames;
use crate::render::painter::Painter;

/// Phase offsets (radians) of the red, green and blue sine waves.
const SPECTRUM_PHASES: [f64; 3] = [0.0, 2.0, 4.0];

/// Flat fill of the whole canvas.
pub fn draw_solid_color_frame(
    ctx: &mut AnimationContext,
    painter: &mut dyn Painter,
    color: Rgb8,
) -> HexResult<()> {
    painter.begin_frame()?;
    painter.set_color(color);
    painter.rectangle(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
    painter.fill()?;
    ctx.append(painter.end_frame()?)
}

/// Color at step `index` of an `steps`-long hue cycle.
pub fn spectrum_color(index: usize, steps: usize) -> Rgb8 {
    let progress = index as f64 / steps as f64;
    let channel = |phase: f64| ((progress * TAU + phase).sin() * 127.5 + 127.5) as u8;
    Rgb8::new(
        channel(SPECTRUM_PHASES[0]),
        channel(SPECTRUM_PHASES[1]),
        channel(SPECTRUM_PHASES[2]),
    )
}

/// One solid frame per step of a smooth hue cycle.
#[tracing::instrument(skip(ctx, painter))]
pub fn make_color_spectrum(
    ctx: &mut AnimationContext,
    painter: &mut dyn Painter,
    num_frames: usize,
) -> HexResult<()> {
    require_frames("color spectrum", num_frames, 1)?;
    for i in 0..num_frames {
        draw_solid_color_frame(ctx, painter, spectrum_color(i, num_frames))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/generators/solid.rs"]
mod tests;
