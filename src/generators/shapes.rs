//! Vector-drawn animations: wedge chart, ellipse and side waves.

use std::f64::consts::PI;

use crate::foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH, HEX_ASPECT, Rgb8};
use crate::foundation::error::{HexError, HexResult};
use crate::frame::context::AnimationContext;
use crate::generators::require_frames;
use crate::render::painter::Painter;

const W: f64 = CANVAS_WIDTH as f64;
const H: f64 = CANVAS_HEIGHT as f64;

const WEDGES: usize = 6;
const WEDGE_SWING: f64 = 1.5 * PI;

const WAVE_BANDS: [Rgb8; 5] = [Rgb8::RED, Rgb8::GREEN, Rgb8::BLUE, Rgb8::YELLOW, Rgb8::MAGENTA];
const WAVE_TILT: f64 = 30.0 * (PI / 180.0);
const WAVE_AMPLITUDE: f64 = 1.0;
const WAVE_BAND_SPACING: f64 = 2.0;
const WAVE_LENGTH_MIN: f64 = -50.0;
const WAVE_LENGTH_MAX: f64 = 50.0;
const WAVE_PHASE: f64 = 1.0;

/// Palette entry for wedge `i`.
pub fn wedge_color(i: usize) -> Rgb8 {
    Rgb8::from_flags(
        i == 0 || i == 2,
        i == 1 || i == 3 || i == 5,
        i == 2 || i == 4,
    )
}

/// Six 60° wedges around the canvas center.
///
/// Each wedge is drawn between a rotation by `rotation` and a rotation back by
/// `-rotation`. Geometry is mapped at fill time, so the two cancel and `rotation` does
/// not change the picture.
pub fn draw_wedge_chart_frame(
    ctx: &mut AnimationContext,
    painter: &mut dyn Painter,
    rotation: f64,
) -> HexResult<()> {
    painter.begin_frame()?;
    painter.paint(Rgb8::BLACK)?;

    painter.translate(W / 2.0, H / 2.0);
    painter.scale(W, H / HEX_ASPECT);

    let slice = 2.0 * PI / WEDGES as f64;
    let radius = W.min(H);
    let mut start = 0.0;
    for i in 0..WEDGES {
        painter.rotate(rotation);
        painter.set_color(wedge_color(i));

        let end = start + slice;
        painter.move_to(0.0, 0.0);
        painter.arc(0.0, 0.0, radius, start, end);
        painter.line_to(0.0, 0.0);

        painter.rotate(-rotation);
        painter.fill()?;
        start = end;
    }

    ctx.append(painter.end_frame()?)
}

/// Solid red ellipse on black, `scale` of the canvas wide, aspect corrected.
pub fn draw_ellipse_frame(
    ctx: &mut AnimationContext,
    painter: &mut dyn Painter,
    scale: f64,
) -> HexResult<()> {
    if !scale.is_finite() {
        return Err(HexError::validation(format!(
            "ellipse scale must be finite, got {scale}"
        )));
    }

    painter.begin_frame()?;
    painter.paint(Rgb8::BLACK)?;
    painter.set_color(Rgb8::RED);
    painter.translate(W / 2.0, H / 2.0);
    painter.scale(scale * W, scale * H / HEX_ASPECT);
    painter.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
    painter.fill()?;

    ctx.append(painter.end_frame()?)
}

/// Five sine-traced color bands, tilted 30°.
pub fn draw_side_wave_frame(
    ctx: &mut AnimationContext,
    painter: &mut dyn Painter,
    wave_length: f64,
    phase: f64,
) -> HexResult<()> {
    let frequency = 0.5 * PI / wave_length;
    if !frequency.is_finite() || !phase.is_finite() {
        return Err(HexError::validation(format!(
            "side wave needs a finite non-zero wavelength and finite phase, got {wave_length} / {phase}"
        )));
    }

    painter.begin_frame()?;
    painter.paint(Rgb8::BLACK)?;
    painter.translate(W / 2.0, H / 2.0);
    painter.rotate(WAVE_TILT);

    for (band, &color) in WAVE_BANDS.iter().enumerate() {
        let offset = band as f64 * WAVE_BAND_SPACING;
        painter.set_color(color);
        painter.move_to(-W / 2.0, offset);
        let mut x = -W / 2.0;
        while x < W / 2.0 {
            painter.line_to(x, offset + WAVE_AMPLITUDE * (frequency * x + phase).sin());
            x += 1.0;
        }
        painter.stroke()?;
    }

    ctx.append(painter.end_frame()?)
}

/// Wedge chart swung out to 1.5π and back; `num_frames / 2` frames each way.
#[tracing::instrument(skip(ctx, painter))]
pub fn make_rotating_wedges(
    ctx: &mut AnimationContext,
    painter: &mut dyn Painter,
    num_frames: usize,
) -> HexResult<()> {
    require_frames("rotating wedges", num_frames, 2)?;
    let half = num_frames / 2;
    let delta = WEDGE_SWING / half as f64;

    for i in 0..half {
        draw_wedge_chart_frame(ctx, painter, i as f64 * delta)?;
    }
    for i in 0..half {
        draw_wedge_chart_frame(ctx, painter, WEDGE_SWING - i as f64 * delta)?;
    }
    tracing::trace!(frames = 2 * half, "rotating wedges rendered");
    Ok(())
}

/// Ellipse grown from 0.1 to 1.0 and shrunk back; `num_frames / 2` frames each way.
#[tracing::instrument(skip(ctx, painter))]
pub fn make_growing_ellipse(
    ctx: &mut AnimationContext,
    painter: &mut dyn Painter,
    num_frames: usize,
) -> HexResult<()> {
    require_frames("growing ellipse", num_frames, 2)?;
    let half = num_frames / 2;

    for i in 0..half {
        let scale = 0.1 + (0.9 * i as f64) / half as f64;
        draw_ellipse_frame(ctx, painter, scale)?;
    }
    for i in 0..half {
        let scale = 1.0 - (0.9 * i as f64) / half as f64;
        draw_ellipse_frame(ctx, painter, scale)?;
    }
    tracing::trace!(frames = 2 * half, "growing ellipse rendered");
    Ok(())
}

/// Wavelength swept linearly from -50 to 50 over `num_frames` frames.
///
/// The count must be even: an odd count puts a frame exactly on wavelength zero.
#[tracing::instrument(skip(ctx, painter))]
pub fn make_side_waves(
    ctx: &mut AnimationContext,
    painter: &mut dyn Painter,
    num_frames: usize,
) -> HexResult<()> {
    require_frames("side waves", num_frames, 2)?;
    if !num_frames.is_multiple_of(2) {
        return Err(HexError::validation(format!(
            "side waves need an even frame count, got {num_frames}"
        )));
    }

    let span = WAVE_LENGTH_MAX - WAVE_LENGTH_MIN;
    for i in 0..num_frames {
        let wave_length = WAVE_LENGTH_MIN + (span * i as f64) / (num_frames - 1) as f64;
        draw_side_wave_frame(ctx, painter, wave_length, WAVE_PHASE)?;
    }
    tracing::trace!(frames = num_frames, "side waves rendered");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/generators/shapes.rs"]
mod tests;
