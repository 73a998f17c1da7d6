use crate::foundation::error::{HexError, HexResult};
use crate::frame::buffer::{Frame, alloc_frame_bytes};
use crate::frame::context::AnimationContext;

pub(crate) fn validate_fps(fps: u32) -> HexResult<()> {
    if fps == 0 {
        return Err(HexError::validation("transition fps must be >= 1"));
    }
    Ok(())
}

/// `weight * to + (1 - weight) * from`, truncated toward zero.
pub fn blend_channel(from: u8, to: u8, weight: f64) -> u8 {
    (weight * f64::from(to) + (1.0 - weight) * f64::from(from)) as u8
}

/// Blend every byte (all four channels, alpha included) of two frames.
pub fn blend_frames(from: &Frame, to: &Frame, weight: f64) -> HexResult<Frame> {
    let mut data = alloc_frame_bytes()?;
    for ((d, a), b) in data
        .chunks_exact_mut(4)
        .zip(from.as_bgra().chunks_exact(4))
        .zip(to.as_bgra().chunks_exact(4))
    {
        for i in 0..4 {
            d[i] = blend_channel(a[i], b[i], weight);
        }
    }
    Frame::from_bgra(data)
}

/// Append `fps` frames fading from `from` to `to`, with weights `1/fps ..= 1`.
///
/// The last appended frame equals `to`; `from` itself is not repeated. Nothing is
/// appended unless all `fps` frames could be built.
#[tracing::instrument(skip(from, to, target))]
pub fn interpolate_frames(
    from: &Frame,
    to: &Frame,
    fps: u32,
    target: &mut AnimationContext,
) -> HexResult<()> {
    validate_fps(fps)?;
    let mut frames = Vec::new();
    frames.try_reserve_exact(fps as usize)?;
    for i in 1..=fps {
        let weight = f64::from(i) / f64::from(fps);
        frames.push(blend_frames(from, to, weight)?);
    }
    target.extend(frames)
}

/// Fade from the current frame of `current` to the current frame of `incoming`,
/// appending `fps` frames to `transition`.
pub fn interpolate_contexts(
    current: &AnimationContext,
    incoming: &AnimationContext,
    transition: &mut AnimationContext,
    fps: u32,
) -> HexResult<()> {
    let from = current
        .current()
        .ok_or_else(|| HexError::validation("current animation has no frame to fade from"))?;
    let to = incoming
        .current()
        .ok_or_else(|| HexError::validation("incoming animation has no frame to fade to"))?;
    interpolate_frames(from, to, fps, transition)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
