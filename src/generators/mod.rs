pub(crate) mod random;
pub(crate) mod shapes;
pub(crate) mod solid;

use crate::config::PlaybackConfig;
use crate::foundation::error::{HexError, HexResult};
use crate::foundation::math::SplitMix64;
use crate::frame::context::AnimationContext;
use crate::render::painter::Painter;

/// Reject sequence lengths a generator cannot divide by.
pub(crate) fn require_frames(what: &str, num_frames: usize, min: usize) -> HexResult<()> {
    if num_frames < min {
        return Err(HexError::validation(format!(
            "{what} needs at least {min} frames, got {num_frames}"
        )));
    }
    Ok(())
}

/// The built-in animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    Wedges,
    Ellipse,
    Waves,
    Spectrum,
    Random,
}

impl AnimationKind {
    pub const ALL: [Self; 5] = [
        Self::Wedges,
        Self::Ellipse,
        Self::Waves,
        Self::Spectrum,
        Self::Random,
    ];

    /// Render the whole animation into `ctx`, sized by `cfg`.
    pub fn render_into(
        self,
        ctx: &mut AnimationContext,
        painter: &mut dyn Painter,
        cfg: &PlaybackConfig,
    ) -> HexResult<()> {
        match self {
            Self::Wedges => shapes::make_rotating_wedges(ctx, painter, cfg.wedge_frames),
            Self::Ellipse => shapes::make_growing_ellipse(ctx, painter, cfg.ellipse_frames),
            Self::Waves => shapes::make_side_waves(ctx, painter, cfg.wave_frames),
            Self::Spectrum => solid::make_color_spectrum(ctx, painter, cfg.spectrum_frames),
            Self::Random => {
                let mut rng = cfg
                    .random_seed
                    .map(SplitMix64::new)
                    .unwrap_or_else(SplitMix64::from_time);
                random::make_random_color_sequence(
                    ctx,
                    &mut rng,
                    cfg.random_frames,
                    cfg.transition_frames,
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/catalog.rs"]
mod tests;
