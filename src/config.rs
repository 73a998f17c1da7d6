//! Playback configuration: JSON file, then environment overrides, then validation.

use std::path::Path;

use crate::foundation::error::{HexError, HexResult};
use crate::output::preview::PreviewOpts;

/// Tunables for rendering and previewing animations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Frames shown per second.
    pub fps: u32,
    /// Blended frames inserted when switching animations.
    pub transition_frames: u32,
    pub wedge_frames: usize,
    pub ellipse_frames: usize,
    pub wave_frames: usize,
    pub spectrum_frames: usize,
    pub random_frames: usize,
    /// Fixed seed for the random color animation; clock-seeded when unset.
    pub random_seed: Option<u64>,
    pub preview: PreviewOpts,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            transition_frames: 15,
            wedge_frames: 12,
            ellipse_frames: 30,
            wave_frames: 40,
            spectrum_frames: 120,
            random_frames: 6,
            random_seed: None,
            preview: PreviewOpts::default(),
        }
    }
}

impl PlaybackConfig {
    /// Read a JSON config file, apply environment overrides and validate.
    pub fn from_path(path: impl AsRef<Path>) -> HexResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| HexError::config(format!("read '{}': {e}", path.display())))?;
        let cfg = Self::from_json(&text)?;
        cfg.with_env_overrides().validated()
    }

    /// Parse without touching the environment.
    pub fn from_json(text: &str) -> HexResult<Self> {
        serde_json::from_str(text).map_err(|e| HexError::config(format!("parse config: {e}")))
    }

    /// `HEXGLOW_FPS`, `HEXGLOW_TRANSITION_FRAMES` and `HEXGLOW_SEED` win over file values.
    /// Values that do not parse are ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(fps) = lookup("HEXGLOW_FPS").and_then(|v| v.trim().parse::<u32>().ok()) {
            self.fps = fps;
        }
        if let Some(n) =
            lookup("HEXGLOW_TRANSITION_FRAMES").and_then(|v| v.trim().parse::<u32>().ok())
        {
            self.transition_frames = n;
        }
        if let Some(seed) = lookup("HEXGLOW_SEED").and_then(|v| v.trim().parse::<u64>().ok()) {
            self.random_seed = Some(seed);
        }
        self
    }

    pub fn validate(&self) -> HexResult<()> {
        if self.fps == 0 {
            return Err(HexError::validation("fps must be >= 1"));
        }
        if self.transition_frames == 0 {
            return Err(HexError::validation("transition_frames must be >= 1"));
        }
        for (name, n, min) in [
            ("wedge_frames", self.wedge_frames, 2),
            ("ellipse_frames", self.ellipse_frames, 2),
            ("wave_frames", self.wave_frames, 2),
            ("spectrum_frames", self.spectrum_frames, 1),
            ("random_frames", self.random_frames, 2),
        ] {
            if n < min {
                return Err(HexError::validation(format!(
                    "{name} must be >= {min}, got {n}"
                )));
            }
        }
        if !self.wave_frames.is_multiple_of(2) {
            return Err(HexError::validation(format!(
                "wave_frames must be even, got {}",
                self.wave_frames
            )));
        }
        Ok(())
    }

    pub fn validated(self) -> HexResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Time each frame stays on screen.
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
