//! hexglow renders small decorative animations and plays them on a 54-LED hex matrix.
//!
//! The matrix is modelled as an 11x12 canvas where only some cells carry an LED.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: a generator draws one [`Frame`] through a [`Painter`] and appends it to
//!    an [`AnimationContext`]; sequence helpers build whole animations.
//! 2. **Transition**: [`interpolate_frames`] / [`interpolate_contexts`] append linear fades
//!    between two frames.
//! 3. **Output**: [`project_frame`] maps a frame through the [`PixelMap`] into device words
//!    for a [`LedSink`]; [`AnsiPreview`] prints the same words to a terminal.
//!
//! Everything is single-threaded and synchronous. A context exclusively owns its frames.
#![forbid(unsafe_code)]

mod color;
mod effects;
mod foundation;
mod frame;
mod generators;
mod geometry;
mod output;
mod render;

/// Playback configuration.
pub mod config;

pub use color::encode::{
    ANSI_CUBE_BASE, DEVICE_ALPHA, ansi_cube_index, ansi_cube_index_of_word, device_word,
};
pub use config::PlaybackConfig;
pub use effects::transitions::{
    blend_channel, blend_frames, interpolate_contexts, interpolate_frames,
};
pub use foundation::core::{
    Affine, Argb8, BezPath, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_COUNT, HEX_ASPECT, LED_COUNT,
    Point, Rgb8, Vec2,
};
pub use foundation::error::{HexError, HexResult};
pub use foundation::math::SplitMix64;
pub use frame::buffer::{FRAME_BYTES, Frame};
pub use frame::context::{AnimationContext, Direction};
pub use generators::AnimationKind;
pub use generators::random::{
    ChannelSource, correct_random_color, draw_random_color_frame, make_random_color_sequence,
};
pub use generators::shapes::{
    draw_ellipse_frame, draw_side_wave_frame, draw_wedge_chart_frame, make_growing_ellipse,
    make_rotating_wedges, make_side_waves, wedge_color,
};
pub use generators::solid::{draw_solid_color_frame, make_color_spectrum, spectrum_color};
pub use geometry::lut::{LedIndex, PixelMap, STANDARD_LAYOUT};
pub use output::preview::{AnsiPreview, PreviewOpts};
pub use output::sink::{InMemorySink, LedBuffer, LedSink, project_frame, send_frame};
pub use render::cpu::CpuPainter;
pub use render::painter::Painter;
