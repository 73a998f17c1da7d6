use super::*;
use crate::foundation::core::Argb8;
use crate::foundation::error::HexError;
use crate::render::cpu::CpuPainter;

#[test]
fn solid_frame_is_uniform_and_opaque() {
    let mut ctx = AnimationContext::new();
    draw_solid_color_frame(&mut ctx, &mut CpuPainter::new(), Rgb8::new(40, 80, 160)).unwrap();
    let frame = ctx.last().unwrap();
    assert!(frame.pixels().all(|px| px == Argb8::opaque(40, 80, 160)));
}

#[test]
fn spectrum_starts_at_known_values() {
    // sin(0) = 0, sin(2) ~ 0.909, sin(4) ~ -0.757
    assert_eq!(spectrum_color(0, 10), Rgb8::new(127, 243, 31));
}

#[test]
fn spectrum_channels_stay_in_range_and_cycle() {
    let n = 24;
    let colors: Vec<Rgb8> = (0..n).map(|i| spectrum_color(i, n)).collect();
    assert!(colors.iter().any(|c| c.r >= 250));
    assert!(colors.iter().any(|c| c.r <= 5));
    assert_eq!(spectrum_color(0, n), spectrum_color(n, n));
}

#[test]
fn color_spectrum_appends_one_frame_per_step() {
    let mut ctx = AnimationContext::new();
    make_color_spectrum(&mut ctx, &mut CpuPainter::new(), 6).unwrap();
    assert_eq!(ctx.len(), 6);
    for (i, frame) in ctx.frames().iter().enumerate() {
        let c = spectrum_color(i, 6);
        assert_eq!(frame.pixel(4, 4), Some(Argb8::opaque(c.r, c.g, c.b)));
    }
}

#[test]
fn empty_spectrum_is_rejected() {
    let mut ctx = AnimationContext::new();
    let err = make_color_spectrum(&mut ctx, &mut CpuPainter::new(), 0).unwrap_err();
    assert!(matches!(err, HexError::Validation(_)));
}
