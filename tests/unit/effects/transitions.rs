use super::*;
use crate::foundation::core::Argb8;

fn solid(px: Argb8) -> Frame {
    Frame::solid(px).unwrap()
}

#[test]
fn blend_truncates_instead_of_rounding() {
    // 0.5 * 255 + 0.5 * 0 = 127.5
    assert_eq!(blend_channel(0, 255, 0.5), 127);
    // 1/3 * 10 + 2/3 * 0 = 3.33
    assert_eq!(blend_channel(0, 10, 1.0 / 3.0), 3);
    assert_eq!(blend_channel(200, 100, 1.0), 100);
    assert_eq!(blend_channel(200, 100, 0.0), 200);
}

#[test]
fn fps_frames_ending_on_target() {
    let a = solid(Argb8::new(0, 0, 100, 255));
    let b = solid(Argb8::new(255, 200, 0, 7));
    for fps in [1u32, 2, 5, 7, 30] {
        let mut out = AnimationContext::new();
        interpolate_frames(&a, &b, fps, &mut out).unwrap();
        assert_eq!(out.len(), fps as usize);
        assert_eq!(out.last(), Some(&b));
    }
}

#[test]
fn source_frame_is_not_emitted() {
    let a = solid(Argb8::new(255, 0, 0, 0));
    let b = solid(Argb8::new(255, 250, 250, 250));
    let mut out = AnimationContext::new();
    interpolate_frames(&a, &b, 5, &mut out).unwrap();
    assert_eq!(out.get(0).unwrap().pixel(0, 0), Some(Argb8::new(255, 50, 50, 50)));
}

#[test]
fn channels_move_monotonically() {
    let a = solid(Argb8::new(10, 240, 3, 99));
    let b = solid(Argb8::new(250, 17, 200, 99));
    let mut out = AnimationContext::new();
    interpolate_frames(&a, &b, 9, &mut out).unwrap();
    let px: Vec<Argb8> = out.frames().iter().map(|f| f.pixel(3, 3).unwrap()).collect();
    for w in px.windows(2) {
        assert!(w[0].a <= w[1].a);
        assert!(w[0].r >= w[1].r);
        assert!(w[0].g <= w[1].g);
    }
}

#[test]
fn alpha_is_interpolated_like_color() {
    let a = solid(Argb8::new(0, 0, 0, 0));
    let b = solid(Argb8::new(200, 0, 0, 0));
    let mut out = AnimationContext::new();
    interpolate_frames(&a, &b, 4, &mut out).unwrap();
    let alphas: Vec<u8> = out.frames().iter().map(|f| f.pixel(0, 0).unwrap().a).collect();
    assert_eq!(alphas, vec![50, 100, 150, 200]);
}

#[test]
fn zero_fps_is_rejected() {
    let a = solid(Argb8::default());
    let mut out = AnimationContext::new();
    let err = interpolate_frames(&a, &a, 0, &mut out).unwrap_err();
    assert!(matches!(err, HexError::Validation(_)));
    assert!(out.is_empty());
}

#[test]
fn contexts_fade_between_current_frames() {
    let mut current = AnimationContext::new();
    current.append(solid(Argb8::opaque(0, 0, 0))).unwrap();
    current.append(solid(Argb8::opaque(100, 0, 0))).unwrap();
    current.set_cursor(1).unwrap();

    let mut incoming = AnimationContext::new();
    incoming.append(solid(Argb8::opaque(0, 100, 0))).unwrap();

    let mut transition = AnimationContext::new();
    interpolate_contexts(&current, &incoming, &mut transition, 2).unwrap();
    assert_eq!(transition.len(), 2);
    assert_eq!(
        transition.get(0).unwrap().pixel(0, 0),
        Some(Argb8::opaque(50, 50, 0))
    );
    assert_eq!(transition.last(), incoming.current());
}

#[test]
fn empty_context_cannot_be_faded() {
    let empty = AnimationContext::new();
    let mut full = AnimationContext::new();
    full.append(solid(Argb8::default())).unwrap();
    let mut transition = AnimationContext::new();
    assert!(interpolate_contexts(&empty, &full, &mut transition, 3).is_err());
    assert!(interpolate_contexts(&full, &empty, &mut transition, 3).is_err());
    assert!(transition.is_empty());
}
