use super::*;

/// Replays a fixed channel script, then repeats its last value.
struct Scripted {
    values: Vec<u8>,
    at: usize,
}

impl Scripted {
    fn new(values: &[u8]) -> Self {
        Self {
            values: values.to_vec(),
            at: 0,
        }
    }
}

impl ChannelSource for Scripted {
    fn next_channel(&mut self) -> u8 {
        let v = self.values[self.at.min(self.values.len() - 1)];
        self.at += 1;
        v
    }
}

#[test]
fn bright_colors_lose_their_weakest_channel() {
    assert_eq!(correct_random_color(200, 210, 190), (200, 210, 0));
    assert_eq!(correct_random_color(128, 255, 255), (0, 255, 255));
}

#[test]
fn bright_ties_prefer_red_then_green() {
    assert_eq!(correct_random_color(150, 150, 200), (0, 150, 200));
    assert_eq!(correct_random_color(200, 150, 150), (200, 0, 150));
}

#[test]
fn near_grays_are_pushed_to_a_saturated_color() {
    assert_eq!(correct_random_color(100, 110, 120), (0, 110, 255));
    assert_eq!(correct_random_color(10, 10, 10), (0, 255, 10));
    assert_eq!(correct_random_color(0, 0, 0), (255, 0, 0));
}

#[test]
fn both_rules_can_fire() {
    // Rule 1 zeroes blue, rule 2 does not see a gray any more.
    assert_eq!(correct_random_color(140, 150, 130), (140, 150, 0));
    // Rule 1 zeroes red; remaining (0, 130, 135) is not gray either.
    assert_eq!(correct_random_color(128, 130, 135), (0, 130, 135));
}

#[test]
fn saturated_colors_pass_through() {
    assert_eq!(correct_random_color(255, 0, 0), (255, 0, 0));
    assert_eq!(correct_random_color(30, 200, 90), (30, 200, 90));
}

#[test]
fn corrected_colors_are_never_pale_or_gray() {
    let mut rng = SplitMix64::new(42);
    for _ in 0..20_000 {
        let raw = (rng.next_channel(), rng.next_channel(), rng.next_channel());
        let (r, g, b) = correct_random_color(raw.0, raw.1, raw.2);
        assert!(!(r > 127 && g > 127 && b > 127), "{raw:?} -> {:?}", (r, g, b));
        let spread = r.abs_diff(g).max(r.abs_diff(b)).max(g.abs_diff(b));
        assert!(spread >= 50, "{raw:?} -> {:?}", (r, g, b));
    }
}

#[test]
fn random_frame_is_opaque_and_corrected() {
    let mut ctx = AnimationContext::new();
    let mut source = Scripted::new(&[200, 210, 190]);
    // After the script runs out every channel reads 190, a bright gray.
    draw_random_color_frame(&mut ctx, &mut source).unwrap();
    let frame = ctx.last().unwrap();
    assert_eq!(frame.pixel(0, 0), Some(Argb8::opaque(200, 210, 0)));
    assert_eq!(frame.pixel(1, 0), Some(Argb8::opaque(0, 190, 190)));
    assert!(frame.pixels().all(|px| px.a == 255));
}

#[test]
fn random_frames_differ_with_seeded_source() {
    let mut ctx = AnimationContext::new();
    let mut rng = SplitMix64::new(9);
    draw_random_color_frame(&mut ctx, &mut rng).unwrap();
    draw_random_color_frame(&mut ctx, &mut rng).unwrap();
    assert_ne!(ctx.get(0), ctx.get(1));
}

#[test]
fn sequence_length_counts_fades() {
    let mut ctx = AnimationContext::new();
    make_random_color_sequence(&mut ctx, &mut SplitMix64::new(1), 4, 5).unwrap();
    assert_eq!(ctx.len(), 4 + 3 * 5);
}

#[test]
fn fades_sit_between_their_random_frames() {
    let fps = 3;
    let mut ctx = AnimationContext::new();
    make_random_color_sequence(&mut ctx, &mut SplitMix64::new(5), 3, fps).unwrap();
    let stride = fps as usize + 1;
    assert_eq!(ctx.len(), 3 + 2 * fps as usize);

    for seg in 0..2 {
        let from = ctx.get(seg * stride).unwrap();
        let to = ctx.get((seg + 1) * stride).unwrap();
        let mut expected = AnimationContext::new();
        interpolate_frames(from, to, fps, &mut expected).unwrap();
        for k in 0..fps as usize {
            assert_eq!(ctx.get(seg * stride + 1 + k), expected.get(k));
        }
        // Last fade frame equals the random frame that follows it.
        assert_eq!(ctx.get(seg * stride + fps as usize), Some(to));
    }
}

#[test]
fn short_sequences_are_a_no_op() {
    let mut ctx = AnimationContext::new();
    make_random_color_sequence(&mut ctx, &mut SplitMix64::new(1), 1, 5).unwrap();
    make_random_color_sequence(&mut ctx, &mut SplitMix64::new(1), 0, 5).unwrap();
    assert!(ctx.is_empty());
}

#[test]
fn zero_fps_is_rejected() {
    let mut ctx = AnimationContext::new();
    let err = make_random_color_sequence(&mut ctx, &mut SplitMix64::new(1), 3, 0).unwrap_err();
    assert!(matches!(err, HexError::Validation(_)));
    assert!(ctx.is_empty());
}
