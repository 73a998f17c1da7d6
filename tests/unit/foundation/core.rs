use super::*;

#[test]
fn canvas_constants_agree() {
    assert_eq!(CELL_COUNT, 132);
    assert!(LED_COUNT < CELL_COUNT);
}

#[test]
fn argb_word_packs_channels_in_order() {
    let px = Argb8::new(0x11, 0x22, 0x33, 0x44);
    assert_eq!(px.to_u32(), 0x1122_3344);
    assert_eq!(Argb8::from_u32(0x1122_3344), px);
}

#[test]
fn bgra_layout_is_little_endian_argb() {
    let px = Argb8::new(0xff, 0x10, 0x20, 0x30);
    let bytes = px.to_bgra();
    assert_eq!(bytes, [0x30, 0x20, 0x10, 0xff]);
    assert_eq!(u32::from_le_bytes(bytes), px.to_u32());
    assert_eq!(Argb8::from_bgra(bytes), px);
}

#[test]
fn flag_colors_are_full_or_empty() {
    assert_eq!(Rgb8::from_flags(true, false, true), Rgb8::MAGENTA);
    assert_eq!(Rgb8::from_flags(false, false, false), Rgb8::BLACK);
    assert_eq!(Argb8::from(Rgb8::YELLOW), Argb8::opaque(255, 255, 0));
}
