use super::*;
use crate::foundation::core::Argb8;

fn render(frame: &Frame, opts: PreviewOpts) -> String {
    let map = PixelMap::standard().unwrap();
    let mut preview = AnsiPreview::new(Vec::new(), opts);
    preview.print_frame(frame, &map).unwrap();
    String::from_utf8(preview.into_inner()).unwrap()
}

#[test]
fn plain_preview_layout() {
    let frame = Frame::solid(Argb8::opaque(0xab, 0xcd, 0xef)).unwrap();
    let text = render(
        &frame,
        PreviewOpts {
            color: false,
            double_spaced: false,
        },
    );
    let body = text.strip_prefix("\x1b[H").unwrap();
    let rows: Vec<&str> = body.lines().collect();
    assert_eq!(rows.len(), CANVAS_HEIGHT);
    // Row 0: cells 3, 5 and 7 are populated.
    let expected = format!(
        "{b}{b}{b}{w}{b}{w}{b}{w}{b}{b}{b}",
        b = "        ",
        w = "01ABCDEF "
    );
    assert_eq!(rows[0], expected);
}

#[test]
fn colored_cells_carry_cube_index_and_reset() {
    let frame = Frame::solid(Argb8::opaque(255, 0, 0)).unwrap();
    let text = render(&frame, PreviewOpts::default());
    assert!(text.contains("\x1b[38;5;196m01FF0000 \x1b[0m"));
    assert_eq!(text.matches("\x1b[38;5;").count(), crate::foundation::core::LED_COUNT);
}

#[test]
fn double_spacing_adds_blank_rows() {
    let frame = Frame::solid(Argb8::default()).unwrap();
    let text = render(
        &frame,
        PreviewOpts {
            color: false,
            double_spaced: true,
        },
    );
    assert_eq!(text.matches('\n').count(), 2 * CANVAS_HEIGHT);
}
