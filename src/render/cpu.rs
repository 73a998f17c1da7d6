use crate::foundation::core::{Affine, BezPath, CANVAS_HEIGHT, CANVAS_WIDTH, Point, Rgb8};
use crate::foundation::error::{HexError, HexResult};
use crate::frame::buffer::{Frame, alloc_frame_bytes};
use crate::render::painter::{Painter, PathRecorder};

const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// [`Painter`] backed by the `vello_cpu` rasterizer.
pub struct CpuPainter {
    ctx: vello_cpu::RenderContext,
    recorder: PathRecorder,
    color: Rgb8,
    line_width: f64,
}

impl CpuPainter {
    pub fn new() -> Self {
        Self {
            ctx: new_render_context(),
            recorder: PathRecorder::default(),
            color: Rgb8::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    fn take_drawable_path(&mut self) -> HexResult<Option<vello_cpu::kurbo::BezPath>> {
        let path = self.recorder.take_path();
        if path.elements().is_empty() {
            return Ok(None);
        }
        if !path.is_finite() || !self.recorder.transform.is_finite() {
            return Err(HexError::render("path or transform is not finite"));
        }
        self.ctx.set_transform(affine_to_cpu(self.recorder.transform));
        self.ctx.set_paint(color_to_cpu(self.color));
        Ok(Some(bezpath_to_cpu(&path)))
    }
}

impl Default for CpuPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter for CpuPainter {
    fn begin_frame(&mut self) -> HexResult<()> {
        self.ctx = new_render_context();
        self.recorder.reset();
        self.color = Rgb8::BLACK;
        self.line_width = DEFAULT_LINE_WIDTH;
        Ok(())
    }

    fn paint(&mut self, color: Rgb8) -> HexResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            CANVAS_WIDTH as f64,
            CANVAS_HEIGHT as f64,
        ));
        Ok(())
    }

    fn set_color(&mut self, color: Rgb8) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.recorder.translate(tx, ty);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.recorder.scale(sx, sy);
    }

    fn rotate(&mut self, radians: f64) {
        self.recorder.rotate(radians);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.recorder.move_to(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.recorder.line_to(Point::new(x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.recorder.arc(Point::new(cx, cy), radius, start, end);
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.recorder.rectangle(Point::new(x, y), width, height);
    }

    fn fill(&mut self) -> HexResult<()> {
        if let Some(path) = self.take_drawable_path()? {
            self.ctx.fill_path(&path);
        }
        Ok(())
    }

    fn stroke(&mut self) -> HexResult<()> {
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(HexError::render(format!(
                "invalid line width {}",
                self.line_width
            )));
        }
        if let Some(path) = self.take_drawable_path()? {
            self.ctx
                .set_stroke(vello_cpu::kurbo::Stroke::new(self.line_width));
            self.ctx.stroke_path(&path);
        }
        Ok(())
    }

    fn end_frame(&mut self) -> HexResult<Frame> {
        let mut pixmap = vello_cpu::Pixmap::new(CANVAS_WIDTH as u16, CANVAS_HEIGHT as u16);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut data = alloc_frame_bytes()?;
        let src = pixmap.data_as_u8_slice();
        if src.len() != data.len() {
            return Err(HexError::render(format!(
                "pixmap readback is {} bytes, expected {}",
                src.len(),
                data.len()
            )));
        }
        // Premultiplied RGBA in, premultiplied BGRA out.
        for (dst, px) in data.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            dst.copy_from_slice(&[px[2], px[1], px[0], px[3]]);
        }

        self.ctx = new_render_context();
        self.recorder.reset();
        Frame::from_bgra(data)
    }
}

fn new_render_context() -> vello_cpu::RenderContext {
    vello_cpu::RenderContext::new(CANVAS_WIDTH as u16, CANVAS_HEIGHT as u16)
}

fn color_to_cpu(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
