use crate::foundation::core::{Affine, BezPath, Point, Rgb8};
use crate::foundation::error::HexResult;
use crate::frame::buffer::Frame;

/// Stateful vector drawing surface for one canvas-sized frame at a time.
///
/// Transforms compose onto the current transform (the newest one applies to user
/// coordinates first). Path geometry is recorded in user space and mapped through the
/// transform in effect when [`fill`](Painter::fill) or [`stroke`](Painter::stroke) runs,
/// which then clears the path.
pub trait Painter {
    /// Start a fresh transparent frame with identity transform, black source, width 2.0.
    fn begin_frame(&mut self) -> HexResult<()>;

    /// Cover the whole surface with `color`, ignoring transform and path.
    fn paint(&mut self, color: Rgb8) -> HexResult<()>;

    fn set_color(&mut self, color: Rgb8);

    fn set_line_width(&mut self, width: f64);

    fn translate(&mut self, tx: f64, ty: f64);

    fn scale(&mut self, sx: f64, sy: f64);

    fn rotate(&mut self, radians: f64);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Circular arc, clockwise in screen space from `start` to `end` (radians).
    /// Joined to the current point with a straight segment if there is one.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn fill(&mut self) -> HexResult<()>;

    fn stroke(&mut self) -> HexResult<()>;

    /// Rasterize everything drawn since [`begin_frame`](Painter::begin_frame).
    fn end_frame(&mut self) -> HexResult<Frame>;
}

const ARC_TOLERANCE: f64 = 1e-3;

/// User-space path plus current transform; the part of painter state every backend shares.
#[derive(Clone, Debug, Default)]
pub(crate) struct PathRecorder {
    pub(crate) transform: Affine,
    path: BezPath,
    current: Option<Point>,
}

impl PathRecorder {
    pub(crate) fn reset(&mut self) {
        self.transform = Affine::IDENTITY;
        self.path = BezPath::new();
        self.current = None;
    }

    pub(crate) fn translate(&mut self, tx: f64, ty: f64) {
        self.transform *= Affine::translate((tx, ty));
    }

    pub(crate) fn scale(&mut self, sx: f64, sy: f64) {
        self.transform *= Affine::scale_non_uniform(sx, sy);
    }

    pub(crate) fn rotate(&mut self, radians: f64) {
        self.transform *= Affine::rotate(radians);
    }

    pub(crate) fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
        self.current = Some(p);
    }

    pub(crate) fn line_to(&mut self, p: Point) {
        match self.current {
            Some(_) => self.path.line_to(p),
            None => self.path.move_to(p),
        }
        self.current = Some(p);
    }

    pub(crate) fn arc(&mut self, center: Point, radius: f64, start: f64, mut end: f64) {
        if start.is_finite() && end.is_finite() && end < start {
            end += ((start - end) / std::f64::consts::TAU).ceil() * std::f64::consts::TAU;
        }
        let at = |angle: f64| center + kurbo::Vec2::from_angle(angle) * radius;

        self.line_to(at(start));
        let arc = kurbo::Arc {
            center,
            radii: kurbo::Vec2::new(radius, radius),
            start_angle: start,
            sweep_angle: end - start,
            x_rotation: 0.0,
        };
        for el in arc.append_iter(ARC_TOLERANCE) {
            self.path.push(el);
        }
        self.current = Some(at(end));
    }

    pub(crate) fn rectangle(&mut self, origin: Point, width: f64, height: f64) {
        self.move_to(origin);
        self.path.line_to((origin.x + width, origin.y));
        self.path.line_to((origin.x + width, origin.y + height));
        self.path.line_to((origin.x, origin.y + height));
        self.path.close_path();
    }

    /// Hand out the recorded path and start a new one.
    pub(crate) fn take_path(&mut self) -> BezPath {
        self.current = None;
        std::mem::take(&mut self.path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
