use crate::foundation::core::{Affine, Canvas, Cap, Point, Rect, Rgba8};

/// Drawing style applied to the next primitive.
///
/// The scene sets colour and stroke width immediately before drawing each row; nothing carries
/// over between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Fill and stroke colour.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Line end style.
    pub cap: Cap,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Rgba8::opaque(0, 0, 0),
            stroke_width: 1.0,
            cap: Cap::Butt,
        }
    }
}

/// The 2D primitives a host drawing surface has to provide.
///
/// Transforms compose like a canvas matrix stack: each call post-multiplies the current matrix,
/// `save` pushes it and `restore` pops it.
pub trait Surface {
    /// Pixel size of the surface.
    fn canvas(&self) -> Canvas;
    /// Fill the whole surface, ignoring the current transform.
    fn clear(&mut self, color: Rgba8);
    /// Push the current transform.
    fn save(&mut self);
    /// Pop the last saved transform. Unbalanced calls are ignored.
    fn restore(&mut self);
    /// Translate the local frame.
    fn translate(&mut self, dx: f64, dy: f64);
    /// Rotate the local frame clockwise (y points down) by `degrees`.
    fn rotate_deg(&mut self, degrees: f64);
    /// Scale the local frame.
    fn scale(&mut self, sx: f64, sy: f64);
    /// Fill a rectangle in local coordinates.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    /// Stroke a line segment in local coordinates.
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);
}

/// A resolved drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the whole canvas.
    Clear {
        /// Fill colour.
        color: Rgba8,
    },
    /// Fill `rect` under `transform`.
    FillRect {
        /// Rectangle in local coordinates.
        rect: Rect,
        /// Local-to-canvas transform.
        transform: Affine,
        /// Fill colour.
        color: Rgba8,
    },
    /// Stroke the segment `from`–`to` under `transform`.
    Line {
        /// Start point in local coordinates.
        from: Point,
        /// End point in local coordinates.
        to: Point,
        /// Local-to-canvas transform.
        transform: Affine,
        /// Stroke width.
        width: f64,
        /// Line end style.
        cap: Cap,
        /// Stroke colour.
        color: Rgba8,
    },
}

/// Ordered draw commands for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayList {
    /// Target size.
    pub canvas: Canvas,
    /// Commands in paint order.
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Filled rectangles with their transforms.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Affine)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect {
                rect, transform, ..
            } => Some((*rect, *transform)),
            _ => None,
        })
    }

    /// Line segments mapped into canvas coordinates.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line {
                from,
                to,
                transform,
                ..
            } => Some((*transform * *from, *transform * *to)),
            _ => None,
        })
    }
}

/// [`Surface`] that records resolved commands into a [`DisplayList`].
#[derive(Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    current: Affine,
    stack: Vec<Affine>,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Empty recording for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            current: Affine::IDENTITY,
            stack: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Current local-to-canvas transform.
    pub fn transform(&self) -> Affine {
        self.current
    }

    /// Stop recording and hand back the commands.
    pub fn finish(self) -> DisplayList {
        if !self.stack.is_empty() {
            tracing::trace!(depth = self.stack.len(), "recording finished with unbalanced save");
        }
        DisplayList {
            canvas: self.canvas,
            ops: self.ops,
        }
    }
}

impl Surface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self, color: Rgba8) {
        self.ops.push(DrawOp::Clear { color });
    }

    fn save(&mut self) {
        self.stack.push(self.current);
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.current = prev;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.current = self.current * Affine::translate((dx, dy));
    }

    fn rotate_deg(&mut self, degrees: f64) {
        self.current = self.current * Affine::rotate(degrees.to_radians());
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.current = self.current * Affine::scale_non_uniform(sx, sy);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        // Empty rects paint nothing.
        if rect.area() == 0.0 {
            return;
        }
        self.ops.push(DrawOp::FillRect {
            rect,
            transform: self.current,
            color: paint.color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            transform: self.current,
            width: paint.stroke_width,
            cap: paint.cap,
            color: paint.color,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
