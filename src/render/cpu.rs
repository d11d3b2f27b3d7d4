use crate::{
    foundation::{
        core::{Affine, BezPath, Cap, Point, Rect, Rgba8},
        error::{LinesquareError, LinesquareResult},
    },
    render::{
        backend::FrameRGBA,
        surface::{DisplayList, DrawOp},
    },
};

/// Flattening tolerance for stroke outlines, in pixels.
const STROKE_TOLERANCE: f64 = 0.05;

/// Rasterizes display lists with `vello_cpu`.
#[derive(Default)]
pub struct CpuBackend {
    pixmap: Option<vello_cpu::Pixmap>,
}

impl CpuBackend {
    /// Backend with no cached surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterize `list` into a premultiplied RGBA8 frame.
    pub fn render(&mut self, list: &DisplayList) -> LinesquareResult<FrameRGBA> {
        let width: u16 = list
            .canvas
            .width
            .try_into()
            .map_err(|_| LinesquareError::render("surface width exceeds u16"))?;
        let height: u16 = list
            .canvas
            .height
            .try_into()
            .map_err(|_| LinesquareError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(LinesquareError::render("surface must be non-empty"));
        }

        let mut pixmap = match self.pixmap.take() {
            Some(p) if p.width() == width && p.height() == height => p,
            _ => vello_cpu::Pixmap::new(width, height),
        };
        clear_pixmap(&mut pixmap, [0, 0, 0, 0]);

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        for op in &list.ops {
            draw_op(&mut ctx, op, f64::from(width), f64::from(height));
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let frame = FrameRGBA {
            width: list.canvas.width,
            height: list.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        };
        self.pixmap = Some(pixmap);
        Ok(frame)
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp, canvas_w: f64, canvas_h: f64) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match op {
        DrawOp::Clear { color } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, canvas_w, canvas_h));
        }
        DrawOp::FillRect {
            rect,
            transform,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_rect(&rect_to_cpu(rect.abs()));
        }
        DrawOp::Line {
            from,
            to,
            transform,
            width,
            cap,
            color,
        } => {
            let outline = stroke_outline(*from, *to, *width, *cap);
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&bezpath_to_cpu(&outline));
        }
    }
}

/// Fillable outline of a stroked segment, caps included.
pub(crate) fn stroke_outline(from: Point, to: Point, width: f64, cap: Cap) -> BezPath {
    let style = kurbo::Stroke::new(width).with_caps(cap);
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    kurbo::stroke(
        path.iter(),
        &style,
        &kurbo::StrokeOpts::default(),
        STROKE_TOLERANCE,
    )
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
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
