//! Maps a row's scale to lines and squares.
//!
//! A row's scale splits into a line phase (first half) and a square phase (second half). During
//! the line phase the two lines swing out from vertical in opposite directions; during the square
//! phase each line grows two mirrored squares, one after the other.

use crate::{
    animation::scale::divide_scale,
    foundation::{
        consts::{FOREGROUND, LINES, ROWS, SIZE_FACTOR, SQUARES, STROKE_FACTOR},
        core::{Canvas, Cap, Point, Rect},
    },
    render::surface::{Paint, Surface},
};

/// Placement of one row on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    /// Centre of the row.
    pub origin: Point,
    /// Line length and square side.
    pub size: f64,
    /// Stroke width of the lines.
    pub stroke_width: f64,
}

/// Rows sit on evenly spaced slots with one slot of margin above and below.
pub fn row_layout(canvas: Canvas, slot: usize) -> RowLayout {
    let gap = canvas.h() / (ROWS + 1) as f64;
    RowLayout {
        origin: Point::new(canvas.w() / 2.0, gap * (slot + 1) as f64),
        size: gap / SIZE_FACTOR,
        stroke_width: canvas.min_side() / STROKE_FACTOR,
    }
}

/// `+1` for the first element of a pair, `-1` for the second.
fn mirror(i: usize) -> f64 {
    1.0 - 2.0 * i as f64
}

pub(crate) fn draw_row(surface: &mut dyn Surface, paint: &mut Paint, slot: usize, scale: f64) {
    let layout = row_layout(surface.canvas(), slot);
    let line_phase = divide_scale(scale, 0, 2);
    let square_phase = divide_scale(scale, 1, 2);

    paint.color = FOREGROUND;
    paint.stroke_width = layout.stroke_width;
    paint.cap = Cap::Round;

    surface.save();
    surface.translate(layout.origin.x, layout.origin.y);
    draw_lines(surface, paint, line_phase, square_phase, layout.size);
    surface.restore();
}

fn draw_lines(
    surface: &mut dyn Surface,
    paint: &Paint,
    line_phase: f64,
    square_phase: f64,
    size: f64,
) {
    for j in 0..LINES {
        let line_squares = divide_scale(square_phase, j, LINES);
        surface.save();
        surface.rotate_deg(90.0 * mirror(j) * divide_scale(line_phase, j, LINES));
        surface.draw_line(Point::ZERO, Point::new(0.0, -size), paint);
        draw_squares(surface, paint, size, line_squares, j);
        surface.restore();
    }
}

fn draw_squares(surface: &mut dyn Surface, paint: &Paint, size: f64, phase: f64, line: usize) {
    for k in 0..SQUARES {
        surface.save();
        surface.translate(-size + size * line as f64, 0.0);
        surface.scale(1.0, mirror(k));
        surface.fill_rect(
            Rect::new(0.0, 0.0, size, size * divide_scale(phase, k, LINES)),
            paint,
        );
        surface.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/geometry.rs"]
mod tests;
