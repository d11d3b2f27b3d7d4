use crate::{
    animation::progress::{Direction, Progress, StepResult},
    foundation::consts::ROWS,
    render::surface::{Paint, Surface},
    widget::geometry::draw_row,
};

/// Result of advancing the current row of a [`RowChain`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChainStep {
    /// The current row is still animating.
    Continuing,
    /// `row` finished its step; the chain has already moved on (or turned around).
    RowFinished {
        /// Index of the row that finished.
        row: usize,
        /// Scale that row settled on.
        final_scale: f64,
    },
}

/// Fixed sequence of [`ROWS`] rows walked forward then backward, one row at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct RowChain {
    rows: [Progress; ROWS],
    current: usize,
    traversal: Direction,
}

impl Default for RowChain {
    fn default() -> Self {
        Self::new()
    }
}

impl RowChain {
    /// All rows idle, current row 0, walking forward.
    pub fn new() -> Self {
        Self {
            rows: [Progress::new(); ROWS],
            current: 0,
            traversal: Direction::Forward,
        }
    }

    /// Per-row progress in index order.
    pub fn rows(&self) -> &[Progress] {
        &self.rows
    }

    /// Index of the row that receives ticks.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Direction the chain moves in once the current row finishes.
    pub fn traversal(&self) -> Direction {
        self.traversal
    }

    /// Draw every row in index order.
    pub fn render(&self, surface: &mut dyn Surface, paint: &mut Paint) {
        for (slot, row) in self.rows.iter().enumerate() {
            draw_row(surface, paint, slot, row.scale());
        }
    }

    /// Advance the current row by one tick, moving the pointer when it finishes.
    pub fn advance_current(&mut self) -> ChainStep {
        match self.rows[self.current].advance() {
            StepResult::Continuing => ChainStep::Continuing,
            StepResult::RowFinished { final_scale } => {
                let row = self.current;
                self.move_pointer();
                tracing::debug!(
                    row,
                    final_scale,
                    next = self.current,
                    traversal = ?self.traversal,
                    "row finished"
                );
                ChainStep::RowFinished { row, final_scale }
            }
        }
    }

    /// Start the current row if it is idle.
    pub fn begin_if_idle(&mut self) -> bool {
        self.rows[self.current].begin_if_idle()
    }

    fn neighbor(&self) -> Option<usize> {
        match self.traversal {
            Direction::Forward => (self.current + 1 < ROWS).then_some(self.current + 1),
            Direction::Backward => self.current.checked_sub(1),
        }
    }

    // At either end the pointer stays put and the walk turns around.
    fn move_pointer(&mut self) {
        match self.neighbor() {
            Some(next) => self.current = next,
            None => self.traversal = self.traversal.reversed(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/chain.rs"]
mod tests;
