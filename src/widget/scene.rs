use std::{sync::mpsc::Sender, time::Duration};

use crate::{
    animation::clock::{AnimationClock, LoopEvent},
    foundation::{
        consts::{BACKGROUND, TICK_DELAY},
        core::Canvas,
        error::{LinesquareError, LinesquareResult},
    },
    render::surface::{Paint, Surface},
    widget::chain::{ChainStep, RowChain},
};

/// What a single tick did to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// The clock was not running (or the tick was stale); nothing changed.
    Ignored,
    /// The current row moved.
    Advanced,
    /// `row` finished its step and the clock stopped.
    RowFinished {
        /// Index of the row that finished.
        row: usize,
        /// Scale that row settled on.
        final_scale: f64,
    },
}

impl TickOutcome {
    /// Whether the scene changed and needs a redraw.
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// The mounted widget: a [`RowChain`] plus the [`AnimationClock`] that drives it.
#[derive(Debug)]
pub struct Scene {
    canvas: Canvas,
    chain: RowChain,
    clock: AnimationClock,
}

impl Scene {
    /// Mount the widget on a host surface of size `canvas`; ticks are driven by the caller.
    pub fn create(canvas: Canvas) -> LinesquareResult<Self> {
        Self::with_clock(canvas, AnimationClock::manual(TICK_DELAY))
    }

    /// Mount the widget with a real interval timer posting ticks to `ticks`.
    pub fn create_live(canvas: Canvas, ticks: Sender<LoopEvent>) -> LinesquareResult<Self> {
        Self::create_live_with_delay(canvas, TICK_DELAY, ticks)
    }

    /// [`Self::create_live`] with a custom tick delay.
    pub fn create_live_with_delay(
        canvas: Canvas,
        delay: Duration,
        ticks: Sender<LoopEvent>,
    ) -> LinesquareResult<Self> {
        if delay.is_zero() {
            return Err(LinesquareError::validation("tick delay must be > 0"));
        }
        Self::with_clock(canvas, AnimationClock::interval(delay, ticks))
    }

    fn with_clock(canvas: Canvas, clock: AnimationClock) -> LinesquareResult<Self> {
        canvas.validate()?;
        Ok(Self {
            canvas,
            chain: RowChain::new(),
            clock,
        })
    }

    /// Size of the host surface.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Row state.
    pub fn chain(&self) -> &RowChain {
        &self.chain
    }

    /// Clock state.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Handle a pointer-down. Starts the current row and the clock if the row was idle.
    ///
    /// Returns whether the tap had any effect.
    pub fn handle_tap(&mut self) -> bool {
        if !self.chain.begin_if_idle() {
            tracing::debug!(row = self.chain.current(), "tap ignored, row is animating");
            return false;
        }
        tracing::debug!(row = self.chain.current(), "tap started row");
        self.clock.start();
        true
    }

    /// Advance the current row by one tick; stops the clock once the row finishes.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.clock.is_running() {
            return TickOutcome::Ignored;
        }
        tracing::trace!(row = self.chain.current(), "tick");
        match self.chain.advance_current() {
            ChainStep::Continuing => TickOutcome::Advanced,
            ChainStep::RowFinished { row, final_scale } => {
                self.clock.stop();
                TickOutcome::RowFinished { row, final_scale }
            }
        }
    }

    /// Like [`Self::tick`], but drops ticks scheduled by an earlier clock run.
    pub fn tick_from(&mut self, generation: u64) -> TickOutcome {
        if !self.clock.accepts(generation) {
            tracing::trace!(generation, current = self.clock.generation(), "stale tick");
            return TickOutcome::Ignored;
        }
        self.tick()
    }

    /// Clear to the background and draw every row.
    pub fn render(&self, surface: &mut dyn Surface) {
        let mut paint = Paint::default();
        surface.clear(BACKGROUND);
        self.chain.render(surface, &mut paint);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/scene.rs"]
mod tests;
