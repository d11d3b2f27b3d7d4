use crate::animation::scale::step_delta;

/// Direction of travel, used both for a row's scale and for the chain traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Towards larger scales / higher row indices.
    Forward,
    /// Towards smaller scales / lower row indices.
    Backward,
}

impl Direction {
    /// `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    fn from_sign(sign: f64) -> Self {
        if sign >= 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Result of advancing one row by a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepResult {
    /// The row is still mid-step (or idle, in which case nothing moved).
    Continuing,
    /// The step completed and the scale snapped to `final_scale`.
    RowFinished {
        /// Scale the row settled on, `0.0` or `1.0`.
        final_scale: f64,
    },
}

/// Per-row animation state.
///
/// A row is idle while `direction` is `None`. Tapping while idle seeds the direction away from
/// the committed scale; ticks then move `scale` until it is more than one unit away from
/// `committed_scale`, at which point it snaps to the next whole step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Progress {
    scale: f64,
    direction: Option<Direction>,
    committed_scale: f64,
}

impl Progress {
    /// A fresh idle row at scale 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current animation position.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Active direction, `None` while at rest.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Last whole step the row settled on.
    pub fn committed_scale(&self) -> f64 {
        self.committed_scale
    }

    /// Whether the row is at rest.
    pub fn is_idle(&self) -> bool {
        self.direction.is_none()
    }

    /// Move the scale by one tick and finalize the step once it crosses the threshold.
    ///
    /// Advancing an idle row leaves it untouched.
    pub fn advance(&mut self) -> StepResult {
        let Some(direction) = self.direction else {
            return StepResult::Continuing;
        };

        self.scale += step_delta(self.scale, direction.sign());
        if (self.scale - self.committed_scale).abs() > 1.0 {
            self.scale = self.committed_scale + direction.sign();
            self.direction = None;
            self.committed_scale = self.scale;
            return StepResult::RowFinished {
                final_scale: self.committed_scale,
            };
        }
        StepResult::Continuing
    }

    /// Start a step away from the committed scale if the row is idle.
    ///
    /// Returns `false` (and changes nothing) while a step is already running.
    pub fn begin_if_idle(&mut self) -> bool {
        if self.direction.is_some() {
            return false;
        }
        self.direction = Some(Direction::from_sign(1.0 - 2.0 * self.committed_scale));
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
