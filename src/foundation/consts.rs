//! Fixed widget constants. None of these are configurable at runtime.

use std::time::Duration;

use crate::foundation::core::Rgba8;

/// Number of rows in the chain.
pub const ROWS: usize = 5;
/// Line segments per row.
pub const LINES: usize = 2;
/// Squares each line blossoms into.
pub const SQUARES: usize = 2;
/// Base per-tick scale increment.
pub const STEP_GAP: f64 = 0.05;
/// Scale divisor that selects between the two step rates.
pub const SCALE_DIVISOR: f64 = 0.51;
/// Stroke width is the shorter canvas side divided by this.
pub const STROKE_FACTOR: f64 = 90.0;
/// Line length is the row gap divided by this.
pub const SIZE_FACTOR: f64 = 2.9;
/// Line and square colour (`#311B92`).
pub const FOREGROUND: Rgba8 = Rgba8::opaque(0x31, 0x1B, 0x92);
/// Clear colour (`#BDBDBD`).
pub const BACKGROUND: Rgba8 = Rgba8::opaque(0xBD, 0xBD, 0xBD);
/// Clock delay between ticks.
pub const TICK_DELAY: Duration = Duration::from_millis(20);
/// [`TICK_DELAY`] in milliseconds, the default for tap scripts.
pub const TICK_MS: u32 = 20;
