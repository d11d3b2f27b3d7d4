//! Linesquare is a tap-driven widget: five rows, each a vertical line that splits, rotates and
//! blossoms into squares, one row per tap.
//!
//! The widget state is plain data and advances one clock tick at a time:
//!
//! - Mount a [`Scene`] on a [`Canvas`]
//! - Feed it taps and ticks, either by hand, from a [`TapScript`] via [`Playback`], or from a
//!   channel via [`run_event_loop`]
//! - Draw it onto any [`Surface`], or rasterize it with [`CpuBackend`] and stream frames into a
//!   [`FrameSink`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod encode;
mod foundation;
mod render;
mod session;
mod widget;

pub use crate::foundation::consts;
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Cap, Fps, FrameIndex, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{LinesquareError, LinesquareResult};

pub use crate::animation::clock::{AnimationClock, IntervalTimer, LoopEvent};
pub use crate::animation::progress::{Direction, Progress, StepResult};
pub use crate::animation::scale::divide_scale;

pub use crate::widget::chain::{ChainStep, RowChain};
pub use crate::widget::geometry::{RowLayout, row_layout};
pub use crate::widget::scene::{Scene, TickOutcome};

pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CpuBackend;
pub use crate::render::pipeline::{record_scene, render_frame};
pub use crate::render::surface::{DisplayList, DrawOp, Paint, RecordingSurface, Surface};

pub use crate::encode::ffmpeg::{EncodeConfig, FfmpegEncoder, is_ffmpeg_on_path};
pub use crate::encode::png::{ensure_parent_dir, write_png};
pub use crate::encode::sink::{FfmpegSink, FrameSink, InMemorySink, PngSequenceSink, SinkConfig};

pub use crate::session::live::{LiveStats, run_event_loop, spawn_line_taps};
pub use crate::session::player::{Playback, PlaybackStats, play, render_frame_at};
pub use crate::session::script::TapScript;
