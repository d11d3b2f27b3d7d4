use crate::{
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::FrameIndex,
        error::{LinesquareError, LinesquareResult},
    },
    render::{backend::FrameRGBA, cpu::CpuBackend, pipeline::render_frame},
    session::script::TapScript,
    widget::scene::{Scene, TickOutcome},
};

/// Counters collected while playing a script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Frames produced.
    pub frames: u64,
    /// Taps that started a row.
    pub taps_accepted: u64,
    /// Taps ignored because the current row was animating.
    pub taps_ignored: u64,
    /// Row steps completed.
    pub rows_finished: u64,
}

/// Deterministic frame-by-frame driver for a [`TapScript`].
///
/// Each frame applies that frame's taps, renders, then ticks the clock once.
#[derive(Debug)]
pub struct Playback {
    scene: Scene,
    taps: Vec<u64>,
    next_tap: usize,
    frame: u64,
    duration: u64,
    stats: PlaybackStats,
}

impl Playback {
    /// Mount a fresh scene for `script`.
    pub fn new(script: &TapScript) -> LinesquareResult<Self> {
        script.validate()?;
        let mut taps = script.taps.clone();
        taps.sort_unstable();
        Ok(Self {
            scene: Scene::create(script.canvas)?,
            taps,
            next_tap: 0,
            frame: 0,
            duration: script.duration,
            stats: PlaybackStats::default(),
        })
    }

    /// The scene as it stands before the next frame.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Counters so far.
    pub fn stats(&self) -> PlaybackStats {
        self.stats
    }

    /// Index of the next frame, or `None` once the script is exhausted.
    pub fn next_index(&self) -> Option<FrameIndex> {
        (self.frame < self.duration).then_some(FrameIndex(self.frame))
    }

    /// Render the next frame.
    pub fn next_frame(
        &mut self,
        backend: &mut CpuBackend,
    ) -> LinesquareResult<Option<(FrameIndex, FrameRGBA)>> {
        let Some(idx) = self.next_index() else {
            return Ok(None);
        };
        self.apply_taps();
        let frame = render_frame(&self.scene, backend)?;
        self.finish_frame();
        Ok(Some((idx, frame)))
    }

    /// Play the next frame without rasterizing it.
    pub fn skip_frame(&mut self) -> Option<FrameIndex> {
        let idx = self.next_index()?;
        self.apply_taps();
        self.finish_frame();
        Some(idx)
    }

    fn apply_taps(&mut self) {
        while self.next_tap < self.taps.len() && self.taps[self.next_tap] == self.frame {
            if self.scene.handle_tap() {
                self.stats.taps_accepted += 1;
            } else {
                self.stats.taps_ignored += 1;
            }
            self.next_tap += 1;
        }
    }

    fn finish_frame(&mut self) {
        if let TickOutcome::RowFinished { .. } = self.scene.tick() {
            self.stats.rows_finished += 1;
        }
        self.stats.frames += 1;
        self.frame += 1;
    }
}

/// Play the whole script into `sink`.
#[tracing::instrument(skip(script, sink), fields(duration = script.duration, taps = script.taps.len()))]
pub fn play(script: &TapScript, sink: &mut dyn FrameSink) -> LinesquareResult<PlaybackStats> {
    let mut playback = Playback::new(script)?;
    let mut backend = CpuBackend::new();

    sink.begin(SinkConfig {
        width: script.canvas.width,
        height: script.canvas.height,
        fps: script.fps()?,
    })?;
    while let Some((idx, frame)) = playback.next_frame(&mut backend)? {
        sink.push_frame(idx, &frame)?;
    }
    sink.end()?;

    let stats = playback.stats();
    tracing::info!(
        frames = stats.frames,
        rows_finished = stats.rows_finished,
        taps_ignored = stats.taps_ignored,
        "playback finished"
    );
    Ok(stats)
}

/// Render the single frame `idx` of the script.
pub fn render_frame_at(script: &TapScript, idx: FrameIndex) -> LinesquareResult<FrameRGBA> {
    let mut playback = Playback::new(script)?;
    while let Some(next) = playback.next_index()
        && next < idx
    {
        playback.skip_frame();
    }

    let mut backend = CpuBackend::new();
    match playback.next_frame(&mut backend)? {
        Some((_, frame)) => Ok(frame),
        None => Err(LinesquareError::validation(format!(
            "frame {} is outside duration {}",
            idx.0, script.duration
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
