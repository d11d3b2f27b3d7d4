use std::{
    io::BufRead,
    sync::mpsc::{Receiver, Sender},
    thread::JoinHandle,
};

use crate::{
    animation::clock::LoopEvent,
    foundation::error::LinesquareResult,
    widget::scene::{Scene, TickOutcome},
};

/// Counters collected by [`run_event_loop`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiveStats {
    /// Redraw requests delivered to the frame callback.
    pub frames: u64,
    /// Taps received, whether or not they started a row.
    pub taps: u64,
    /// Ticks that found the clock stopped or came from an earlier run.
    pub stale_ticks: u64,
    /// Row steps completed.
    pub rows_finished: u64,
    /// Redraws whose callback returned an error.
    pub dropped_frames: u64,
}

/// Drive `scene` from `events` until [`LoopEvent::Quit`] or until every sender is gone.
///
/// All scene mutation happens on the calling thread. `on_frame` runs once up front and then after
/// every event that changed the scene. A failing `on_frame` is logged and the loop carries on.
pub fn run_event_loop<F>(scene: &mut Scene, events: &Receiver<LoopEvent>, mut on_frame: F) -> LiveStats
where
    F: FnMut(&Scene) -> LinesquareResult<()>,
{
    let mut stats = LiveStats::default();
    redraw(scene, &mut on_frame, &mut stats);

    for event in events.iter() {
        let dirty = match event {
            LoopEvent::Quit => break,
            LoopEvent::Tap => {
                stats.taps += 1;
                scene.handle_tap()
            }
            LoopEvent::Tick { generation } => {
                let outcome = scene.tick_from(generation);
                match outcome {
                    TickOutcome::Ignored => stats.stale_ticks += 1,
                    TickOutcome::RowFinished { row, final_scale } => {
                        stats.rows_finished += 1;
                        tracing::info!(row, final_scale, "row finished");
                    }
                    TickOutcome::Advanced => {}
                }
                outcome.needs_redraw()
            }
        };
        if dirty {
            redraw(scene, &mut on_frame, &mut stats);
        }
    }

    tracing::debug!(?stats, "event loop exited");
    stats
}

fn redraw<F>(scene: &Scene, on_frame: &mut F, stats: &mut LiveStats)
where
    F: FnMut(&Scene) -> LinesquareResult<()>,
{
    stats.frames += 1;
    if let Err(err) = on_frame(scene) {
        stats.dropped_frames += 1;
        tracing::warn!(error = %err, "frame callback failed");
    }
}

/// Turn lines from `input` into taps on a background thread.
///
/// A line reading `q` (or end of input) posts [`LoopEvent::Quit`]; any other line is a tap.
pub fn spawn_line_taps<R>(input: R, events: Sender<LoopEvent>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    std::thread::spawn(move || {
        for line in input.lines() {
            let event = match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("q") => LoopEvent::Quit,
                Ok(_) => LoopEvent::Tap,
                Err(err) => {
                    tracing::warn!(error = %err, "tap input failed");
                    break;
                }
            };
            if events.send(event).is_err() || event == LoopEvent::Quit {
                return;
            }
        }
        let _ = events.send(LoopEvent::Quit);
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/live.rs"]
mod tests;
