use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    time::Duration,
};

/// Events consumed by the single thread that owns a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopEvent {
    /// Pointer-down on the widget.
    Tap,
    /// Clock tick posted by an [`IntervalTimer`] for the given clock run.
    Tick {
        /// Clock run that scheduled this tick.
        generation: u64,
    },
    /// Leave the event loop.
    Quit,
}

/// Repeating timer that posts [`LoopEvent::Tick`] at a fixed delay until cancelled.
///
/// The timer thread only sends messages; all state changes happen on the receiving side.
#[derive(Debug)]
pub struct IntervalTimer {
    stop: Arc<AtomicBool>,
}

impl IntervalTimer {
    /// Spawn the timer thread. It exits once cancelled or once the receiver is gone.
    pub fn spawn(delay: Duration, generation: u64, ticks: Sender<LoopEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        std::thread::spawn(move || {
            loop {
                std::thread::sleep(delay);
                if flag.load(Ordering::Acquire) {
                    break;
                }
                if ticks.send(LoopEvent::Tick { generation }).is_err() {
                    break;
                }
            }
            tracing::trace!(generation, "interval timer exited");
        });
        Self { stop }
    }

    /// Ask the timer thread to stop. Idempotent and non-blocking.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Whether [`Self::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug)]
enum ClockDriver {
    /// The owner calls `Scene::tick` itself (deterministic playback, tests).
    Manual,
    Interval {
        ticks: Sender<LoopEvent>,
        timer: Option<IntervalTimer>,
    },
}

/// Start/stop state of the redraw loop.
///
/// Every start bumps the generation so ticks scheduled by an earlier run can be told apart from
/// the current one.
#[derive(Debug)]
pub struct AnimationClock {
    delay: Duration,
    running: bool,
    generation: u64,
    driver: ClockDriver,
}

impl AnimationClock {
    /// Clock whose ticks are driven by the owner.
    pub fn manual(delay: Duration) -> Self {
        Self {
            delay,
            running: false,
            generation: 0,
            driver: ClockDriver::Manual,
        }
    }

    /// Clock that spawns an [`IntervalTimer`] posting to `ticks` while running.
    pub fn interval(delay: Duration, ticks: Sender<LoopEvent>) -> Self {
        Self {
            delay,
            running: false,
            generation: 0,
            driver: ClockDriver::Interval { ticks, timer: None },
        }
    }

    /// Tick delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether ticks are currently accepted.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run counter, incremented on every successful [`Self::start`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a tick from `generation` belongs to the current run.
    pub fn accepts(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }

    /// Start ticking. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.generation += 1;
        if let ClockDriver::Interval { ticks, timer } = &mut self.driver {
            *timer = Some(IntervalTimer::spawn(
                self.delay,
                self.generation,
                ticks.clone(),
            ));
        }
        tracing::debug!(generation = self.generation, "clock started");
        true
    }

    /// Stop ticking. Idempotent.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let ClockDriver::Interval { timer, .. } = &mut self.driver
            && let Some(timer) = timer.take()
        {
            timer.cancel();
        }
        tracing::debug!(generation = self.generation, "clock stopped");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
