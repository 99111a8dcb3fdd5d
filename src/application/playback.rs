//! Frame-driven playback timer.
//!
//! The host calls [`Scheduler::advance`] once per frame with the elapsed
//! time; the scheduler answers whether a step is due. Nothing runs on its
//! own thread, so a step can never start while another one is in flight.

use crate::error::{Result, ValidationError};

/// Identifies one play run. A handle from a cancelled run never fires again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaybackHandle(u64);

#[derive(Clone, Copy, Debug)]
struct Run {
    handle: PlaybackHandle,
    interval: f32,
    elapsed: f32,
}

/// Periodic step trigger at a fixed frequency
#[derive(Debug, Default)]
pub struct Scheduler {
    run: Option<Run>,
    issued: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start triggering at `freq` steps per second. If already running, the
    /// current run continues and its handle is returned.
    pub fn start(&mut self, freq: f32) -> Result<PlaybackHandle> {
        let freq = ValidationError::check_frequency(freq)?;
        if let Some(run) = self.run {
            return Ok(run.handle);
        }

        self.issued += 1;
        let handle = PlaybackHandle(self.issued);
        self.run = Some(Run {
            handle,
            interval: 1.0 / freq,
            elapsed: 0.0,
        });
        Ok(handle)
    }

    /// Stop triggering. Returns false if nothing was running.
    pub fn cancel(&mut self) -> bool {
        self.run.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Is `handle` the run that is currently active?
    pub fn is_current(&self, handle: PlaybackHandle) -> bool {
        self.run.is_some_and(|run| run.handle == handle)
    }

    /// Seconds between triggers of the active run
    pub fn interval(&self) -> Option<f32> {
        self.run.map(|run| run.interval)
    }

    /// Feed elapsed frame time. Returns true when a step is due.
    ///
    /// The part of a frame past the interval carries into the next one, so
    /// the long-run rate holds when frames do not divide the interval.
    /// Triggers still coalesce: however long the frame was, at most one step
    /// is reported and a backlog of whole intervals is dropped.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };

        run.elapsed += delta_time.max(0.0);
        if run.elapsed < run.interval {
            return false;
        }

        let rest = run.elapsed - run.interval;
        run.elapsed = if rest < run.interval { rest } else { 0.0 };
        true
    }
}
