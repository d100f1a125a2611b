//! Frame driver
//!
//! A scheduler (requestAnimationFrame in the browser, a fixed clock when
//! headless) calls `run_frame` once per display refresh and only registers
//! the next frame while it returns `true`.

use crate::consts::HEADLESS_FRAME_MS;
use crate::render::{self, Surface};
use crate::sim::{FrameReport, SimState, advance};

/// Clear, advance, render. Returns whether another frame should be scheduled.
pub fn run_frame(state: &mut SimState, surface: &mut impl Surface, timestamp_ms: f64) -> bool {
    render::clear(state, surface);
    advance(state, timestamp_ms);
    render::render(state, surface);
    state.is_running()
}

/// Fixed-interval timestamp source for headless runs
#[derive(Debug, Clone)]
pub struct HeadlessClock {
    pub now_ms: f64,
    pub frame_ms: f64,
}

impl Default for HeadlessClock {
    fn default() -> Self {
        Self {
            now_ms: 0.0,
            frame_ms: HEADLESS_FRAME_MS,
        }
    }
}

impl HeadlessClock {
    /// Current timestamp, then step forward one frame
    pub fn tick(&mut self) -> f64 {
        let now = self.now_ms;
        self.now_ms += self.frame_ms;
        now
    }
}

/// Totals over a headless run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub spawned: usize,
    pub destroyed: usize,
    pub departed: usize,
}

impl RunSummary {
    fn record(&mut self, report: &FrameReport) {
        self.frames += 1;
        self.spawned += usize::from(report.spawned);
        self.destroyed += report.destroyed_hostiles;
        self.departed += report.departed_hostiles;
    }
}

/// Drive the simulation for up to `max_frames` frames or until it stops.
///
/// `script` runs between frames with the upcoming frame index, standing in for
/// the input source.
pub fn run_headless<S, F>(
    state: &mut SimState,
    surface: &mut S,
    clock: &mut HeadlessClock,
    max_frames: u64,
    mut script: F,
) -> RunSummary
where
    S: Surface,
    F: FnMut(u64, &mut SimState),
{
    let mut summary = RunSummary::default();
    while summary.frames < max_frames && state.is_running() {
        script(summary.frames, state);
        if !state.is_running() {
            break;
        }
        render::clear(state, surface);
        let report = advance(state, clock.tick());
        render::render(state, surface);
        summary.record(&report);
    }
    summary
}
