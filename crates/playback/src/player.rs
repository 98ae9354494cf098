use algoscope_trace::{Step, Trace};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Auto-advance cadence used until `set_speed` changes it.
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Transport-control state owned by a [`Playback`], read by widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub step_index: usize,
    pub playing: bool,
    pub interval_ms: u64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            step_index: 0,
            playing: false,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

/// Navigation over an immutable step sequence.
///
/// All operations clamp at the trace bounds instead of failing, and none of
/// them ever mutates a step: rendering is a pure read of the current step.
#[derive(Debug, Clone)]
pub struct Playback {
    trace: Arc<Trace>,
    state: PlaybackState,
}

impl Playback {
    pub fn new(trace: Arc<Trace>) -> Self {
        Self {
            trace,
            state: PlaybackState::default(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn trace(&self) -> &Arc<Trace> {
        &self.trace
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.trace.get(self.state.step_index)
    }

    pub fn is_at_end(&self) -> bool {
        self.state.step_index + 1 >= self.trace.len()
    }

    /// Advance one step; a no-op at the last step. Reaching the last step
    /// pauses a running playback.
    pub fn step_forward(&mut self) {
        if !self.is_at_end() {
            self.state.step_index += 1;
        }
        if self.is_at_end() {
            self.state.playing = false;
        }
    }

    /// Go back one step; a no-op at step 0.
    pub fn step_backward(&mut self) {
        self.state.step_index = self.state.step_index.saturating_sub(1);
    }

    /// Jump to an arbitrary step, clamped to the trace bounds.
    pub fn seek(&mut self, index: usize) {
        let last = self.trace.len().saturating_sub(1);
        self.state.step_index = index.min(last);
    }

    pub fn reset(&mut self) {
        self.state.step_index = 0;
        self.state.playing = false;
    }

    /// Start auto-advancing; when already at the end, restart from step 0.
    pub fn play(&mut self) {
        if self.is_at_end() {
            self.state.step_index = 0;
        }
        self.state.playing = true;
    }

    pub fn pause(&mut self) {
        self.state.playing = false;
    }

    /// Change the auto-advance cadence; only future scheduling is affected.
    pub fn set_speed(&mut self, interval_ms: u64) {
        self.state.interval_ms = interval_ms.max(1);
    }

    /// Adopt a freshly generated trace, rewinding to step 0.
    pub fn load(&mut self, trace: Arc<Trace>) {
        debug!(steps = trace.len(), "loading new trace");
        self.trace = trace;
        self.state.step_index = 0;
        self.state.playing = false;
    }
}
