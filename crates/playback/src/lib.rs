//! Time-travel playback over a fixed [`Trace`](algoscope_trace::Trace).
//!
//! [`Playback`] is the synchronous state machine: step forward/backward,
//! jump, reset, play/pause, with every out-of-range navigation clamped to a
//! no-op. [`Transport`] drives a `Playback` from a tokio task, turning
//! `playing` into timed auto-advance and fanning the current state out to
//! rendering collaborators through a watch channel.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use algoscope_model::Graph;
//! use algoscope_trace::{Dfs, TraceGenerator};
//! use algoscope_playback::Playback;
//!
//! let graph = Graph::from_edges([("a", "b", 1)]);
//! let trace = Arc::new(Dfs.generate(&graph, "a", true));
//!
//! let mut playback = Playback::new(trace);
//! playback.step_forward();
//! assert_eq!(playback.state().step_index, 1);
//! playback.reset();
//! assert_eq!(playback.state().step_index, 0);
//! ```

mod player;
mod transport;

pub use player::{Playback, PlaybackState, DEFAULT_INTERVAL_MS};
pub use transport::{PlaybackView, Transport, TransportCommand};
