use crate::{Playback, PlaybackState};
use algoscope_trace::{Step, Trace};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// Commands accepted by a running [`Transport`].
#[derive(Debug, Clone)]
pub enum TransportCommand {
    Play,
    Pause,
    StepForward,
    StepBackward,
    Seek(usize),
    Reset,
    SetSpeed(u64),
    /// Swap in a freshly generated trace; any pending auto-advance for the
    /// discarded trace is cancelled first.
    Load(Arc<Trace>),
}

/// What observers see after every mutation.
#[derive(Debug, Clone)]
pub struct PlaybackView {
    pub state: PlaybackState,
    pub trace: Arc<Trace>,
}

impl PlaybackView {
    pub fn current_step(&self) -> Option<&Step> {
        self.trace.get(self.state.step_index)
    }
}

/// Handle to a playback task.
///
/// The task owns the [`Playback`]; every mutation goes through the command
/// channel, and the resulting state is published on the watch channel
/// returned by [`Transport::spawn`]. Sends are fire-and-forget so UI code
/// never blocks on the controller.
#[derive(Debug, Clone)]
pub struct Transport {
    tx: mpsc::Sender<TransportCommand>,
}

impl Transport {
    /// Spawn the playback task for `trace`. Dropping every `Transport`
    /// clone terminates the task.
    pub fn spawn(trace: Arc<Trace>) -> (Transport, watch::Receiver<PlaybackView>) {
        let (tx, rx) = mpsc::channel(64);
        let playback = Playback::new(trace);
        let (view_tx, view_rx) = watch::channel(view_of(&playback));
        tokio::spawn(run(playback, rx, view_tx));
        (Self { tx }, view_rx)
    }

    pub fn send(&self, command: TransportCommand) {
        let _ = self.tx.try_send(command);
    }

    pub fn play(&self) {
        self.send(TransportCommand::Play);
    }

    pub fn pause(&self) {
        self.send(TransportCommand::Pause);
    }

    pub fn step_forward(&self) {
        self.send(TransportCommand::StepForward);
    }

    pub fn step_backward(&self) {
        self.send(TransportCommand::StepBackward);
    }

    pub fn seek(&self, index: usize) {
        self.send(TransportCommand::Seek(index));
    }

    pub fn reset(&self) {
        self.send(TransportCommand::Reset);
    }

    pub fn set_speed(&self, interval_ms: u64) {
        self.send(TransportCommand::SetSpeed(interval_ms));
    }

    pub fn load(&self, trace: Arc<Trace>) {
        self.send(TransportCommand::Load(trace));
    }
}

fn view_of(playback: &Playback) -> PlaybackView {
    PlaybackView {
        state: playback.state(),
        trace: Arc::clone(playback.trace()),
    }
}

/// A full period from now, at the current speed. Rebuilt on every
/// play/speed/load so there is always exactly one schedule, never stacked
/// timers.
fn restarted_ticker(state: PlaybackState) -> Interval {
    let period = Duration::from_millis(state.interval_ms.max(1));
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

async fn run(
    mut playback: Playback,
    mut rx: mpsc::Receiver<TransportCommand>,
    view_tx: watch::Sender<PlaybackView>,
) {
    let mut ticker = restarted_ticker(playback.state());

    loop {
        tokio::select! {
            command = rx.recv() => {
                let Some(command) = command else { break };
                debug!(?command, "transport command");
                let reschedule = matches!(
                    command,
                    TransportCommand::Play
                        | TransportCommand::SetSpeed(_)
                        | TransportCommand::Load(_)
                );
                apply(&mut playback, command);
                if reschedule {
                    ticker = restarted_ticker(playback.state());
                }
                let _ = view_tx.send(view_of(&playback));
            }
            _ = ticker.tick(), if playback.state().playing => {
                playback.step_forward();
                let _ = view_tx.send(view_of(&playback));
            }
        }
    }
    debug!("transport task finished");
}

fn apply(playback: &mut Playback, command: TransportCommand) {
    match command {
        TransportCommand::Play => playback.play(),
        TransportCommand::Pause => playback.pause(),
        TransportCommand::StepForward => playback.step_forward(),
        TransportCommand::StepBackward => playback.step_backward(),
        TransportCommand::Seek(index) => playback.seek(index),
        TransportCommand::Reset => playback.reset(),
        TransportCommand::SetSpeed(interval_ms) => playback.set_speed(interval_ms),
        TransportCommand::Load(trace) => playback.load(trace),
    }
}
