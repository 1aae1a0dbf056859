//! BGM ducking countdown.
//!
//! While a creature cry plays, the BGM volume is lowered; once the cry has
//! finished the volume is restored. The countdown is pure state — the
//! director samples "is the cry still audible" and performs the backend
//! volume write when [`DuckingState::step`] says so.

/// BGM volume while ducked under a cry.
pub const DUCKED_BGM_VOLUME: u16 = 85;
/// Full BGM volume restored after the cry.
pub const FULL_BGM_VOLUME: u16 = 256;

/// Grace ticks before the cry-finished check is trusted. The status read on
/// the tick right after playback starts can still report "not playing".
const GRACE_TICKS: u8 = 2;

/// Outcome of one ducking tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuckingStep {
    /// Still inside the grace period or the cry is still audible.
    Hold,
    /// Restore the BGM volume and unregister the task.
    Restore,
}

/// Countdown plus restore-task arming flag for one ducking episode.
#[derive(Debug, Default)]
pub struct DuckingState {
    counter: u8,
    task_armed: bool,
}

impl DuckingState {
    /// Create an idle ducking controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or refresh) the grace countdown.
    pub fn request(&mut self) {
        self.counter = GRACE_TICKS;
    }

    /// Register the restore task; a no-op while one is armed.
    pub fn arm_task(&mut self) -> bool {
        if self.task_armed {
            return false;
        }
        self.task_armed = true;
        true
    }

    /// Unregister the restore task.
    pub fn disarm_task(&mut self) {
        self.task_armed = false;
    }

    /// True iff the restore task is currently registered.
    pub fn is_task_armed(&self) -> bool {
        self.task_armed
    }

    /// Advance one tick given whether the cry channel is still audible.
    ///
    /// The cry check is skipped while the grace countdown is running; the
    /// tick that brings the counter to zero is the first one that may
    /// restore.
    pub fn step(&mut self, cry_playing: bool) -> DuckingStep {
        if self.counter > 0 {
            self.counter -= 1;
            if self.counter > 0 {
                return DuckingStep::Hold;
            }
        }
        if cry_playing {
            DuckingStep::Hold
        } else {
            DuckingStep::Restore
        }
    }
}
