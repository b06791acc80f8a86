use std::time::{Duration, Instant};

/// Frame timer for the host loop.
///
/// `tick` measures the time since the previous tick; [`FrameClock::dt_seconds`]
/// clamps it so a stalled frame (tab switch, debugger pause) does not become
/// one giant physics step.
pub struct FrameClock {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
    /// Upper bound for [`FrameClock::dt_seconds`]
    pub max_delta: f32,
}

impl FrameClock {
    #[must_use]
    pub fn new(max_delta: f32) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            max_delta,
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Ticks as if the current time were `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.last_update);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_update = now;
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32().min(self.max_delta)
    }

    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.05)
    }
}
