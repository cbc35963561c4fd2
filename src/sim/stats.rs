//! Player statistics: shots and survival time

/// Shot counters plus the run's start time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsTracker {
    start_millis: u64,
    shots_fired: u32,
    shots_hit: u32,
}

impl StatsTracker {
    pub fn new(start_millis: u64) -> Self {
        Self {
            start_millis,
            shots_fired: 0,
            shots_hit: 0,
        }
    }

    pub fn record_shot_fired(&mut self) {
        self.shots_fired = self.shots_fired.saturating_add(1);
    }

    pub fn record_shot_hit(&mut self) {
        self.shots_hit = self.shots_hit.saturating_add(1);
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn shots_hit(&self) -> u32 {
        self.shots_hit
    }

    pub fn start_millis(&self) -> u64 {
        self.start_millis
    }

    /// Whole seconds since the tracker started
    pub fn elapsed_seconds(&self, now_millis: u64) -> u64 {
        now_millis.saturating_sub(self.start_millis) / 1000
    }

    /// Hits divided by shots fired, 0.0 before the first shot
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            return 0.0;
        }
        self.shots_hit as f64 / self.shots_fired as f64
    }
}
