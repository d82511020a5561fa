/// A countdown timer that gates repeated actions.
///
/// A fresh cooldown is ready immediately. Firing it starts the countdown,
/// and it becomes ready again once `duration` seconds of updates have passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Cooldown {
    duration: f64,
    remaining: f64,
}

impl Cooldown {
    /// Create a ready cooldown with the given duration in seconds.
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            remaining: 0.0,
        }
    }

    /// Count down by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    /// Whether the countdown has finished.
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Restart the countdown from the full duration.
    pub fn trigger(&mut self) {
        self.remaining = self.duration;
    }

    /// Trigger and return true if ready; otherwise return false.
    pub fn try_fire(&mut self) -> bool {
        if self.ready() {
            self.trigger();
            true
        } else {
            false
        }
    }

    /// Make the cooldown ready immediately.
    pub fn reset(&mut self) {
        self.remaining = 0.0;
    }
}
