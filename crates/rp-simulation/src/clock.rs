/// Tracks simulation time: a monotonic tick counter and elapsed simulated seconds.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    tick: u64,
    elapsed_secs: f64,
}

impl SimClock {
    /// Create a new clock at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick lasting `dt` seconds. Returns the new tick number.
    pub fn advance(&mut self, dt: f64) -> u64 {
        self.tick += 1;
        self.elapsed_secs += dt;
        self.tick
    }

    /// Return the current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Total simulated seconds since the clock started.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Return to tick 0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// How often the field is stepped relative to displayed frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickRate {
    /// Exactly one tick per displayed frame, whatever the frame rate.
    PerFrame,
    /// A fixed number of ticks per second, independent of the frame rate.
    Fixed(f64),
}

impl TickRate {
    /// Build from an optional ticks-per-second value; `None` means one tick per frame.
    pub fn from_hz(hz: Option<f64>) -> Self {
        hz.map_or(Self::PerFrame, Self::Fixed)
    }
}

/// Converts frame time into a whole number of simulation ticks.
///
/// In fixed mode, leftover time carries over to the next frame. When a frame
/// would need more than `max_ticks_per_frame` ticks, the backlog is dropped
/// rather than letting the simulation fall further and further behind.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    rate: TickRate,
    max_ticks_per_frame: u32,
    accumulator: f64,
}

impl TickScheduler {
    /// Create a scheduler. `max_ticks_per_frame` is raised to at least 1.
    pub fn new(rate: TickRate, max_ticks_per_frame: u32) -> Self {
        Self {
            rate,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
            accumulator: 0.0,
        }
    }

    /// The configured rate.
    pub fn rate(&self) -> TickRate {
        self.rate
    }

    /// Number of ticks to run for a frame that took `frame_dt` seconds.
    pub fn ticks_for(&mut self, frame_dt: f64) -> u32 {
        let TickRate::Fixed(hz) = self.rate else {
            return 1;
        };
        let step = 1.0 / hz;
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let mut ticks = 0;
        while self.accumulator >= step && ticks < self.max_ticks_per_frame {
            self.accumulator -= step;
            ticks += 1;
        }
        if self.accumulator >= step {
            self.accumulator %= step;
        }
        ticks
    }

    /// Simulated seconds covered by one tick of a frame lasting `frame_dt`.
    pub fn tick_duration(&self, frame_dt: f64) -> f64 {
        match self.rate {
            TickRate::PerFrame => frame_dt,
            TickRate::Fixed(hz) => 1.0 / hz,
        }
    }

    /// Time carried over toward the next tick.
    pub fn pending_secs(&self) -> f64 {
        self.accumulator
    }
}
