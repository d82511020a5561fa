use rp_core::{Palette, RippleField, StepStats};
use tracing::{debug, info, trace};

use crate::autogen::AutoRipples;
use crate::clock::{SimClock, TickRate, TickScheduler};
use crate::config::SimConfig;
use crate::error::SimResult;

/// Nominal tick length used by [`Simulation::tick`] when stepping once per frame.
pub const NOMINAL_FRAME_SECS: f64 = 1.0 / 60.0;

/// The top-level simulation orchestrator.
///
/// Owns the ripple field, clock, tick scheduler, and ripple generator.
/// Hosts feed it input and frame times; it decides how many ticks to run.
pub struct Simulation {
    field: RippleField,
    clock: SimClock,
    scheduler: TickScheduler,
    autogen: AutoRipples,
    ripple_radius: i32,
    palette: Palette,
    last_stats: Option<StepStats>,
    injections: u64,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.clock.tick())
            .field("dims", &self.field.grid_dimensions())
            .field("rate", &self.scheduler.rate())
            .field("autogen", &self.autogen.is_enabled())
            .field("injections", &self.injections)
            .finish()
    }
}

impl Simulation {
    /// Validate the configuration and build a simulation from it.
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        let field = RippleField::from_config(&config.field)?;
        let scheduler = TickScheduler::new(
            TickRate::from_hz(config.tick_rate),
            config.max_ticks_per_frame,
        );

        info!(
            dims = %field.grid_dimensions(),
            tile_size = field.tile_size(),
            rate = ?scheduler.rate(),
            seed = config.seed,
            "simulation ready"
        );

        Ok(Self {
            field,
            clock: SimClock::new(),
            scheduler,
            autogen: AutoRipples::new(&config.autogen, config.seed),
            ripple_radius: config.ripple_radius,
            palette: config.palette,
            last_stats: None,
            injections: 0,
        })
    }

    /// Inject a ripple of the configured radius at a physical position.
    pub fn inject(&mut self, position: (f64, f64)) -> usize {
        self.inject_with_radius(position, self.ripple_radius)
    }

    /// Inject a ripple of a specific radius at a physical position.
    pub fn inject_with_radius(&mut self, position: (f64, f64), radius: i32) -> usize {
        let touched = self.field.inject(position, radius);
        if touched > 0 {
            self.injections += 1;
        }
        touched
    }

    /// Run one tick lasting `dt` simulated seconds: autogeneration, then one step.
    fn tick_for(&mut self, dt: f64) -> StepStats {
        if let Some(ripple) = self.autogen.update(dt, self.field.physical_size()) {
            debug!(
                x = ripple.position.0,
                y = ripple.position.1,
                radius = ripple.radius,
                "autogenerated ripple"
            );
            self.inject_with_radius(ripple.position, ripple.radius);
        }

        let stats = self.field.step();
        let tick = self.clock.advance(dt);
        trace!(tick, min = stats.min, max = stats.max, "tick");
        self.last_stats = Some(stats);
        stats
    }

    /// Advance by exactly one tick.
    pub fn tick(&mut self) -> StepStats {
        let dt = self.scheduler.tick_duration(NOMINAL_FRAME_SECS);
        self.tick_for(dt)
    }

    /// Advance by exactly `n` ticks.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Advance for a displayed frame that took `frame_dt` seconds.
    ///
    /// Runs however many ticks the tick rate calls for and returns that count.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        let ticks = self.scheduler.ticks_for(frame_dt);
        let dt = self.scheduler.tick_duration(frame_dt);
        for _ in 0..ticks {
            self.tick_for(dt);
        }
        ticks
    }

    /// Zero the field and restart the clock. Autogeneration state is kept.
    pub fn reset(&mut self) {
        self.field.reset();
        self.clock.reset();
        self.last_stats = None;
        self.injections = 0;
        info!("simulation reset");
    }

    /// Switch ripple autogeneration on or off. Returns the new state.
    pub fn toggle_autogen(&mut self) -> bool {
        let enabled = self.autogen.toggle();
        info!(enabled, "autogeneration toggled");
        enabled
    }

    /// Whether ripple autogeneration is on.
    pub fn autogen_enabled(&self) -> bool {
        self.autogen.is_enabled()
    }

    /// Switch to the other display palette. Returns the new palette.
    pub fn toggle_palette(&mut self) -> Palette {
        self.palette = self.palette.toggled();
        self.palette
    }

    /// The ripple field.
    pub fn field(&self) -> &RippleField {
        &self.field
    }

    /// The simulation clock.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Number of ticks run so far.
    pub fn current_tick(&self) -> u64 {
        self.clock.tick()
    }

    /// Extremes reported by the most recent step, if any.
    pub fn last_stats(&self) -> Option<StepStats> {
        self.last_stats
    }

    /// Number of injections that changed at least one cell.
    pub fn injections(&self) -> u64 {
        self.injections
    }

    /// Radius used by [`inject`](Self::inject).
    pub fn ripple_radius(&self) -> i32 {
        self.ripple_radius
    }

    /// Current display palette.
    pub fn palette(&self) -> Palette {
        self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AutoRippleConfig;
    use crate::error::SimError;
    use rp_core::FieldConfig;

    fn small_config() -> SimConfig {
        SimConfig::default().with_field(
            FieldConfig::default()
                .with_size(40.0, 40.0)
                .with_resolution(20)
                .with_damping(0.9),
        )
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = small_config().with_ripple_radius(-1);
        assert!(matches!(Simulation::new(&config), Err(SimError::Config(_))));
    }

    #[test]
    fn tick_advances_clock_and_field() {
        let mut sim = Simulation::new(&small_config()).unwrap();
        assert!(sim.last_stats().is_none());
        sim.inject((20.0, 20.0));
        assert_eq!(sim.injections(), 1);

        let stats = sim.tick();
        assert_eq!(sim.current_tick(), 1);
        assert_eq!(sim.last_stats(), Some(stats));
        assert!(stats.max > 0.0);
        assert!((sim.clock().elapsed_secs() - NOMINAL_FRAME_SECS).abs() < 1e-12);
    }

    #[test]
    fn run_counts_ticks() {
        let mut sim = Simulation::new(&small_config()).unwrap();
        sim.run(25);
        assert_eq!(sim.current_tick(), 25);
    }

    #[test]
    fn per_frame_advance_runs_one_tick() {
        let mut sim = Simulation::new(&small_config()).unwrap();
        assert_eq!(sim.advance(0.001), 1);
        assert_eq!(sim.advance(1.0), 1);
        assert_eq!(sim.current_tick(), 2);
        assert!((sim.clock().elapsed_secs() - 1.001).abs() < 1e-12);
    }

    #[test]
    fn fixed_rate_advance_follows_frame_time() {
        let config = small_config().with_tick_rate(Some(8.0));
        let mut sim = Simulation::new(&config).unwrap();
        assert_eq!(sim.advance(0.0625), 0);
        assert_eq!(sim.advance(0.0625), 1);
        assert_eq!(sim.advance(0.5), 4);
        assert_eq!(sim.current_tick(), 5);
        assert_eq!(sim.clock().elapsed_secs(), 0.625);
    }

    #[test]
    fn injection_outside_field_is_not_counted() {
        let mut sim = Simulation::new(&small_config()).unwrap();
        assert_eq!(sim.inject((-500.0, -500.0)), 0);
        assert_eq!(sim.injections(), 0);
    }

    #[test]
    fn autogen_injects_deterministically() {
        let config = SimConfig {
            autogen: AutoRippleConfig {
                enabled: true,
                interval_secs: 0.05,
                ..AutoRippleConfig::default()
            },
            ..small_config()
        };

        let run = || {
            let mut sim = Simulation::new(&config).unwrap();
            sim.run(30);
            (sim.injections(), sim.field().current().clone())
        };
        let (count_a, field_a) = run();
        let (count_b, field_b) = run();
        assert!(count_a > 0);
        assert_eq!(count_a, count_b);
        assert_eq!(field_a, field_b);
    }

    #[test]
    fn toggles_and_reset() {
        let mut sim = Simulation::new(&small_config()).unwrap();
        assert!(!sim.autogen_enabled());
        assert!(sim.toggle_autogen());
        assert_eq!(sim.toggle_palette(), Palette::Tinted);

        sim.run(10);
        assert!(sim.injections() > 0);

        sim.reset();
        assert_eq!(sim.current_tick(), 0);
        assert_eq!(sim.injections(), 0);
        assert_eq!(sim.field().max_amplitude(), 0.0);
        assert!(sim.last_stats().is_none());
        assert!(sim.autogen_enabled());
    }

    #[test]
    fn quiet_simulation_stays_flat() {
        let mut sim = Simulation::new(&small_config()).unwrap();
        sim.run(50);
        assert_eq!(sim.field().max_amplitude(), 0.0);
    }
}
