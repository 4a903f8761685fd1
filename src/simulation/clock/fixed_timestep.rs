/// Fixed-timestep accumulator
///
/// Wall-clock time is accumulated in units of ticks; whole ticks are flushed
/// to the simulation and the fractional remainder is left for render
/// interpolation. Simulation rate never depends on frame timing.
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    ticks_per_second: f64,
    /// Pending time, measured in ticks
    accumulated: f64,
    /// 0 = unlimited
    max_ticks: u32,
    dropped_ticks: u64,
}

impl FixedTimestep {
    pub fn new(ticks_per_second: f32, max_ticks: u32) -> Self {
        Self {
            ticks_per_second: ticks_per_second as f64,
            accumulated: 0.0,
            max_ticks,
            dropped_ticks: 0,
        }
    }

    /// Add `elapsed_seconds` of wall-clock time and return how many whole ticks to run.
    ///
    /// Negative or non-finite input counts as no time passing. When more than
    /// `max_ticks` are due the excess is dropped, keeping only the fraction.
    pub fn advance(&mut self, elapsed_seconds: f64) -> u32 {
        if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            self.accumulated += elapsed_seconds * self.ticks_per_second;
        }

        let due = self.accumulated.floor();
        self.accumulated -= due;

        let due = if due > u32::MAX as f64 { u32::MAX } else { due as u32 };
        if self.max_ticks > 0 && due > self.max_ticks {
            let dropped = due - self.max_ticks;
            self.dropped_ticks += dropped as u64;
            tracing::warn!(due, dropped, "simulation fell behind, dropping ticks");
            return self.max_ticks;
        }
        due
    }

    /// Fraction of a tick accumulated but not yet simulated, in `[0, 1)`.
    pub fn alpha(&self) -> f32 {
        self.accumulated as f32
    }

    pub fn dropped_ticks(&self) -> u64 {
        self.dropped_ticks
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.dropped_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flushes_whole_ticks_and_keeps_fraction() {
        let mut clock = FixedTimestep::new(10.0, 0);
        assert_eq!(clock.advance(0.25), 2);
        assert_eq!(clock.alpha(), 0.5);
        assert_eq!(clock.advance(0.05), 1);
        assert!(clock.alpha() < 1e-6);
    }

    #[test]
    fn small_frames_accumulate() {
        let mut clock = FixedTimestep::new(10.0, 0);
        assert_eq!(clock.advance(0.0625), 0);
        assert_eq!(clock.advance(0.0625), 1);
        assert_eq!(clock.alpha(), 0.25);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = FixedTimestep::new(60.0, 8);
        assert_eq!(clock.advance(1.0), 8);
        assert!(clock.dropped_ticks() >= 51);
        assert!(clock.alpha() < 1.0);
    }

    #[test]
    fn bad_elapsed_values_are_ignored() {
        let mut clock = FixedTimestep::new(60.0, 0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f64::NAN), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
