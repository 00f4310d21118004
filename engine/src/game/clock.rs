use std::time::{Duration, Instant};

/// Fixed-rate logic clock, decoupled from how often the caller renders.
/// Elapsed wall time accumulates as fractional cycles; the loop consumes one
/// whole cycle per logic tick. Pausing stops accumulation but keeps the
/// fractional phase already earned.
#[derive(Clone, Debug)]
pub struct Clock {
    millis_per_cycle: f32,
    last_update: Instant,
    elapsed_cycles: f32,
    paused: bool,
}

impl Clock {
    pub fn new(cycles_per_second: f32) -> Self {
        Self {
            millis_per_cycle: 1000.0 / cycles_per_second,
            last_update: Instant::now(),
            elapsed_cycles: 0.0,
            paused: false,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_cycles = 0.0;
        self.last_update = Instant::now();
        self.paused = false;
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_update;
        self.last_update = now;
        self.accumulate(delta);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn has_elapsed_cycle(&mut self) -> bool {
        if self.elapsed_cycles >= 1.0 {
            self.elapsed_cycles -= 1.0;
            return true;
        }
        false
    }

    fn accumulate(&mut self, delta: Duration) {
        if !self.paused {
            self.elapsed_cycles += delta.as_secs_f32() * 1000.0 / self.millis_per_cycle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_millis(clock: &Clock, cycles: f32) -> Duration {
        Duration::from_secs_f32(clock.millis_per_cycle * cycles / 1000.0)
    }

    #[test]
    fn test_no_cycle_before_interval() {
        let mut clock = Clock::new(9.0);
        let half = cycle_millis(&clock, 0.5);
        clock.accumulate(half);
        assert!(!clock.has_elapsed_cycle());
    }

    #[test]
    fn test_cycle_consumed_once() {
        let mut clock = Clock::new(9.0);
        let full = cycle_millis(&clock, 1.25);
        clock.accumulate(full);
        assert!(clock.has_elapsed_cycle());
        assert!(!clock.has_elapsed_cycle());
    }

    #[test]
    fn test_multiple_cycles_accumulate() {
        let mut clock = Clock::new(9.0);
        clock.accumulate(cycle_millis(&clock, 3.0));
        assert!(clock.has_elapsed_cycle());
        assert!(clock.has_elapsed_cycle());
        assert!(clock.has_elapsed_cycle());
        assert!(!clock.has_elapsed_cycle());
    }

    #[test]
    fn test_pause_freezes_accumulation() {
        let mut clock = Clock::new(9.0);
        clock.set_paused(true);
        clock.accumulate(cycle_millis(&clock, 10.0));
        assert!(!clock.has_elapsed_cycle());
    }

    #[test]
    fn test_resume_keeps_fractional_phase() {
        let mut clock = Clock::new(9.0);
        clock.accumulate(cycle_millis(&clock, 0.75));
        clock.set_paused(true);
        clock.accumulate(cycle_millis(&clock, 10.0));
        clock.set_paused(false);
        clock.accumulate(cycle_millis(&clock, 0.3));
        assert!(clock.has_elapsed_cycle());
    }

    #[test]
    fn test_reset_discards_phase() {
        let mut clock = Clock::new(9.0);
        clock.accumulate(cycle_millis(&clock, 2.5));
        clock.reset();
        assert!(!clock.has_elapsed_cycle());
        assert!(!clock.is_paused());
    }
}
