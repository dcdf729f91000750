//! Pausable monotonic game clock
//!
//! Every cooldown and effect duration compares against this clock rather than
//! a frame counter, so expiry is independent of frame-rate variance. Pausing
//! freezes the basis: paused spans never count against cooldowns or effects.
//! Backed by `Instant`, so wall-clock regressions cannot run time backwards.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct GameClock {
    basis: Instant,
    accumulated: f64,
    running: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    /// Create a paused clock at zero elapsed time
    pub fn new() -> Self {
        Self {
            basis: Instant::now(),
            accumulated: 0.0,
            running: false,
        }
    }

    /// Create and immediately start a clock
    pub fn started() -> Self {
        let mut clock = Self::new();
        clock.start();
        clock
    }

    /// Start (or resume) the clock; no-op if already running
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.basis = Instant::now();
        self.running = true;
    }

    /// Pause the clock; no-op if already paused
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.accumulated += self.basis.elapsed().as_secs_f64();
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total running time in seconds, excluding paused spans
    pub fn elapsed_secs(&self) -> f64 {
        if self.running {
            self.accumulated + self.basis.elapsed().as_secs_f64()
        } else {
            self.accumulated
        }
    }

    /// Back to zero, paused
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_paused_time_does_not_accumulate() {
        let mut clock = GameClock::started();
        sleep(Duration::from_millis(20));
        clock.pause();
        let at_pause = clock.elapsed_secs();
        sleep(Duration::from_millis(30));
        assert_eq!(clock.elapsed_secs(), at_pause);
    }

    #[test]
    fn test_resume_continues_from_pause_point() {
        let mut clock = GameClock::started();
        sleep(Duration::from_millis(10));
        clock.pause();
        let at_pause = clock.elapsed_secs();
        clock.start();
        sleep(Duration::from_millis(10));
        assert!(clock.elapsed_secs() >= at_pause);
    }

    #[test]
    fn test_reset_zeroes_and_pauses() {
        let mut clock = GameClock::started();
        sleep(Duration::from_millis(5));
        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed_secs(), 0.0);
    }

    #[test]
    fn test_double_start_is_idempotent() {
        let mut clock = GameClock::started();
        clock.start();
        assert!(clock.is_running());
        clock.pause();
        clock.pause();
        assert!(!clock.is_running());
    }
}
