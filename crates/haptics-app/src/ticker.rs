//! Fixed-cadence redraw ticker.

use std::time::{Duration, Instant};

use haptics_config::schema::AnimationConfig;

/// Advances a cosmetic angle once per period and tells the event loop when
/// to wake up next.
#[derive(Debug, Clone)]
pub struct AngleTicker {
    angle: f64,
    step: f64,
    period: Duration,
    next_due: Instant,
}

impl AngleTicker {
    /// First firing is one `period` after `now`.
    pub fn new(step_degrees: f64, period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            angle: 0.0,
            step: step_degrees,
            period,
            next_due: now + period,
        }
    }

    pub fn from_config(config: &AnimationConfig, now: Instant) -> Self {
        Self::new(config.step_degrees, config.period(), now)
    }

    /// Current angle in degrees, always in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Add one step, wrapping modulo 360.
    pub fn advance(&mut self) -> f64 {
        self.angle = (self.angle + self.step).rem_euclid(360.0);
        self.angle
    }

    /// Fire if the period has elapsed: advance and re-arm.
    ///
    /// Returns `true` when the caller should request a redraw. A late wake-up
    /// fires once and re-arms from `now` instead of replaying missed ticks.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.advance();
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }
}
