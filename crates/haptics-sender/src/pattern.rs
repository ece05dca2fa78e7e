//! Position patterns, in raw (pre-transform) units.

use std::f64::consts::TAU;

use clap::Subcommand;

/// What to send.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Trace a circle in the horizontal/vertical plane at zero depth.
    Circle {
        /// Radius in raw units (the visualizer scales by 10).
        #[arg(long, default_value_t = 0.5)]
        radius: f64,
        /// Seconds per revolution.
        #[arg(long, default_value_t = 4.0)]
        period: f64,
    },
    /// Send the same position every time.
    Fixed {
        #[arg(allow_negative_numbers = true)]
        depth: f64,
        #[arg(allow_negative_numbers = true)]
        horizontal: f64,
        #[arg(allow_negative_numbers = true)]
        vertical: f64,
    },
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Circle {
            radius: 0.5,
            period: 4.0,
        }
    }
}

impl Pattern {
    /// Wire-ordered `[depth, horizontal, vertical]` at `t` seconds.
    pub fn sample(&self, t: f64) -> [f64; 3] {
        match *self {
            Pattern::Circle { radius, period } => {
                let phase = if period > 0.0 { TAU * t / period } else { 0.0 };
                [0.0, radius * phase.cos(), radius * phase.sin()]
            }
            Pattern::Fixed {
                depth,
                horizontal,
                vertical,
            } => [depth, horizontal, vertical],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn circle_starts_on_the_horizontal_axis() {
        let p = Pattern::default();
        assert!(close(p.sample(0.0), [0.0, 0.5, 0.0]));
    }

    #[test]
    fn circle_quarter_period_points_up() {
        let p = Pattern::Circle {
            radius: 1.0,
            period: 4.0,
        };
        assert!(close(p.sample(1.0), [0.0, 0.0, 1.0]));
        assert!(close(p.sample(4.0), p.sample(0.0)));
    }

    #[test]
    fn circle_keeps_radius() {
        let p = Pattern::Circle {
            radius: 2.0,
            period: 3.0,
        };
        for i in 0..20 {
            let [d, h, v] = p.sample(f64::from(i) * 0.37);
            assert_eq!(d, 0.0);
            assert!(((h * h + v * v).sqrt() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_period_holds_still() {
        let p = Pattern::Circle {
            radius: 1.0,
            period: 0.0,
        };
        assert!(close(p.sample(12.0), [0.0, 1.0, 0.0]));
    }

    #[test]
    fn fixed_ignores_time() {
        let p = Pattern::Fixed {
            depth: 1.0,
            horizontal: -1.0,
            vertical: 2.0,
        };
        assert_eq!(p.sample(0.0), [1.0, -1.0, 2.0]);
        assert_eq!(p.sample(99.0), [1.0, -1.0, 2.0]);
    }
}
