use serde::{Deserialize, Serialize};

/// Latest known position of the tracked end effector, in scene units.
///
/// Components are ordered as they arrive on the wire: depth, horizontal,
/// vertical. There is no history; every update replaces the previous value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub depth: f64,
    pub horizontal: f64,
    pub vertical: f64,
}

impl Position {
    pub const ZERO: Self = Self {
        depth: 0.0,
        horizontal: 0.0,
        vertical: 0.0,
    };

    /// Build from wire-ordered components `[depth, horizontal, vertical]`.
    pub fn from_components(c: [f64; 3]) -> Self {
        Self {
            depth: c[0],
            horizontal: c[1],
            vertical: c[2],
        }
    }

    /// Wire-ordered components `[depth, horizontal, vertical]`.
    pub fn components(&self) -> [f64; 3] {
        [self.depth, self.horizontal, self.vertical]
    }

    /// Scene-space placement `(x, y, z)`.
    ///
    /// Horizontal and vertical drive screen X/Y, depth drives Z.
    pub fn scene_placement(&self) -> [f32; 3] {
        [
            self.horizontal as f32,
            self.vertical as f32,
            self.depth as f32,
        ]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(depth {:.3}, horizontal {:.3}, vertical {:.3})",
            self.depth, self.horizontal, self.vertical
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Position::default(), Position::ZERO);
        assert_eq!(Position::ZERO.components(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn components_keep_wire_order() {
        let p = Position::from_components([1.0, 2.0, 3.0]);
        assert_eq!(p.depth, 1.0);
        assert_eq!(p.horizontal, 2.0);
        assert_eq!(p.vertical, 3.0);
        assert_eq!(p.components(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn scene_placement_reorders_axes() {
        let p = Position::from_components([1.0, 2.0, 3.0]);
        assert_eq!(p.scene_placement(), [2.0, 3.0, 1.0]);
    }

    #[test]
    fn display_names_each_axis() {
        let p = Position::from_components([1.0, -2.5, 0.25]);
        assert_eq!(
            p.to_string(),
            "(depth 1.000, horizontal -2.500, vertical 0.250)"
        );
    }

    #[test]
    fn serde_round_trip_keeps_fields() {
        let p = Position::from_components([0.5, 1.5, -1.0]);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"horizontal\":1.5"));
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
