//! Checkerboard floor layout.

use haptics_config::schema::FloorConfig;

/// Largest accepted grid side, matching config validation.
pub const MAX_GRID: u32 = 256;

/// Square grid of tiles lying in the plane `Y = depth`, centered at the origin.
///
/// Grid coordinate `x` runs along scene X and `y` along scene Z.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorLayout {
    pub depth: f32,
    pub grid_x: u32,
    pub grid_y: u32,
    pub tile_size: f32,
    pub tile_color: [f32; 4],
    pub gap_color: [f32; 4],
}

/// One floor cell with its resolved color and world-space extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorTile {
    pub x: i32,
    pub y: i32,
    pub color: [f32; 4],
    /// Corner `(x*s, depth, y*s)`.
    pub min: [f32; 3],
    /// Corner `((x+1)*s, depth, (y+1)*s)`.
    pub max: [f32; 3],
}

impl Default for FloorLayout {
    fn default() -> Self {
        Self::from_config(&FloorConfig::default())
    }
}

impl FloorLayout {
    /// Grid sides are clamped to `1..=MAX_GRID`; invalid configs still load.
    pub fn from_config(config: &FloorConfig) -> Self {
        Self {
            depth: config.depth,
            grid_x: config.grid_x.clamp(1, MAX_GRID),
            grid_y: config.grid_y.clamp(1, MAX_GRID),
            tile_size: config.tile_size,
            tile_color: config.tile_color,
            gap_color: config.gap_color,
        }
    }

    /// Color of cell `(x, y)`: `tile_color` when `x + y` is odd, `gap_color`
    /// otherwise. Works for negative coordinates.
    pub fn tile_color(&self, x: i32, y: i32) -> [f32; 4] {
        if (x + y).rem_euclid(2) == 1 {
            self.tile_color
        } else {
            self.gap_color
        }
    }

    /// Half-open cell range along X.
    pub fn x_range(&self) -> std::ops::Range<i32> {
        centered_range(self.grid_x)
    }

    /// Half-open cell range along Z.
    pub fn y_range(&self) -> std::ops::Range<i32> {
        centered_range(self.grid_y)
    }

    /// Every cell in row-major order (Z outer, X inner).
    pub fn tiles(&self) -> Vec<FloorTile> {
        let s = self.tile_size;
        let mut tiles = Vec::with_capacity((self.grid_x as usize).saturating_mul(self.grid_y as usize));
        for y in self.y_range() {
            for x in self.x_range() {
                tiles.push(FloorTile {
                    x,
                    y,
                    color: self.tile_color(x, y),
                    min: [x as f32 * s, self.depth, y as f32 * s],
                    max: [(x + 1) as f32 * s, self.depth, (y + 1) as f32 * s],
                });
            }
        }
        tiles
    }
}

/// `-n/2 .. n - n/2`, so `n` cells centered on zero.
fn centered_range(n: u32) -> std::ops::Range<i32> {
    let n = i32::try_from(n).unwrap_or(i32::MAX);
    -(n / 2)..n - n / 2
}
