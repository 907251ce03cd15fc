use rand::Rng;
use rayon::prelude::*;

/// TileGrid is the dense 2D map of tileset indices.
/// Stored as one flat row-major buffer so lookups stay O(1) even at
/// 10000×10000 cells; the viewer never mutates it after construction.
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<u16>,
}

impl TileGrid {
    /// Create a new grid with every cell set to tile index 0
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![0; width * height],
        }
    }

    /// Create a grid filled with random tile indices in `0..tile_count`.
    /// Rows are filled in parallel; at 10^8 cells a serial fill is a
    /// noticeable startup stall.
    pub fn random(width: usize, height: usize, tile_count: u16) -> Self {
        let mut tiles = vec![0u16; width * height];
        tiles.par_chunks_mut(width.max(1)).for_each(|row| {
            let mut rng = rand::rng();
            for tile in row.iter_mut() {
                *tile = rng.random_range(0..tile_count);
            }
        });

        Self {
            width,
            height,
            tiles,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get tile index at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        (x < self.width && y < self.height).then(|| self.tiles[self.get_index(x, y)])
    }

    /// Get tile index at position without bounds checking the result.
    /// Callers iterate ranges already clamped to the grid, so `x < width`
    /// and `y < height` must hold.
    pub fn at(&self, x: usize, y: usize) -> u16 {
        self.tiles[self.get_index(x, y)]
    }
}
