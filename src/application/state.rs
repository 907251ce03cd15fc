use crate::application::Camera;
use crate::domain::TileGrid;

/// Tile under the pointer, if the pointer is over the map at all.
/// Pure inverse transform plus floor division; floor (not truncation)
/// keeps world coordinates just left/above the origin from aliasing to
/// tile (0, 0).
pub fn pointer_to_tile(
    camera: &Camera,
    screen_x: f32,
    screen_y: f32,
    grid_w: usize,
    grid_h: usize,
    tile_size: u32,
) -> Option<(usize, usize)> {
    let (wx, wy) = camera.screen_to_world(screen_x, screen_y);
    let tile_x = (wx / tile_size as f32).floor();
    let tile_y = (wy / tile_size as f32).floor();

    (tile_x >= 0.0 && tile_y >= 0.0 && (tile_x as usize) < grid_w && (tile_y as usize) < grid_h)
        .then(|| (tile_x as usize, tile_y as usize))
}

/// ViewerState owns the per-session state the render pass reads:
/// the immutable map plus the ephemeral hover highlight and timing.
pub struct ViewerState {
    pub grid: TileGrid,
    pub hovered: Option<(usize, usize)>,
    pub last_render_time_ms: f32,
}

impl ViewerState {
    pub fn new(grid: TileGrid) -> Self {
        Self {
            grid,
            hovered: None,
            last_render_time_ms: 0.0,
        }
    }

    /// Recompute the hovered tile from the current pointer position
    pub fn update_hover(&mut self, camera: &Camera, mouse_pos: (f32, f32), tile_size: u32) {
        let (grid_w, grid_h) = self.grid.dimensions();
        self.hovered = pointer_to_tile(camera, mouse_pos.0, mouse_pos.1, grid_w, grid_h, tile_size);
    }
}
