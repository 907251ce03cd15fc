use crate::application::Camera;

/// VisibleRange is the clamped tile-index window the renderer iterates
/// this frame, plus the LOD stride. Recomputed every frame; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
    /// How many grid cells one rendered block spans per axis (>= 1)
    pub step: usize,
}

impl VisibleRange {
    /// True when nothing falls inside the viewport (e.g. panned off-map)
    pub fn is_empty(&self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }

    /// Number of draw operations iterating this range will issue
    pub fn block_count(&self) -> usize {
        (self.x1 - self.x0).div_ceil(self.step) * (self.y1 - self.y0).div_ceil(self.step)
    }
}

/// Map the camera's visible world rectangle to the tile indices that must
/// be drawn, and pick a stride so no rendered block shrinks below
/// `min_visible_pixels` on screen.
///
/// floor() on the leading edge and ceil() on the trailing edge keep
/// partially visible tiles included; clamping both edges into
/// `[0, grid_w]` / `[0, grid_h]` is the sole guard against out-of-bounds
/// reads and collapses fully off-map views to an empty range. The clamp
/// is monotone, so x0 <= x1 and y0 <= y1 always hold afterwards.
///
/// The stride bounds per-frame draw calls by roughly
/// `viewport_area / min_visible_pixels^2` no matter how large the map is.
/// Only the top-left cell of each step×step block is sampled; that is a
/// decimation, not a mipmap, so aliasing at far zoom is expected.
pub fn compute_visible_range(
    camera: &Camera,
    viewport_w: f32,
    viewport_h: f32,
    grid_w: usize,
    grid_h: usize,
    tile_size: u32,
    min_visible_pixels: f32,
) -> VisibleRange {
    let (left, top, right, bottom) = camera.visible_world_rect(viewport_w, viewport_h);
    let tile = tile_size as f32;

    let x0 = (left / tile).floor().clamp(0.0, grid_w as f32) as usize;
    let y0 = (top / tile).floor().clamp(0.0, grid_h as f32) as usize;
    let x1 = (right / tile).ceil().clamp(0.0, grid_w as f32) as usize;
    let y1 = (bottom / tile).ceil().clamp(0.0, grid_h as f32) as usize;

    let pixels_per_tile = tile * camera.zoom;
    let step = (min_visible_pixels / pixels_per_tile).ceil().max(1.0) as usize;

    VisibleRange { x0, y0, x1, y1, step }
}
