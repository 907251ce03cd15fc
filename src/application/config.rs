/// ViewerConfig gathers the tunables of the viewer in one place.
/// Defaults match the shipped demo: a 10000×10000 map of 16px tiles from
/// an 8-tiles-per-row atlas.
pub struct ViewerConfig {
    /// Edge length of one tile in world pixels
    pub tile_size: u32,
    /// Tiles per row in the tileset atlas
    pub tiles_per_row: u32,
    /// Map dimensions in cells
    pub map_width: usize,
    pub map_height: usize,
    /// No rendered block may be smaller than this many screen pixels;
    /// drives the LOD stride
    pub min_visible_pixels: f32,
    /// Zoom clamp range. The floor keeps screen_to_world and the LOD
    /// stride away from a division by zero when the wheel multiplies the
    /// zoom down in finite precision.
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Tileset atlas image, loaded at startup
    pub tileset_path: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tile_size: 16,
            tiles_per_row: 8,
            map_width: 10_000,
            map_height: 10_000,
            min_visible_pixels: 4.0,
            min_zoom: 0.001,
            max_zoom: 64.0,
            tileset_path: "tileset.png".to_owned(),
        }
    }
}
