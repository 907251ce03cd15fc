/// Camera holds the pan/zoom state of the viewport and converts between
/// screen pixels and world pixels (`screen = world * zoom + offset`).
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = one world pixel per screen pixel
    min_zoom: f32,
    max_zoom: f32,
}

impl Camera {
    /// Create a camera at the origin with the given zoom clamp range.
    /// The clamp keeps `zoom` strictly positive, which `screen_to_world`
    /// and the LOD step computation rely on.
    pub fn new(min_zoom: f32, max_zoom: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            min_zoom,
            max_zoom,
        }
    }

    /// Convert world coordinates to screen coordinates
    pub fn world_to_screen(&self, wx: f32, wy: f32) -> (f32, f32) {
        (wx * self.zoom + self.offset_x, wy * self.zoom + self.offset_y)
    }

    /// Convert screen coordinates to world coordinates
    pub fn screen_to_world(&self, sx: f32, sy: f32) -> (f32, f32) {
        ((sx - self.offset_x) / self.zoom, (sy - self.offset_y) / self.zoom)
    }

    /// World-space rectangle (left, top, right, bottom) covered by the
    /// viewport
    pub fn visible_world_rect(&self, viewport_w: f32, viewport_h: f32) -> (f32, f32, f32, f32) {
        let (left, top) = self.screen_to_world(0.0, 0.0);
        let (right, bottom) = self.screen_to_world(viewport_w, viewport_h);
        (left, top, right, bottom)
    }

    /// Pan by a screen-pixel delta
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Zoom by `factor`, keeping the world point under screen position
    /// (sx, sy) fixed. The world point must be captured with the old
    /// transform and the offset recomputed with the new zoom; swapping
    /// that order makes the view jump toward the origin while zooming.
    pub fn zoom_at_screen_point(&mut self, sx: f32, sy: f32, factor: f32) {
        let (wx, wy) = self.screen_to_world(sx, sy);
        self.zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        self.offset_x = sx - wx * self.zoom;
        self.offset_y = sy - wy * self.zoom;
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        let config = crate::application::ViewerConfig::default();
        Self::new(config.min_zoom, config.max_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_screen_world_round_trip() {
        let mut camera = Camera::default();
        camera.offset_x = -137.5;
        camera.offset_y = 42.25;
        camera.zoom = 1.75;

        for &(sx, sy) in &[(0.0, 0.0), (800.0, 600.0), (13.0, 977.0)] {
            let (wx, wy) = camera.screen_to_world(sx, sy);
            let (rx, ry) = camera.world_to_screen(wx, wy);
            assert!((rx - sx).abs() < EPS, "{rx} vs {sx}");
            assert!((ry - sy).abs() < EPS, "{ry} vs {sy}");
        }
    }

    #[test]
    fn test_zoom_keeps_cursor_anchored() {
        let mut camera = Camera::default();
        camera.offset_x = -50.0;
        camera.offset_y = 30.0;

        let (sx, sy) = (413.0, 287.0);
        let before = camera.screen_to_world(sx, sy);
        camera.zoom_at_screen_point(sx, sy, 1.1);
        let after = camera.screen_to_world(sx, sy);

        assert!((before.0 - after.0).abs() < EPS);
        assert!((before.1 - after.1).abs() < EPS);

        // And again zooming out several ticks
        for _ in 0..5 {
            camera.zoom_at_screen_point(sx, sy, 0.9);
        }
        let after = camera.screen_to_world(sx, sy);
        assert!((before.0 - after.0).abs() < EPS);
        assert!((before.1 - after.1).abs() < EPS);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new(0.001, 64.0);
        for _ in 0..1000 {
            camera.zoom_at_screen_point(400.0, 300.0, 0.9);
        }
        assert!(camera.zoom >= 0.001);

        for _ in 0..1000 {
            camera.zoom_at_screen_point(400.0, 300.0, 1.1);
        }
        assert!(camera.zoom <= 64.0);
    }

    #[test]
    fn test_visible_world_rect_at_identity() {
        let camera = Camera::default();
        let (left, top, right, bottom) = camera.visible_world_rect(800.0, 600.0);
        assert_eq!((left, top), (0.0, 0.0));
        assert_eq!((right, bottom), (800.0, 600.0));
    }

    #[test]
    fn test_screen_origin_maps_to_world_origin_when_unpanned() {
        // Pointer at (0,0) with offset (0,0) and zoom 2 is world (0,0)
        let mut camera = Camera::default();
        camera.zoom = 2.0;
        assert_eq!(camera.screen_to_world(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_pan_by_accumulates() {
        let mut camera = Camera::default();
        camera.pan_by(10.0, -4.0);
        camera.pan_by(-2.5, 1.0);
        assert_eq!(camera.offset_x, 7.5);
        assert_eq!(camera.offset_y, -3.0);
    }
}
