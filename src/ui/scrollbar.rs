use macroquad::prelude::*;

const MIN_THUMB: f32 = 16.0;

/// Scrollbar widget with a draggable thumb, bound two ways to the camera:
/// pan/zoom updates the thumb through `sync`, dragging the thumb reports
/// a new scroll value (the negated camera offset) from `update`.
pub struct Scrollbar {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    horizontal: bool,
    value: f32,  // scroll position in content pixels
    window: f32, // visible extent in content pixels
    max: f32,    // total content extent in content pixels
    dragging: bool,
    drag_grab: f32, // pointer offset inside the thumb at drag start
}

impl Scrollbar {
    pub fn horizontal(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, width, height, true)
    }

    pub fn vertical(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, width, height, false)
    }

    fn new(x: f32, y: f32, width: f32, height: f32, horizontal: bool) -> Self {
        Self {
            x,
            y,
            width,
            height,
            horizontal,
            value: 0.0,
            window: 1.0,
            max: 1.0,
            dragging: false,
            drag_grab: 0.0,
        }
    }

    /// Update geometry for responsive layout
    pub fn set_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    /// Push the camera-derived scroll state into the widget:
    /// `value` is the scroll position, `window` the visible extent and
    /// `max` the content extent, all in content pixels.
    pub fn sync(&mut self, value: f32, window: f32, max: f32) {
        self.window = window.max(1.0);
        self.max = max.max(self.window);
        self.value = value.clamp(0.0, self.scroll_limit());
    }

    fn scroll_limit(&self) -> f32 {
        self.max - self.window
    }

    fn track_length(&self) -> f32 {
        if self.horizontal { self.width } else { self.height }
    }

    /// Thumb position and length along the track, in widget pixels
    fn thumb_metrics(&self) -> (f32, f32) {
        let track = self.track_length();
        let len = (track * self.window / self.max).max(MIN_THUMB).min(track);
        let limit = self.scroll_limit();
        let pos = if limit > 0.0 {
            (track - len) * (self.value / limit)
        } else {
            0.0
        };
        (pos, len)
    }

    /// Scroll value corresponding to a thumb position along the track
    fn value_for_thumb_pos(&self, pos: f32) -> f32 {
        let (_, len) = self.thumb_metrics();
        let play = self.track_length() - len;
        if play > 0.0 {
            (pos / play).clamp(0.0, 1.0) * self.scroll_limit()
        } else {
            0.0
        }
    }

    /// Handle pointer interaction; returns the new scroll value when the
    /// user moved the thumb this frame.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<f32> {
        let along = if self.horizontal {
            mouse_pos.0 - self.x
        } else {
            mouse_pos.1 - self.y
        };
        let (thumb_pos, thumb_len) = self.thumb_metrics();

        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            if along >= thumb_pos && along <= thumb_pos + thumb_len {
                self.dragging = true;
                self.drag_grab = along - thumb_pos;
            } else {
                // Track click: center the thumb on the pointer
                self.dragging = true;
                self.drag_grab = thumb_len / 2.0;
                self.value = self.value_for_thumb_pos(along - self.drag_grab);
                return Some(self.value);
            }
        }

        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }

        if self.dragging {
            let new_value = self.value_for_thumb_pos(along - self.drag_grab);
            if new_value != self.value {
                self.value = new_value;
                return Some(new_value);
            }
        }
        None
    }

    /// Check if mouse is over the widget
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw track and thumb with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_rectangle(
            self.x,
            self.y,
            self.width,
            self.height,
            Color::from_rgba(30, 30, 30, 255),
        );

        let (pos, len) = self.thumb_metrics();
        let color = if self.dragging || self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        if self.horizontal {
            draw_rectangle(self.x + pos, self.y + 2.0, len, self.height - 4.0, color);
        } else {
            draw_rectangle(self.x + 2.0, self.y + pos, self.width - 4.0, len, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumb_spans_track_when_everything_fits() {
        let mut bar = Scrollbar::horizontal(0.0, 0.0, 200.0, 16.0);
        bar.sync(0.0, 800.0, 400.0); // content smaller than window
        let (pos, len) = bar.thumb_metrics();
        assert_eq!(pos, 0.0);
        assert_eq!(len, 200.0);
        assert_eq!(bar.scroll_limit(), 0.0);
    }

    #[test]
    fn test_thumb_tracks_value() {
        let mut bar = Scrollbar::horizontal(0.0, 0.0, 200.0, 16.0);
        // Window sees half the content; thumb takes half the track
        bar.sync(0.0, 800.0, 1_600.0);
        let (pos, len) = bar.thumb_metrics();
        assert_eq!((pos, len), (0.0, 100.0));

        // Scrolled to the end
        bar.sync(800.0, 800.0, 1_600.0);
        let (pos, _) = bar.thumb_metrics();
        assert_eq!(pos, 100.0);
    }

    #[test]
    fn test_value_round_trips_through_thumb_pos() {
        let mut bar = Scrollbar::vertical(0.0, 0.0, 16.0, 300.0);
        bar.sync(1_234.0, 600.0, 9_600.0);
        let (pos, _) = bar.thumb_metrics();
        assert!((bar.value_for_thumb_pos(pos) - 1_234.0).abs() < 0.5);
    }

    #[test]
    fn test_sync_clamps_value_to_content() {
        let mut bar = Scrollbar::horizontal(0.0, 0.0, 200.0, 16.0);
        bar.sync(5_000.0, 800.0, 1_600.0);
        assert_eq!(bar.value, 800.0);
        bar.sync(-50.0, 800.0, 1_600.0);
        assert_eq!(bar.value, 0.0);
    }
}
