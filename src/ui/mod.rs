mod scrollbar;

pub use scrollbar::Scrollbar;

use macroquad::prelude::{screen_height, screen_width};

/// Thickness of the scrollbar gutters on the right and bottom edges
pub const SCROLLBAR_SIZE: f32 = 16.0;

/// Width of the map viewport (window minus the vertical scrollbar)
pub fn map_area_width() -> f32 {
    screen_width() - SCROLLBAR_SIZE
}

/// Height of the map viewport (window minus the horizontal scrollbar)
pub fn map_area_height() -> f32 {
    screen_height() - SCROLLBAR_SIZE
}
