use crate::application::Camera;
use crate::ui::{map_area_height, map_area_width};
use macroquad::prelude::*;

/// Fixed wheel-zoom ratios per tick, no smoothing
pub const ZOOM_IN_FACTOR: f32 = 1.1;
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

fn over_map_area(mouse_pos: (f32, f32)) -> bool {
    mouse_pos.0 < map_area_width() && mouse_pos.1 < map_area_height()
}

/// Handle cursor-anchored zoom with the mouse wheel
pub fn handle_zoom(camera: &mut Camera, mouse_pos: (f32, f32)) {
    if !over_map_area(mouse_pos) {
        return;
    }
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_at_screen_point(mouse_pos.0, mouse_pos.1, ZOOM_IN_FACTOR);
    } else if wheel < 0.0 {
        camera.zoom_at_screen_point(mouse_pos.0, mouse_pos.1, ZOOM_OUT_FACTOR);
    }
}

/// Handle pan with left mouse drag. `drag_anchor` carries the previous
/// pointer position across frames; a drag only starts inside the map
/// area so it cannot steal the pointer from the scrollbars.
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32), drag_anchor: &mut Option<(f32, f32)>) {
    if is_mouse_button_down(MouseButton::Left) {
        match *drag_anchor {
            Some(last) => {
                camera.pan_by(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
                *drag_anchor = Some(mouse_pos);
            }
            None => {
                if over_map_area(mouse_pos) && is_mouse_button_pressed(MouseButton::Left) {
                    *drag_anchor = Some(mouse_pos);
                }
            }
        }
    } else {
        *drag_anchor = None;
    }
}

/// Process keyboard input: 'H' homes the camera
pub fn handle_keyboard(camera: &mut Camera) {
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}
