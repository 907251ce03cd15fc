use crate::application::{Camera, ViewerConfig, ViewerState, VisibleRange, compute_visible_range};
use crate::domain::{AtlasLayout, TileGrid};
use crate::ui::{map_area_height, map_area_width};
use macroquad::prelude::*;

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw the visible part of the tile map, one textured quad per block.
/// Returns the range that was drawn so the HUD can report on it.
pub fn draw_tile_map(
    grid: &TileGrid,
    atlas: &AtlasLayout,
    texture: &Texture2D,
    camera: &Camera,
    config: &ViewerConfig,
) -> VisibleRange {
    let (grid_w, grid_h) = grid.dimensions();
    let tile = config.tile_size as f32;

    let range = compute_visible_range(
        camera,
        map_area_width(),
        map_area_height(),
        grid_w,
        grid_h,
        config.tile_size,
        config.min_visible_pixels,
    );

    // One block covers step×step cells, sampled at its top-left cell
    let block_size = tile * range.step as f32 * camera.zoom;

    let mut y = range.y0;
    while y < range.y1 {
        let mut x = range.x0;
        while x < range.x1 {
            let tile_index = grid.at(x, y);
            let (ax, ay, aw, ah) = atlas.source_rect(tile_index);
            let (sx, sy) = camera.world_to_screen(x as f32 * tile, y as f32 * tile);

            draw_texture_ex(
                texture,
                sx,
                sy,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(block_size, block_size)),
                    source: Some(Rect::new(ax, ay, aw, ah)),
                    ..Default::default()
                },
            );
            x += range.step;
        }
        y += range.step;
    }

    range
}

/// Outline the hovered tile in red
pub fn draw_hover_outline(
    hovered: Option<(usize, usize)>,
    camera: &Camera,
    config: &ViewerConfig,
) {
    let Some((hx, hy)) = hovered else {
        return;
    };
    let tile = config.tile_size as f32;
    let (sx, sy) = camera.world_to_screen(hx as f32 * tile, hy as f32 * tile);
    let size = tile * camera.zoom;
    draw_rectangle_lines(sx, sy, size, size, 2.0, RED);
}

/// Draw the stats overlay: FPS, zoom, draw count and hover position
pub fn draw_hud(state: &ViewerState, camera: &Camera, range: &VisibleRange) {
    let (grid_w, grid_h) = state.grid.dimensions();

    draw_rectangle(8.0, 8.0, 190.0, 104.0, Color::from_rgba(0, 0, 0, 160));

    let hovered = match state.hovered {
        Some((x, y)) => format!("Tile: ({}, {})", x, y),
        None => "Tile: -".to_owned(),
    };

    let labels = [
        (format!("FPS: {}", get_fps()), WHITE),
        (
            format!(
                "Map: {}x{} ({})",
                grid_w,
                grid_h,
                format_number(grid_w * grid_h)
            ),
            GRAY,
        ),
        (
            format!("Zoom: {:.3}x  LOD step: {}", camera.zoom, range.step),
            GRAY,
        ),
        (
            format!(
                "Draws: {}  Render: {:.1}ms",
                format_number(range.block_count()),
                state.last_render_time_ms
            ),
            GRAY,
        ),
        (hovered, GRAY),
    ];

    for (i, (text, color)) in labels.iter().enumerate() {
        draw_text(text, 16.0, 26.0 + i as f32 * 18.0, 16.0, *color);
    }
}
