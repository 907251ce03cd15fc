use macroquad::prelude::*;
use tilemap_viewer::{
    Camera, TileGrid, TilesetError, ViewerConfig, ViewerState,
    domain::AtlasLayout,
    input, rendering,
    ui::{self, Scrollbar},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Tilemap Viewer".to_owned(),
        window_width: 800,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

async fn load_tileset(path: &str) -> Result<Texture2D, TilesetError> {
    let texture = load_texture(path).await.map_err(|err| TilesetError::Load {
        path: path.to_owned(),
        reason: format!("{err:?}"),
    })?;
    // Nearest filtering keeps pixel-art tile edges crisp
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::default();

    // A viewer without a tileset cannot draw anything; bail out instead
    // of limping along with placeholders
    let texture = match load_tileset(&config.tileset_path).await {
        Ok(texture) => texture,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };
    let atlas = match AtlasLayout::new(
        config.tile_size,
        config.tiles_per_row,
        texture.width() as u32,
        texture.height() as u32,
    ) {
        Ok(atlas) => atlas,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded tileset {} ({}x{}, {} tiles)",
        config.tileset_path,
        atlas.atlas_width,
        atlas.atlas_height,
        atlas.tile_count()
    );

    let fill_start = std::time::Instant::now();
    let grid = TileGrid::random(config.map_width, config.map_height, atlas.tile_count());
    log::info!(
        "filled {}x{} map with random tiles in {:.0}ms",
        config.map_width,
        config.map_height,
        fill_start.elapsed().as_secs_f64() * 1000.0
    );

    let mut state = ViewerState::new(grid);
    let mut camera = Camera::new(config.min_zoom, config.max_zoom);
    let mut drag_anchor: Option<(f32, f32)> = None;

    let mut hscroll = Scrollbar::horizontal(0.0, 0.0, 1.0, ui::SCROLLBAR_SIZE);
    let mut vscroll = Scrollbar::vertical(0.0, 0.0, ui::SCROLLBAR_SIZE, 1.0);

    loop {
        let mouse_pos = mouse_position();
        let (area_w, area_h) = (ui::map_area_width(), ui::map_area_height());

        // Keep the scrollbar gutters glued to the window edges
        hscroll.set_bounds(0.0, area_h, area_w, ui::SCROLLBAR_SIZE);
        vscroll.set_bounds(area_w, 0.0, ui::SCROLLBAR_SIZE, area_h);

        // Scrollbar drags move the camera...
        if let Some(value) = hscroll.update(mouse_pos) {
            camera.offset_x = -value;
        }
        if let Some(value) = vscroll.update(mouse_pos) {
            camera.offset_y = -value;
        }

        input::handle_pan(&mut camera, mouse_pos, &mut drag_anchor);
        input::handle_zoom(&mut camera, mouse_pos);
        input::handle_keyboard(&mut camera);
        state.update_hover(&camera, mouse_pos, config.tile_size);

        // ...and pan/zoom moves the scrollbars back
        let tile = config.tile_size as f32;
        let content_w = config.map_width as f32 * tile * camera.zoom;
        let content_h = config.map_height as f32 * tile * camera.zoom;
        hscroll.sync(-camera.offset_x, area_w, content_w.max(area_w));
        vscroll.sync(-camera.offset_y, area_h, content_h.max(area_h));

        // Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(Color::from_rgba(26, 26, 26, 255));
        let range = rendering::draw_tile_map(&state.grid, &atlas, &texture, &camera, &config);
        rendering::draw_hover_outline(state.hovered, &camera, &config);
        rendering::draw_hud(&state, &camera, &range);
        hscroll.draw(mouse_pos);
        vscroll.draw(mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
