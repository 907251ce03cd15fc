mod tile_grid;
mod tileset;

pub use tile_grid::TileGrid;
pub use tileset::{AtlasLayout, TilesetError};
