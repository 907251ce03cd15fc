// Domain layer - map data and atlas math
pub mod domain;

// Application layer - camera, visible-set/LOD selection, viewer state
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Camera, ViewerConfig, ViewerState, VisibleRange, compute_visible_range};
pub use domain::{AtlasLayout, TileGrid, TilesetError};
pub use ui::Scrollbar;
