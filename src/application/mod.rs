mod camera;
mod config;
mod state;
mod visible;

pub use camera::Camera;
pub use config::ViewerConfig;
pub use state::{ViewerState, pointer_to_tile};
pub use visible::{VisibleRange, compute_visible_range};
