pub mod segment;
pub mod path;

pub use self::segment::{plot_segment, rasterize_segment};
pub use self::path::{rasterize_path, rasterize_path_with, rasterize_scaled, RasterizedPath};
