//! CPU ray-cast occupancy imaging and image output.

pub mod math;
pub mod camera;
pub mod geometry;
pub mod bvh;
pub mod scene;
pub mod raster;
pub mod render;
pub mod image_out;

pub use camera::OrthoCamera;
pub use image_out::{write_png, write_ppm};
pub use raster::Raster;
pub use render::{render_scene, RenderSettings};
pub use scene::{demo_mesh, Intersect, Scene, SceneBuilder};
