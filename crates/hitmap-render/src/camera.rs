use crate::math::{Ray, Vec3};

/// Orthographic probe camera: one parallel ray per pixel, fired along +z
/// from the unit square at z = -1. Not a perspective camera.
pub struct OrthoCamera {
    width: u32,
    height: u32,
}

impl OrthoCamera {
    /// `width` and `height` must both be at least 2; a single-row or
    /// single-column grid has no valid [0, 1] normalization.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let fx = x as f32 / (self.width - 1) as f32;
        let fy = y as f32 / (self.height - 1) as f32;
        Ray {
            origin: Vec3::new(fx, fy, -1.0),
            direction: Vec3::new(0.0, 0.0, 1.0),
        }
    }
}
