use crate::camera::OrthoCamera;
use crate::geometry::Hit;
use crate::raster::Raster;
use crate::scene::Intersect;

pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

/// Binary visibility: any hit is full white, a miss is black.
pub fn classify(result: Option<Hit>) -> u8 {
    if result.is_some() {
        255
    } else {
        0
    }
}

/// Casts one orthographic ray per pixel and records the hit/miss
/// classification. Rows are filled top to bottom, pixels left to right;
/// every cell is written exactly once.
pub fn render_scene<S: Intersect>(scene: &S, settings: &RenderSettings) -> Raster {
    let camera = OrthoCamera::new(settings.width, settings.height);
    let mut raster = Raster::new(settings.width, settings.height);

    for y in 0..settings.height {
        for x in 0..settings.width {
            let ray = camera.ray(x, y);
            let result = scene.intersect(&ray);
            raster.set(x, y, classify(result));
        }
    }

    raster
}
