use crate::bvh::Bvh;
use crate::geometry::{Hit, Triangle};
use crate::math::{Ray, Vec3};
use hitmap_model::MeshData;

/// Nearest-intersection query over a committed scene. The render loop only
/// depends on this trait, so any conforming intersector can stand in for
/// the built-in BVH.
pub trait Intersect {
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}

/// Collects meshes before committing them into an immutable [`Scene`].
///
/// Each attached mesh gets a geometry id in attachment order; ids are
/// stable for the lifetime of the committed scene. Empty meshes and
/// triangles whose indices fall outside the vertex list contribute
/// nothing: a scene built from degenerate input renders as all-miss
/// rather than failing.
#[derive(Default)]
pub struct SceneBuilder {
    triangles: Vec<Triangle>,
    next_geom_id: u32,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, mesh: &MeshData) -> u32 {
        let geom_id = self.next_geom_id;
        self.next_geom_id += 1;

        for (prim_id, face) in mesh.triangles.iter().enumerate() {
            let vertex = |index: u32| {
                mesh.vertices
                    .get(index as usize)
                    .map(|v| Vec3::new(v[0], v[1], v[2]))
            };
            let (Some(v0), Some(v1), Some(v2)) = (vertex(face[0]), vertex(face[1]), vertex(face[2]))
            else {
                continue;
            };

            self.triangles.push(Triangle {
                v0,
                v1,
                v2,
                geom_id,
                prim_id: prim_id as u32,
            });
        }

        geom_id
    }

    /// Finalizes the scene. Consuming the builder means no geometry can be
    /// attached after commit and no query can run before it.
    pub fn commit(self) -> Scene {
        Scene {
            bvh: Bvh::new(self.triangles),
        }
    }
}

/// A committed, immutable aggregate of meshes plus the acceleration
/// structure built over them.
pub struct Scene {
    bvh: Bvh,
}

impl Scene {
    pub fn triangle_count(&self) -> usize {
        self.bvh.triangles().len()
    }
}

impl Intersect for Scene {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.bvh.hit(ray, 0.0, f32::INFINITY)
    }
}

/// The built-in demo geometry: one unit right triangle in the z = 0 plane.
pub fn demo_mesh() -> MeshData {
    MeshData {
        vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        triangles: vec![[0, 1, 2]],
    }
}
