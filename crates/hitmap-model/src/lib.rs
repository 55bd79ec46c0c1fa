//! Shared data structures for Hitmap.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeshFile {
    pub version: u32,
    pub meshes: Vec<MeshData>,
}

/// A mesh given as a vertex list and an index list. Triangles whose
/// indices fall outside `vertices` are ignored by the scene builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<[f32; 3]>,
    pub triangles: Vec<[u32; 3]>,
}
