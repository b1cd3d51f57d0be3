use crate::{
    material::Material,
    math::{Ray, Vector2, Vector3},
};

use super::{triangle::triangle_intersect, Hit, Intersect, SceneObject};

/// A quad built from two triangles sharing the `v0`-`v2` diagonal:
/// `(v0, v1, v2)` and `(v0, v2, v3)`.
#[derive(Debug, Clone)]
pub struct Square {
    pub vertices: [Vector3; 4],
    pub uvs: [Vector2; 4],
    pub material: Material,
}

impl Square {
    pub fn new(vertices: [Vector3; 4], material: Material) -> Self {
        Self {
            vertices,
            uvs: [Vector2::default(); 4],
            material,
        }
    }

    pub fn with_uvs(mut self, uvs: [Vector2; 4]) -> Self {
        self.uvs = uvs;
        self
    }

    /// Corner indices of the two triangles.
    const TRIANGLES: [[usize; 3]; 2] = [[0, 1, 2], [0, 2, 3]];

    fn half(&self, [a, b, c]: [usize; 3], ray: &Ray) -> Option<Hit> {
        triangle_intersect(self.vertices[a], self.vertices[b], self.vertices[c], ray)
            .map(|i| i.into_hit((self.uvs[a], self.uvs[b], self.uvs[c])))
    }
}

impl Intersect for Square {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let [first, second] = Self::TRIANGLES;
        match (self.half(first, ray), self.half(second, ray)) {
            (Some(a), Some(b)) => Some(if a.distance < b.distance { a } else { b }),
            (a, b) => a.or(b),
        }
    }
}

impl SceneObject for Square {
    fn material(&self) -> &Material {
        &self.material
    }
}
