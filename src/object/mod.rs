mod sphere;
mod square;
mod triangle;

use crate::{
    material::Material,
    math::{Ray, Vector2, Vector3},
};

pub use sphere::*;
pub use square::*;
pub use triangle::*;

/// The result of a ray intersection.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// Distance along the ray. Always finite and non-negative.
    pub distance: f64,
    pub point: Vector3,
    /// Unit length. Spheres point outward; triangles follow their winding.
    pub normal: Vector3,
    pub uv: Vector2,
}

impl Hit {
    pub fn new(distance: f64, point: Vector3, normal: Vector3, uv: Vector2) -> Self {
        Self {
            distance,
            point,
            normal,
            uv,
        }
    }
}

/// A trait that represents any type that can be intersected by a Ray.
pub trait Intersect {
    /// Find the intersection, if any, between the ray provided and this shape.
    /// Intersections behind the ray origin are never reported.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}

/// A trait that represents any type that is a scene object, and can thus be viewed in the final render.
pub trait SceneObject: Intersect + Send + Sync {
    /// Grab this scene object's material.
    fn material(&self) -> &Material;
}
