use crate::{
    math::{Ray, Vector3},
    object::Hit,
    scene::Scene,
};

use super::LightShading;

/// A point light, which is a light that emits in all directions from a specified position.
/// It has no color or falloff; its intensity is folded into the materials.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// The position in space of this light.
    pub position: Vector3,
}

impl Point {
    pub fn new(position: Vector3) -> Self {
        Self { position }
    }

    /// Shade the hit of `ray` against the scene object at `object`.
    pub fn shading(&self, ray: &Ray, object: usize, hit: &Hit, scene: &Scene) -> LightShading {
        let to_light = self.position - hit.point;
        let dist = to_light.magnitude();
        let lvec = to_light / dist;

        // an object never shadows itself
        let shadow_ray = Ray::offset(hit.point, lvec, scene.options.epsilon);
        if let Some(blocker) = scene.closest_hit(&shadow_ray) {
            if blocker.hit.distance <= dist && blocker.index != object {
                return LightShading::Shadowed {
                    transmittance: blocker
                        .object
                        .material()
                        .transparency
                        .max(scene.options.shadow_floor),
                };
            }
        }

        let shininess = scene.objects[object].material().shininess;
        LightShading::Lit {
            diffuse: hit.normal.dot(lvec).max(0.),
            specular: lvec.dot(-ray.direction).max(0.).powf(shininess),
        }
    }
}
