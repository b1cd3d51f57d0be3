use crate::{
    material::Material,
    math::{Ray, Vector2, Vector3},
};

use super::{Hit, Intersect, SceneObject};

/// A sphere. Spheres carry no texture coordinates.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let b = ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let det = b * b - c;
        if det < 0. {
            return None;
        }

        let root = det.sqrt();
        let (d1, d2) = (-b + root, -b - root);

        // the near root, unless the origin is inside or past it
        let mut d = d1.min(d2);
        if d < 0. {
            d = d1.max(d2);
        }
        if d < 0. {
            return None;
        }

        let point = ray.along(d);
        Some(Hit::new(
            d,
            point,
            (point - self.center).normalize(),
            Vector2::default(),
        ))
    }
}

impl SceneObject for Sphere {
    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vector3::new(0., 0., 2.), 1., Material::default())
    }

    #[test]
    fn ray_through_center_hits_front() {
        let sphere = unit_sphere();
        for origin in [
            Vector3::new(0., 0., -1.5),
            Vector3::new(4., 3., 2.),
            Vector3::new(-2., -6., 5.),
        ] {
            let to_center = sphere.center - origin;
            let ray = Ray::new(origin, to_center.normalize());
            let hit = sphere.intersect(&ray).unwrap();

            assert_abs_diff_eq!(hit.distance, to_center.magnitude() - 1., epsilon = 1e-9);
            let outward = -to_center.normalize();
            assert_abs_diff_eq!(hit.normal.dot(outward), 1., epsilon = 1e-9);
        }
    }

    #[test]
    fn origin_inside_uses_far_root() {
        let sphere = unit_sphere();
        let ray = Ray::new(sphere.center, Vector3::new(0., 1., 0.));
        let hit = sphere.intersect(&ray).unwrap();
        assert_abs_diff_eq!(hit.distance, 1., epsilon = 1e-12);
        assert_abs_diff_eq!(hit.normal.y, 1., epsilon = 1e-12);
    }

    #[test]
    fn misses_and_hits_behind_are_rejected() {
        let sphere = unit_sphere();
        let past = Ray::new(Vector3::new(0., 2., 0.), Vector3::new(0., 0., 1.));
        assert!(sphere.intersect(&past).is_none());

        let behind = Ray::new(Vector3::new(0., 0., 5.), Vector3::new(0., 0., 1.));
        assert!(sphere.intersect(&behind).is_none());
    }

    #[test]
    fn uv_is_not_set() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., 0., 1.));
        assert_eq!(sphere.intersect(&ray).unwrap().uv, Vector2::default());
    }
}
