use crate::{
    material::Material,
    math::{Ray, Vector2, Vector3},
};

use super::{Hit, Intersect, SceneObject};

/// Rays closer to the triangle's plane than this (as a cosine) are treated as misses.
const PARALLEL_COSINE: f64 = 1e-2;

/// The raw result of a ray/triangle test, before texture coordinates are applied.
#[derive(Debug, Clone)]
pub(crate) struct TriIntersect {
    pub p: Vector3,
    pub t: f64,
    pub normal: Vector3,
    /// Barycentric weight of the first vertex.
    pub w0: f64,
    /// Barycentric weight of the second vertex.
    pub w1: f64,
}

impl TriIntersect {
    /// Barycentric weight of the third vertex.
    pub fn w2(&self) -> f64 {
        1. - self.w0 - self.w1
    }

    /// Interpolate per-vertex texture coordinates at the hit.
    pub fn uv(&self, (uv0, uv1, uv2): (Vector2, Vector2, Vector2)) -> Vector2 {
        uv0 * self.w0 + uv1 * self.w1 + uv2 * self.w2()
    }

    pub fn into_hit(self, uvs: (Vector2, Vector2, Vector2)) -> Hit {
        let uv = self.uv(uvs);
        Hit::new(self.t, self.p, self.normal, uv)
    }
}

/// Intersect a one-sided triangle. The front face is the one whose normal,
/// `(v1 - v0) x (v2 - v0)`, points back toward the ray.
pub(crate) fn triangle_intersect(
    v0: Vector3,
    v1: Vector3,
    v2: Vector3,
    ray: &Ray,
) -> Option<TriIntersect> {
    let normal = (v1 - v0).cross(v2 - v0).normalize();

    // collinear or repeated vertices span no plane
    if !normal.is_finite() {
        return None;
    }

    // back faces are culled
    if (-ray.direction).dot(normal) < 0. {
        return None;
    }

    let ndrd = ray.direction.dot(normal);
    if ndrd.abs() < PARALLEL_COSINE {
        return None;
    }

    let t = ((-ray.origin).dot(normal) + v0.dot(normal)) / ndrd;
    if t < 0. || !t.is_finite() {
        return None;
    }

    let p = ray.along(t);

    // twice the signed area of each sub-triangle opposite a vertex
    let c0 = (v1 - p).cross(v2 - p);
    let c1 = (v2 - p).cross(v0 - p);
    let c2 = (v0 - p).cross(v1 - p);
    if c0.dot(normal) < 0. || c1.dot(normal) < 0. || c2.dot(normal) < 0. {
        return None;
    }

    let (a0, a1, a2) = (c0.magnitude(), c1.magnitude(), c2.magnitude());
    let area = a0 + a1 + a2;
    if area.is_nan() || area <= 0. {
        return None;
    }

    Some(TriIntersect {
        p,
        t,
        normal,
        w0: a0 / area,
        w1: a1 / area,
    })
}

/// A single-sided triangle with per-vertex texture coordinates.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: (Vector3, Vector3, Vector3),
    pub uvs: (Vector2, Vector2, Vector2),
    pub material: Material,
}

impl Triangle {
    pub fn new(vertices: (Vector3, Vector3, Vector3), material: Material) -> Self {
        Self {
            vertices,
            uvs: Default::default(),
            material,
        }
    }

    pub fn with_uvs(mut self, uvs: (Vector2, Vector2, Vector2)) -> Self {
        self.uvs = uvs;
        self
    }

    /// The unit normal of the front face.
    pub fn normal(&self) -> Vector3 {
        let (v0, v1, v2) = self.vertices;
        (v1 - v0).cross(v2 - v0).normalize()
    }
}

impl Intersect for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let (v0, v1, v2) = self.vertices;
        triangle_intersect(v0, v1, v2, ray).map(|i| i.into_hit(self.uvs))
    }
}

impl SceneObject for Triangle {
    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Faces -z, so rays travelling +z see its front.
    fn facing_camera() -> Triangle {
        Triangle::new(
            (
                Vector3::new(-1., -1., 1.),
                Vector3::new(0., 1., 1.),
                Vector3::new(1., -1., 1.),
            ),
            Material::default(),
        )
        .with_uvs((
            Vector2::new(0., 0.),
            Vector2::new(0.5, 1.),
            Vector2::new(1., 0.),
        ))
    }

    #[test]
    fn normal_faces_viewer() {
        assert_eq!(facing_camera().normal(), Vector3::new(0., 0., -1.));
    }

    #[test]
    fn front_hit_reports_distance_and_point() {
        let tri = facing_camera();
        let ray = Ray::new(Vector3::new(0., 0., -1.), Vector3::new(0., 0., 1.));
        let hit = tri.intersect(&ray).unwrap();
        assert_abs_diff_eq!(hit.distance, 2., epsilon = 1e-12);
        assert_abs_diff_eq!(hit.point.z, 1., epsilon = 1e-12);
    }

    #[test]
    fn barycentric_weights_rebuild_point() {
        let tri = facing_camera();
        let (v0, v1, v2) = tri.vertices;
        for (x, y) in [(0., 0.), (0.3, -0.5), (-0.6, -0.9), (0., 0.9)] {
            let ray = Ray::new(Vector3::new(x, y, -1.), Vector3::new(0., 0., 1.));
            let i = triangle_intersect(v0, v1, v2, &ray).unwrap();

            assert_abs_diff_eq!(i.w0 + i.w1 + i.w2(), 1., epsilon = 1e-12);
            let rebuilt = v0 * i.w0 + v1 * i.w1 + v2 * i.w2();
            assert_abs_diff_eq!(rebuilt.x, i.p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(rebuilt.y, i.p.y, epsilon = 1e-9);
            assert_abs_diff_eq!(rebuilt.z, i.p.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn uv_interpolates_vertex_coordinates() {
        let tri = facing_camera();
        // the top vertex carries uv (0.5, 1)
        let ray = Ray::new(Vector3::new(0., 0.999, -1.), Vector3::new(0., 0., 1.));
        let hit = tri.intersect(&ray).unwrap();
        assert_abs_diff_eq!(hit.uv.x, 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(hit.uv.y, 1., epsilon = 1e-3);
    }

    #[test]
    fn back_faces_are_culled() {
        let tri = facing_camera();
        let ray = Ray::new(Vector3::new(0., 0., 3.), Vector3::new(0., 0., -1.));
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn outside_edges_and_grazing_rays_miss() {
        let tri = facing_camera();
        let outside = Ray::new(Vector3::new(0.9, 0.9, -1.), Vector3::new(0., 0., 1.));
        assert!(tri.intersect(&outside).is_none());

        let grazing = Ray::new(
            Vector3::new(-5., 0., 0.99),
            Vector3::new(1., 0., 0.005).normalize(),
        );
        assert!(tri.intersect(&grazing).is_none());

        let behind = Ray::new(Vector3::new(0., 0., 2.), Vector3::new(0., 0., 1.));
        assert!(tri.intersect(&behind).is_none());
    }

    #[test]
    fn degenerate_triangles_never_hit() {
        let ray = Ray::new(Vector3::new(0., 0., -1.), Vector3::new(0., 0., 1.));
        let v = Vector3::new(-1., -1., 1.);

        // repeated vertex
        assert!(triangle_intersect(v, v, Vector3::new(1., 0., 1.), &ray).is_none());
        // collinear vertices
        let collinear = Triangle::new(
            (v, Vector3::new(0., 0., 1.), Vector3::new(1., 1., 1.)),
            Material::default(),
        );
        assert!(collinear.intersect(&ray).is_none());
    }
}
