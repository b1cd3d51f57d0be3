mod ray;
mod vector;

pub use ray::*;
pub use vector::*;

/// Bilinearly interpolate between four vectors.
pub fn blerp(tx: f64, ty: f64, c00: Vector3, c10: Vector3, c01: Vector3, c11: Vector3) -> Vector3 {
    let a = c00 * (1. - tx) + c10 * tx;
    let b = c01 * (1. - tx) + c11 * tx;
    a * (1. - ty) + b * ty
}

/// Calculate the transmitted direction of a ray crossing a dielectric
/// boundary with index of refraction `ior` on the inner side.
///
/// Entering or leaving is decided by which side of `normal` the ray comes
/// from; leaving uses the reciprocal index and the flipped normal. Returns
/// `None` under total internal reflection.
pub fn refraction_vec(in_ray: &Ray, normal: Vector3, ior: f64) -> Option<Vector3> {
    let (eta, normal) = if in_ray.direction.dot(normal) >= 0. {
        (1. / ior, -normal)
    } else {
        (ior, normal)
    };

    let cos1 = (-in_ray.direction).dot(normal);
    let sin1 = (1. - cos1 * cos1).max(0.).sqrt();
    let sin2 = sin1 / eta;
    let cos2_sq = 1. - sin2 * sin2;
    if cos2_sq < 0. {
        return None;
    }
    let cos2 = cos2_sq.sqrt();

    // tangential component; vanishes for rays along the normal
    let tangent = normal * cos1 + in_ray.direction;
    if tangent.magnitude() < 1e-12 {
        return Some(-normal);
    }

    Some((-normal * cos2 + tangent.normalize() * sin2).normalize())
}
