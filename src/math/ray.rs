use super::Vector3;

/// A half-line cast into the scene. Rays are never mutated; every bounce or
/// shadow probe builds a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray. The direction is expected to be already normalized.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Instantiate a Ray whose origin is nudged `epsilon` along its own
    /// direction, so it does not immediately strike the surface it leaves.
    pub fn offset(origin: Vector3, direction: Vector3, epsilon: f64) -> Self {
        Self::new(origin + direction * epsilon, direction)
    }

    pub fn along(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }

    /// The mirror direction of this ray about `normal`.
    pub fn reflect(&self, normal: Vector3) -> Vector3 {
        (normal * (2. * (-self.direction).dot(normal)) + self.direction).normalize()
    }
}
