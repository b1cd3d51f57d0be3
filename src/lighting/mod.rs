mod point;

pub use point::*;

/// The result of the light's influence on a ray intersection.
#[derive(Clone, Debug, PartialEq)]
pub enum LightShading {
    /// The light reaches the point unobstructed.
    Lit { diffuse: f64, specular: f64 },

    /// Something sits between the point and the light. `transmittance` is
    /// how much of the ambient color still shows through.
    Shadowed { transmittance: f64 },
}
