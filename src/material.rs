use std::sync::Arc;

use crate::{math::Vector3, texture::Texture};

/// A 24-bit color, RGB. Used wherever a float color is quantized to bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Instantiate a new Color from 3 f64s, expected to be in the range 0-1.
    /// Values are clamped, then truncated.
    pub fn newf(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r.clamp(0., 1.) * 255.0) as u8,
            g: (g.clamp(0., 1.) * 255.0) as u8,
            b: (b.clamp(0., 1.) * 255.0) as u8,
        }
    }
}

impl From<Vector3> for Color {
    fn from(v: Vector3) -> Self {
        Self::newf(v.x, v.y, v.z)
    }
}

impl From<Color> for Vector3 {
    fn from(c: Color) -> Self {
        Vector3::new(c.r as f64, c.g as f64, c.b as f64) / 255.
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

/// The Phong material of a scene object.
#[derive(Debug, Clone)]
pub struct Material {
    pub ambient: Vector3,
    pub diffuse: Vector3,
    pub specular: Vector3,

    /// The exponent the specular term is raised to. Must be positive.
    pub shininess: f64,

    /// How much of the final color comes from the mirror-reflected ray (0 to 1).
    pub reflectivity: f64,

    /// How much of the final color comes from the refracted ray (0 to 1).
    /// Also the share of light an occluder lets through to surfaces it shadows.
    pub transparency: f64,

    /// Sampled and multiplied into the ambient term when present.
    pub ambient_texture: Option<Arc<Texture>>,

    /// Sampled and multiplied into the diffuse term when present.
    pub diffuse_texture: Option<Arc<Texture>>,
}

impl Material {
    /// A material whose ambient, diffuse and specular colors are all `color`.
    pub fn new(color: Vector3) -> Self {
        Self {
            ambient: color,
            diffuse: color,
            specular: color,
            ..Default::default()
        }
    }

    /// The share of the final color left for local Phong shading. Can go
    /// negative when reflectivity and transparency sum past one.
    pub fn local_weight(&self) -> f64 {
        1. - self.reflectivity - self.transparency
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vector3::one(),
            diffuse: Vector3::one(),
            specular: Vector3::one(),
            shininess: 10.,
            reflectivity: 0.,
            transparency: 0.,
            ambient_texture: None,
            diffuse_texture: None,
        }
    }
}
