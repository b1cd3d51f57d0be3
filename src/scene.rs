use std::{path::Path, sync::Arc, time::Instant};

use rayon::prelude::*;
use thiserror::Error;

use crate::{
    camera::Camera,
    lighting::{self, LightShading},
    material::{Color, Material},
    math::{refraction_vec, Ray, Vector2, Vector3},
    object::{Hit, SceneObject},
    texture::{SamplingMode, Texture},
};

/// The recursion depth used when none is given.
pub const DEFAULT_MAX_DEPTH: i32 = 5;

/// One rendered pixel: linear RGB in 0-1 and an alpha that is always 1.
pub type Rgba = [f32; 4];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot save a {width}x{height} image")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to save render: {0}")]
    Save(#[from] image::ImageError),
}

/// Scene options. Defaults are provided.
#[derive(Debug, Clone)]
pub struct SceneOptions {
    /// The number of reflect/refract bounces `render_default` allows past the primary ray.
    pub max_ray_depth: i32,

    /// Hits at or beyond this distance are ignored.
    pub max_distance: f64,

    /// How far secondary rays are pushed off the surface they leave.
    pub epsilon: f64,

    /// Index of refraction of every transparent object.
    pub ior: f64,

    /// The least share of ambient color a shadowed point keeps.
    pub shadow_floor: f64,

    /// How textured materials are sampled.
    pub sampling: SamplingMode,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            max_ray_depth: DEFAULT_MAX_DEPTH,
            max_distance: 1000.,
            epsilon: 1e-4,
            ior: 1.5,
            shadow_floor: 0.3,
            sampling: SamplingMode::Linear,
        }
    }
}

/// The closest intersection of a ray with the scene.
pub struct SceneHit<'a> {
    /// Position of the struck object in `Scene::objects`.
    pub index: usize,
    pub object: &'a dyn SceneObject,
    pub hit: Hit,
}

/// A scene, which contains a list of objects, a single light, and a camera to render from.
pub struct Scene {
    pub objects: Vec<Box<dyn SceneObject>>,
    pub light: lighting::Point,
    pub camera: Camera,
    pub options: SceneOptions,
}

impl Scene {
    pub fn new(light: lighting::Point) -> Self {
        Self {
            objects: Vec::new(),
            light,
            camera: Camera::default(),
            options: SceneOptions::default(),
        }
    }

    /// Add an object to the scene.
    pub fn push(&mut self, object: impl SceneObject + 'static) {
        let material = object.material();
        if material.reflectivity + material.transparency > 1. {
            log::warn!(
                "object {} has reflectivity {} + transparency {} above 1; local shading will subtract",
                self.objects.len(),
                material.reflectivity,
                material.transparency
            );
        }

        self.objects.push(Box::new(object));
    }

    /// Find the nearest object struck by a ray. On equal distance the object
    /// added first wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<SceneHit<'_>> {
        let mut closest: Option<SceneHit<'_>> = None;
        let mut nearest = self.options.max_distance;

        for (index, object) in self.objects.iter().enumerate() {
            if let Some(hit) = object.intersect(ray) {
                if hit.distance >= 0. && hit.distance < nearest {
                    nearest = hit.distance;
                    closest = Some(SceneHit {
                        index,
                        object: object.as_ref(),
                        hit,
                    });
                }
            }
        }

        closest
    }

    /// Trace out a ray, getting its unclamped color. `depth` is the number
    /// of bounces still allowed; below zero the ray contributes nothing.
    pub fn trace_ray(&self, ray: &Ray, depth: i32) -> Vector3 {
        if depth < 0 {
            return Vector3::zero();
        }

        let SceneHit { index, object, hit } = match self.closest_hit(ray) {
            Some(h) => h,
            None => return Vector3::zero(),
        };
        let material = object.material();

        let shading = self.light.shading(ray, index, &hit, self);
        let mut color = self.phong(material, &shading, hit.uv) * material.local_weight();

        if material.reflectivity > 0. {
            let dir = ray.reflect(hit.normal);
            let reflected = Ray::offset(hit.point, dir, self.options.epsilon);
            color += self.trace_ray(&reflected, depth - 1) * material.reflectivity;
        }

        if material.transparency > 0. {
            // total internal reflection sends the transmitted share back along the mirror direction
            let dir = refraction_vec(ray, hit.normal, self.options.ior)
                .unwrap_or_else(|| ray.reflect(hit.normal));
            let refracted = Ray::offset(hit.point, dir, self.options.epsilon);
            color += self.trace_ray(&refracted, depth - 1) * material.transparency;
        }

        color
    }

    /// Local Phong color of a material under the given light shading.
    fn phong(&self, material: &Material, shading: &LightShading, uv: Vector2) -> Vector3 {
        let sample = |texture: &Option<Arc<Texture>>| {
            texture
                .as_ref()
                .map(|t| t.sample(uv, self.options.sampling))
        };
        let ambient = material.ambient * sample(&material.ambient_texture).unwrap_or(Vector3::one());

        match *shading {
            LightShading::Lit { diffuse, specular } => {
                let diffuse = match sample(&material.diffuse_texture) {
                    Some(texel) => material.diffuse * texel,
                    None => material.diffuse * diffuse,
                };
                ambient + diffuse + material.specular * specular
            }
            LightShading::Shadowed { transmittance } => ambient * transmittance,
        }
    }

    /// Trace out a pixel, where top-left of the image is (0, 0).
    /// This function is run many times in parallel.
    pub fn trace_pixel(&self, x: u32, y: u32, vw: u32, vh: u32, max_depth: i32) -> Rgba {
        let ray = self.camera.ray_at(x, y, vw, vh);
        let c = self.trace_ray(&ray, max_depth).clamp(0., 1.);

        [c.x as f32, c.y as f32, c.z as f32, 1.]
    }

    /// Render a `vw` by `vh` frame into row-major pixels (`x + y * vw`).
    pub fn render(&self, vw: u32, vh: u32, max_depth: i32) -> Vec<Rgba> {
        log::debug!(
            "Rendering {}x{} over {} objects, depth {}",
            vw,
            vh,
            self.objects.len(),
            max_depth
        );
        let start = Instant::now();

        // every pixel reads the scene and writes only its own slot
        let pixels = (0..vh)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..vw).map(move |x| self.trace_pixel(x, y, vw, vh, max_depth))
            })
            .collect::<Vec<_>>();

        log::info!(
            "Rendered {}x{} in {:.3}s",
            vw,
            vh,
            start.elapsed().as_secs_f32()
        );

        pixels
    }

    /// Render with `options.max_ray_depth`.
    pub fn render_default(&self, vw: u32, vh: u32) -> Vec<Rgba> {
        self.render(vw, vh, self.options.max_ray_depth)
    }

    /// Render the image out to the desired save file.
    pub fn render_to(
        &self,
        path: impl AsRef<Path>,
        vw: u32,
        vh: u32,
        max_depth: i32,
    ) -> Result<(), RenderError> {
        let bytes = (vw as usize)
            .checked_mul(vh as usize)
            .and_then(|n| n.checked_mul(3));
        if vw == 0 || vh == 0 || bytes.is_none() {
            return Err(RenderError::InvalidSize {
                width: vw,
                height: vh,
            });
        }

        let rendered = self.render(vw, vh, max_depth);

        // spit out an image
        let mut imgbuf: image::RgbImage = image::ImageBuffer::new(vw, vh);
        for (pixel, [r, g, b, _]) in imgbuf.pixels_mut().zip(rendered) {
            *pixel = Color::newf(r as f64, g as f64, b as f64).into();
        }

        imgbuf.save(path.as_ref())?;
        log::info!("Saved render to {}", path.as_ref().display());

        Ok(())
    }
}
