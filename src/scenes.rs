//! Ready-made scenes.

use std::{path::Path, sync::Arc};

use crate::{
    lighting,
    material::Material,
    math::{Vector2, Vector3},
    object::{Sphere, Square},
    scene::Scene,
    texture::{Texture, TextureError},
};

/// One wall of the enclosure: texture file stem, corners, reflectivity.
struct Face {
    name: &'static str,
    corners: [Vector3; 4],
    reflectivity: f64,
    tint: Vector3,
}

#[rustfmt::skip]
fn faces() -> [Face; 6] {
    let v = Vector3::new;
    [
        Face { name: "negy", corners: [v(-10., -1.5, 10.), v(10., -1.5, 10.), v(10., -1.5, -10.), v(-10., -1.5, -10.)], reflectivity: 0.05, tint: v(0.55, 0.5, 0.45) },
        Face { name: "posz", corners: [v(-10., 15., 10.), v(10., 15., 10.), v(10., -5., 10.), v(-10., -5., 10.)], reflectivity: 0., tint: v(0.45, 0.6, 0.85) },
        Face { name: "posx", corners: [v(10., 15., 10.), v(10., 15., -10.), v(10., -5., -10.), v(10., -5., 10.)], reflectivity: 0., tint: v(0.5, 0.75, 0.5) },
        Face { name: "negz", corners: [v(10., 15., -10.), v(-10., 15., -10.), v(-10., -5., -10.), v(10., -5., -10.)], reflectivity: 0., tint: v(0.45, 0.6, 0.85) },
        Face { name: "negx", corners: [v(-10., 15., -10.), v(-10., 15., 10.), v(-10., -5., 10.), v(-10., -5., -10.)], reflectivity: 0., tint: v(0.75, 0.55, 0.5) },
        Face { name: "posy", corners: [v(-10., 10., -10.), v(10., 10., -10.), v(10., 10., 10.), v(-10., 10., 10.)], reflectivity: 0., tint: v(0.7, 0.8, 0.95) },
    ]
}

/// Load `<dir>/<name>.jpg`, or build a tinted checkerboard when no directory is given.
fn face_texture(dir: Option<&Path>, face: &Face) -> Result<Texture, TextureError> {
    match dir {
        Some(dir) => Texture::open(dir.join(format!("{}.jpg", face.name))),
        None => Texture::checker(8, 16, face.tint, face.tint * 0.6),
    }
}

/// Two spheres, one red and mirror-like, one nearly clear glass, inside a
/// box of six textured walls lit by one light high above and behind.
///
/// `textures` names a directory holding `negy`, `posz`, `posx`, `negz`,
/// `negx` and `posy` JPEGs, one per wall.
pub fn study(textures: Option<&Path>) -> Result<Scene, TextureError> {
    let mut scene = Scene::new(lighting::Point::new(Vector3::new(0.4, 6.5, 9.5)));

    scene.push(Sphere::new(
        Vector3::new(0.3, -0.5, 2.25),
        1.,
        Material {
            ambient: Vector3::new(1., 0., 0.),
            diffuse: Vector3::zero(),
            specular: Vector3::zero(),
            shininess: 50.,
            reflectivity: 0.5,
            transparency: 0.1,
            ..Default::default()
        },
    ));

    scene.push(Sphere::new(
        Vector3::new(-1.75, -0.6, 2.),
        0.9,
        Material {
            ambient: Vector3::splat(0.2),
            diffuse: Vector3::zero(),
            specular: Vector3::zero(),
            shininess: 50.,
            reflectivity: 0.,
            transparency: 0.9,
            ..Default::default()
        },
    ));

    let uvs = [
        Vector2::new(0., 0.),
        Vector2::new(1., 0.),
        Vector2::new(1., 1.),
        Vector2::new(0., 1.),
    ];

    for face in faces().iter() {
        let texture = Arc::new(face_texture(textures, face)?);
        let wall = Square::new(
            face.corners,
            Material {
                ambient: Vector3::one(),
                diffuse: Vector3::zero(),
                specular: Vector3::zero(),
                shininess: 10.,
                reflectivity: face.reflectivity,
                transparency: 0.,
                ambient_texture: Some(texture.clone()),
                diffuse_texture: Some(texture),
            },
        )
        .with_uvs(uvs);

        scene.push(wall);
    }

    log::info!("Built study scene with {} objects", scene.objects.len());

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Ray;

    #[test]
    fn procedural_study_scene_builds() {
        let scene = study(None).unwrap();
        assert_eq!(scene.objects.len(), 8);
    }

    #[test]
    fn walls_face_inward() {
        let scene = study(None).unwrap();
        // from inside the box, every direction lands on a wall or a sphere
        for dir in [
            Vector3::new(0., -1., 0.),
            Vector3::new(0., 1., 0.),
            Vector3::new(1., 0., 0.),
            Vector3::new(-1., 0., 0.),
            Vector3::new(0., 0., 1.),
            Vector3::new(0., 0., -1.),
        ] {
            let ray = Ray::new(Vector3::new(0., 2., -1.5), dir);
            assert!(scene.closest_hit(&ray).is_some(), "{:?} escaped", dir);
        }
    }

    #[test]
    fn missing_texture_directory_fails() {
        let err = study(Some(Path::new("no/such/dir"))).err().unwrap();
        assert!(err.to_string().starts_with("texture load failed"));
    }
}
