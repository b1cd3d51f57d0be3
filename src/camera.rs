use crate::math::{Ray, Vector3};

/// A pinhole looking down +z through a screen on the z = 0 plane. The
/// screen spans -1..1 vertically and is stretched by the aspect ratio
/// horizontally.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vector3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vector3::new(0., 0., -1.5),
        }
    }
}

impl Camera {
    /// Map pixel `(x, y)` of a `vw` by `vh` frame onto the screen plane. The
    /// top-left pixel corner maps to `(-aspect, 1, 0)`.
    pub fn screen_to_world(&self, x: f64, y: f64, vw: u32, vh: u32) -> Vector3 {
        let (vw, vh) = (vw as f64, vh as f64);
        let aspect = vw / vh;
        Vector3::new((x * 2. / vw - 1.) * aspect, -y * 2. / vh + 1., 0.)
    }

    /// The primary ray through pixel `(x, y)`. It starts on the screen plane,
    /// not at the eye.
    pub fn ray_at(&self, x: u32, y: u32, vw: u32, vh: u32) -> Ray {
        let on_screen = self.screen_to_world(x as f64, y as f64, vw, vh);
        Ray::new(on_screen, (on_screen - self.eye).normalize())
    }
}
