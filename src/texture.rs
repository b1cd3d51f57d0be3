//! Byte-buffer textures with wrapped nearest-neighbour and bilinear lookup.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    material::Color,
    math::{blerp, Vector2, Vector3},
};

/// Errors that can occur while constructing a texture.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture load failed: {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("texture buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("textures need at least 3 channels, got {0}")]
    UnsupportedChannels(usize),

    #[error("texture has zero width or height")]
    EmptyImage,
}

/// How a texture is looked up at a UV coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    Point,
    Linear,
}

impl Default for SamplingMode {
    fn default() -> Self {
        Self::Linear
    }
}

/// A decoded image. Only the first three interleaved channels are sampled.
#[derive(Clone, Debug)]
pub struct Texture {
    width: usize,
    height: usize,
    channels: usize,
    image: Vec<u8>,
}

impl Texture {
    /// Build a texture from an already-decoded, row-major byte buffer.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        image: Vec<u8>,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::EmptyImage);
        }
        if channels < 3 {
            return Err(TextureError::UnsupportedChannels(channels));
        }

        // saturates rather than overflowing, and no buffer is that long
        let expected = width.saturating_mul(height).saturating_mul(channels);
        if image.len() != expected {
            return Err(TextureError::BufferSize {
                expected,
                actual: image.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            image,
        })
    }

    /// Decode an image file. Images with alpha keep 4 channels, everything
    /// else is converted to RGB.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let texture = if decoded.color().has_alpha() {
            let rgba = decoded.to_rgba8();
            let (w, h) = rgba.dimensions();
            Self::from_raw(w as usize, h as usize, 4, rgba.into_raw())?
        } else {
            let rgb = decoded.to_rgb8();
            let (w, h) = rgb.dimensions();
            Self::from_raw(w as usize, h as usize, 3, rgb.into_raw())?
        };

        log::debug!(
            "Loaded texture {} ({}x{}, {} channels)",
            path.display(),
            texture.width,
            texture.height,
            texture.channels
        );

        Ok(texture)
    }

    /// Synthesize an RGB texture from a row-major grid of float colors in 0-1.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: &[Vector3],
    ) -> Result<Self, TextureError> {
        let mut image = Vec::with_capacity(pixels.len() * 3);
        for &pixel in pixels {
            let Color { r, g, b } = pixel.into();
            image.extend_from_slice(&[r, g, b]);
        }

        Self::from_raw(width, height, 3, image)
    }

    /// A checkerboard of `cells` by `cells` squares, each `cell_size` texels wide.
    pub fn checker(
        cells: usize,
        cell_size: usize,
        a: Vector3,
        b: Vector3,
    ) -> Result<Self, TextureError> {
        let side = cells * cell_size;
        let pixels = (0..side * side)
            .map(|i| {
                let (x, y) = (i % side / cell_size, i / side / cell_size);
                if (x + y) % 2 == 0 {
                    a
                } else {
                    b
                }
            })
            .collect::<Vec<_>>();

        Self::from_pixels(side, side, &pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Read the texel at `(i, j)`, wrapping both coordinates into the image.
    pub fn get_wrapped(&self, i: i64, j: i64) -> Vector3 {
        let i = i.rem_euclid(self.width as i64) as usize;
        let j = j.rem_euclid(self.height as i64) as usize;

        let at = (i + self.width * j) * self.channels;
        Color::new(self.image[at], self.image[at + 1], self.image[at + 2]).into()
    }

    /// Nearest-neighbour lookup.
    pub fn sample_point(&self, uv: Vector2) -> Vector3 {
        let x = uv.x * self.width as f64;
        let y = uv.y * self.height as f64;

        self.get_wrapped(x as i64, y as i64)
    }

    /// Bilinear lookup, with texel centers at half-integer pixel coordinates.
    pub fn sample_linear(&self, uv: Vector2) -> Vector3 {
        let x = uv.x * self.width as f64 - 0.5;
        let y = uv.y * self.height as f64 - 0.5;
        let (i, j) = (x.floor(), y.floor());
        let (dx, dy) = (x - i, y - j);
        let (i, j) = (i as i64, j as i64);

        blerp(
            dx,
            dy,
            self.get_wrapped(i, j),
            self.get_wrapped(i + 1, j),
            self.get_wrapped(i, j + 1),
            self.get_wrapped(i + 1, j + 1),
        )
    }

    pub fn sample(&self, uv: Vector2, mode: SamplingMode) -> Vector3 {
        match mode {
            SamplingMode::Point => self.sample_point(uv),
            SamplingMode::Linear => self.sample_linear(uv),
        }
    }
}
