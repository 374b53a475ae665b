//! Pixel sources for the extraction pipeline.
//!
//! Decoding and resampling belong to whoever supplies the image. The pipeline
//! only needs a [`Rasterizer`]: something that knows its original size, can
//! draw itself into a row-major RGBA8 buffer at a requested size, and can
//! report a single unscaled pixel.

use std::borrow::Cow;

use image::{DynamicImage, GenericImageView, RgbaImage, imageops};

use crate::constants::BYTES_PER_PIXEL;
use crate::error::{ExtractError, Result};
use crate::filter::InterpolationQuality;

pub trait Rasterizer {
    /// Original width and height, independent of any rescale.
    fn dimensions(&self) -> (u32, u32);

    /// Draw the whole image into a `width * height * 4` RGBA8 buffer.
    ///
    /// `None` when no buffer can be produced. Callers check the length.
    fn rasterize(&self, width: u32, height: u32, quality: InterpolationQuality) -> Option<Cow<'_, [u8]>>;

    /// Raw RGBA of one pixel of the original image.
    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn rasterize(&self, width: u32, height: u32, quality: InterpolationQuality) -> Option<Cow<'_, [u8]>> {
        (**self).rasterize(width, height, quality)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (**self).pixel(x, y)
    }
}

impl Rasterizer for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn rasterize(&self, width: u32, height: u32, quality: InterpolationQuality) -> Option<Cow<'_, [u8]>> {
        let (in_w, in_h) = RgbaImage::dimensions(self);
        if width == 0 || height == 0 || in_w == 0 || in_h == 0 {
            return None;
        }
        if (width, height) == (in_w, in_h) {
            return Some(Cow::Borrowed(self.as_raw().as_slice()));
        }
        Some(Cow::Owned(imageops::resize(self, width, height, quality.filter_type()).into_raw()))
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.get_pixel_checked(x, y).map(|p| p.0)
    }
}

impl Rasterizer for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rasterize(&self, width: u32, height: u32, quality: InterpolationQuality) -> Option<Cow<'_, [u8]>> {
        let (in_w, in_h) = GenericImageView::dimensions(self);
        if width == 0 || height == 0 || in_w == 0 || in_h == 0 {
            return None;
        }
        if (width, height) == (in_w, in_h) {
            return Some(match self.as_rgba8() {
                Some(rgba) => Cow::Borrowed(rgba.as_raw().as_slice()),
                None => Cow::Owned(self.to_rgba8().into_raw()),
            });
        }
        Some(Cow::Owned(imageops::resize(self, width, height, quality.filter_type()).into_raw()))
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.in_bounds(x, y).then(|| self.get_pixel(x, y).0)
    }
}

/// Byte length of a `width` x `height` RGBA8 buffer, `None` if it overflows `usize`.
pub fn buffer_len(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?
        .checked_mul(BYTES_PER_PIXEL)
}

/// A caller-owned RGBA8 buffer with validated dimensions.
#[derive(Debug, Clone)]
pub struct RgbaRaster {
    image: RgbaImage,
}

impl RgbaRaster {
    /// Wrap `data` as a `width` x `height` row-major R,G,B,A buffer.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ExtractError::ZeroDimension);
        }
        let mismatch = ExtractError::DimensionMismatch {
            len: data.len(),
            width,
            height,
        };
        if buffer_len(width, height) != Some(data.len()) {
            return Err(mismatch);
        }
        let image = RgbaImage::from_raw(width, height, data).ok_or(mismatch)?;
        Ok(Self { image })
    }

    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl Rasterizer for RgbaRaster {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn rasterize(&self, width: u32, height: u32, quality: InterpolationQuality) -> Option<Cow<'_, [u8]>> {
        Rasterizer::rasterize(&self.image, width, height, quality)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        Rasterizer::pixel(&self.image, x, y)
    }
}
