// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode, grayscale, blur, edge enhance, sharpen, and PNG
// encode. Operates on in-memory images using the `image` and `imageproc`
// crates.

use desktools_core::error::DesktoolsError;
use image::{DynamicImage, ImageFormat};
use tracing::{debug, info, instrument, warn};

use crate::filter::ImageFilter;
use crate::kernel::{self, EDGE_ENHANCE_MORE, SHARPEN};

/// Formats accepted for upload.
pub const ACCEPTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];

/// File extensions offered in the upload dialog.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Filter pipeline operating on a single in-memory image.
///
/// Each method consumes `self` and returns a new `ImageProcessor` wrapping the
/// transformed image, so calls chain:
///
/// ```ignore
/// let png = ImageProcessor::from_bytes(&upload)?
///     .apply(ImageFilter::Blur { radius: 2 })
///     .to_png_bytes()?;
/// ```
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Decode an uploaded PNG or JPEG.
    ///
    /// The format is sniffed from the content, not trusted from a file name.
    /// Other recognised formats are rejected as unsupported.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, DesktoolsError> {
        let format = image::guess_format(data).map_err(|err| {
            DesktoolsError::ImageError(format!("unrecognised image data: {}", err))
        })?;
        if !ACCEPTED_FORMATS.contains(&format) {
            warn!(?format, "rejected upload");
            return Err(DesktoolsError::UnsupportedImage(format!("{:?}", format)));
        }

        let img = image::load_from_memory_with_format(data, format).map_err(|err| {
            DesktoolsError::ImageError(format!("failed to decode image: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Filters (consume self, return new Self) ------------------------------

    /// Apply one filter selection.
    #[instrument(skip(self), fields(filter = filter.label()))]
    pub fn apply(self, filter: ImageFilter) -> Self {
        match filter {
            ImageFilter::Original => self,
            ImageFilter::Grayscale => self.grayscale(),
            ImageFilter::Blur { radius } => self.blur(radius),
            ImageFilter::EdgeEnhance => self.edge_enhance(),
            ImageFilter::Sharpen => self.sharpen(),
        }
    }

    /// Convert to single-channel 8-bit luma with ITU-R 601 weights. Any alpha
    /// channel is dropped.
    pub fn grayscale(self) -> Self {
        info!("Converting to grayscale");
        Self {
            image: DynamicImage::ImageLuma8(kernel::to_gray(&self.image)),
        }
    }

    /// Gaussian blur using `radius` as the standard deviation. Radius 0 is a
    /// no-op.
    pub fn blur(self, radius: u8) -> Self {
        info!(radius, "Applying Gaussian blur");
        Self {
            image: kernel::apply_gaussian(self.image, f32::from(radius)),
        }
    }

    pub fn edge_enhance(self) -> Self {
        info!("Applying edge enhancement");
        Self {
            image: kernel::apply_kernel(self.image, &EDGE_ENHANCE_MORE),
        }
    }

    pub fn sharpen(self) -> Self {
        info!("Sharpening");
        Self {
            image: kernel::apply_kernel(self.image, &SHARPEN),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, DesktoolsError> {
        encode_png(&self.image)
    }
}

/// Encode a `DynamicImage` as PNG, returning the raw bytes.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, DesktoolsError> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image.write_to(&mut cursor, ImageFormat::Png).map_err(|err| {
        DesktoolsError::ImageError(format!("PNG encoding failed: {}", err))
    })?;
    Ok(buffer)
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgb, RgbImage, Rgba, RgbaImage};

    fn sample_rgb() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(16, 12, |x, y| {
            Rgb([(x * 15) as u8, (y * 20) as u8, ((x + y) * 5) as u8])
        }))
    }

    #[test]
    fn identity_output_matches_reencoded_input() {
        let input_png = encode_png(&sample_rgb()).unwrap();
        let output = ImageProcessor::from_bytes(&input_png)
            .unwrap()
            .apply(ImageFilter::Original)
            .to_png_bytes()
            .unwrap();
        assert_eq!(output, input_png);
    }

    #[test]
    fn grayscale_is_single_channel() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([10, 200, 30, 128])));
        let out = ImageProcessor::from_dynamic(rgba).apply(ImageFilter::Grayscale);
        assert_eq!(out.as_dynamic().color(), ColorType::L8);

        // Still single-channel after a PNG round trip.
        let decoded = image::load_from_memory(&out.to_png_bytes().unwrap()).unwrap();
        assert_eq!(decoded.color(), ColorType::L8);
        assert_eq!(decoded.color().channel_count(), 1);
    }

    #[test]
    fn grayscale_of_pure_red_matches_601_luma() {
        let red = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([255, 0, 0])));
        let out = ImageProcessor::from_dynamic(red).apply(ImageFilter::Grayscale);
        assert_eq!(out.as_dynamic().to_luma8().get_pixel(1, 1).0[0], 76);
    }

    #[test]
    fn edge_enhance_does_not_blacken_the_border() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(6, 6, Rgb([40, 90, 160])));
        let out = ImageProcessor::from_dynamic(img.clone())
            .apply(ImageFilter::EdgeEnhance)
            .into_dynamic();
        assert_eq!(out.to_rgb8().get_pixel(0, 0), &Rgb([40, 90, 160]));
        assert_eq!(out.to_rgb8().get_pixel(5, 5), &Rgb([40, 90, 160]));
        assert_eq!(out, img);
    }

    #[test]
    fn filters_preserve_dimensions() {
        for filter in [
            ImageFilter::Blur { radius: 3 },
            ImageFilter::EdgeEnhance,
            ImageFilter::Sharpen,
        ] {
            let out = ImageProcessor::from_dynamic(sample_rgb()).apply(filter);
            assert_eq!((out.width(), out.height()), (16, 12), "{:?}", filter);
            assert_eq!(out.as_dynamic().color(), ColorType::Rgb8);
        }
    }

    #[test]
    fn blur_radius_zero_is_identity() {
        let out = ImageProcessor::from_dynamic(sample_rgb()).apply(ImageFilter::Blur { radius: 0 });
        assert_eq!(out.into_dynamic(), sample_rgb());
    }

    #[test]
    fn jpeg_upload_is_accepted() {
        let mut jpeg = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 90);
        sample_rgb().to_rgb8().write_with_encoder(encoder).unwrap();

        let processor = ImageProcessor::from_bytes(&jpeg).unwrap();
        assert_eq!((processor.width(), processor.height()), (16, 12));
    }

    #[test]
    fn gif_upload_is_unsupported() {
        let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";
        let err = ImageProcessor::from_bytes(gif).unwrap_err();
        assert!(matches!(err, DesktoolsError::UnsupportedImage(_)), "{err}");
    }

    #[test]
    fn garbage_upload_is_an_image_error() {
        let err = ImageProcessor::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, DesktoolsError::ImageError(_)), "{err}");
    }

    #[test]
    fn truncated_png_is_an_image_error() {
        let png = encode_png(&sample_rgb()).unwrap();
        let err = ImageProcessor::from_bytes(&png[..png.len() / 2]).unwrap_err();
        assert!(matches!(err, DesktoolsError::ImageError(_)), "{err}");
    }
}
