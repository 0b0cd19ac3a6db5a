// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Side-by-side preview: the decoded upload, its filtered copy, and the PNG
// buffer offered for download.

use desktools_core::error::Result;
use image::DynamicImage;
use tracing::{debug, instrument};

use crate::filter::ImageFilter;
use crate::processor::{ImageProcessor, encode_png};

/// MIME type of the download.
pub const DOWNLOAD_MIME: &str = "image/png";

/// An uploaded image together with one filtered rendition of it.
#[derive(Debug, Clone)]
pub struct FilterPreview {
    original: DynamicImage,
    filtered: DynamicImage,
    filter: ImageFilter,
}

impl FilterPreview {
    /// Decode `upload` and apply `filter` to it.
    pub fn render(upload: &[u8], filter: ImageFilter) -> Result<Self> {
        let original = ImageProcessor::from_bytes(upload)?.into_dynamic();
        Ok(Self::from_original(original, filter))
    }

    /// Apply `filter` to an already-decoded original.
    #[instrument(skip(original), fields(filter = filter.label()))]
    pub fn from_original(original: DynamicImage, filter: ImageFilter) -> Self {
        let filtered = ImageProcessor::from_dynamic(original.clone())
            .apply(filter)
            .into_dynamic();
        debug!(
            width = filtered.width(),
            height = filtered.height(),
            "Preview rendered"
        );
        Self {
            original,
            filtered,
            filter,
        }
    }

    /// Re-render from the same original with a different filter. Returns a
    /// clone when the filter is unchanged.
    pub fn with_filter(&self, filter: ImageFilter) -> Self {
        if filter == self.filter {
            return self.clone();
        }
        Self::from_original(self.original.clone(), filter)
    }

    pub fn original(&self) -> &DynamicImage {
        &self.original
    }

    pub fn filtered(&self) -> &DynamicImage {
        &self.filtered
    }

    pub fn filter(&self) -> ImageFilter {
        self.filter
    }

    /// PNG encoding of the original, for display.
    pub fn original_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.original)
    }

    /// PNG encoding of the filtered image, for display and download.
    pub fn filtered_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.filtered)
    }

    pub fn download_name(&self) -> String {
        self.filter.download_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgb, RgbImage};

    fn upload() -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(10, 10, |x, y| {
            Rgb([(x * 25) as u8, (y * 25) as u8, 128])
        }));
        encode_png(&img).unwrap()
    }

    #[test]
    fn original_filter_downloads_the_same_png() {
        let bytes = upload();
        let preview = FilterPreview::render(&bytes, ImageFilter::Original).unwrap();
        assert_eq!(preview.filtered_png().unwrap(), bytes);
        assert_eq!(preview.original_png().unwrap(), bytes);
        assert_eq!(preview.download_name(), "filtered_image_original.png");
    }

    #[test]
    fn switching_filters_keeps_the_original() {
        let preview = FilterPreview::render(&upload(), ImageFilter::Original).unwrap();
        let gray = preview.with_filter(ImageFilter::Grayscale);
        assert_eq!(gray.filtered().color(), ColorType::L8);
        assert_eq!(gray.original(), preview.original());
        assert_eq!(gray.filter(), ImageFilter::Grayscale);

        let back = gray.with_filter(ImageFilter::Original);
        assert_eq!(back.filtered(), preview.original());
    }

    #[test]
    fn download_is_valid_png() {
        let preview = FilterPreview::render(&upload(), ImageFilter::Sharpen).unwrap();
        let png = preview.filtered_png().unwrap();
        assert_eq!(
            image::guess_format(&png).unwrap(),
            image::ImageFormat::Png
        );
        assert_eq!(DOWNLOAD_MIME, "image/png");
    }
}
