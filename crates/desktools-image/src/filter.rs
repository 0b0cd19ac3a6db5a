// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The filters offered on the image page.

use desktools_core::config::MAX_BLUR_RADIUS;

/// A filter selection, including its parameter where it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFilter {
    /// Identity; the output is a copy of the input.
    #[default]
    Original,
    /// 8-bit single-channel luma.
    Grayscale,
    /// Gaussian blur with the given radius (0..=10, used as sigma).
    Blur { radius: u8 },
    /// Strong edge enhancement.
    EdgeEnhance,
    Sharpen,
}

impl ImageFilter {
    /// Selector labels in display order.
    pub const LABELS: [&'static str; 5] =
        ["Original", "Grayscale", "Blur", "Edge Enhance", "Sharpen"];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Grayscale => "Grayscale",
            Self::Blur { .. } => "Blur",
            Self::EdgeEnhance => "Edge Enhance",
            Self::Sharpen => "Sharpen",
        }
    }

    /// Parse a selector label. `blur_radius` is used only for `"Blur"` and is
    /// clamped to the slider range.
    pub fn from_label(label: &str, blur_radius: u8) -> Option<Self> {
        match label {
            "Original" => Some(Self::Original),
            "Grayscale" => Some(Self::Grayscale),
            "Blur" => Some(Self::Blur {
                radius: blur_radius.min(MAX_BLUR_RADIUS),
            }),
            "Edge Enhance" => Some(Self::EdgeEnhance),
            "Sharpen" => Some(Self::Sharpen),
            _ => None,
        }
    }

    /// File name offered for the filtered PNG.
    pub fn download_name(&self) -> String {
        format!("filtered_image_{}.png", self.label().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_parses() {
        for label in ImageFilter::LABELS {
            let filter = ImageFilter::from_label(label, 2).unwrap();
            assert_eq!(filter.label(), label);
        }
        assert_eq!(ImageFilter::from_label("Emboss", 2), None);
    }

    #[test]
    fn blur_radius_is_clamped() {
        assert_eq!(
            ImageFilter::from_label("Blur", 99),
            Some(ImageFilter::Blur {
                radius: MAX_BLUR_RADIUS
            })
        );
    }

    #[test]
    fn download_names() {
        assert_eq!(
            ImageFilter::Grayscale.download_name(),
            "filtered_image_grayscale.png"
        );
        assert_eq!(
            ImageFilter::EdgeEnhance.download_name(),
            "filtered_image_edge enhance.png"
        );
        assert_eq!(
            ImageFilter::Blur { radius: 4 }.download_name(),
            "filtered_image_blur.png"
        );
    }
}
