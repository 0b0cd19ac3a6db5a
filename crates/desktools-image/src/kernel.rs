// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filter kernels and per-colour-type dispatch into `imageproc`.
//
// Every 8-bit colour type is filtered in place of its own kind so the output
// keeps the input's channel layout. Anything else (16-bit, float) is
// converted to RGBA8 first.

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Pixel, Rgb};
use imageproc::definitions::Clamp;
use imageproc::filter::{Kernel, gaussian_blur_f32};
use imageproc::map::map_colors;

/// Strong edge enhancement.
pub const EDGE_ENHANCE_MORE: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 9.0, -1.0, -1.0, -1.0, -1.0];

/// `[-2 x8, 32]` over 16, pre-divided.
pub const SHARPEN: [f32; 9] = [
    -0.125, -0.125, -0.125, -0.125, 2.0, -0.125, -0.125, -0.125, -0.125,
];

/// Correlate every channel with a 3x3 kernel. Borders pad by continuity and
/// results round to the nearest 8-bit value.
fn filter_rounded<P>(buf: &ImageBuffer<P, Vec<u8>>, weights: &[f32; 9]) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    Kernel::new(&weights[..], 3, 3).filter(buf, |channel: &mut u8, acc: f32| {
        *channel = <u8 as Clamp<f32>>::clamp(acc.round())
    })
}

/// Apply a 3x3 kernel to any `DynamicImage`.
pub fn apply_kernel(image: DynamicImage, weights: &[f32; 9]) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(filter_rounded(&buf, weights)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(filter_rounded(&buf, weights)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(filter_rounded(&buf, weights)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(filter_rounded(&buf, weights)),
        other => DynamicImage::ImageRgba8(filter_rounded(&other.to_rgba8(), weights)),
    }
}

/// Gaussian blur with standard deviation `sigma`. A non-positive sigma
/// returns the image unchanged.
pub fn apply_gaussian(image: DynamicImage, sigma: f32) -> DynamicImage {
    if sigma <= 0.0 {
        return image;
    }
    match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(gaussian_blur_f32(&buf, sigma)),
        DynamicImage::ImageLumaA8(buf) => {
            DynamicImage::ImageLumaA8(gaussian_blur_f32(&buf, sigma))
        }
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(gaussian_blur_f32(&buf, sigma)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(gaussian_blur_f32(&buf, sigma)),
        other => DynamicImage::ImageRgba8(gaussian_blur_f32(&other.to_rgba8(), sigma)),
    }
}

/// ITU-R 601-2 luma, `L = R*299/1000 + G*587/1000 + B*114/1000`, in 16-bit
/// fixed point.
fn luma_601(Rgb([r, g, b]): Rgb<u8>) -> Luma<u8> {
    let l = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000;
    Luma([(l >> 16) as u8])
}

/// Single-channel 8-bit luma using 601 weights. Alpha is dropped; luma inputs
/// keep their values.
pub fn to_gray(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(buf) => buf.clone(),
        DynamicImage::ImageLumaA8(_) => image.to_luma8(),
        other => map_colors(&other.to_rgb8(), luma_601),
    }
}
