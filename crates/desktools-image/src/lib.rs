// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// desktools-image — Image filtering for the Desktools filter page.
//
// Decodes uploaded PNG/JPEG images, applies one of the built-in filters
// (identity, grayscale, Gaussian blur, edge enhance, sharpen), and encodes the
// result as PNG for download.

pub mod filter;
pub mod kernel;
pub mod preview;
pub mod processor;

// Re-export the primary types so callers can use `desktools_image::ImageProcessor` etc.
pub use filter::ImageFilter;
pub use preview::FilterPreview;
pub use processor::ImageProcessor;
