// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Turning filter previews into things the webview can show and the user can
// save.

use base64::{Engine, engine::general_purpose::STANDARD};
use desktools_core::error::Result;
use desktools_image::FilterPreview;
use desktools_image::preview::DOWNLOAD_MIME;

/// Encode `bytes` as a `data:` URL for an `img` element.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Everything the image page renders for one preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub original_url: String,
    pub filtered_url: String,
    /// PNG bytes behind the download button.
    pub download: Vec<u8>,
    pub download_name: String,
    pub filter_label: &'static str,
}

impl PreviewView {
    pub fn build(preview: &FilterPreview) -> Result<Self> {
        let original = preview.original_png()?;
        let download = preview.filtered_png()?;
        Ok(Self {
            original_url: data_url(DOWNLOAD_MIME, &original),
            filtered_url: data_url(DOWNLOAD_MIME, &download),
            download,
            download_name: preview.download_name(),
            filter_label: preview.filter().label(),
        })
    }
}
