// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image filter page — upload a PNG/JPEG, pick a filter, compare side by side,
// and download the filtered PNG.
//
// On desktop, upload and download use native file dialogs.

use dioxus::prelude::*;

use desktools_core::config::MAX_BLUR_RADIUS;
use desktools_core::error::DesktoolsError;
use desktools_core::human_errors::{HumanError, humanize_error};
use desktools_image::processor::ACCEPTED_EXTENSIONS;
use desktools_image::{FilterPreview, ImageFilter};

use crate::pages::components::{Banner, ErrorBanner, INFO, SUCCESS};
use crate::services::media::PreviewView;
use crate::state::AppState;

/// Re-render `preview` with `filter` and build its view.
fn refresh(
    preview: &FilterPreview,
    filter: ImageFilter,
) -> Result<(FilterPreview, PreviewView), DesktoolsError> {
    let next = preview.with_filter(filter);
    let view = PreviewView::build(&next)?;
    Ok((next, view))
}

#[component]
pub fn ImageFilterPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut preview = use_signal(|| Option::<FilterPreview>::None);
    let mut view = use_signal(|| Option::<PreviewView>::None);
    let mut filter_label = use_signal(|| ImageFilter::Original.label().to_string());
    let mut blur_radius = use_signal(|| state.read().config.default_blur_radius);
    let mut error = use_signal(|| Option::<HumanError>::None);
    let mut status_msg = use_signal(|| Option::<String>::None);

    // Current selection, with the slider value folded in for Blur.
    let current_filter = move || {
        ImageFilter::from_label(&filter_label.read(), *blur_radius.read()).unwrap_or_default()
    };

    // Apply the current selection to the loaded image, if any.
    let mut apply = move || {
        let filter = current_filter();
        let Some(current) = preview.read().clone() else {
            return;
        };
        match refresh(&current, filter) {
            Ok((next, next_view)) => {
                preview.set(Some(next));
                view.set(Some(next_view));
                error.set(None);
            }
            Err(e) => {
                tracing::error!(error = %e, "filter failed");
                error.set(Some(humanize_error(&e)));
            }
        }
        status_msg.set(None);
    };

    rsx! {
        div {
            h1 { "\u{1F3A8} Simple Image Filter" }
            hr {}

            // Upload
            button {
                style: "width: 100%; padding: 16px; border-radius: 12px; border: 2px dashed #007aff; color: #007aff; background: white; font-size: 16px; margin: 16px 0;",
                title: "Upload a PNG, JPG, or JPEG image to apply filters.",
                onclick: move |_| {
                    let Some(path) = rfd::FileDialog::new()
                        .add_filter("Images", &ACCEPTED_EXTENSIONS)
                        .pick_file()
                    else {
                        return;
                    };
                    let loaded = std::fs::read(&path)
                        .map_err(DesktoolsError::from)
                        .and_then(|bytes| FilterPreview::render(&bytes, current_filter()))
                        .and_then(|p| PreviewView::build(&p).map(|v| (p, v)));
                    match loaded {
                        Ok((p, v)) => {
                            tracing::info!(
                                path = %path.display(),
                                width = p.original().width(),
                                height = p.original().height(),
                                "image loaded for filtering"
                            );
                            preview.set(Some(p));
                            view.set(Some(v));
                            error.set(None);
                            status_msg.set(None);
                        }
                        Err(e) => {
                            tracing::warn!(path = %path.display(), error = %e, "image rejected");
                            preview.set(None);
                            view.set(None);
                            error.set(Some(humanize_error(&e)));
                        }
                    }
                },
                "Choose an Image File"
            }

            // Filter selection
            section { style: "margin: 16px 0; padding: 12px; border: 1px solid #e0e0e0; border-radius: 8px;",
                h3 { style: "margin-top: 0;", "\u{1F6E0} Filters" }
                select {
                    style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",
                    value: "{filter_label}",
                    onchange: move |evt| {
                        filter_label.set(evt.value());
                        apply();
                    },
                    for label in ImageFilter::LABELS {
                        option { value: label, selected: label == filter_label.read().as_str(), "{label}" }
                    }
                }
                if matches!(current_filter(), ImageFilter::Blur { .. }) {
                    label { style: "display: block; margin-top: 12px;",
                        div { style: "color: #444; font-size: 14px;", "Blur Radius: {blur_radius}" }
                        input {
                            r#type: "range",
                            style: "width: 100%;",
                            min: "0",
                            max: "{MAX_BLUR_RADIUS}",
                            step: "1",
                            value: "{blur_radius}",
                            onchange: move |evt| {
                                if let Ok(radius) = evt.value().parse::<u8>() {
                                    blur_radius.set(radius.min(MAX_BLUR_RADIUS));
                                    apply();
                                }
                            },
                        }
                    }
                }
            }

            if let Some(err) = error.read().clone() {
                ErrorBanner { error: err }
            }

            if let Some(v) = view.read().clone() {
                // Side-by-side comparison
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                    figure { style: "margin: 0;",
                        h3 { "Original Image" }
                        img { style: "width: 100%;", src: "{v.original_url}" }
                        figcaption { style: "color: #888; font-size: 12px;", "Uploaded Image" }
                    }
                    figure { style: "margin: 0;",
                        h3 { "Filtered ({v.filter_label})" }
                        img { style: "width: 100%;", src: "{v.filtered_url}" }
                        figcaption { style: "color: #888; font-size: 12px;", "Filtered Image" }
                    }
                }

                // Download
                button {
                    style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 16px;",
                    onclick: move |_| {
                        let Some(v) = view.read().clone() else {
                            return;
                        };
                        let Some(path) = rfd::FileDialog::new()
                            .set_file_name(&v.download_name)
                            .add_filter("PNG", &["png"])
                            .save_file()
                        else {
                            return;
                        };
                        match std::fs::write(&path, &v.download) {
                            Ok(()) => {
                                tracing::info!(path = %path.display(), bytes = v.download.len(), "filtered image saved");
                                status_msg.set(Some(format!("Saved {}", path.display())));
                            }
                            Err(e) => {
                                tracing::error!(path = %path.display(), error = %e, "save failed");
                                error.set(Some(humanize_error(&DesktoolsError::from(e))));
                            }
                        }
                    },
                    "Download Filtered Image"
                }
                if let Some(msg) = status_msg.read().clone() {
                    Banner { text: msg, colour: SUCCESS.0, background: SUCCESS.1 }
                }
            } else if error.read().is_none() {
                Banner {
                    text: "Please upload an image to begin filtering.".to_string(),
                    colour: INFO.0,
                    background: INFO.1,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desktools_image::processor::encode_png;
    use image::{DynamicImage, Rgb, RgbImage};

    fn upload() -> Vec<u8> {
        encode_png(&DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 5, Rgb([1, 2, 3])))).unwrap()
    }

    #[test]
    fn refresh_switches_filter_and_download_name() {
        let preview = FilterPreview::render(&upload(), ImageFilter::Original).unwrap();
        let (next, view) = refresh(&preview, ImageFilter::Blur { radius: 2 }).unwrap();
        assert_eq!(next.filter(), ImageFilter::Blur { radius: 2 });
        assert_eq!(view.download_name, "filtered_image_blur.png");
        assert_eq!(view.filter_label, "Blur");
    }

    #[test]
    fn original_view_downloads_the_upload_bytes() {
        let bytes = upload();
        let preview = FilterPreview::render(&bytes, ImageFilter::Grayscale).unwrap();
        let (_, view) = refresh(&preview, ImageFilter::Original).unwrap();
        assert_eq!(view.download, bytes);
    }
}
