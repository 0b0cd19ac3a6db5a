// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Small presentational components shared by the tool pages.

use dioxus::prelude::*;

use desktools_core::error::DesktoolsError;
use desktools_core::human_errors::{HumanError, humanize_error};

/// Inline message for a failed computation.
#[component]
pub fn ErrorBanner(error: HumanError) -> Element {
    let colour = error.severity.colour();
    rsx! {
        div { style: "margin: 12px 0; padding: 12px 16px; border-radius: 8px; border-left: 4px solid {colour}; background: #fafafa;",
            strong { style: "color: {colour};", "{error.message}" }
            p { style: "margin: 4px 0 0; color: #666; font-size: 14px;", "{error.suggestion}" }
        }
    }
}

/// Shorthand for rendering a `DesktoolsError` through [`ErrorBanner`].
pub fn error_banner(err: &DesktoolsError) -> Element {
    tracing::debug!(error = %err, "showing inline error");
    rsx! {
        ErrorBanner { error: humanize_error(err) }
    }
}

/// A coloured one-line banner (success/warning/info).
#[component]
pub fn Banner(text: String, colour: &'static str, background: &'static str) -> Element {
    rsx! {
        div { style: "margin: 12px 0; padding: 12px 16px; border-radius: 8px; color: {colour}; background: {background};",
            "{text}"
        }
    }
}

/// Large labelled value.
#[component]
pub fn Metric(label: &'static str, value: String) -> Element {
    rsx! {
        div { style: "margin: 16px 0;",
            div { style: "color: #666; font-size: 14px;", "{label}" }
            div { style: "font-size: 36px; font-weight: 600;", "{value}" }
        }
    }
}

pub const SUCCESS: (&str, &str) = ("#155724", "#d4edda");
pub const WARNING: (&str, &str) = ("#856404", "#fff3cd");
pub const DANGER: (&str, &str) = ("#721c24", "#f8d7da");
pub const INFO: (&str, &str) = ("#0c5460", "#d1ecf1");
