// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — one quick action per tool.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            h1 { "Desktools" }
            p { style: "color: #666;", "Three small tools. Nothing you enter leaves this window." }

            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin: 24px 0;",
                QuickAction { to: Route::Bmi {}, label: "BMI Calculator", icon: "\u{1F30D}" }
                QuickAction { to: Route::Calculator {}, label: "Calculator", icon: "\u{1F522}" }
                QuickAction { to: Route::ImageFilterPage {}, label: "Image Filter", icon: "\u{1F3A8}" }
                QuickAction { to: Route::Settings {}, label: "Settings", icon: "\u{2699}" }
            }
        }
    }
}

#[component]
fn QuickAction(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 24px 16px; border: 1px solid #e0e0e0; border-radius: 12px; text-decoration: none; color: #333; background: white;",
            span { style: "font-size: 32px; margin-bottom: 8px;", "{icon}" }
            span { style: "font-size: 14px;", "{label}" }
        }
    }
}
