// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — defaults the tool pages start from.

use dioxus::prelude::*;

use desktools_core::config::MAX_BLUR_RADIUS;
use desktools_core::{Operation, UnitSystem};

use crate::services::app_services::AppServices;
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<String>::None);

    let config = state.read().config.clone();
    let config_dir = svc.data_dir().display().to_string();

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "BMI" }
                SettingRow { label: "Default unit system",
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: config.default_unit_system.label(),
                        onchange: move |evt| {
                            if let Some(units) = UnitSystem::from_label(&evt.value()) {
                                state.write().config.default_unit_system = units;
                            }
                        },
                        for units in UnitSystem::ALL {
                            option {
                                value: units.label(),
                                selected: units == config.default_unit_system,
                                "{units.label()}"
                            }
                        }
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Calculator" }
                SettingRow { label: "Default operation",
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: config.default_operation.label(),
                        onchange: move |evt| {
                            if let Some(op) = Operation::from_label(&evt.value()) {
                                state.write().config.default_operation = op;
                            }
                        },
                        for op in Operation::ALL {
                            option {
                                value: op.label(),
                                selected: op == config.default_operation,
                                "{op.label()}"
                            }
                        }
                    }
                }
                SettingRow { label: "Decimal places",
                    input {
                        r#type: "number",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        min: "0",
                        max: "6",
                        value: "{config.result_decimals}",
                        onchange: move |evt| {
                            if let Ok(places) = evt.value().parse::<usize>() {
                                state.write().config.result_decimals = places.min(6);
                            }
                        },
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Image Filter" }
                SettingRow { label: "Default blur radius",
                    input {
                        r#type: "number",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        min: "0",
                        max: "{MAX_BLUR_RADIUS}",
                        value: "{config.default_blur_radius}",
                        onchange: move |evt| {
                            if let Ok(radius) = evt.value().parse::<u8>() {
                                state.write().config.default_blur_radius = radius.min(MAX_BLUR_RADIUS);
                            }
                        },
                    }
                }
            }

            // Save button
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                save_msg.set(Some("Settings saved.".into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some(format!("Save failed: {e}")));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some(ref msg) = *save_msg.read() {
                p { style: "color: #34c759; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "Desktools v{VERSION}"
                    br {}
                    "Config: {config_dir}"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}

#[component]
fn SettingRow(label: &'static str, children: Element) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            {children}
        }
    }
}
