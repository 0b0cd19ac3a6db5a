// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// BMI page — unit selection, measurement inputs, result and category, and the
// category reference table. The result is recomputed on every input change.

use dioxus::prelude::*;

use desktools_calc::bmi::limits;
use desktools_calc::{BmiCategory, Measurements, assess, format_grouped};
use desktools_core::UnitSystem;
use desktools_core::error::Result;

use crate::input::{parse_number, parse_whole};
use crate::pages::components::{Banner, DANGER, Metric, SUCCESS, WARNING, error_banner};
use crate::state::AppState;

/// Raw text of the measurement inputs for both unit systems.
#[derive(Debug, Clone, PartialEq)]
struct BmiInputs {
    weight_kg: String,
    height_m: String,
    weight_lb: String,
    height_ft: String,
    height_in: String,
}

impl Default for BmiInputs {
    fn default() -> Self {
        let mut inputs = Self {
            weight_kg: String::new(),
            height_m: String::new(),
            weight_lb: String::new(),
            height_ft: String::new(),
            height_in: String::new(),
        };
        for units in UnitSystem::ALL {
            match Measurements::defaults(units) {
                Measurements::Metric {
                    weight_kg,
                    height_m,
                } => {
                    inputs.weight_kg = format!("{weight_kg:.1}");
                    inputs.height_m = format!("{height_m:.2}");
                }
                Measurements::Imperial {
                    weight_lb,
                    height_ft,
                    height_in,
                } => {
                    inputs.weight_lb = format!("{weight_lb:.1}");
                    inputs.height_ft = height_ft.to_string();
                    inputs.height_in = height_in.to_string();
                }
            }
        }
        inputs
    }
}

impl BmiInputs {
    /// Parse the inputs belonging to `units`.
    fn measurements(&self, units: UnitSystem) -> Result<Measurements> {
        Ok(match units {
            UnitSystem::Metric => Measurements::Metric {
                weight_kg: parse_number(&self.weight_kg)?,
                height_m: parse_number(&self.height_m)?,
            },
            UnitSystem::Imperial => Measurements::Imperial {
                weight_lb: parse_number(&self.weight_lb)?,
                height_ft: parse_whole(&self.height_ft)?,
                height_in: parse_whole(&self.height_in)?,
            },
        })
    }
}

fn category_style(category: BmiCategory) -> (&'static str, &'static str) {
    match category {
        BmiCategory::NormalWeight => SUCCESS,
        BmiCategory::Underweight | BmiCategory::Overweight => WARNING,
        BmiCategory::Obesity => DANGER,
    }
}

#[component]
pub fn Bmi() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut units = use_signal(|| state.read().config.default_unit_system);
    let mut inputs = use_signal(BmiInputs::default);
    let decimals = state.read().config.result_decimals;

    let current_units = *units.read();
    let outcome = inputs
        .read()
        .measurements(current_units)
        .and_then(|m| assess(&m));

    rsx! {
        div {
            h1 { "\u{1F30D} BMI Calculator with Unit Selection" }
            hr {}

            // Unit selection
            div { style: "display: flex; gap: 16px; margin: 12px 0;",
                for choice in UnitSystem::ALL {
                    label { style: "display: flex; align-items: center; gap: 6px;",
                        input {
                            r#type: "radio",
                            name: "unit-system",
                            checked: choice == current_units,
                            onchange: move |_| {
                                tracing::debug!(units = choice.label(), "unit system selected");
                                units.set(choice);
                            },
                        }
                        "{choice.label()}"
                    }
                }
            }

            h3 { "Enter Your Measurements" }

            if current_units == UnitSystem::Metric {
                NumberField {
                    label: "Weight (in kilograms, kg)",
                    value: inputs.read().weight_kg.clone(),
                    min: limits::METRIC_WEIGHT_KG.0,
                    max: limits::METRIC_WEIGHT_KG.1,
                    step: 0.1,
                    on_input: move |v: String| inputs.write().weight_kg = v,
                }
                NumberField {
                    label: "Height (in meters, m)",
                    value: inputs.read().height_m.clone(),
                    min: limits::METRIC_HEIGHT_M.0,
                    max: limits::METRIC_HEIGHT_M.1,
                    step: 0.01,
                    on_input: move |v: String| inputs.write().height_m = v,
                }
            } else {
                NumberField {
                    label: "Weight (in pounds, lb)",
                    value: inputs.read().weight_lb.clone(),
                    min: limits::IMPERIAL_WEIGHT_LB.0,
                    max: limits::IMPERIAL_WEIGHT_LB.1,
                    step: 0.1,
                    on_input: move |v: String| inputs.write().weight_lb = v,
                }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                    NumberField {
                        label: "Height (in feet, ft)",
                        value: inputs.read().height_ft.clone(),
                        min: f64::from(limits::IMPERIAL_HEIGHT_FT.0),
                        max: f64::from(limits::IMPERIAL_HEIGHT_FT.1),
                        step: 1.0,
                        on_input: move |v: String| inputs.write().height_ft = v,
                    }
                    NumberField {
                        label: "Height (in inches, in)",
                        value: inputs.read().height_in.clone(),
                        min: f64::from(limits::IMPERIAL_HEIGHT_IN.0),
                        max: f64::from(limits::IMPERIAL_HEIGHT_IN.1),
                        step: 1.0,
                        on_input: move |v: String| inputs.write().height_in = v,
                    }
                }
            }

            // Result
            {
                match outcome {
                    Ok(report) => {
                        let (colour, background) = category_style(report.category);
                        rsx! {
                            h3 { "Your Results" }
                            Metric { label: "Calculated BMI", value: format_grouped(report.bmi, decimals) }
                            Banner {
                                text: format!("Category: {}", report.category.label()),
                                colour: colour,
                                background: background,
                            }
                        }
                    }
                    Err(err) => error_banner(&err),
                }
            }

            hr {}

            // Reference table
            p { style: "color: #888; font-size: 13px;", "BMI Categories Reference:" }
            table { style: "border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        th { style: "text-align: left; padding: 4px 16px 4px 0;", "BMI Range (kg/m\u{00B2})" }
                        th { style: "text-align: left; padding: 4px 0;", "Category" }
                    }
                }
                tbody {
                    for category in BmiCategory::ALL {
                        tr {
                            td { style: "padding: 4px 16px 4px 0;", "{category.range_label()}" }
                            td { style: "padding: 4px 0;", "{category.label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NumberField(
    label: &'static str,
    value: String,
    min: f64,
    max: f64,
    step: f64,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label { style: "display: block; margin: 8px 0;",
            div { style: "color: #444; font-size: 14px; margin-bottom: 4px;", "{label}" }
            input {
                r#type: "number",
                style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
