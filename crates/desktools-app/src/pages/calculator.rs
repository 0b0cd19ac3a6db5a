// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Calculator page — two operands, an operation, and a Calculate button.

use dioxus::prelude::*;

use desktools_calc::{calculate, format_grouped};
use desktools_core::Operation;
use desktools_core::error::Result;

use crate::input::parse_number;
use crate::pages::components::{Banner, INFO, Metric, error_banner};
use crate::state::AppState;

/// Parse both operand inputs and apply `op`.
fn evaluate(lhs: &str, rhs: &str, op: Operation) -> Result<f64> {
    let lhs = parse_number(lhs)?;
    let rhs = parse_number(rhs)?;
    calculate(lhs, rhs, op)
}

#[component]
pub fn Calculator() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut lhs = use_signal(|| "0.0".to_string());
    let mut rhs = use_signal(|| "0.0".to_string());
    let mut operation = use_signal(|| state.read().config.default_operation);
    // None until Calculate is pressed; cleared again by any input change.
    let mut outcome = use_signal(|| Option::<Result<f64>>::None);
    let decimals = state.read().config.result_decimals;

    rsx! {
        div {
            h1 { "\u{1F522} Simple Calculator" }

            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin: 16px 0;",
                OperandField {
                    label: "Enter First Number",
                    value: lhs.read().clone(),
                    on_input: move |v: String| {
                        lhs.set(v);
                        outcome.set(None);
                    },
                }
                OperandField {
                    label: "Enter Second Number",
                    value: rhs.read().clone(),
                    on_input: move |v: String| {
                        rhs.set(v);
                        outcome.set(None);
                    },
                }
            }

            label { style: "display: block; margin: 8px 0;",
                div { style: "color: #444; font-size: 14px; margin-bottom: 4px;", "Select Operation" }
                select {
                    style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",
                    value: operation.read().label(),
                    onchange: move |evt| {
                        if let Some(op) = Operation::from_label(&evt.value()) {
                            operation.set(op);
                            outcome.set(None);
                        }
                    },
                    for op in Operation::ALL {
                        option { value: op.label(), selected: op == *operation.read(), "{op.label()}" }
                    }
                }
            }

            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: move |_| {
                    let op = *operation.read();
                    let result = evaluate(&lhs.read(), &rhs.read(), op);
                    match &result {
                        Ok(value) => tracing::info!(op = op.label(), value, "calculation done"),
                        Err(e) => tracing::info!(op = op.label(), error = %e, "calculation rejected"),
                    }
                    outcome.set(Some(result));
                },
                "Calculate"
            }

            {
                match &*outcome.read() {
                    Some(Ok(value)) => rsx! {
                        Metric { label: "Result", value: format_grouped(*value, decimals) }
                    },
                    Some(Err(err)) => error_banner(err),
                    None => rsx! {},
                }
            }

            hr {}
            Banner {
                text: "\u{1F4A1} Tip: Change the numbers and click 'Calculate' again!".to_string(),
                colour: INFO.0,
                background: INFO.1,
            }
        }
    }
}

#[component]
fn OperandField(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        label { style: "display: block;",
            div { style: "color: #444; font-size: 14px; margin-bottom: 4px;", "{label}" }
            input {
                r#type: "number",
                style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",
                step: "0.1",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desktools_core::DesktoolsError;

    #[test]
    fn divide_by_zero_has_no_result() {
        assert!(matches!(
            evaluate("6", "0", Operation::Divide),
            Err(DesktoolsError::DivisionByZero)
        ));
    }

    #[test]
    fn six_over_three() {
        let value = evaluate("6", "3", Operation::Divide).unwrap();
        assert_eq!(format_grouped(value, 2), "2.00");
    }

    #[test]
    fn defaults_add_to_zero() {
        assert_eq!(evaluate("0.0", "0.0", Operation::Add).unwrap(), 0.0);
    }

    #[test]
    fn blank_operand_is_invalid() {
        assert!(matches!(
            evaluate("", "3", Operation::Add),
            Err(DesktoolsError::InvalidNumber(_))
        ));
    }
}
