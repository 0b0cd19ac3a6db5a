// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// desktools-calc — Numeric tools for Desktools.
//
// Provides the BMI assessment (unit conversion, formula, category lookup) and
// the four-function calculator, plus the grouped-number formatting both pages
// use for display.

pub mod arithmetic;
pub mod bmi;
pub mod format;

pub use arithmetic::calculate;
pub use bmi::{BmiCategory, BmiReport, Measurements, MetricBody, assess};
pub use format::format_grouped;
