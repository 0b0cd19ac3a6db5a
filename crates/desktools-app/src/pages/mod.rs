// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod bmi;
pub mod calculator;
pub mod components;
pub mod home;
pub mod image_filter;
pub mod settings;
