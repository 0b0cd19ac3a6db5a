// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared selection enums used by the tools and the configuration.

use serde::{Deserialize, Serialize};

/// Measurement system for the BMI tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Kilograms and metres.
    #[default]
    Metric,
    /// Pounds, feet and inches.
    Imperial,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [Self::Metric, Self::Imperial];

    /// Label shown on the unit selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Metric => "Metric",
            Self::Imperial => "Imperial (US)",
        }
    }

    /// Inverse of [`UnitSystem::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

/// Four-function calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.label() == label)
    }

    /// Infix symbol, used in log lines and the result caption.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }
}
