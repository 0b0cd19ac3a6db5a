// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Body Mass Index — unit conversion, formula, and category lookup.

use desktools_core::UnitSystem;
use desktools_core::error::{DesktoolsError, Result};
use tracing::{debug, info, instrument, warn};

/// Metres per inch.
pub const METRES_PER_INCH: f64 = 0.0254;
/// Kilograms per pound.
pub const KG_PER_POUND: f64 = 0.453592;

/// Accepted input ranges, mirroring the bounds on the input widgets.
pub mod limits {
    pub const METRIC_WEIGHT_KG: (f64, f64) = (1.0, 500.0);
    pub const METRIC_HEIGHT_M: (f64, f64) = (0.5, 3.0);
    pub const IMPERIAL_WEIGHT_LB: (f64, f64) = (1.0, 1000.0);
    pub const IMPERIAL_HEIGHT_FT: (u32, u32) = (1, 8);
    pub const IMPERIAL_HEIGHT_IN: (u32, u32) = (0, 11);
}

/// Raw measurements as entered, in either unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurements {
    Metric {
        weight_kg: f64,
        height_m: f64,
    },
    Imperial {
        weight_lb: f64,
        height_ft: u32,
        height_in: u32,
    },
}

impl Measurements {
    /// Widget defaults for a freshly selected unit system.
    pub fn defaults(units: UnitSystem) -> Self {
        match units {
            UnitSystem::Metric => Self::Metric {
                weight_kg: 70.0,
                height_m: 1.70,
            },
            UnitSystem::Imperial => Self::Imperial {
                weight_lb: 155.0,
                height_ft: 5,
                height_in: 7,
            },
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        match self {
            Self::Metric { .. } => UnitSystem::Metric,
            Self::Imperial { .. } => UnitSystem::Imperial,
        }
    }

    /// Convert to kilograms and metres. Metric values pass through unchanged.
    pub fn to_metric(&self) -> MetricBody {
        match *self {
            Self::Metric {
                weight_kg,
                height_m,
            } => MetricBody {
                weight_kg,
                height_m,
            },
            Self::Imperial {
                weight_lb,
                height_ft,
                height_in,
            } => {
                let total_inches = f64::from(height_ft.saturating_mul(12).saturating_add(height_in));
                MetricBody {
                    weight_kg: weight_lb * KG_PER_POUND,
                    height_m: total_inches * METRES_PER_INCH,
                }
            }
        }
    }

    /// Check the values against the widget ranges.
    ///
    /// A non-positive height is reported as such before any range check.
    pub fn validate(&self) -> Result<()> {
        let height_m = self.to_metric().height_m;
        if height_m <= 0.0 {
            return Err(DesktoolsError::NonPositiveHeight(height_m));
        }

        match *self {
            Self::Metric {
                weight_kg,
                height_m,
            } => {
                check_range("weight (kg)", weight_kg, limits::METRIC_WEIGHT_KG)?;
                check_range("height (m)", height_m, limits::METRIC_HEIGHT_M)?;
            }
            Self::Imperial {
                weight_lb,
                height_ft,
                height_in,
            } => {
                check_range("weight (lb)", weight_lb, limits::IMPERIAL_WEIGHT_LB)?;
                check_range_int("height (ft)", height_ft, limits::IMPERIAL_HEIGHT_FT)?;
                check_range_int("height (in)", height_in, limits::IMPERIAL_HEIGHT_IN)?;
            }
        }
        Ok(())
    }
}

/// Measurements after conversion to kilograms and metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBody {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl MetricBody {
    pub fn bmi(&self) -> Result<f64> {
        compute_bmi(self.weight_kg, self.height_m)
    }
}

/// `weight_kg / height_m²`. Zero or negative height is rejected.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Result<f64> {
    if height_m <= 0.0 || height_m.is_nan() {
        warn!(height_m, "rejected non-positive height");
        return Err(DesktoolsError::NonPositiveHeight(height_m));
    }
    Ok(weight_kg / (height_m * height_m))
}

/// BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        Self::Underweight,
        Self::NormalWeight,
        Self::Overweight,
        Self::Obesity,
    ];

    /// Look up the category for a BMI value.
    ///
    /// The bands are `<18.5`, `[18.5, 24.9)`, `[25.0, 29.9)` and everything
    /// else. Values in `[24.9, 25.0)` therefore land in `Obesity`, as do
    /// values in `[29.9, 30.0)`.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if (18.5..24.9).contains(&bmi) {
            Self::NormalWeight
        } else if (25.0..29.9).contains(&bmi) {
            Self::Overweight
        } else {
            Self::Obesity
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        }
    }

    /// Range text for the reference table.
    pub fn range_label(&self) -> &'static str {
        match self {
            Self::Underweight => "< 18.5",
            Self::NormalWeight => "18.5 – 24.9",
            Self::Overweight => "25.0 – 29.9",
            Self::Obesity => "≥ 30.0",
        }
    }
}

/// Outcome of a BMI assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
    /// The converted inputs the BMI was computed from.
    pub body: MetricBody,
}

/// Validate, convert, compute and classify in one step.
#[instrument(skip_all, fields(units = ?measurements.unit_system()))]
pub fn assess(measurements: &Measurements) -> Result<BmiReport> {
    measurements.validate()?;
    let body = measurements.to_metric();
    let bmi = body.bmi()?;
    let category = BmiCategory::classify(bmi);
    debug!(weight_kg = body.weight_kg, height_m = body.height_m, "converted");
    info!(bmi, category = category.label(), "BMI assessed");
    Ok(BmiReport {
        bmi,
        category,
        body,
    })
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(DesktoolsError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn check_range_int(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<()> {
    check_range(field, f64::from(value), (f64::from(min), f64::from(max)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn metric_reference_case() {
        let report = assess(&Measurements::Metric {
            weight_kg: 70.0,
            height_m: 1.70,
        })
        .unwrap();
        assert!(approx(report.bmi, 24.22, 0.01), "got {}", report.bmi);
        assert_eq!(report.category, BmiCategory::NormalWeight);
        assert_eq!(report.category.label(), "Normal weight");
    }

    #[test]
    fn imperial_reference_case() {
        let m = Measurements::Imperial {
            weight_lb: 155.0,
            height_ft: 5,
            height_in: 7,
        };
        let body = m.to_metric();
        assert!(approx(body.height_m, 1.7018, 1e-9), "got {}", body.height_m);
        assert!(approx(body.weight_kg, 70.307, 1e-3), "got {}", body.weight_kg);

        let report = assess(&m).unwrap();
        assert!(approx(report.bmi, 24.27, 0.01), "got {}", report.bmi);
    }

    #[test]
    fn defaults_match_the_reference_cases() {
        assert_eq!(
            Measurements::defaults(UnitSystem::Imperial).to_metric(),
            Measurements::Imperial {
                weight_lb: 155.0,
                height_ft: 5,
                height_in: 7
            }
            .to_metric()
        );
        assert_eq!(
            Measurements::defaults(UnitSystem::Metric).unit_system(),
            UnitSystem::Metric
        );
    }

    #[test]
    fn zero_and_negative_height_rejected() {
        assert!(matches!(
            compute_bmi(70.0, 0.0),
            Err(DesktoolsError::NonPositiveHeight(_))
        ));
        assert!(compute_bmi(70.0, -1.7).is_err());

        let err = assess(&Measurements::Metric {
            weight_kg: 70.0,
            height_m: 0.0,
        })
        .unwrap_err();
        assert!(matches!(err, DesktoolsError::NonPositiveHeight(_)));
    }

    #[test]
    fn out_of_range_inputs_rejected() {
        let err = assess(&Measurements::Metric {
            weight_kg: 501.0,
            height_m: 1.7,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            DesktoolsError::OutOfRange {
                field: "weight (kg)",
                ..
            }
        ));

        let err = assess(&Measurements::Imperial {
            weight_lb: 155.0,
            height_ft: 5,
            height_in: 12,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            DesktoolsError::OutOfRange {
                field: "height (in)",
                ..
            }
        ));
    }

    #[test]
    fn huge_imperial_values_are_out_of_range_not_overflow() {
        let err = assess(&Measurements::Imperial {
            weight_lb: 155.0,
            height_ft: u32::MAX,
            height_in: 7,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            DesktoolsError::OutOfRange {
                field: "height (ft)",
                ..
            }
        ));
    }

    #[test]
    fn category_bands() {
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::classify(24.89), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.89), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obesity);
    }

    #[test]
    fn boundary_gaps_fall_through_to_obesity() {
        assert_eq!(BmiCategory::classify(24.95), BmiCategory::Obesity);
        assert_eq!(BmiCategory::classify(29.95), BmiCategory::Obesity);
    }

    #[test]
    fn reference_table_rows() {
        let rows: Vec<_> = BmiCategory::ALL
            .iter()
            .map(|c| (c.range_label(), c.label()))
            .collect();
        assert_eq!(rows[0], ("< 18.5", "Underweight"));
        assert_eq!(rows[3], ("≥ 30.0", "Obesity"));
    }
}
