// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Four-function calculator.

use desktools_core::Operation;
use desktools_core::error::{DesktoolsError, Result};
use tracing::{debug, warn};

/// Apply `op` to the two operands.
///
/// Division by zero is an error and yields no result. Non-finite operands are
/// rejected as invalid numbers; every other combination is plain IEEE-754
/// arithmetic.
pub fn calculate(lhs: f64, rhs: f64, op: Operation) -> Result<f64> {
    for operand in [lhs, rhs] {
        if !operand.is_finite() {
            warn!(operand, "rejected non-finite operand");
            return Err(DesktoolsError::InvalidNumber(operand.to_string()));
        }
    }

    let result = match op {
        Operation::Add => lhs + rhs,
        Operation::Subtract => lhs - rhs,
        Operation::Multiply => lhs * rhs,
        Operation::Divide => {
            if rhs == 0.0 {
                warn!(lhs, "division by zero");
                return Err(DesktoolsError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    debug!(lhs, rhs, op = %op.symbol(), result, "calculated");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_grouped;

    #[test]
    fn divide_by_zero_is_an_error() {
        let err = calculate(6.0, 0.0, Operation::Divide).unwrap_err();
        assert!(matches!(err, DesktoolsError::DivisionByZero));
    }

    #[test]
    fn negative_zero_divisor_is_also_rejected() {
        assert!(calculate(6.0, -0.0, Operation::Divide).is_err());
    }

    #[test]
    fn six_over_three_displays_two() {
        let result = calculate(6.0, 3.0, Operation::Divide).unwrap();
        assert_eq!(format_grouped(result, 2), "2.00");
    }

    #[test]
    fn the_other_operations() {
        assert_eq!(calculate(1.5, 2.25, Operation::Add).unwrap(), 3.75);
        assert_eq!(calculate(1.5, 2.25, Operation::Subtract).unwrap(), -0.75);
        assert_eq!(calculate(1.5, 4.0, Operation::Multiply).unwrap(), 6.0);
        assert_eq!(calculate(0.0, 0.0, Operation::Multiply).unwrap(), 0.0);
    }

    #[test]
    fn zero_divisor_is_fine_for_other_operations() {
        assert_eq!(calculate(6.0, 0.0, Operation::Add).unwrap(), 6.0);
        assert_eq!(calculate(6.0, 0.0, Operation::Multiply).unwrap(), 0.0);
    }

    #[test]
    fn non_finite_operands_are_invalid() {
        let err = calculate(f64::NAN, 1.0, Operation::Add).unwrap_err();
        assert!(matches!(err, DesktoolsError::InvalidNumber(_)));
        assert!(calculate(1.0, f64::INFINITY, Operation::Subtract).is_err());
    }
}
