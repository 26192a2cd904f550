//! Feasibility calculation errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the metric operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeasibilityError {
    /// A required input was out of its valid range
    #[error("{operation}: invalid {field} ({value})")]
    InvalidInput {
        /// Operation that rejected the input
        operation: &'static str,
        /// Offending field
        field: &'static str,
        /// Value that was supplied
        value: Decimal,
    },
    /// A computed denominator resolved to zero or below
    #[error("{operation}: {denominator} is not positive")]
    DivisionByZero {
        /// Operation that guarded the division
        operation: &'static str,
        /// Name of the denominator
        denominator: &'static str,
    },
    /// An intermediate result fell outside the representable range
    #[error("{operation}: {field} overflowed")]
    Overflow {
        /// Operation that produced the value
        operation: &'static str,
        /// Quantity being computed
        field: &'static str,
    },
}

impl FeasibilityError {
    /// Short kind label, used for metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            FeasibilityError::InvalidInput { .. } => "invalid_input",
            FeasibilityError::DivisionByZero { .. } => "division_by_zero",
            FeasibilityError::Overflow { .. } => "overflow",
        }
    }
}

pub type Result<T> = std::result::Result<T, FeasibilityError>;

/// Require `value > 0`
pub(crate) fn require_positive(
    operation: &'static str,
    field: &'static str,
    value: Decimal,
) -> Result<Decimal> {
    if value > Decimal::ZERO {
        Ok(value)
    } else {
        Err(FeasibilityError::InvalidInput {
            operation,
            field,
            value,
        })
    }
}

/// Require `value >= 0`
pub(crate) fn require_non_negative(
    operation: &'static str,
    field: &'static str,
    value: Decimal,
) -> Result<Decimal> {
    if value >= Decimal::ZERO {
        Ok(value)
    } else {
        Err(FeasibilityError::InvalidInput {
            operation,
            field,
            value,
        })
    }
}

/// Guard a computed denominator
pub(crate) fn guard_denominator(
    operation: &'static str,
    denominator: &'static str,
    value: Decimal,
) -> Result<Decimal> {
    if value > Decimal::ZERO {
        Ok(value)
    } else {
        Err(FeasibilityError::DivisionByZero {
            operation,
            denominator,
        })
    }
}

fn overflow(operation: &'static str, field: &'static str) -> FeasibilityError {
    FeasibilityError::Overflow { operation, field }
}

/// `a * b`, failing instead of panicking out of range
pub(crate) fn mul(
    operation: &'static str,
    field: &'static str,
    a: Decimal,
    b: Decimal,
) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(operation, field))
}

/// `a / b`, failing instead of panicking out of range
pub(crate) fn div(
    operation: &'static str,
    field: &'static str,
    a: Decimal,
    b: Decimal,
) -> Result<Decimal> {
    a.checked_div(b).ok_or_else(|| overflow(operation, field))
}

/// `a - b`, failing instead of panicking out of range
pub(crate) fn sub(
    operation: &'static str,
    field: &'static str,
    a: Decimal,
    b: Decimal,
) -> Result<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow(operation, field))
}
