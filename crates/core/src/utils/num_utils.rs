//! Lenient numeric coercion for ledger cells.
//!
//! The published CSVs perform no schema enforcement, so numeric columns can
//! carry text, blanks, or nothing at all. Coercion is explicit: the caller
//! gets the parsed value together with a validity flag, and the fallback to
//! zero (or a caller-chosen default) is visible rather than silent.

use rust_decimal::Decimal;

/// Outcome of coercing one raw ledger cell to a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercedDecimal {
    /// The parsed value, or `Decimal::ZERO` when the cell was not numeric.
    pub value: Decimal,
    /// Whether the cell actually held a parseable number.
    pub valid: bool,
}

impl CoercedDecimal {
    fn invalid() -> Self {
        CoercedDecimal {
            value: Decimal::ZERO,
            valid: false,
        }
    }

    /// The parsed value, or `default` when the cell was not numeric.
    pub fn or(self, default: Decimal) -> Decimal {
        if self.valid {
            self.value
        } else {
            default
        }
    }
}

/// Coerces a raw cell to a decimal, flagging whether it parsed.
///
/// Whitespace is trimmed first; an empty or missing cell is not numeric.
/// Plain and scientific notation are both accepted.
pub fn coerce_decimal(raw: &str) -> CoercedDecimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CoercedDecimal::invalid();
    }

    let parsed = trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed));

    match parsed {
        Ok(value) => CoercedDecimal { value, valid: true },
        Err(_) => CoercedDecimal::invalid(),
    }
}

/// Coerces a raw cell to a decimal, falling back to zero.
pub fn decimal_or_zero(raw: &str) -> Decimal {
    coerce_decimal(raw).value
}
