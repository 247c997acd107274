//! Wage rate resolution.
//!
//! This module turns an employee's [`WageConfig`] and an [`HoursBreakdown`]
//! into regular and overtime hourly rates and the resulting gross pay.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, HoursBreakdown, PayrollComputationResult, WageConfig, WageMode};

use super::rounding::round_half_up;

/// The resolved rates and gross pay, with the audit step documenting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WageRateResolution {
    /// Rates and gross pay.
    pub result: PayrollComputationResult,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

fn ensure_not_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

fn overflow(field: &str) -> EngineError {
    EngineError::invalid_input(field, "value overflows when computing pay")
}

/// Resolves regular and overtime rates and computes gross pay.
///
/// - [`WageMode::Hourly`]: the regular rate is `hourly_rate`.
/// - [`WageMode::PerShift`]: the regular rate is `per_shift_rate / regular_hours_per_day`.
///
/// In both modes the overtime rate is the regular rate times
/// `overtime_multiplier`. Gross pay is computed from the unrounded rates, then
/// gross pay and both reported rates are rounded half-up to cents. Bonuses and
/// deductions are not applied here.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a negative rate, hour count or
/// threshold, a non-positive overtime multiplier, a zero threshold in
/// per-shift mode, or values so large the pay cannot be represented.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_wage_rates;
/// use payroll_engine::models::{HoursBreakdown, WageConfig};
/// use rust_decimal::Decimal;
///
/// let breakdown = HoursBreakdown {
///     total_hours: Decimal::new(10, 0),
///     regular_hours: Decimal::new(8, 0),
///     overtime_hours: Decimal::new(2, 0),
/// };
/// let wage = WageConfig::hourly(Decimal::new(20, 0));
///
/// let resolution = resolve_wage_rates(&wage, &breakdown, Decimal::new(8, 0), 1).unwrap();
/// assert_eq!(resolution.result.overtime_rate, Decimal::new(30, 0));
/// assert_eq!(resolution.result.gross_pay, Decimal::new(220, 0));
/// ```
pub fn resolve_wage_rates(
    wage: &WageConfig,
    breakdown: &HoursBreakdown,
    regular_hours_per_day: Decimal,
    step_number: u32,
) -> EngineResult<WageRateResolution> {
    ensure_not_negative("hourly_rate", wage.hourly_rate)?;
    ensure_not_negative("per_shift_rate", wage.per_shift_rate)?;
    ensure_not_negative("regular_hours", breakdown.regular_hours)?;
    ensure_not_negative("overtime_hours", breakdown.overtime_hours)?;
    ensure_not_negative("regular_hours_per_day", regular_hours_per_day)?;
    if wage.overtime_multiplier <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "overtime_multiplier",
            format!("must be positive, got {}", wage.overtime_multiplier),
        ));
    }

    let rate_field = match wage.mode {
        WageMode::Hourly => "hourly_rate",
        WageMode::PerShift => "per_shift_rate",
    };

    let (regular_rate, basis) = match wage.mode {
        WageMode::Hourly => (
            wage.hourly_rate,
            format!("hourly rate ${}", wage.hourly_rate.normalize()),
        ),
        WageMode::PerShift => {
            if regular_hours_per_day.is_zero() {
                return Err(EngineError::invalid_input(
                    "regular_hours_per_day",
                    "must be positive to convert a per-shift rate to an hourly rate",
                ));
            }
            let rate = wage
                .per_shift_rate
                .checked_div(regular_hours_per_day)
                .ok_or_else(|| overflow("regular_hours_per_day"))?;
            (
                rate,
                format!(
                    "per-shift rate ${} over {} regular hours",
                    wage.per_shift_rate.normalize(),
                    regular_hours_per_day.normalize()
                ),
            )
        }
    };

    let overtime_rate = regular_rate
        .checked_mul(wage.overtime_multiplier)
        .ok_or_else(|| overflow(rate_field))?;
    let gross_pay = breakdown
        .regular_hours
        .checked_mul(regular_rate)
        .zip(breakdown.overtime_hours.checked_mul(overtime_rate))
        .and_then(|(regular_pay, overtime_pay)| regular_pay.checked_add(overtime_pay))
        .ok_or_else(|| overflow(rate_field))?;

    // Gross comes from the exact rates; only reported values are rounded.
    let regular_rate = round_half_up(regular_rate);
    let overtime_rate = round_half_up(overtime_rate);
    let gross_pay = round_half_up(gross_pay);

    let audit_step = AuditStep {
        step_number,
        rule_id: "wage_rate_resolution".to_string(),
        rule_name: "Wage Rate Resolution".to_string(),
        input: serde_json::json!({
            "mode": wage.mode,
            "hourly_rate": wage.hourly_rate.normalize().to_string(),
            "per_shift_rate": wage.per_shift_rate.normalize().to_string(),
            "overtime_multiplier": wage.overtime_multiplier.normalize().to_string(),
            "regular_hours_per_day": regular_hours_per_day.normalize().to_string(),
            "regular_hours": breakdown.regular_hours.normalize().to_string(),
            "overtime_hours": breakdown.overtime_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_rate": regular_rate.normalize().to_string(),
            "overtime_rate": overtime_rate.normalize().to_string(),
            "gross_pay": gross_pay.normalize().to_string()
        }),
        reasoning: format!(
            "Regular rate ${} from {}; overtime rate ${} at x{}; {} h x ${} + {} h x ${} = ${}",
            regular_rate.normalize(),
            basis,
            overtime_rate.normalize(),
            wage.overtime_multiplier.normalize(),
            breakdown.regular_hours.normalize(),
            regular_rate.normalize(),
            breakdown.overtime_hours.normalize(),
            overtime_rate.normalize(),
            gross_pay.normalize()
        ),
    };

    Ok(WageRateResolution {
        result: PayrollComputationResult {
            regular_rate,
            overtime_rate,
            gross_pay,
        },
        audit_step,
    })
}
