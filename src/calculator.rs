//! Savings and ROI arithmetic.
//!
//! Pure functions — Inputs → Projection → Estimate. No I/O, no state.
//!
//! Rounding happens once, at the end: multi-year figures are derived from
//! the unrounded annual savings and each stored field is rounded on its own.

use crate::types::{Estimate, Inputs};

/// Fraction of current total annual cost assumed to be saved.
pub const EFFICIENCY_IMPROVEMENT: f64 = 0.7;

/// Assumed solution cost as a fraction of current total annual cost.
pub const SOLUTION_COST_FACTOR: f64 = 0.1;

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Every intermediate figure of the formula, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub annual_labor_cost: f64,
    pub annual_tool_cost: f64,
    pub total_annual_cost: f64,
    pub annual_savings: f64,
    pub three_year_savings: f64,
    pub five_year_savings: f64,
    pub solution_cost: f64,
}

/// Run the formula on an input snapshot.
///
/// `data_sources` is deliberately not read.
pub fn project(inputs: &Inputs) -> Projection {
    let annual_labor_cost =
        f64::from(inputs.hours_per_week) * f64::from(inputs.hourly_cost) * WEEKS_PER_YEAR;

    let annual_tool_cost = if inputs.using_data_tool {
        f64::from(inputs.monthly_tool_cost) * MONTHS_PER_YEAR
    } else {
        0.0
    };

    let total_annual_cost = annual_labor_cost + annual_tool_cost;
    let annual_savings = total_annual_cost * EFFICIENCY_IMPROVEMENT;

    Projection {
        annual_labor_cost,
        annual_tool_cost,
        total_annual_cost,
        annual_savings,
        three_year_savings: annual_savings * 3.0,
        five_year_savings: annual_savings * 5.0,
        solution_cost: total_annual_cost * SOLUTION_COST_FACTOR,
    }
}

impl Projection {
    /// Whole-percent ROI; 0 when there is no solution cost to divide by.
    pub fn roi(&self) -> u32 {
        if self.solution_cost > 0.0 {
            round_to_u64(self.annual_savings / self.solution_cost * 100.0) as u32
        } else {
            0
        }
    }

    /// Round every field independently for display.
    pub fn rounded(&self) -> Estimate {
        Estimate {
            annual_savings: round_to_u64(self.annual_savings),
            three_year_savings: round_to_u64(self.three_year_savings),
            five_year_savings: round_to_u64(self.five_year_savings),
            roi: self.roi(),
            annual_labor_cost: round_to_u64(self.annual_labor_cost),
            annual_tool_cost: round_to_u64(self.annual_tool_cost),
            total_annual_cost: round_to_u64(self.total_annual_cost),
            solution_cost: round_to_u64(self.solution_cost),
        }
    }
}

/// Display-ready estimate for an input snapshot.
pub fn estimate(inputs: &Inputs) -> Estimate {
    project(inputs).rounded()
}

/// Round half away from zero. Inputs are never negative, so this matches
/// half-up rounding.
fn round_to_u64(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(hours: u32, rate: u32, tool: Option<u32>) -> Inputs {
        Inputs {
            data_sources: 5,
            hours_per_week: hours,
            hourly_cost: rate,
            using_data_tool: tool.is_some(),
            monthly_tool_cost: tool.unwrap_or(500),
        }
    }

    #[test]
    fn default_scenario_without_tool() {
        let est = estimate(&inputs(10, 50, None));
        assert_eq!(est.total_annual_cost, 26_000);
        assert_eq!(est.annual_savings, 18_200);
        assert_eq!(est.three_year_savings, 54_600);
        assert_eq!(est.five_year_savings, 91_000);
        assert_eq!(est.roi, 700);
    }

    #[test]
    fn default_scenario_with_tool() {
        let est = estimate(&inputs(10, 50, Some(500)));
        assert_eq!(est.annual_tool_cost, 6_000);
        assert_eq!(est.total_annual_cost, 32_000);
        assert_eq!(est.annual_savings, 22_400);
        assert_eq!(est.roi, 700);
    }

    #[test]
    fn total_cost_is_labor_plus_tool() {
        for hours in [1, 7, 33, 80] {
            for rate in [20, 55, 200] {
                for tool in [None, Some(50), Some(1250), Some(5000)] {
                    let p = project(&inputs(hours, rate, tool));
                    let expected = f64::from(hours) * f64::from(rate) * 52.0
                        + tool.map_or(0.0, |t| f64::from(t) * 12.0);
                    assert_eq!(p.total_annual_cost, expected);
                }
            }
        }
    }

    #[test]
    fn savings_are_seventy_percent_before_rounding() {
        let p = project(&inputs(13, 35, Some(750)));
        assert_eq!(p.annual_savings, p.total_annual_cost * 0.7);
    }

    #[test]
    fn multi_year_ratio_is_three_to_five_before_rounding() {
        let p = project(&inputs(17, 45, Some(150)));
        assert_eq!(p.three_year_savings, p.annual_savings * 3.0);
        assert_eq!(p.five_year_savings, p.annual_savings * 5.0);
        assert!((p.three_year_savings / p.five_year_savings - 0.6).abs() < 1e-12);
    }

    #[test]
    fn multi_year_figures_round_from_unrounded_annual() {
        // Integer inputs rarely produce fractions, so build one by hand
        let p = Projection {
            annual_labor_cost: 0.0,
            annual_tool_cost: 0.0,
            total_annual_cost: 0.0,
            annual_savings: 100.4,
            three_year_savings: 301.2,
            five_year_savings: 502.0,
            solution_cost: 0.0,
        };
        let est = p.rounded();
        assert_eq!(est.annual_savings, 100);
        assert_eq!(est.three_year_savings, 301);
        assert_eq!(est.five_year_savings, 502);
        // Not 3 * rounded annual (300) or 5 * rounded annual (500)
        assert_ne!(est.three_year_savings, 3 * est.annual_savings);
        assert_ne!(est.five_year_savings, 5 * est.annual_savings);
    }

    #[test]
    fn roi_is_constant_for_any_nonzero_cost() {
        for hours in 1..=80 {
            for rate in (20..=200).step_by(15) {
                assert_eq!(estimate(&inputs(hours, rate, None)).roi, 700);
                assert_eq!(estimate(&inputs(hours, rate, Some(2_350))).roi, 700);
            }
        }
    }

    #[test]
    fn roi_is_zero_when_total_cost_is_zero() {
        let est = estimate(&inputs(0, 0, None));
        assert_eq!(est.total_annual_cost, 0);
        assert_eq!(est.solution_cost, 0);
        assert_eq!(est.roi, 0);
    }

    #[test]
    fn tool_cost_ignored_when_toggle_off() {
        let mut snapshot = inputs(10, 50, Some(5_000));
        snapshot.using_data_tool = false;
        let est = estimate(&snapshot);
        assert_eq!(est.annual_tool_cost, 0);
        assert_eq!(est.total_annual_cost, 26_000);
    }

    #[test]
    fn data_sources_do_not_affect_estimate() {
        let mut a = inputs(12, 80, Some(900));
        let mut b = a;
        a.data_sources = 1;
        b.data_sources = 400;
        assert_eq!(estimate(&a), estimate(&b));
    }

    #[test]
    fn solution_cost_is_ten_percent() {
        let est = estimate(&inputs(10, 50, Some(500)));
        assert_eq!(est.solution_cost, 3_200);
    }

    #[test]
    fn max_inputs_do_not_overflow() {
        let est = estimate(&inputs(80, 200, Some(5_000)));
        assert_eq!(est.annual_labor_cost, 832_000);
        assert_eq!(est.total_annual_cost, 892_000);
        assert_eq!(est.annual_savings, 624_400);
        assert_eq!(est.five_year_savings, 3_122_000);
    }
}
