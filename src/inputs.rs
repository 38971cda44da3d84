//! Input state holder.
//!
//! Owns the current [`Inputs`] snapshot and the [`Estimate`] derived from
//! it. Every setter clamps its value into the field's bounds and then
//! recomputes, so the estimate is never stale. Malformed text never
//! errors: it falls back to the field's minimum.

use tracing::{debug, trace};

use crate::calculator::estimate;
use crate::types::{Estimate, Field, Inputs};

/// Current inputs plus the estimate computed from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    inputs: Inputs,
    estimate: Estimate,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(Inputs::default())
    }
}

impl InputState {
    /// Build a holder from an arbitrary snapshot, clamping every field.
    pub fn new(inputs: Inputs) -> Self {
        let inputs = Inputs {
            data_sources: clamp_field(Field::DataSources, i64::from(inputs.data_sources)),
            hours_per_week: clamp_field(Field::HoursPerWeek, i64::from(inputs.hours_per_week)),
            hourly_cost: clamp_field(Field::HourlyCost, i64::from(inputs.hourly_cost)),
            using_data_tool: inputs.using_data_tool,
            monthly_tool_cost: clamp_field(
                Field::MonthlyToolCost,
                i64::from(inputs.monthly_tool_cost),
            ),
        };
        Self {
            inputs,
            estimate: estimate(&inputs),
        }
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    // ------------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------------

    pub fn set_data_sources(&mut self, value: i64) {
        self.inputs.data_sources = clamp_field(Field::DataSources, value);
        self.recompute();
    }

    pub fn set_hours_per_week(&mut self, value: i64) {
        self.inputs.hours_per_week = clamp_field(Field::HoursPerWeek, value);
        self.recompute();
    }

    pub fn set_hourly_cost(&mut self, value: i64) {
        self.inputs.hourly_cost = clamp_field(Field::HourlyCost, value);
        self.recompute();
    }

    pub fn set_monthly_tool_cost(&mut self, value: i64) {
        self.inputs.monthly_tool_cost = clamp_field(Field::MonthlyToolCost, value);
        self.recompute();
    }

    pub fn set_using_data_tool(&mut self, on: bool) {
        self.inputs.using_data_tool = on;
        self.recompute();
    }

    pub fn toggle_data_tool(&mut self) {
        self.set_using_data_tool(!self.inputs.using_data_tool);
    }

    /// Set a numeric field by identifier. The toggle treats any nonzero
    /// value as "on".
    pub fn set(&mut self, field: Field, value: i64) {
        match field {
            Field::DataSources => self.set_data_sources(value),
            Field::HoursPerWeek => self.set_hours_per_week(value),
            Field::HourlyCost => self.set_hourly_cost(value),
            Field::MonthlyToolCost => self.set_monthly_tool_cost(value),
            Field::UsingDataTool => self.set_using_data_tool(value != 0),
        }
    }

    /// Move a numeric field by `steps` slider steps (negative = down).
    ///
    /// No-op on the toggle.
    pub fn step(&mut self, field: Field, steps: i64) {
        let (Some(bounds), Some(current)) = (field.bounds(), field.value(&self.inputs)) else {
            return;
        };
        let delta = steps.saturating_mul(i64::from(bounds.step));
        self.set(field, i64::from(current).saturating_add(delta));
    }

    /// Apply free-text entry to a numeric field.
    ///
    /// Reads the leading integer (sign and digits, trailing junk ignored).
    /// Unparseable or zero text is replaced by the field's minimum; the
    /// result is then clamped. No-op on the toggle.
    pub fn set_from_text(&mut self, field: Field, text: &str) {
        let Some(bounds) = field.bounds() else {
            return;
        };
        let value = match parse_leading_int(text) {
            Some(n) if n != 0 => n,
            _ => {
                debug!(?field, text, min = bounds.min, "unusable field text, using minimum");
                i64::from(bounds.min)
            }
        };
        self.set(field, value);
    }

    fn recompute(&mut self) {
        self.estimate = estimate(&self.inputs);
        trace!(inputs = ?self.inputs, estimate = ?self.estimate, "recomputed");
    }
}

fn clamp_field(field: Field, value: i64) -> u32 {
    match field.bounds() {
        Some(bounds) => bounds.clamp(value),
        None => u32::from(value != 0),
    }
}

/// Parse an optional sign followed by digits at the start of `text`.
///
/// Surrounding whitespace is skipped. Returns None if no digit follows the
/// sign. Digit runs too long for i64 saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_default_estimate() {
        let state = InputState::default();
        assert_eq!(*state.inputs(), Inputs::default());
        assert_eq!(state.estimate().annual_savings, 18_200);
        assert_eq!(state.estimate().roi, 700);
    }

    #[test]
    fn new_clamps_out_of_range_snapshot() {
        let state = InputState::new(Inputs {
            data_sources: 0,
            hours_per_week: 500,
            hourly_cost: 1,
            using_data_tool: true,
            monthly_tool_cost: 10_000,
        });
        let inputs = state.inputs();
        assert_eq!(inputs.data_sources, 1);
        assert_eq!(inputs.hours_per_week, 80);
        assert_eq!(inputs.hourly_cost, 20);
        assert_eq!(inputs.monthly_tool_cost, 5_000);
    }

    #[test]
    fn hours_clamped_to_range() {
        let mut state = InputState::default();
        state.set_hours_per_week(0);
        assert_eq!(state.inputs().hours_per_week, 1);
        state.set_hours_per_week(81);
        assert_eq!(state.inputs().hours_per_week, 80);
    }

    #[test]
    fn hourly_cost_clamped_to_range() {
        let mut state = InputState::default();
        state.set_hourly_cost(19);
        assert_eq!(state.inputs().hourly_cost, 20);
        state.set_hourly_cost(201);
        assert_eq!(state.inputs().hourly_cost, 200);
    }

    #[test]
    fn tool_cost_clamped_to_range() {
        let mut state = InputState::default();
        state.set_monthly_tool_cost(-3);
        assert_eq!(state.inputs().monthly_tool_cost, 50);
        state.set_monthly_tool_cost(5_001);
        assert_eq!(state.inputs().monthly_tool_cost, 5_000);
    }

    #[test]
    fn data_sources_never_below_one() {
        let mut state = InputState::default();
        state.set_data_sources(1);
        state.step(Field::DataSources, -1);
        assert_eq!(state.inputs().data_sources, 1);
        state.step(Field::DataSources, 1);
        assert_eq!(state.inputs().data_sources, 2);
    }

    #[test]
    fn step_uses_field_step_size() {
        let mut state = InputState::default();
        state.step(Field::HourlyCost, 1);
        assert_eq!(state.inputs().hourly_cost, 55);
        state.step(Field::MonthlyToolCost, -2);
        assert_eq!(state.inputs().monthly_tool_cost, 400);
        state.step(Field::HoursPerWeek, 100);
        assert_eq!(state.inputs().hours_per_week, 80);
    }

    #[test]
    fn step_on_toggle_is_noop() {
        let mut state = InputState::default();
        state.step(Field::UsingDataTool, 1);
        assert!(!state.inputs().using_data_tool);
    }

    #[test]
    fn every_setter_recomputes() {
        let mut state = InputState::default();

        state.set_hours_per_week(20);
        assert_eq!(state.estimate().total_annual_cost, 52_000);

        state.set_hourly_cost(100);
        assert_eq!(state.estimate().total_annual_cost, 104_000);

        state.set_using_data_tool(true);
        assert_eq!(state.estimate().total_annual_cost, 110_000);

        state.set_monthly_tool_cost(1_000);
        assert_eq!(state.estimate().total_annual_cost, 116_000);

        state.set_from_text(Field::HoursPerWeek, "10");
        assert_eq!(state.estimate().annual_labor_cost, 52_000);
    }

    #[test]
    fn toggling_tool_off_zeroes_tool_cost() {
        let mut state = InputState::default();
        state.set_monthly_tool_cost(2_000);
        state.toggle_data_tool();
        assert_eq!(state.estimate().annual_tool_cost, 24_000);

        state.toggle_data_tool();
        assert_eq!(state.estimate().annual_tool_cost, 0);
        // Stored value survives so toggling back restores it
        assert_eq!(state.inputs().monthly_tool_cost, 2_000);
    }

    #[test]
    fn with_tool_scenario() {
        let mut state = InputState::default();
        state.set_using_data_tool(true);
        let est = state.estimate();
        assert_eq!(est.annual_tool_cost, 6_000);
        assert_eq!(est.total_annual_cost, 32_000);
        assert_eq!(est.annual_savings, 22_400);
        assert_eq!(est.roi, 700);
    }

    #[test]
    fn non_numeric_text_falls_back_to_minimum() {
        let mut state = InputState::default();
        state.set_from_text(Field::HoursPerWeek, "abc");
        assert_eq!(state.inputs().hours_per_week, 1);
        state.set_from_text(Field::HourlyCost, "");
        assert_eq!(state.inputs().hourly_cost, 20);
        state.set_from_text(Field::MonthlyToolCost, "-");
        assert_eq!(state.inputs().monthly_tool_cost, 50);
        state.set_from_text(Field::DataSources, "x5");
        assert_eq!(state.inputs().data_sources, 1);
    }

    #[test]
    fn zero_text_falls_back_to_minimum() {
        let mut state = InputState::default();
        state.set_from_text(Field::HourlyCost, "0");
        assert_eq!(state.inputs().hourly_cost, 20);
    }

    #[test]
    fn text_is_clamped_after_parsing() {
        let mut state = InputState::default();
        state.set_from_text(Field::HoursPerWeek, "120");
        assert_eq!(state.inputs().hours_per_week, 80);
        state.set_from_text(Field::HourlyCost, "-50");
        assert_eq!(state.inputs().hourly_cost, 20);
    }

    #[test]
    fn text_with_trailing_junk_uses_leading_number() {
        let mut state = InputState::default();
        state.set_from_text(Field::HoursPerWeek, " 42 hours");
        assert_eq!(state.inputs().hours_per_week, 42);
    }

    #[test]
    fn text_on_toggle_is_noop() {
        let mut state = InputState::default();
        state.set_from_text(Field::UsingDataTool, "1");
        assert!(!state.inputs().using_data_tool);
    }

    #[test]
    fn parse_leading_int_cases() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("+9"), Some(9));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }
}
