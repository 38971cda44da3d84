//! Report formatting for estimates.
//!
//! Pure functions — (Inputs, Estimate, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::currency::{format_currency, format_percent};
use crate::error::Result;
use crate::types::{Estimate, Inputs, OutputFormat};

/// Caveat shown under every estimate.
pub const DISCLAIMER: &str =
    "This is an estimation. Your actual ROI may vary. Please book a demo for a detailed quote.";

/// Format an estimate for output.
pub fn format_report(inputs: &Inputs, estimate: &Estimate, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(inputs, estimate)),
        OutputFormat::Json => format_json(inputs, estimate),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(inputs: &Inputs, estimate: &Estimate) -> String {
    let mut out = String::new();

    out.push_str("=== Your Inputs ===\n");
    out.push_str(&format!("Data sources:        {}\n", inputs.data_sources));
    out.push_str(&format!("Hours per week:      {}\n", inputs.hours_per_week));
    out.push_str(&format!(
        "Hourly cost:         {}/hour\n",
        format_currency(u64::from(inputs.hourly_cost))
    ));
    if inputs.using_data_tool {
        out.push_str(&format!(
            "Monthly tool cost:   {}\n",
            format_currency(u64::from(inputs.monthly_tool_cost))
        ));
    } else {
        out.push_str("Other data tool:     none\n");
    }
    out.push('\n');

    out.push_str("=== Current Annual Cost ===\n");
    out.push_str(&format!(
        "Labor:               {}\n",
        format_currency(estimate.annual_labor_cost)
    ));
    if inputs.using_data_tool {
        out.push_str(&format!(
            "Tools:               {}\n",
            format_currency(estimate.annual_tool_cost)
        ));
    }
    out.push_str(&format!(
        "Total:               {}\n",
        format_currency(estimate.total_annual_cost)
    ));
    out.push('\n');

    out.push_str("=== Your Estimated Savings ===\n");
    out.push_str(&format!(
        "Annual savings:      {}\n",
        format_currency(estimate.annual_savings)
    ));
    out.push_str(&format!(
        "3-year savings:      {}\n",
        format_currency(estimate.three_year_savings)
    ));
    out.push_str(&format!(
        "5-year savings:      {}\n",
        format_currency(estimate.five_year_savings)
    ));
    out.push_str(&format!(
        "Estimated ROI:       {}\n",
        format_percent(estimate.roi)
    ));
    out.push('\n');

    out.push_str(DISCLAIMER);
    out.push('\n');

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct JsonReport<'a> {
    inputs: &'a Inputs,
    estimate: &'a Estimate,
}

fn format_json(inputs: &Inputs, estimate: &Estimate) -> Result<String> {
    let report = JsonReport { inputs, estimate };
    Ok(serde_json::to_string_pretty(&report)?)
}

// ============================================================================
// TESTS
// ============================================================================
