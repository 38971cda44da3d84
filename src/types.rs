//! Domain types for roi-calc.
//!
//! Plain data: the input snapshot, the derived estimate, and the
//! identifiers the state holder and TUI use to address individual fields.

use serde::{Deserialize, Serialize};

// ============================================================================
// INPUTS
// ============================================================================

/// The five user-editable inputs describing current data-management overhead.
///
/// Values here are not guaranteed to be in range; the state holder
/// ([`crate::inputs::InputState`]) is what enforces [`Field::bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    /// Number of data connections. Collected, never used by the formula.
    pub data_sources: u32,
    /// Hours per week spent on manual data work.
    pub hours_per_week: u32,
    /// Fully-loaded hourly labor cost (EUR).
    pub hourly_cost: u32,
    /// Whether a recurring tool cost is part of the current spend.
    pub using_data_tool: bool,
    /// Monthly tool cost (EUR). Only counted while `using_data_tool` is set.
    pub monthly_tool_cost: u32,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            data_sources: 5,
            hours_per_week: 10,
            hourly_cost: 50,
            using_data_tool: false,
            monthly_tool_cost: 500,
        }
    }
}

// ============================================================================
// FIELDS
// ============================================================================

/// Identifies one input control, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DataSources,
    HoursPerWeek,
    HourlyCost,
    UsingDataTool,
    MonthlyToolCost,
}

/// Allowed range and step for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u32,
    /// None = unbounded above (the data-source stepper).
    pub max: Option<u32>,
    pub step: u32,
}

impl Bounds {
    /// Clamp a signed value into this range.
    pub fn clamp(&self, value: i64) -> u32 {
        let max = self.max.map_or(i64::from(u32::MAX), i64::from);
        value.clamp(i64::from(self.min), max) as u32
    }
}

impl Field {
    /// All fields, in the order the form shows them.
    pub const ALL: [Field; 5] = [
        Field::DataSources,
        Field::HoursPerWeek,
        Field::HourlyCost,
        Field::UsingDataTool,
        Field::MonthlyToolCost,
    ];

    /// Range and step for numeric fields. None for the boolean toggle.
    pub fn bounds(self) -> Option<Bounds> {
        match self {
            Field::DataSources => Some(Bounds { min: 1, max: None, step: 1 }),
            Field::HoursPerWeek => Some(Bounds { min: 1, max: Some(80), step: 1 }),
            Field::HourlyCost => Some(Bounds { min: 20, max: Some(200), step: 5 }),
            Field::MonthlyToolCost => Some(Bounds { min: 50, max: Some(5000), step: 50 }),
            Field::UsingDataTool => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        self.bounds().is_some()
    }

    /// Current numeric value of this field, None for the toggle.
    pub fn value(self, inputs: &Inputs) -> Option<u32> {
        match self {
            Field::DataSources => Some(inputs.data_sources),
            Field::HoursPerWeek => Some(inputs.hours_per_week),
            Field::HourlyCost => Some(inputs.hourly_cost),
            Field::MonthlyToolCost => Some(inputs.monthly_tool_cost),
            Field::UsingDataTool => None,
        }
    }

    /// Whether the control is currently shown.
    ///
    /// The tool-cost control only appears while the tool toggle is on.
    pub fn is_visible(self, inputs: &Inputs) -> bool {
        match self {
            Field::MonthlyToolCost => inputs.using_data_tool,
            _ => true,
        }
    }
}

// ============================================================================
// ESTIMATE
// ============================================================================

/// Rounded, display-ready result of the calculator.
///
/// Every monetary field is rounded independently from the unrounded
/// projection; `roi` is a whole percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub annual_savings: u64,
    pub three_year_savings: u64,
    pub five_year_savings: u64,
    pub roi: u32,
    pub annual_labor_cost: u64,
    pub annual_tool_cost: u64,
    pub total_annual_cost: u64,
    pub solution_cost: u64,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for CLI reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Visual theme for the interactive calculator.
///
/// Themes differ in colors and call-to-action copy only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Forest,
    Light,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Forest => write!(f, "forest"),
            ThemeName::Light => write!(f, "light"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
