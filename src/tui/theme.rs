//! TUI color semantics and style constants.
//!
//! Two themes share one layout: `FOREST` (dark green page, coral accent)
//! and `LIGHT` (white page, same accent). They differ only in colors and
//! call-to-action copy. Pure data — consumed by the rendering layer.
//!
//! Color semantics:
//! - Accent: the ROI figure, the CTA button, the focus marker
//! - Text: labels and headline figures
//! - Muted: field descriptions, secondary figures
//! - Dim: captions, help line, disclaimer

use ratatui::style::{Color, Modifier, Style};

use crate::types::ThemeName;

const CORAL: Color = Color::Rgb(248, 108, 84);
const FOREST_GREEN: Color = Color::Rgb(1, 63, 51);
const FOREST_CARD: Color = Color::Rgb(17, 50, 44);

/// A complete set of styles plus the theme's CTA copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Whole-screen background and default foreground.
    pub base: Style,
    /// Page heading.
    pub title: Style,
    /// Labels and primary figures.
    pub text: Style,
    /// Descriptions and secondary figures.
    pub muted: Style,
    /// Captions, help line, disclaimer.
    pub dim: Style,
    /// ROI figure and focus marker.
    pub accent: Style,
    /// Focused control label.
    pub focus: Style,
    /// Slider track, filled part.
    pub slider_fill: Style,
    /// Slider track, empty part.
    pub slider_empty: Style,
    /// Results card background.
    pub card: Style,
    /// Call-to-action button.
    pub button: Style,
    /// Value being typed.
    pub editing: Style,
    /// Label on the call-to-action button.
    pub cta_label: &'static str,
}

pub const FOREST: Theme = Theme {
    base: Style::new().fg(Color::White).bg(FOREST_GREEN),
    title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    text: Style::new().fg(Color::Rgb(243, 244, 246)),
    muted: Style::new().fg(Color::Rgb(209, 213, 219)),
    dim: Style::new().fg(Color::Rgb(156, 163, 175)),
    accent: Style::new().fg(CORAL).add_modifier(Modifier::BOLD),
    focus: Style::new().fg(CORAL).add_modifier(Modifier::BOLD),
    slider_fill: Style::new().fg(CORAL),
    slider_empty: Style::new().fg(Color::Rgb(75, 85, 99)),
    card: Style::new().bg(FOREST_CARD),
    button: Style::new().fg(Color::White).bg(CORAL).add_modifier(Modifier::BOLD),
    editing: Style::new().fg(Color::Black).bg(Color::Rgb(209, 213, 219)),
    cta_label: "Talk to sales here",
};

pub const LIGHT: Theme = Theme {
    base: Style::new().fg(Color::Rgb(17, 24, 39)).bg(Color::White),
    title: Style::new().fg(Color::Rgb(17, 24, 39)).add_modifier(Modifier::BOLD),
    text: Style::new().fg(Color::Rgb(31, 41, 55)),
    muted: Style::new().fg(Color::Rgb(75, 85, 99)),
    dim: Style::new().fg(Color::Rgb(107, 114, 128)),
    accent: Style::new().fg(CORAL).add_modifier(Modifier::BOLD),
    focus: Style::new().fg(CORAL).add_modifier(Modifier::BOLD),
    slider_fill: Style::new().fg(CORAL),
    slider_empty: Style::new().fg(Color::Rgb(209, 213, 219)),
    card: Style::new().bg(Color::Rgb(243, 244, 246)),
    button: Style::new().fg(Color::White).bg(CORAL).add_modifier(Modifier::BOLD),
    editing: Style::new().fg(Color::White).bg(Color::Rgb(55, 65, 81)),
    cta_label: "Book a demo",
};

impl Theme {
    pub fn by_name(name: ThemeName) -> &'static Theme {
        match name {
            ThemeName::Forest => &FOREST,
            ThemeName::Light => &LIGHT,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
