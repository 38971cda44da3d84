//! Pure rendering: map App state to ratatui widget trees.
//!
//! One form layout: inputs on the left, the results card on the right.
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.
//! Nothing here computes — every figure comes from `App::calc`.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::currency::{format_currency, format_percent};
use crate::report::DISCLAIMER;
use crate::types::{Bounds, Estimate, Field, Inputs};

use super::state::{App, Screen};
use super::theme::Theme;

/// Width of a slider track in cells.
const SLIDER_WIDTH: usize = 24;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let theme = Theme::by_name(app.theme);
    let area = frame.area();

    frame.render_widget(Block::default().style(theme.base), area);

    // Common layout: heading, intro, body, help
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(2), // intro
        Constraint::Min(0),    // body
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(theme), chunks[0]);
    frame.render_widget(render_intro(theme), chunks[1]);
    frame.render_widget(render_help(&app.screen, theme), chunks[3]);

    let body = Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[2]);

    let inputs = app.calc.inputs();
    render_inputs(inputs, &app.screen, theme, frame, body[0]);
    render_results(app.calc.estimate(), theme, frame, body[1]);

    if let Screen::Contact { .. } = app.screen {
        render_contact(theme, frame, area);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        " Your personal ROI calculator",
        theme.title,
    )))
}

fn render_intro(theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        " This calculator helps you get an idea of what your savings could be. \
         For a detailed quote, please book a demo or talk to sales.",
        theme.muted,
    ))
    .wrap(Wrap { trim: true })
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen, theme: &Theme) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Form { .. } => {
            " [j/k] move  [h/l] adjust  [Space] toggle  [Enter] type value  [c] contact  [q] quit"
        }
        Screen::Editing { .. } => " [0-9] type  [Backspace] delete  [Enter] apply  [Esc] cancel",
        Screen::Contact { .. } => " [Enter/Esc] back",
    };

    Paragraph::new(Span::styled(help_text, theme.dim))
}

// ============================================================================
// INPUTS COLUMN
// ============================================================================

fn render_inputs(inputs: &Inputs, screen: &Screen, theme: &Theme, frame: &mut Frame, area: Rect) {
    let (focus, editing) = match screen {
        Screen::Form { focus } | Screen::Contact { focus } => (*focus, None),
        Screen::Editing { field, buffer } => (*field, Some((*field, buffer.as_str()))),
    };
    let hint_width = (area.width as usize).saturating_sub(2);

    let mut lines = vec![Line::from("")];
    // Line range of the focused field, label through control
    let mut focus_lines = (0, 0);

    for field in Field::ALL.iter().copied().filter(|f| f.is_visible(inputs)) {
        let focused = focus == field;
        let start = lines.len();

        if field == Field::UsingDataTool {
            lines.push(Line::from(Span::styled("  Additional tools & costs", theme.text)));
        }

        let marker = if focused {
            Span::styled("▸ ", theme.accent)
        } else {
            Span::raw("  ")
        };
        let label_style = if focused { theme.focus } else { theme.text };
        lines.push(Line::from(vec![
            marker,
            Span::styled(field_label(field), label_style),
        ]));
        for hint in wrap_text(field_hint(field), hint_width) {
            lines.push(Line::from(Span::styled(format!("  {}", hint), theme.muted)));
        }

        let control = match (editing, field.value(inputs), field.bounds()) {
            (Some((f, buffer)), _, _) if f == field => render_editor(buffer, theme),
            (_, Some(value), Some(bounds)) if bounds.max.is_some() => {
                render_slider(value, bounds, theme)
            }
            (_, Some(value), Some(_)) => render_stepper(value, theme),
            _ => render_switch(inputs.using_data_tool, theme),
        };
        if focused {
            focus_lines = (start, lines.len());
        }
        lines.push(control);
        lines.push(Line::from(""));
    }

    let (start, end) = focus_lines;
    let offset = scroll_offset(start, end, area.height as usize);

    let paragraph = Paragraph::new(lines).scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// First visible line so that `end` is on screen, never scrolling past
/// `start`. When the range is taller than `height` its top wins.
fn scroll_offset(start: usize, end: usize, height: usize) -> usize {
    if end >= height {
        (end + 1 - height).min(start)
    } else {
        0
    }
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        if current_len > 0 && current_len + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += chars.len();
        current.extend(chars);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::DataSources => "Number of data sources",
        Field::HoursPerWeek => "Hours per week spent managing data",
        Field::HourlyCost => "Estimated hourly cost (€/hour)",
        Field::UsingDataTool => "Are you using another data tool?",
        Field::MonthlyToolCost => "Current monthly tool cost (€)",
    }
}

fn field_hint(field: Field) -> &'static str {
    match field {
        Field::DataSources => {
            "Total number of data sources you want to connect (e.g., databases, APIs, files)"
        }
        Field::HoursPerWeek => "Include time for integration, cleaning, and troubleshooting.",
        Field::HourlyCost => "Average fully-loaded cost (salary, benefits, overhead).",
        Field::UsingDataTool => {
            "Include costs for existing data integration or management platforms."
        }
        Field::MonthlyToolCost => "Total monthly cost for your current data management solution.",
    }
}

/// Text slider: `  ████████░░░░░░░░  10`
fn render_slider(value: u32, bounds: Bounds, theme: &Theme) -> Line<'static> {
    let filled = slider_fill(value, bounds);
    Line::from(vec![
        Span::raw("  "),
        Span::styled("█".repeat(filled), theme.slider_fill),
        Span::styled("░".repeat(SLIDER_WIDTH - filled), theme.slider_empty),
        Span::styled(format!("  {}", value), theme.text),
    ])
}

/// Number of filled cells for `value` within `bounds`.
fn slider_fill(value: u32, bounds: Bounds) -> usize {
    let Some(max) = bounds.max else {
        return 0;
    };
    let span = u64::from(max.saturating_sub(bounds.min));
    if span == 0 {
        return SLIDER_WIDTH;
    }
    let offset = u64::from(value.clamp(bounds.min, max) - bounds.min);
    (offset * SLIDER_WIDTH as u64 / span) as usize
}

/// Stepper: `  [-]  5  [+]`
fn render_stepper(value: u32, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled("[-]", theme.muted),
        Span::styled(format!("  {}  ", value), theme.text),
        Span::styled("[+]", theme.muted),
    ])
}

/// Switch: `  [x] on` / `  [ ] off`
fn render_switch(on: bool, theme: &Theme) -> Line<'static> {
    let (mark, word) = if on { ("[x]", "on") } else { ("[ ]", "off") };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(mark, if on { theme.accent } else { theme.muted }),
        Span::styled(format!(" {}", word), theme.text),
    ])
}

/// Inline editor: `  › 12_`
fn render_editor(buffer: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("› {}_", buffer), theme.editing),
    ])
}

// ============================================================================
// RESULTS CARD
// ============================================================================

fn render_results(estimate: &Estimate, theme: &Theme, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title(Span::styled(" Your Estimated Savings ", theme.title))
        .border_style(theme.dim)
        .style(theme.card);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let rule = Line::from(Span::styled("─".repeat(width.min(24)), theme.dim));

    let outlook = "Based on your inputs, here's a potential outlook:";
    let mut figures: Vec<Line> = wrap_text(outlook, width)
        .into_iter()
        .map(|text| Line::from(Span::styled(text, theme.muted)))
        .collect();
    figures.push(rule.clone());
    figures.push(render_figure(
        "Annual savings",
        format_currency(estimate.annual_savings),
        theme.dim,
        theme.title,
    ));
    figures.push(render_figure(
        "3-year savings",
        format_currency(estimate.three_year_savings),
        theme.dim,
        theme.text,
    ));
    figures.push(render_figure(
        "5-year savings",
        format_currency(estimate.five_year_savings),
        theme.dim,
        theme.text,
    ));
    figures.push(render_figure(
        "Estimated ROI",
        format_percent(estimate.roi),
        theme.dim,
        theme.accent,
    ));
    figures.push(Line::from(""));
    figures.extend(
        wrap_text("Calculated with an assumed solution investment.", width)
            .into_iter()
            .map(|text| Line::from(Span::styled(text, theme.dim))),
    );

    // Disclaimer and CTA stay pinned to the bottom of the card
    let mut footer = vec![rule];
    footer.extend(
        wrap_text(DISCLAIMER, width)
            .into_iter()
            .map(|text| Line::from(Span::styled(text, theme.dim))),
    );
    footer.push(Line::from(""));
    footer.push(Line::from(Span::styled(
        format!("[ {} ]", theme.cta_label),
        theme.button,
    )));

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(footer.len() as u16),
    ])
    .split(inner);

    frame.render_widget(Paragraph::new(figures), chunks[0]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

/// One figure row: `Annual savings  €18,200`
fn render_figure(
    label: &'static str,
    value: String,
    label_style: Style,
    value_style: Style,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), label_style),
        Span::styled(value, value_style),
    ])
}

// ============================================================================
// SCREEN: CONTACT
// ============================================================================

/// Centered notice over the form. No request is made.
fn render_contact(theme: &Theme, frame: &mut Frame, area: Rect) {
    let popup = centered(area, 56, 7);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(Span::styled(format!(" {} ", theme.cta_label), theme.accent))
        .border_style(theme.accent)
        .style(theme.base);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Thanks for your interest!", theme.title)),
        Line::from(Span::styled(
            "Reach out to our team for a detailed quote.",
            theme.text,
        )),
        Line::from(""),
        Line::from(Span::styled("Press Enter to return", theme.dim)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}

/// A `width` × `height` rect centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ============================================================================
// TESTS
// ============================================================================
