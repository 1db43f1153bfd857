use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "e: Palette editor",
        "p: Saved palettes",
        "f: Cycle color format (hex / rgb / rgba)",
        "esc: Back",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Editor"));
    lines.extend(section_lines(&[
        "Up/Down: Move selection",
        "r: Add random color",
        "n: Add your own color",
        "d: Remove selected color",
        "x: Clear palette",
        "m: Pick up / drop selected color, Up/Down moves it",
        "s: Save palette",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Palettes"));
    lines.extend(section_lines(&["Up/Down: Move selection", "Enter: Open", "d: Delete palette"]));

    lines.push(Line::from(""));
    lines.push(section_title("Popups"));
    lines.extend(section_lines(&[
        "New color: Tab switch field, Enter add, Esc cancel",
        "Save palette: type a unique name, Enter save, Esc cancel",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
