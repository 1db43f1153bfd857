use palettr::color::format_color;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, swatch};
use super::theme::Theme;
use crate::app::App;

pub fn build_draft_title(app: &App) -> String {
    let draft = app.draft();
    format!(" New palette ({}/{}) ", draft.len(), draft.max_colors())
}

pub fn build_draft_text(app: &App) -> Text<'_> {
    let draft = app.draft();
    let mut lines = Vec::new();

    if draft.is_full() {
        lines.push(Line::from(Span::styled(
            "Palette is full.",
            Style::default().fg(Theme::warn()).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    if draft.is_empty() {
        lines.push(Line::from("No colors yet. Press 'r' for a random one or 'n' to add your own."));
        return Text::from(lines);
    }

    lines.extend(draft.colors().iter().enumerate().map(|(index, entry)| {
        let selected = index == app.selected_color_index;
        let marker = match (selected, app.moving) {
            (true, true) => "» ",
            (true, false) => "> ",
            _ => "  ",
        };
        let marker_style = if selected && app.moving {
            Style::default().fg(Theme::grabbed()).add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        let name_style = if selected {
            Style::default().fg(Theme::text()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::text())
        };
        Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(format!("{:>2}. ", index + 1), Style::default().fg(Theme::dim())),
            swatch(&entry.color, 4),
            Span::raw(" "),
            Span::styled(clamp_name(&entry.name, 18), name_style),
            Span::styled(
                format_color(&entry.color, app.display.format),
                Style::default().fg(Theme::dim()),
            ),
        ])
    }));

    Text::from(lines)
}
