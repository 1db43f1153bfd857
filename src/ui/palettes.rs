use palettr::PaletteStore;
use palettr::color::format_color;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, swatch};
use super::theme::Theme;
use crate::app::App;

const MINI_SWATCHES: usize = 12;

pub fn build_palettes_text(app: &App) -> Text<'_> {
    let palettes = app.library.palettes();
    if palettes.is_empty() {
        return Text::from("No palettes yet. Press 'e' to create one.");
    }

    let lines = palettes
        .iter()
        .enumerate()
        .map(|(index, palette)| {
            let selected = index == app.selected_palette_index;
            let marker_style = if selected {
                Style::default().fg(Theme::highlight()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::dim())
            };
            let mut spans = vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                Span::styled(
                    clamp_name(&palette.palette_name, 24),
                    Style::default().fg(Theme::text()).add_modifier(Modifier::BOLD),
                ),
            ];
            spans.extend(
                palette
                    .colors
                    .iter()
                    .take(MINI_SWATCHES)
                    .map(|entry| swatch(&entry.color, 2)),
            );
            if palette.colors.len() > MINI_SWATCHES {
                spans.push(Span::styled(
                    format!(" +{}", palette.colors.len() - MINI_SWATCHES),
                    Style::default().fg(Theme::dim()),
                ));
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}

pub fn build_palette_detail_title(app: &App) -> String {
    match app.opened_palette() {
        Some(palette) => format!(" {} ", palette.palette_name),
        None => " Palette ".to_string(),
    }
}

pub fn build_palette_detail_text(app: &App) -> Text<'_> {
    let Some(palette) = app.opened_palette() else {
        return Text::from("Palette not found.");
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("id: ", Style::default().fg(Theme::dim())),
            Span::styled(palette.id.as_str(), Style::default().fg(Theme::accent())),
        ]),
        Line::from(""),
    ];
    if palette.colors.is_empty() {
        lines.push(Line::from("This palette has no colors."));
    }
    lines.extend(palette.colors.iter().map(|entry| {
        Line::from(vec![
            Span::raw("  "),
            swatch(&entry.color, 4),
            Span::raw(" "),
            Span::styled(clamp_name(&entry.name, 18), Style::default().fg(Theme::text())),
            Span::styled(
                format_color(&entry.color, app.display.format),
                Style::default().fg(Theme::dim()),
            ),
        ])
    }));

    Text::from(lines)
}
