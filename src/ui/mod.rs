mod draft;
mod help;
mod helpers;
mod palettes;
mod theme;

use palettr::PaletteStore;
use palettr::slug::slugify;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView, ColorField, NewColorPopup, SavePalettePopup};
use helpers::hex_to_color;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (title, body_text) = match app.view {
        AppView::Draft => (draft::build_draft_title(app), draft::build_draft_text(app)),
        AppView::Palettes => (" Palettes ".to_string(), palettes::build_palettes_text(app)),
        AppView::PaletteDetail => (
            palettes::build_palette_detail_title(app),
            palettes::build_palette_detail_text(app),
        ),
        AppView::Help => (" Help ".to_string(), help::build_help_text()),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Palettr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "palette builder",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("format: {}", app.display.format.as_str().to_uppercase()),
            Style::default().fg(Theme::accent()),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        tabs_line(app),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(Theme::dim()),
    )));
    body_lines.extend(keybinds_lines(app));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(status_line(app)))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(footer, layout[2]);

    if let Some(popup) = &app.new_color_popup {
        render_new_color_popup(frame, popup);
    }
    if let Some(popup) = &app.save_popup {
        render_save_popup(frame, app, popup);
    }
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn field_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::text())
    }
}

fn render_new_color_popup(frame: &mut Frame, popup: &NewColorPopup) {
    let area = centered_rect(60, 45, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "New color",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Theme::dim())),
            Span::styled(popup.name.as_str(), field_style(popup.field == ColorField::Name)),
        ]),
    ];

    let color_display = if popup.color.is_empty() {
        "#RRGGBB"
    } else {
        popup.color.as_str()
    };
    let mut color_line = vec![
        Span::styled("Color: ", Style::default().fg(Theme::dim())),
        Span::styled(color_display, field_style(popup.field == ColorField::Color)),
    ];
    if let Some(preview) = hex_to_color(popup.color.as_str()) {
        color_line.push(Span::raw("  "));
        color_line.push(Span::styled("███", Style::default().fg(preview)));
    }
    lines.push(Line::from(color_line));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Type to edit. Tab: switch field. Enter: add. Esc: cancel.",
        Style::default().fg(Theme::dim()),
    )));

    let widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(rounded_block().title(" New Color "));
    frame.render_widget(widget, area);
}

fn render_save_popup(frame: &mut Frame, app: &App, popup: &SavePalettePopup) {
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Choose a palette name",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please enter a name for your new palette. Make sure it's unique.",
            Style::default().fg(Theme::dim()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Theme::dim())),
            Span::styled(popup.name.as_str(), field_style(true)),
        ]),
    ];
    match popup.problem(app.library.palettes()) {
        Some(problem) => lines.push(Line::from(Span::styled(
            problem.message(),
            Style::default().fg(Theme::warn()),
        ))),
        None => lines.push(Line::from(vec![
            Span::styled("id: ", Style::default().fg(Theme::dim())),
            Span::styled(
                slugify(&popup.name),
                Style::default().fg(Theme::success()),
            ),
        ])),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: save. Esc: cancel.",
        Style::default().fg(Theme::dim()),
    )));

    let widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(rounded_block().title(" Save Palette "));
    frame.render_widget(widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn tabs_line(app: &App) -> Line<'static> {
    let tabs = [("Editor", AppView::Draft), ("Palettes", AppView::Palettes)];

    let mut spans = Vec::new();
    for (index, (name, view)) in tabs.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let active = match app.view {
            AppView::PaletteDetail => *view == AppView::Palettes,
            _ => *view == app.view,
        };
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(format!(" {name} "), style));
    }

    Line::from(spans)
}

fn status_line(app: &App) -> Line<'_> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Theme::success()),
        ));
    }
    let draft = app.draft();
    let (label, style) = if draft.is_full() {
        ("full".to_string(), Style::default().fg(Theme::warn()))
    } else {
        (
            format!("{} slots left", draft.remaining()),
            Style::default().fg(Theme::dim()),
        )
    };
    Line::from(vec![
        Span::styled(
            format!("Draft: {}/{} colors, ", draft.len(), draft.max_colors()),
            Style::default().fg(Theme::text()),
        ),
        Span::styled(label, style),
        Span::styled(
            format!("   {} saved palettes", app.library.len()),
            Style::default().fg(Theme::dim()),
        ),
    ])
}

fn keybinds_lines(app: &App) -> Vec<Line<'static>> {
    let (primary, secondary) = match app.view {
        AppView::Draft if app.moving => (
            "Up/Down: Move color  m: Drop  esc: Stop moving",
            "f: Format  ?: Help  q: Quit",
        ),
        AppView::Draft => (
            "r: Random  n: New  d: Remove  x: Clear  m: Move  s: Save",
            "p: Palettes  f: Format  ?: Help  q: Quit",
        ),
        AppView::Palettes => (
            "Up/Down: Select  Enter: Open  d: Delete",
            "e: Editor  f: Format  esc: Back  ?: Help  q: Quit",
        ),
        AppView::PaletteDetail => ("f: Format", "e: Editor  p: Palettes  esc: Back  q: Quit"),
        AppView::Help => ("Press ? or ESC to close this help screen", ""),
    };
    vec![
        Line::from(Span::styled(primary, Style::default().fg(Theme::dim()))),
        Line::from(Span::styled(secondary, Style::default().fg(Theme::dim()))),
    ]
}
