//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use cvforge_core::{
    render, ContactKind, LayoutSection, ResumeLayout, Section, COLOR_PRESETS,
};

use crate::app::{ActivePane, App};
use crate::forms::{
    FieldSpec, EDUCATION_FIELDS, EXPERIENCE_FIELDS, PROFILE_FIELDS, SKILLS_SPEC, SUMMARY_SPEC,
};

/// Preview column width at 100% zoom
const PREVIEW_BASE_WIDTH: f32 = 96.0;

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    // Vertical layout with the status bar at the bottom
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    // Split the main area into three panes
    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22),
            Constraint::Min(40),
            Constraint::Length(32),
        ])
        .split(outer_chunks[0]);

    draw_sections_pane(frame, app, pane_chunks[0]);
    draw_form_pane(frame, app, pane_chunks[1]);
    draw_style_pane(frame, app, pane_chunks[2]);
    draw_status_bar(frame, app, outer_chunks[1]);

    if app.preview.is_open() {
        draw_preview_overlay(frame, app);
    }
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Draw the sections sidebar (left)
fn draw_sections_pane(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.active_pane == ActivePane::Sections;

    let items: Vec<ListItem> = Section::ALL
        .into_iter()
        .map(|section| {
            let style = if section.has_form() {
                Style::default()
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            ListItem::new(Span::styled(section.label(), style))
        })
        .collect();

    let block = Block::default()
        .title(" Sections ")
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    let highlight_style = if is_active {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style);

    let mut state = ListState::default();
    state.select(Some(app.section_index));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the editing form for the active section (center)
fn draw_form_pane(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.active_pane == ActivePane::Form;
    let section = app.active_section();

    let block = Block::default()
        .title(format!(" {} ", section.title()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    let lines = match section {
        Section::Profile => profile_lines(app, is_active),
        Section::Summary => single_field_lines(app, is_active, &SUMMARY_SPEC),
        Section::Experience => entry_lines(app, is_active, "Experience", &EXPERIENCE_FIELDS, |i| {
            field_display(app, i)
        }),
        Section::Education => entry_lines(app, is_active, "Education", &EDUCATION_FIELDS, |i| {
            field_display(app, i)
        }),
        Section::Skills => skills_lines(app, is_active),
        _ => vec![
            Line::from(""),
            Line::from(Span::styled(
                "This section is coming soon...",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// What the form shows for row `index`: the live edit buffer with a cursor
/// marker, the stored value, or the placeholder
fn field_display(app: &App, index: usize) -> (String, bool) {
    if index == app.field_index {
        if let Some(edit) = &app.editing {
            let at = edit
                .buffer
                .char_indices()
                .nth(edit.cursor)
                .map(|(i, _)| i)
                .unwrap_or(edit.buffer.len());
            let mut shown = edit.buffer.clone();
            shown.insert(at, '▏');
            return (shown, false);
        }
    }

    let value = value_at(app, index);
    if value.is_empty() {
        (placeholder_at(app, index).to_string(), true)
    } else {
        (value, false)
    }
}

fn value_at(app: &App, index: usize) -> String {
    let snapshot = app.store.snapshot();
    match app.active_section() {
        Section::Profile => snapshot.profile.field(PROFILE_FIELDS[index].0).to_string(),
        Section::Summary => snapshot.summary.clone(),
        Section::Experience => {
            let entry = &snapshot.experience[index / EXPERIENCE_FIELDS.len()];
            entry
                .field(EXPERIENCE_FIELDS[index % EXPERIENCE_FIELDS.len()].0)
                .to_string()
        }
        Section::Education => {
            let entry = &snapshot.education[index / EDUCATION_FIELDS.len()];
            entry
                .field(EDUCATION_FIELDS[index % EDUCATION_FIELDS.len()].0)
                .to_string()
        }
        Section::Skills => app.skills_text.clone(),
        _ => String::new(),
    }
}

fn placeholder_at(app: &App, index: usize) -> &'static str {
    match app.active_section() {
        Section::Profile => PROFILE_FIELDS[index].1.placeholder,
        Section::Summary => SUMMARY_SPEC.placeholder,
        Section::Experience => EXPERIENCE_FIELDS[index % EXPERIENCE_FIELDS.len()].1.placeholder,
        Section::Education => EDUCATION_FIELDS[index % EDUCATION_FIELDS.len()].1.placeholder,
        Section::Skills => SKILLS_SPEC.placeholder,
        _ => "",
    }
}

fn field_line(
    label: &'static str,
    display: (String, bool),
    focused: bool,
    pane_active: bool,
) -> Line<'static> {
    let (text, is_placeholder) = display;

    let marker = if focused { "❯ " } else { "  " };
    let mut value_style = if is_placeholder {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    if focused && pane_active {
        value_style = value_style.add_modifier(Modifier::REVERSED);
    }

    Line::from(vec![
        Span::raw(marker),
        Span::styled(
            format!("{:<14} ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, value_style),
    ])
}

fn profile_lines(app: &App, is_active: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (index, (_, spec)) in PROFILE_FIELDS.iter().enumerate() {
        lines.push(field_line(
            spec.label,
            field_display(app, index),
            index == app.field_index,
            is_active,
        ));
    }
    lines
}

fn single_field_lines(app: &App, is_active: bool, spec: &FieldSpec) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        field_line(spec.label, field_display(app, 0), app.field_index == 0, is_active),
    ]
}

fn entry_lines<F: Copy>(
    app: &App,
    is_active: bool,
    noun: &str,
    fields: &[(F, FieldSpec)],
    display: impl Fn(usize) -> (String, bool),
) -> Vec<Line<'static>> {
    let per_entry = fields.len();
    let entries = app.form_row_count() / per_entry.max(1);

    let mut lines = Vec::new();
    for entry_index in 0..entries {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} {}", noun, entry_index + 1),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (field_offset, (_, spec)) in fields.iter().enumerate() {
            let row = entry_index * per_entry + field_offset;
            lines.push(field_line(
                spec.label,
                display(row),
                row == app.field_index,
                is_active,
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "a: add entry   d: remove entry",
        Style::default().add_modifier(Modifier::DIM),
    )));
    lines
}

fn skills_lines(app: &App, is_active: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        field_line(
            SKILLS_SPEC.label,
            field_display(app, 0),
            app.field_index == 0,
            is_active,
        ),
        Line::from(""),
    ];

    let skills = &app.store.snapshot().skills;
    if !skills.is_empty() {
        let mut spans = Vec::new();
        for skill in skills {
            spans.push(Span::styled(
                format!(" {} ", skill),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Draw the style controls (right)
fn draw_style_pane(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.active_pane == ActivePane::Style;
    let preset = app.style.preset();

    let row_style = |row: usize| {
        if row == app.style_index && is_active {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        }
    };
    let marker = |row: usize| if row == app.style_index { "❯ " } else { "  " };

    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(marker(0)),
            Span::styled("Color Theme   ", label_style),
            Span::styled("●", Style::default().fg(hex_color(preset.primary))),
            Span::styled("●", Style::default().fg(hex_color(preset.secondary))),
            Span::raw(" "),
            Span::styled(preset.name.to_string(), row_style(0)),
        ]),
        Line::from(vec![
            Span::raw(marker(1)),
            Span::styled("Font Family   ", label_style),
            Span::styled(app.style.font_family().label().to_string(), row_style(1)),
        ]),
        Line::from(vec![
            Span::raw(marker(2)),
            Span::styled("Font Size     ", label_style),
            Span::styled(format!("{}px", app.style.font_size()), row_style(2)),
        ]),
        Line::from(vec![
            Span::raw(marker(3)),
            Span::styled("Line Spacing  ", label_style),
            Span::styled(format!("{:.1}", app.style.line_spacing()), row_style(3)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "h/l: adjust value",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
    ];

    for (index, catalog_preset) in COLOR_PRESETS.iter().enumerate() {
        let selected = index == app.style.preset_index();
        lines.push(Line::from(vec![
            Span::raw(if selected { "  ✓ " } else { "    " }),
            Span::styled("●● ", Style::default().fg(hex_color(catalog_preset.primary))),
            Span::raw(catalog_preset.name),
        ]));
    }

    let block = Block::default()
        .title(" Style ")
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let content = if app.is_editing() {
        "typing...  Enter/Esc: done  ←/→: move cursor".to_string()
    } else if app.preview.is_open() {
        "+/-: zoom  Esc: close preview".to_string()
    } else if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        "Tab:panes  j/k:move  Enter:edit  p:preview  ?:help  q:quit".to_string()
    };

    let paragraph = Paragraph::new(content).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Draw the zoomable preview as a centered overlay
fn draw_preview_overlay(frame: &mut Frame, app: &App) {
    let layout = render(app.store.snapshot(), &app.style);
    let zoom = app.preview.zoom();

    // Zoom scales the text column, the terminal analog of scaling the page.
    let content_width = (PREVIEW_BASE_WIDTH * zoom).round() as u16;
    let area = centered_area(frame.area(), content_width + 4);

    let title = format!(" Resume Preview — {}% ", app.preview.zoom_percent());
    let footer = format!(
        " {} · {}pt · {:.1} spacing ",
        layout.font_family.label(),
        layout.font_size,
        layout.line_spacing,
    );

    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(footer).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(hex_color(&layout.accent)));

    let paragraph = Paragraph::new(preview_lines(&layout))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Center a column of `width` in `area`, with a small vertical margin
fn centered_area(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2)).max(20);
    let height = area.height.saturating_sub(2).max(3);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Flatten a layout into styled terminal lines
fn preview_lines(layout: &ResumeLayout) -> Vec<Line<'static>> {
    let accent = hex_color(&layout.accent);
    let accent_bold = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let dim = Style::default().add_modifier(Modifier::DIM);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(layout.header.name.clone(), accent_bold)),
        Line::from(Span::styled(layout.header.title.clone(), dim)),
    ];

    if !layout.header.contacts.is_empty() {
        let mut spans = Vec::new();
        for (index, contact) in layout.header.contacts.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  •  ".to_string(), dim));
            }
            spans.push(Span::styled(
                format!("{} ", contact_glyph(contact.kind)),
                Style::default().fg(accent),
            ));
            spans.push(Span::raw(contact.value.clone()));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(PREVIEW_BASE_WIDTH as usize),
        Style::default().fg(accent),
    )));

    for section in &layout.sections {
        lines.push(Line::from(""));
        match section {
            LayoutSection::Summary { text } => {
                lines.push(heading("PROFESSIONAL SUMMARY", accent_bold));
                lines.push(Line::from(text.clone()));
            }
            LayoutSection::Experience { items } => {
                lines.push(heading("EXPERIENCE", accent_bold));
                for item in items {
                    lines.push(Line::from(vec![
                        Span::styled(
                            item.position.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(item.date_range.clone(), dim),
                    ]));
                    lines.push(Line::from(item.company.clone()));
                    if let Some(description) = &item.description {
                        lines.push(Line::from(Span::styled(description.clone(), dim)));
                    }
                    lines.push(Line::from(""));
                }
            }
            LayoutSection::Education { items } => {
                lines.push(heading("EDUCATION", accent_bold));
                for item in items {
                    lines.push(Line::from(vec![
                        Span::styled(
                            item.title.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(item.date_range.clone(), dim),
                    ]));
                    lines.push(Line::from(item.school.clone()));
                    lines.push(Line::from(""));
                }
            }
            LayoutSection::Skills { chips } => {
                lines.push(heading("SKILLS", accent_bold));
                let mut spans = Vec::new();
                for chip in chips {
                    spans.push(Span::styled(
                        format!(" {} ", chip),
                        Style::default().fg(accent).add_modifier(Modifier::REVERSED),
                    ));
                    spans.push(Span::raw(" "));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    lines
}

fn heading(text: &'static str, style: Style) -> Line<'static> {
    Line::from(Span::styled(text, style))
}

fn contact_glyph(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "✉",
        ContactKind::Phone => "☎",
        ContactKind::Location => "⌂",
        ContactKind::Website => "➤",
    }
}

/// Parse a `#RRGGBB` hex color, falling back to the default foreground
fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Reset;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}
