use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Gauge, Paragraph, Row, Table};

use crate::output::format_percent;
use crate::tui::app::{App, Field, FieldValue, InputMode, View};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 8 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    match app.view {
        View::Form => render_form(frame, chunks[1], app),
        View::Results => render_results(frame, chunks[1], app),
    }
    render_status_bar(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let left = "Maturometer";
    let right = "Digital Maturity Survey";
    let padding = (area.width as usize).saturating_sub(left.len() + right.len());

    let title = Line::from(vec![
        Span::styled(left, Style::default().fg(app.theme.title_color).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(app.theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut rows: Vec<Row> = Vec::new();
    let mut field_index = 0;

    for category in &app.survey.categories {
        rows.push(
            Row::new(vec![
                Cell::from(format!("{} - {}", category.name, category.description))
                    .style(app.theme.category_style),
                Cell::from(""),
            ]),
        );

        for question in &category.questions {
            let field = &app.fields[field_index];

            let editing = app.input_mode == InputMode::Editing && field_index == app.selected;
            let value_line = value_cell(app, field, editing);

            let row_style = if field_index % 2 == 1 {
                Style::default().bg(app.theme.row_alt_bg)
            } else {
                Style::default()
            };

            rows.push(
                Row::new(vec![
                    Cell::from(format!("  {}", question.label)),
                    Cell::from(value_line),
                ])
                .style(row_style),
            );
            field_index += 1;
        }
    }

    let widths = [Constraint::Fill(1), Constraint::Length(16)];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Question", "Answer"])
                .style(app.theme.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(app.theme.row_selected);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn value_cell(app: &App, field: &Field, editing: bool) -> Line<'static> {
    match &field.value {
        FieldValue::Numeric { text } => {
            if editing {
                Line::from(Span::styled(
                    format!("{}|", app.edit_buffer),
                    Style::default().fg(app.theme.value_color).bold(),
                ))
            } else {
                Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(app.theme.value_color),
                ))
            }
        }
        FieldValue::Slider { value, min, max } => {
            let steps = (max - min) as usize;
            let filled = (value - min) as usize;
            let empty = steps.saturating_sub(filled);

            let mut spans = Vec::new();
            if filled > 0 {
                spans.push(Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(app.theme.slider_filled),
                ));
            }
            if empty > 0 {
                spans.push(Span::styled(
                    "░".repeat(empty),
                    Style::default().fg(app.theme.slider_empty),
                ));
            }
            spans.push(Span::styled(
                format!(" {}", crate::tui::app::format_number(*value)),
                Style::default().fg(app.theme.value_color),
            ));
            Line::from(spans)
        }
    }
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let report = match &app.report {
        Some(report) => report,
        None => {
            let msg = Paragraph::new("No scores yet").alignment(Alignment::Center);
            frame.render_widget(msg, area);
            return;
        }
    };

    // Overall gauge on top, category gauges in a 2x2 grid below
    let chunks = Layout::vertical([Constraint::Length(5), Constraint::Fill(1)]).split(area);

    render_gauge(frame, chunks[0], app, "Overall Digital Maturity", report.overall);

    let grid_rows =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[1]);

    let categories = report.categories();
    for (i, row_area) in grid_rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);
        for (j, cell) in cells.iter().enumerate() {
            let (title, score) = categories[i * 2 + j];
            render_gauge(frame, *cell, app, title, score);
        }
    }
}

fn render_gauge(frame: &mut Frame, area: Rect, app: &App, title: &str, score: f64) {
    let gauge = Gauge::default()
        .block(
            Block::bordered()
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(app.theme.muted)),
        )
        .gauge_style(
            Style::default()
                .fg(app.theme.score_color(score))
                .bg(app.theme.gauge_track),
        )
        .ratio((score / 100.0).clamp(0.0, 1.0))
        .label(format_percent(score));
    frame.render_widget(gauge, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Invalid") || msg.starts_with("Cannot") {
            app.theme.flash_error
        } else {
            app.theme.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match (&app.view, &app.input_mode) {
            (_, InputMode::Editing) => &[("Enter", ":confirm "), ("Esc", ":cancel")],
            (View::Form, _) => &[
                ("j/k", ":move "),
                ("h/l", ":adjust "),
                ("Enter", ":edit "),
                ("d", ":demo "),
                ("c", ":calculate "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            (View::Results, _) => &[
                ("b/Esc", ":back "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(app.theme.status_key_color),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.theme.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect { x, y, width, height }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(52, 14, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(app.theme.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(app.theme.status_key_color).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("j / Down      ", key_style),
            Span::raw("Next question"),
        ]),
        Line::from(vec![
            Span::styled("k / Up        ", key_style),
            Span::raw("Previous question"),
        ]),
        Line::from(vec![
            Span::styled("h / Left      ", key_style),
            Span::raw("Slider down"),
        ]),
        Line::from(vec![
            Span::styled("l / Right     ", key_style),
            Span::raw("Slider up"),
        ]),
        Line::from(vec![
            Span::styled("Enter / e     ", key_style),
            Span::raw("Edit numeric answer"),
        ]),
        Line::from(vec![
            Span::styled("d             ", key_style),
            Span::raw("Fill demo values"),
        ]),
        Line::from(vec![
            Span::styled("c             ", key_style),
            Span::raw("Calculate digital maturity"),
        ]),
        Line::from(vec![
            Span::styled("b / Esc       ", key_style),
            Span::raw("Back to the form"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c    ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(app.theme.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}
