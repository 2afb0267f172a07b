use ratatui::layout::Rect;

use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let suggest_h = if app.suggestions.is_empty() { 0 } else { 9 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(suggest_h),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    let ctx = RenderCtx {
        now: OffsetDateTime::now_utc(),
        ts_mode: app.ts_mode,
    };
    app.view.render(frame, chunks[1], &ctx);

    draw_last_result(frame, app, chunks[2]);
    if !app.suggestions.is_empty() {
        draw_suggestions(frame, app, chunks[3]);
    }

    let left_len = draw_input(frame, app, chunks[4]);
    draw_right_hint(frame, app, chunks[4], left_len);

    if let Some(m) = &app.modal {
        dim_frame(frame);
        modal::draw_modal(frame, m);
        return;
    }

    let cursor_x = if app.search_focus {
        "search>".len() + 1 + app.view.search_input().cursor
    } else {
        app.prompt().len() + 1 + app.input.cursor
    };
    frame.set_cursor_position((chunks[4].x + cursor_x as u16, chunks[4].y + 1));
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let server = app
        .base_url
        .as_deref()
        .map(server_label)
        .or_else(|| app.store_err.clone())
        .unwrap_or_else(|| "(no api configured)".to_string());
    let (session, session_color) = if app.client.is_some() {
        ("logged in", Color::Green)
    } else {
        ("login required", Color::Red)
    };

    let line = Line::from(vec![
        Span::styled("sitbox", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::styled(app.prompt(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(server),
        Span::raw("  "),
        Span::styled(session, Style::default().fg(session_color)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

/// The echoed command plus its newest result block, under the list.
fn draw_last_result(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    if let Some(cmd) = &app.last_command {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(cmd.as_str()),
        ]));
    }
    if let Some(entry) = &app.last_result {
        let style = Style::default().fg(entry_color(entry.kind));
        let mut rest = entry.lines.iter();
        if let Some(first) = rest.next() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", fmt_ts_ui(&entry.ts)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(first.as_str(), style),
            ]));
        }
        for l in rest {
            lines.push(Line::from(Span::styled(l.as_str(), style)));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP).title("Last")),
        area,
    );
}

fn entry_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Output => Color::White,
        EntryKind::Error => Color::Red,
        EntryKind::Command => Color::Cyan,
    }
}

fn draw_suggestions(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let total = app.suggestions.len();
    let sel_idx = app.suggestion_selected.min(total.saturating_sub(1));

    let mut lines = vec![Line::from(Span::styled(
        format!("Suggestions {}/{}", sel_idx + 1, total),
        Style::default().fg(Color::Gray),
    ))];

    // Window to the panel height, keeping the selection visible.
    let inner_h = area.height.saturating_sub(2) as usize;
    let max_items = inner_h.saturating_sub(1).max(1);
    let start = sel_idx
        .saturating_sub(max_items.saturating_sub(1))
        .min(total.saturating_sub(max_items));
    let end = (start + max_items).min(total);

    for (i, s) in app.suggestions[start..end].iter().enumerate() {
        let style = if start + i == sel_idx {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{: <13}", s.name), style.fg(Color::Yellow)),
            Span::styled(s.help, style.fg(Color::White)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP | Borders::BOTTOM)),
        area,
    );
}

/// Returns the width of what it drew so the right hint can dodge it.
fn draw_input(frame: &mut ratatui::Frame, app: &App, area: Rect) -> usize {
    let mut spans = Vec::new();
    let left_len;
    if app.search_focus {
        let buf = &app.view.search_input().buf;
        spans.push(Span::styled("search>", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(buf.clone()));
        spans.push(Span::styled(
            "  (Esc done)",
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ));
        left_len = "search>".len() + 1 + buf.len();
    } else {
        let prompt = app.prompt();
        let buf = &app.input.buf;
        spans.push(Span::styled(prompt, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(buf.as_str()));
        left_len = prompt.len() + 1 + buf.len();

        if let Some(hint) = input_hint_left(app) {
            // Two spaces keep the hint apart from typed text.
            let sep = if buf.is_empty() { "" } else { "  " };
            spans.push(Span::raw(sep));
            spans.push(Span::styled(
                hint,
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP)),
        area,
    );
    left_len
}

fn draw_right_hint(frame: &mut ratatui::Frame, app: &App, area: Rect, left_len: usize) {
    let Some((hint_line, hint_len)) = input_hint_right(app) else {
        return;
    };
    let inner_w = area.width.saturating_sub(2) as usize;
    let left_hint_len = input_hint_left(app)
        .map(|h| (if app.input.buf.is_empty() { 0 } else { 2 }) + h.len())
        .unwrap_or(0);
    // Skip when it would collide with the typed line.
    if left_len + left_hint_len + 1 + hint_len > inner_w {
        return;
    }

    let strip = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(hint_line).alignment(ratatui::layout::Alignment::Right),
        strip,
    );
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for pos in area.positions() {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.modifier |= Modifier::DIM;
        }
    }
}
