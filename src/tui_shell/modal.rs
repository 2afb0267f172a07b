use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::validate::is_http_url;

use super::editor::{self, EditorAction};
use super::{Modal, ModalKind, PendingAction, TextInputAction};

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 22);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = ratatui::layout::Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(modal));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match &modal.kind {
        ModalKind::Viewer | ModalKind::ConfirmAction { .. } => {
            let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                inner,
            );
        }

        ModalKind::TextInput { prompt, .. } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);

            let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                parts[0],
            );

            let input_line = Line::from(vec![
                Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
                Span::raw(modal.input.buf.as_str()),
            ]);
            frame.render_widget(
                Paragraph::new(input_line)
                    .block(Block::default().borders(Borders::ALL).title("Edit")),
                parts[1],
            );

            let x = prompt.len() as u16 + modal.input.cursor as u16;
            let y = parts[1].y + 1;
            frame.set_cursor_position((parts[1].x + 1 + x, y));
        }

        ModalKind::Editor(ed) => {
            editor::draw_editor_body(frame, inner, ed);
        }
    }
}

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    enum ModalAction {
        None,
        Edited,
        Close,
        Confirm(PendingAction),
        SubmitTextInput {
            action: TextInputAction,
            value: String,
        },
        SubmitEditor,
    }

    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };

        match &mut m.kind {
            ModalKind::Viewer => match key.code {
                KeyCode::Esc | KeyCode::Enter => ModalAction::Close,
                KeyCode::Up => {
                    m.scroll = m.scroll.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down => {
                    if m.scroll < m.lines.len().saturating_sub(1) {
                        m.scroll += 1;
                    }
                    ModalAction::None
                }
                KeyCode::PageUp => {
                    m.scroll = m.scroll.saturating_sub(10);
                    ModalAction::None
                }
                KeyCode::PageDown => {
                    m.scroll = (m.scroll + 10).min(m.lines.len().saturating_sub(1));
                    ModalAction::None
                }
                _ => ModalAction::None,
            },

            ModalKind::TextInput { action, .. } => match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Enter => {
                    let raw = m.input.buf.trim().to_string();

                    let validate = match action {
                        TextInputAction::LoginUrl => {
                            if is_http_url(&raw) {
                                Ok(())
                            } else {
                                Err("expected an absolute http(s) URL".to_string())
                            }
                        }
                        TextInputAction::LoginToken { .. } => {
                            if raw.is_empty() {
                                Err("value required".to_string())
                            } else {
                                Ok(())
                            }
                        }
                    };

                    match validate {
                        Ok(()) => ModalAction::SubmitTextInput {
                            action: action.clone(),
                            value: raw,
                        },
                        Err(msg) => {
                            m.lines.retain(|l| !l.starts_with("error:"));
                            m.lines.push(format!("error: {}", msg));
                            ModalAction::None
                        }
                    }
                }
                KeyCode::Backspace => {
                    m.input.backspace();
                    ModalAction::None
                }
                KeyCode::Delete => {
                    m.input.delete();
                    ModalAction::None
                }
                KeyCode::Left => {
                    m.input.move_left();
                    ModalAction::None
                }
                KeyCode::Right => {
                    m.input.move_right();
                    ModalAction::None
                }
                KeyCode::Char(c) => {
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT)
                    {
                        m.input.insert_char(c);
                    }
                    ModalAction::None
                }
                _ => ModalAction::None,
            },

            ModalKind::ConfirmAction { action } => match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Enter => ModalAction::Confirm(action.clone()),
                KeyCode::Up => {
                    m.scroll = m.scroll.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down => {
                    if m.scroll < m.lines.len().saturating_sub(1) {
                        m.scroll += 1;
                    }
                    ModalAction::None
                }
                _ => ModalAction::None,
            },

            ModalKind::Editor(ed) => match editor::apply_editor_key(ed, key) {
                EditorAction::None => ModalAction::None,
                EditorAction::Edited => ModalAction::Edited,
                EditorAction::Close => ModalAction::Close,
                EditorAction::Submit => ModalAction::SubmitEditor,
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Edited => {
            app.autosave.mark_dirty();
        }
        ModalAction::Close => {
            app.editor_closing(); // flushes a dirty draft before the form goes away
            app.close_modal();
        }
        ModalAction::Confirm(action) => {
            app.close_modal();
            app.execute_pending_action(action);
        }
        ModalAction::SubmitTextInput { action, value } => {
            app.close_modal();
            app.submit_text_input(action, value);
        }
        ModalAction::SubmitEditor => {
            // Stays open on validation or request errors so the form survives.
            app.submit_editor();
        }
    }
}

fn modal_title(modal: &Modal) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            modal.title.as_str().to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  ".to_string()),
        Span::styled("Esc".to_string(), Style::default().fg(Color::Gray)),
    ];
    if matches!(
        &modal.kind,
        ModalKind::ConfirmAction { .. } | ModalKind::TextInput { .. }
    ) {
        spans.push(Span::raw("  ".to_string()));
        spans.push(Span::styled(
            "Enter".to_string(),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}
