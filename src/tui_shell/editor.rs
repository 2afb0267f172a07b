use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{PostInput, PublishStatus};
use crate::validate::FieldIssue;

use super::input::Input;

/// Form state for creating or updating a blog post. Lives inside a modal;
/// keys are routed here while it is open.
pub(super) struct PostEditor {
    pub(super) target: EditorTarget,
    pub(super) title: Input,
    pub(super) slug: Input,
    pub(super) excerpt: Input,
    pub(super) content: Input,
    pub(super) cover_url: Input,
    pub(super) tags: Input,
    pub(super) status: PublishStatus,
    pub(super) featured: bool,
    pub(super) field: EditorField,
    pub(super) issues: Vec<FieldIssue>,
    pub(super) draft_saved_at: Option<String>,
}

pub(super) enum EditorTarget {
    Create,
    Update { id: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EditorField {
    Title,
    Slug,
    Excerpt,
    Content,
    CoverUrl,
    Tags,
    Status,
    Featured,
}

const FIELDS: [EditorField; 8] = [
    EditorField::Title,
    EditorField::Slug,
    EditorField::Excerpt,
    EditorField::Content,
    EditorField::CoverUrl,
    EditorField::Tags,
    EditorField::Status,
    EditorField::Featured,
];

impl EditorField {
    fn label(self) -> &'static str {
        match self {
            EditorField::Title => "title",
            EditorField::Slug => "slug",
            EditorField::Excerpt => "excerpt",
            EditorField::Content => "content",
            EditorField::CoverUrl => "cover url",
            EditorField::Tags => "tags",
            EditorField::Status => "status",
            EditorField::Featured => "featured",
        }
    }

    fn index(self) -> usize {
        FIELDS.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        FIELDS[(self.index() + 1) % FIELDS.len()]
    }

    fn prev(self) -> Self {
        FIELDS[(self.index() + FIELDS.len() - 1) % FIELDS.len()]
    }
}

impl PostEditor {
    /// Seeds the form from an existing payload: the saved draft for create,
    /// the fetched post for update.
    pub(super) fn from_input(target: EditorTarget, input: &PostInput) -> Self {
        let mut field = |value: &str| {
            let mut f = Input::default();
            f.set(value.to_string());
            f
        };
        Self {
            target,
            title: field(&input.title),
            slug: field(&input.slug),
            excerpt: field(&input.excerpt),
            content: field(&input.content),
            cover_url: field(input.cover_url.as_deref().unwrap_or("")),
            tags: field(&input.tags.join(", ")),
            status: input.status,
            featured: input.featured,
            field: EditorField::Title,
            issues: Vec::new(),
            draft_saved_at: None,
        }
    }

    pub(super) fn to_input(&self) -> PostInput {
        let cover = self.cover_url.buf.trim();
        PostInput {
            title: self.title.buf.clone(),
            slug: self.slug.buf.clone(),
            excerpt: self.excerpt.buf.clone(),
            content: self.content.buf.clone(),
            cover_url: if cover.is_empty() {
                None
            } else {
                Some(cover.to_string())
            },
            tags: self
                .tags
                .buf
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            status: self.status,
            featured: self.featured,
        }
    }

    fn active_input_mut(&mut self) -> Option<&mut Input> {
        match self.field {
            EditorField::Title => Some(&mut self.title),
            EditorField::Slug => Some(&mut self.slug),
            EditorField::Excerpt => Some(&mut self.excerpt),
            EditorField::Content => Some(&mut self.content),
            EditorField::CoverUrl => Some(&mut self.cover_url),
            EditorField::Tags => Some(&mut self.tags),
            EditorField::Status | EditorField::Featured => None,
        }
    }

    fn field_text(&self, field: EditorField) -> String {
        match field {
            EditorField::Title => self.title.buf.clone(),
            EditorField::Slug => self.slug.buf.clone(),
            EditorField::Excerpt => self.excerpt.buf.clone(),
            EditorField::Content => self.content.buf.clone(),
            EditorField::CoverUrl => self.cover_url.buf.clone(),
            EditorField::Tags => self.tags.buf.clone(),
            EditorField::Status => format!("[{}]", self.status.as_str()),
            EditorField::Featured => if self.featured { "[yes]" } else { "[no]" }.to_string(),
        }
    }
}

pub(super) enum EditorAction {
    None,
    /// A field changed; the caller marks the draft dirty.
    Edited,
    Close,
    Submit,
}

fn toggle_status(status: PublishStatus) -> PublishStatus {
    match status {
        PublishStatus::Draft => PublishStatus::Published,
        PublishStatus::Published => PublishStatus::Draft,
    }
}

pub(super) fn apply_editor_key(ed: &mut PostEditor, key: KeyEvent) -> EditorAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return EditorAction::Close,
        KeyCode::Char('s') if ctrl => return EditorAction::Submit,
        KeyCode::Tab | KeyCode::Down => ed.field = ed.field.next(),
        KeyCode::BackTab | KeyCode::Up => ed.field = ed.field.prev(),
        KeyCode::Enter => match ed.field {
            EditorField::Status => {
                ed.status = toggle_status(ed.status);
                return EditorAction::Edited;
            }
            EditorField::Featured => {
                ed.featured = !ed.featured;
                return EditorAction::Edited;
            }
            _ => ed.field = ed.field.next(),
        },
        KeyCode::Left => match ed.field {
            EditorField::Status => {
                ed.status = toggle_status(ed.status);
                return EditorAction::Edited;
            }
            EditorField::Featured => {
                ed.featured = !ed.featured;
                return EditorAction::Edited;
            }
            _ => {
                if let Some(input) = ed.active_input_mut() {
                    input.move_left();
                }
            }
        },
        KeyCode::Right => match ed.field {
            EditorField::Status => {
                ed.status = toggle_status(ed.status);
                return EditorAction::Edited;
            }
            EditorField::Featured => {
                ed.featured = !ed.featured;
                return EditorAction::Edited;
            }
            _ => {
                if let Some(input) = ed.active_input_mut() {
                    input.move_right();
                }
            }
        },
        KeyCode::Backspace => {
            if let Some(input) = ed.active_input_mut() {
                input.backspace();
                return EditorAction::Edited;
            }
        }
        KeyCode::Delete => {
            if let Some(input) = ed.active_input_mut() {
                input.delete();
                return EditorAction::Edited;
            }
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            match ed.field {
                EditorField::Status if c == ' ' => {
                    ed.status = toggle_status(ed.status);
                    return EditorAction::Edited;
                }
                EditorField::Featured if c == ' ' => {
                    ed.featured = !ed.featured;
                    return EditorAction::Edited;
                }
                EditorField::Status | EditorField::Featured => {}
                _ => {
                    if let Some(input) = ed.active_input_mut() {
                        input.insert_char(c);
                        return EditorAction::Edited;
                    }
                }
            }
        }
        _ => {}
    }
    EditorAction::None
}

const LABEL_WIDTH: usize = 9;

/// Renders the form into the modal's inner area and parks the terminal
/// cursor in the active text field.
pub(super) fn draw_editor_body(frame: &mut Frame, inner: Rect, ed: &PostEditor) {
    let mut lines: Vec<Line> = Vec::new();
    for f in FIELDS {
        let active = f == ed.field;
        let marker = if active { ">" } else { " " };
        let label_style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {:>width$}: ", marker, f.label(), width = LABEL_WIDTH),
                label_style,
            ),
            Span::raw(ed.field_text(f)),
        ]));
    }
    lines.push(Line::from(""));
    for issue in &ed.issues {
        lines.push(Line::from(Span::styled(
            format!("- {}: {}", issue.field, issue.message),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(ts) = &ed.draft_saved_at {
        lines.push(Line::from(Span::styled(
            format!("draft saved {}", ts),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Tab: next field    Ctrl+S: save    Esc: close",
        Style::default().add_modifier(Modifier::DIM),
    )));
    frame.render_widget(Paragraph::new(lines), inner);

    // Cursor only makes sense on a text field.
    let cursor_col = match ed.field {
        EditorField::Title => Some(&ed.title),
        EditorField::Slug => Some(&ed.slug),
        EditorField::Excerpt => Some(&ed.excerpt),
        EditorField::Content => Some(&ed.content),
        EditorField::CoverUrl => Some(&ed.cover_url),
        EditorField::Tags => Some(&ed.tags),
        EditorField::Status | EditorField::Featured => None,
    };
    if let Some(input) = cursor_col {
        let chars = input.buf[..input.cursor].chars().count() as u16;
        let x = inner.x + 2 + LABEL_WIDTH as u16 + 2 + chars;
        let y = inner.y + ed.field.index() as u16;
        if x < inner.x + inner.width && y < inner.y + inner.height {
            frame.set_cursor_position((x, y));
        }
    }
}
