use std::any::Any;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::listing::{ADMIN_PAGE_SIZE, FetchSpec, ListController, ListOps};
use crate::model::{ListEnvelope, Resource, Submission};

use super::super::input::Input;
use super::super::view::{RenderCtx, View, filter_summary, list_status_line, render_view_chrome};
use super::super::{UiMode, fmt_ts_list, now_ts};
use super::posts::error_lines;

pub(in crate::tui_shell) struct SubmissionsView {
    updated_at: String,
    pub(in crate::tui_shell) list: ListController<Submission>,
    search: Input,
    selected: usize,
}

impl SubmissionsView {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            updated_at: now_ts(),
            list: ListController::new(ADMIN_PAGE_SIZE),
            search: Input::default(),
            selected: 0,
        }
    }

    fn selected_submission(&self) -> Option<&Submission> {
        self.list.items().get(self.selected)
    }

    pub(in crate::tui_shell) fn commit(
        &mut self,
        seq: u64,
        outcome: Result<ListEnvelope<Submission>, String>,
    ) -> bool {
        if !self.list.commit(seq, outcome) {
            return false;
        }
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
        self.updated_at = now_ts();
        true
    }
}

impl View for SubmissionsView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Submissions
    }

    fn resource(&self) -> Resource {
        Resource::Submissions
    }

    fn title(&self) -> &str {
        "Submissions"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn list(&self) -> &dyn ListOps {
        &self.list
    }

    fn list_mut(&mut self) -> &mut dyn ListOps {
        &mut self.list
    }

    fn search_input(&self) -> &Input {
        &self.search
    }

    fn search_input_mut(&mut self) -> &mut Input {
        &mut self.search
    }

    fn set_filter(&mut self, name: &str, value: &str) -> Result<FetchSpec, String> {
        // The wire name is camelCase; accept the friendlier spelling too.
        match name {
            "formName" | "form" => Ok(self.list.set_filter("formName", value)),
            _ => Err(format!(
                "submissions has no filter `{}` (only form)",
                name
            )),
        }
    }

    fn selected_entry(&self) -> Option<(String, String)> {
        self.selected_submission()
            .map(|s| (s.id.clone(), format!("{} <{}>", s.name, s.email)))
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.list.len() {
            self.selected += 1;
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), &self.updated_at, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let mut parts = Vec::new();
        if !self.list.search().is_empty() {
            parts.push(format!("search={}", self.list.search()));
        }
        if let Some(filters) = filter_summary(self.list.query()) {
            parts.push(filters);
        }
        parts.push(list_status_line(&self.list));

        let items: Vec<ListItem> = if self.list.is_empty() {
            vec![ListItem::new(Span::styled(
                "(no submissions)",
                Style::default().add_modifier(Modifier::DIM),
            ))]
        } else {
            self.list
                .items()
                .iter()
                .map(|s| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:<12} ", s.form_name),
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::raw(format!("{}  ", s.name)),
                        Span::raw(format!("{}  ", s.email)),
                        Span::styled(
                            fmt_ts_list(&s.created_at, ctx),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect()
        };
        let mut state = ListState::default();
        if !self.list.is_empty() {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(
            List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(parts.join("  ")),
                )
                .highlight_style(Style::default().bg(Color::DarkGray)),
            chunks[0],
            &mut state,
        );

        let detail_lines: Vec<Line> = if let Some(err) = self.list.error() {
            error_lines(err)
        } else if let Some(s) = self.selected_submission() {
            vec![
                Line::from(vec![
                    Span::styled("from: ", Style::default().fg(Color::Gray)),
                    Span::raw(format!("{} <{}>", s.name, s.email)),
                ]),
                Line::from(vec![
                    Span::styled("form: ", Style::default().fg(Color::Gray)),
                    Span::raw(s.form_name.clone()),
                ]),
                Line::from(""),
                Line::from(s.message.clone()),
            ]
        } else {
            vec![Line::from(Span::styled(
                "(nothing selected)",
                Style::default().add_modifier(Modifier::DIM),
            ))]
        };
        frame.render_widget(
            Paragraph::new(detail_lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("details")),
            chunks[1],
        );
    }
}
