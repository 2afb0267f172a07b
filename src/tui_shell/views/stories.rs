use std::any::Any;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::listing::{ADMIN_PAGE_SIZE, FetchSpec, ListController, ListOps};
use crate::model::{ListEnvelope, PublishStatus, Resource, Story};

use super::super::filter_cycle::CyclicFilter;
use super::super::input::Input;
use super::super::view::{RenderCtx, View, filter_summary, list_status_line, render_view_chrome};
use super::super::{UiMode, fmt_ts_list, now_ts};
use super::posts::error_lines;

pub(in crate::tui_shell) struct StoriesView {
    updated_at: String,
    pub(in crate::tui_shell) list: ListController<Story>,
    search: Input,
    status_cycle: CyclicFilter,
    selected: usize,
}

impl StoriesView {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            updated_at: now_ts(),
            list: ListController::new(ADMIN_PAGE_SIZE),
            search: Input::default(),
            status_cycle: CyclicFilter::status(),
            selected: 0,
        }
    }

    fn selected_story(&self) -> Option<&Story> {
        self.list.items().get(self.selected)
    }

    pub(in crate::tui_shell) fn commit(
        &mut self,
        seq: u64,
        outcome: Result<ListEnvelope<Story>, String>,
    ) -> bool {
        if !self.list.commit(seq, outcome) {
            return false;
        }
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
        self.updated_at = now_ts();
        true
    }
}

impl View for StoriesView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Stories
    }

    fn resource(&self) -> Resource {
        Resource::Stories
    }

    fn title(&self) -> &str {
        "Stories"
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
        match name {
            "status" => {
                self.status_cycle.set_from(value);
                Ok(self.list.set_filter("status", value))
            }
            "featured" => Ok(self.list.set_filter(name, value)),
            _ => Err(format!(
                "stories has no filter `{}` (try status, featured)",
                name
            )),
        }
    }

    fn cycle_filter(&mut self) -> Option<FetchSpec> {
        let value = self.status_cycle.cycle();
        Some(self.list.set_filter("status", value))
    }

    fn clear_filters(&mut self) -> FetchSpec {
        self.status_cycle.reset();
        self.list.clear_filters()
    }

    fn selected_entry(&self) -> Option<(String, String)> {
        self.selected_story().map(|s| (s.id.clone(), s.title.clone()))
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
                "(no stories)",
                Style::default().add_modifier(Modifier::DIM),
            ))]
        } else {
            self.list
                .items()
                .iter()
                .map(|s| {
                    let status_style = match s.status {
                        PublishStatus::Published => Style::default().fg(Color::Green),
                        PublishStatus::Draft => Style::default().fg(Color::Yellow),
                    };
                    ListItem::new(Line::from(vec![
                        Span::raw(if s.featured { "* " } else { "  " }),
                        Span::styled(format!("{:<9} ", s.status.as_str()), status_style),
                        Span::raw(format!("{} ", s.title)),
                        Span::styled(
                            format!("({})  ", s.client),
                            Style::default().fg(Color::Cyan),
                        ),
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
        } else if let Some(s) = self.selected_story() {
            vec![
                Line::from(vec![
                    Span::styled("client: ", Style::default().fg(Color::Gray)),
                    Span::raw(s.client.clone()),
                ]),
                Line::from(vec![
                    Span::styled("cover: ", Style::default().fg(Color::Gray)),
                    Span::raw(s.cover_url.clone().unwrap_or_else(|| "(none)".to_string())),
                ]),
                Line::from(""),
                Line::from(s.summary.clone()),
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
