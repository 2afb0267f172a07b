use std::any::Any;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;

use crate::listing::{FetchSpec, ListOps, ListQuery};
use crate::model::Resource;

use super::input::Input;
use super::{TimestampMode, UiMode, fmt_ts_ui};

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx {
    pub(super) now: OffsetDateTime,
    pub(super) ts_mode: TimestampMode,
}

/// One resource screen: a paginated list plus its search box and filters.
///
/// Everything the shell drives generically goes through [`ListOps`]; commands
/// that need the concrete row type (edit, delete labels) downcast via
/// `as_any`.
pub(super) trait View: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn mode(&self) -> UiMode;
    fn resource(&self) -> Resource;
    fn title(&self) -> &str;

    /// Timestamp of the last committed fetch, for the chrome header.
    fn updated_at(&self) -> &str;

    fn list(&self) -> &dyn ListOps;
    fn list_mut(&mut self) -> &mut dyn ListOps;

    fn search_input(&self) -> &Input;
    fn search_input_mut(&mut self) -> &mut Input;

    /// Applies a named filter. Views reject names they do not serve so a typo
    /// never silently becomes a server-side no-op.
    fn set_filter(&mut self, name: &str, value: &str) -> Result<FetchSpec, String>;

    /// Steps the quick filter bound to Tab, if the view has one.
    fn cycle_filter(&mut self) -> Option<FetchSpec> {
        None
    }

    fn clear_filters(&mut self) -> FetchSpec {
        self.list_mut().clear_filters()
    }

    /// Id and human label of the highlighted row, for delete confirmations.
    fn selected_entry(&self) -> Option<(String, String)>;

    fn move_up(&mut self) {}
    fn move_down(&mut self) {}

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderCtx);
}

/// Draws the bordered block every view shares (title plus last-updated stamp)
/// and returns the inner area for the view body.
pub(super) fn render_view_chrome(
    frame: &mut Frame,
    title: &str,
    updated_at: &str,
    area: Rect,
) -> Rect {
    let block = Block::default().borders(Borders::ALL).title(Line::from(vec![
        Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("updated {} ", fmt_ts_ui(updated_at)),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// One-line fetch state for list block titles.
pub(super) fn list_status_line(list: &dyn ListOps) -> String {
    let mut out = format!(
        "page {}/{} ({} total)",
        list.page(),
        list.total_pages(),
        list.total()
    );
    if list.loading() {
        out.push_str(" loading");
    } else if list.search_pending() {
        out.push_str(" typing");
    }
    out
}

/// `k=v` pairs of every active filter, for list block titles.
pub(super) fn filter_summary(query: &ListQuery) -> Option<String> {
    if query.filters.is_empty() {
        return None;
    }
    let pairs: Vec<String> = query
        .filters
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();
    Some(pairs.join(" "))
}
