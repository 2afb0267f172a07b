use std::any::Any;

use super::*;

fn new_view(mode: UiMode) -> Box<dyn View> {
    match mode {
        UiMode::Posts => Box::new(PostsView::new()),
        UiMode::Stories => Box::new(StoriesView::new()),
        UiMode::Subscribers => Box::new(SubscribersView::new()),
        UiMode::Submissions => Box::new(SubmissionsView::new()),
        UiMode::Team => Box::new(TeamView::new()),
    }
}

impl App {
    pub(super) fn mode(&self) -> UiMode {
        self.view.mode()
    }

    pub(super) fn prompt(&self) -> &'static str {
        self.mode().prompt()
    }

    pub(in crate::tui_shell) fn current_view<T: Any>(&self) -> Option<&T> {
        self.view.as_any().downcast_ref::<T>()
    }

    pub(in crate::tui_shell) fn current_view_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.view.as_any_mut().downcast_mut::<T>()
    }

    /// Replaces the current screen wholesale. Search text, filters, and page
    /// do not survive the switch; a fetch still in flight for the old screen
    /// has nowhere to land and is dropped on arrival.
    pub(super) fn switch_mode(&mut self, mode: UiMode) {
        if self.mode() == mode {
            self.refresh_current();
            return;
        }
        let from = self.mode().command_name();
        self.view = new_view(mode);
        self.search_focus = false;
        self.trace_state_change("mode", from, mode.command_name());
        self.refresh_current();
    }

    pub(super) fn refresh_current(&mut self) {
        let spec = self.view.list_mut().refresh();
        self.dispatch_fetch(spec);
    }
}
