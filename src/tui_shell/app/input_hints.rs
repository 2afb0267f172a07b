use super::*;

pub(super) fn input_hint_left(app: &App) -> Option<String> {
    if !app.input.buf.is_empty() {
        return None;
    }
    if app.modal.is_some() || app.search_focus {
        return None;
    }

    let cmds = app.primary_hint_commands();
    if cmds.is_empty() {
        return None;
    }

    Some(cmds.join(" | "))
}

pub(super) fn input_hint_right(app: &App) -> Option<(Line<'static>, usize)> {
    if !app.input.buf.is_empty() {
        return None;
    }
    if app.modal.is_some() || app.search_focus {
        return None;
    }

    Some((
        Line::from(vec![
            Span::styled(
                "ctrl-f:".to_string(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            ),
            Span::raw(" "),
            Span::styled("search".to_string(), Style::default().fg(Color::Blue)),
        ]),
        "ctrl-f: search".len(),
    ))
}

impl App {
    /// Commands surfaced as hints on the input line. The first one doubles as
    /// the Enter default action.
    pub(super) fn primary_hint_commands(&self) -> Vec<String> {
        if self.client.is_none() {
            return vec!["login".to_string()];
        }
        let mut out = vec!["refresh".to_string()];
        match self.mode() {
            UiMode::Posts => {
                out.push("new".to_string());
                out.push("edit".to_string());
            }
            UiMode::Subscribers => out.push("export".to_string()),
            UiMode::Stories | UiMode::Submissions | UiMode::Team => {
                out.push("delete".to_string());
            }
        }
        out.push("help".to_string());
        out
    }
}
