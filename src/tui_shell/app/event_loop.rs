use anyhow::Context;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_fetch_replies();
        app.poll_search_debounce();
        app.tick_autosave();

        app.trace_screen_view_if_changed();
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            app.trace_session_end("quit");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    app.trace_key_action(key);

    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }
    if app.search_focus {
        handle_search_key(app, key);
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('f') if ctrl => app.search_focus = true,

        // `q` only quits from an empty prompt; search arguments may contain it.
        KeyCode::Char('q') if app.input.buf.is_empty() && !ctrl => app.quit = true,

        KeyCode::Char(c @ '1'..='5') if app.input.buf.is_empty() && !ctrl => {
            let idx = c as usize - '1' as usize;
            app.switch_mode(ALL_MODES[idx]);
        }

        KeyCode::Esc => {
            if app.input.buf.is_empty() {
                app.quit = true;
            } else {
                edit_input(app, |i| i.clear());
            }
        }

        KeyCode::Tab => {
            if app.input.buf.is_empty() {
                if let Some(spec) = app.view.cycle_filter() {
                    app.dispatch_fetch(spec);
                }
            } else if !app.suggestions.is_empty() {
                app.apply_selected_suggestion();
            }
        }

        KeyCode::Enter => {
            if app.input.buf.is_empty() {
                app.run_default_action();
                return;
            }
            complete_before_run(app);
            app.run_current_input();
        }

        KeyCode::Up => {
            if app.input.buf.is_empty() {
                app.view.move_up();
            } else if !app.suggestions.is_empty() {
                step_suggestion(app, -1);
            } else {
                edit_input(app, |i| i.history_prev());
            }
        }
        KeyCode::Down => {
            if app.input.buf.is_empty() {
                app.view.move_down();
            } else if !app.suggestions.is_empty() {
                step_suggestion(app, 1);
            } else {
                edit_input(app, |i| i.history_next());
            }
        }

        // With an empty prompt the arrow keys page the list instead of
        // moving the cursor.
        KeyCode::Left => {
            if app.input.buf.is_empty() {
                if let Some(spec) = app.view.list_mut().prev_page() {
                    app.dispatch_fetch(spec);
                }
            } else {
                app.input.move_left();
            }
        }
        KeyCode::Right => {
            if app.input.buf.is_empty() {
                if let Some(spec) = app.view.list_mut().next_page() {
                    app.dispatch_fetch(spec);
                }
            } else {
                app.input.move_right();
            }
        }

        KeyCode::Backspace => edit_input(app, |i| i.backspace()),
        KeyCode::Delete => edit_input(app, |i| i.delete()),
        KeyCode::Char('u') if ctrl => edit_input(app, |i| i.clear()),
        KeyCode::Char('p') if ctrl => edit_input(app, |i| i.history_prev()),
        KeyCode::Char('n') if ctrl => edit_input(app, |i| i.history_next()),
        KeyCode::Char(c) if !ctrl => edit_input(app, |i| i.insert_char(c)),

        _ => {}
    }
}

fn edit_input(app: &mut App, edit: impl FnOnce(&mut Input)) {
    edit(&mut app.input);
    app.recompute_suggestions();
}

fn step_suggestion(app: &mut App, delta: isize) {
    let n = app.suggestions.len();
    if n == 0 {
        return;
    }
    let cur = app.suggestion_selected.min(n - 1) as isize;
    app.suggestion_selected = (cur + delta).rem_euclid(n as isize) as usize;
}

/// Enter adopts the highlighted suggestion unless the typed word already is
/// that command.
fn complete_before_run(app: &mut App) {
    if app.suggestions.is_empty() {
        return;
    }
    let sel = app.suggestion_selected.min(app.suggestions.len() - 1);
    let cmd = app.suggestions[sel].name;
    let typed = app.input.buf.trim_start_matches('/').trim_start();
    let first_word = typed.split_whitespace().next().unwrap_or("");
    if first_word != cmd {
        app.apply_selected_suggestion();
    }
}

/// Every edit re-arms the debounce; the fetch fires off a later
/// [`App::poll_search_debounce`] once typing pauses.
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.search_focus = false,
        KeyCode::Left => app.view.search_input_mut().move_left(),
        KeyCode::Right => app.view.search_input_mut().move_right(),
        KeyCode::Backspace => edit_search(app, |i| i.backspace()),
        KeyCode::Delete => edit_search(app, |i| i.delete()),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit_search(app, |i| i.clear());
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit_search(app, |i| i.insert_char(c));
        }
        _ => {}
    }
}

fn edit_search(app: &mut App, edit: impl FnOnce(&mut Input)) {
    edit(app.view.search_input_mut());
    let text = app.view.search_input().buf.clone();
    app.view.list_mut().set_search(&text, Instant::now());
}
