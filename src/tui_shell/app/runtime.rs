use std::io::{self, IsTerminal, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::{App, event_loop};

type AdminTerminal = Terminal<CrosstermBackend<Stdout>>;

pub(in crate::tui_shell) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("the admin console needs an interactive terminal (TTY)");
    }

    let mut terminal = claim_terminal()?;
    let mut app = App::load(opts);
    let outcome = event_loop::run_loop(&mut terminal, &mut app);

    // Teardown is best effort so the loop's own error survives.
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    outcome
}

fn claim_terminal() -> Result<AdminTerminal> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;
    terminal.clear().ok();
    Ok(terminal)
}
