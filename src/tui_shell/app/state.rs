use std::sync::mpsc::channel;

use super::fetch::FetchReply;
use super::session_trace::{SessionTraceStats, SessionTraceWriter};
use super::*;

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) store: Option<LocalStore>,
    pub(in crate::tui_shell) store_err: Option<String>,

    // Present only after a base URL and token are configured.
    pub(in crate::tui_shell) client: Option<Arc<ApiClient>>,
    pub(in crate::tui_shell) base_url: Option<String>,

    pub(super) session_trace: Option<SessionTraceWriter>,
    pub(super) last_screen_signature: Option<String>,
    pub(super) session_trace_stats: SessionTraceStats,

    pub(in crate::tui_shell) ts_mode: TimestampMode,

    // The single live screen. Switching modes replaces it, which is what
    // guarantees an abandoned screen's in-flight fetch can never land.
    pub(in crate::tui_shell) view: Box<dyn View>,

    // While set, printable keys edit the view's search box instead of the
    // command input.
    pub(in crate::tui_shell) search_focus: bool,

    pub(super) fetch_tx: Sender<FetchReply>,
    pub(super) fetch_rx: Receiver<FetchReply>,

    pub(in crate::tui_shell) drafts: DraftStore,
    pub(in crate::tui_shell) autosave: AutosaveClock,

    // Internal log (useful for debugging) but no longer the primary UI.
    pub(in crate::tui_shell) log: Vec<ScrollEntry>,

    pub(in crate::tui_shell) last_command: Option<String>,
    pub(in crate::tui_shell) last_result: Option<ScrollEntry>,

    pub(in crate::tui_shell) modal: Option<Modal>,

    pub(in crate::tui_shell) input: Input,

    pub(in crate::tui_shell) suggestions: Vec<CommandDef>,
    pub(in crate::tui_shell) suggestion_selected: usize,

    pub(in crate::tui_shell) quit: bool,
}

impl Default for App {
    fn default() -> Self {
        let (fetch_tx, fetch_rx) = channel();
        Self {
            store: None,
            store_err: None,
            client: None,
            base_url: None,
            session_trace: None,
            last_screen_signature: None,
            session_trace_stats: SessionTraceStats::default(),
            ts_mode: TimestampMode::Relative,
            view: Box::new(PostsView::new()),
            search_focus: false,
            fetch_tx,
            fetch_rx,
            drafts: DraftStore::new(Box::new(MemKvStore::default())),
            autosave: AutosaveClock::new(Instant::now()),
            log: Vec::new(),
            last_command: None,
            last_result: None,
            modal: None,
            input: Input::default(),
            suggestions: Vec::new(),
            suggestion_selected: 0,
            quit: false,
        }
    }
}
