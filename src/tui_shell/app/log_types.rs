#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct CommandDef {
    pub(in crate::tui_shell) name: &'static str,
    pub(in crate::tui_shell) aliases: &'static [&'static str],
    pub(in crate::tui_shell) usage: &'static str,
    pub(in crate::tui_shell) help: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EntryKind {
    Command,
    Output,
    Error,
}

/// One timestamped block in the command log.
#[derive(Clone, Debug)]
pub(super) struct ScrollEntry {
    pub(super) ts: String,
    pub(super) kind: EntryKind,
    pub(super) lines: Vec<String>,
}
