use super::*;

pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) input: Input,
}

pub(in crate::tui_shell) enum ModalKind {
    Viewer,
    TextInput {
        action: TextInputAction,
        prompt: String,
    },
    ConfirmAction {
        action: PendingAction,
    },
    Editor(Box<PostEditor>),
}

/// What an Enter in a text-input modal means.
#[derive(Clone, Debug)]
pub(in crate::tui_shell) enum TextInputAction {
    LoginUrl,
    LoginToken { url: String },
}

/// A mutation queued behind a confirmation modal.
#[derive(Clone, Debug)]
pub(in crate::tui_shell) enum PendingAction {
    DeleteSelected {
        resource: Resource,
        id: String,
        label: String,
    },
}
