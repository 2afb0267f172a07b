use super::*;

impl App {
    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        let entry = ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        };
        if kind != EntryKind::Command {
            self.last_result = Some(entry.clone());
        }
        self.log.push(entry);
    }

    pub(super) fn push_command(&mut self, line: String) {
        self.last_command = Some(line.clone());
        self.push_entry(EntryKind::Command, vec![line]);
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        self.trace_error(&msg);
        self.push_entry(EntryKind::Error, vec![msg]);
    }

    fn show_modal(
        &mut self,
        title: impl Into<String>,
        lines: Vec<String>,
        kind: ModalKind,
        input: Input,
    ) {
        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind,
            input,
        });
    }

    pub(super) fn open_modal(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.show_modal(title, lines, ModalKind::Viewer, Input::default());
    }

    pub(super) fn open_text_input_modal(
        &mut self,
        title: impl Into<String>,
        prompt: impl Into<String>,
        action: TextInputAction,
        initial: Option<String>,
        mut lines: Vec<String>,
    ) {
        lines.push("".to_string());
        lines.push("Enter to save; Esc to cancel.".to_string());

        let mut input = Input::default();
        if let Some(s) = initial {
            input.set(s);
        }

        let kind = ModalKind::TextInput {
            action,
            prompt: prompt.into(),
        };
        self.show_modal(title, lines, kind, input);
    }

    /// Every destructive command funnels through here before it runs.
    pub(super) fn open_confirm_modal(&mut self, action: PendingAction) {
        let PendingAction::DeleteSelected {
            resource, label, ..
        } = &action;
        let lines = vec![
            format!("Delete: {}", label),
            format!("Where: {}", resource.as_str()),
            "".to_string(),
            "This removes data on the server.".to_string(),
            "Enter: confirm    Esc: cancel".to_string(),
        ];
        self.show_modal(
            "Confirm",
            lines,
            ModalKind::ConfirmAction { action },
            Input::default(),
        );
    }

    pub(super) fn open_editor_modal(&mut self, title: impl Into<String>, editor: PostEditor) {
        self.show_modal(
            title,
            Vec::new(),
            ModalKind::Editor(Box::new(editor)),
            Input::default(),
        );
    }

    pub(in crate::tui_shell) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }
}
