use super::*;

enum SubmitPlan {
    Invalid(usize),
    Create(PostInput),
    Update(String, PostInput),
}

impl App {
    pub(super) fn open_create_editor(&mut self) {
        if self.client.is_none() {
            self.push_error("not logged in (run `login`)".to_string());
            return;
        }
        let draft = self.drafts.load();
        let resumed = draft != PostInput::default();
        let editor = PostEditor::from_input(EditorTarget::Create, &draft);
        self.autosave = AutosaveClock::new(Instant::now());
        self.open_editor_modal("New post", editor);
        if resumed {
            self.push_output(vec!["resumed saved draft".to_string()]);
        }
    }

    pub(super) fn open_edit_editor(&mut self) {
        if self.client.is_none() {
            self.push_error("not logged in (run `login`)".to_string());
            return;
        }
        let Some(post) = self
            .current_view::<PostsView>()
            .and_then(|v| v.selected_post())
            .cloned()
        else {
            self.push_error("no post selected".to_string());
            return;
        };
        let input = PostInput {
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            cover_url: post.cover_url,
            tags: post.tags,
            status: post.status,
            featured: post.featured,
        };
        let editor = PostEditor::from_input(EditorTarget::Update { id: post.id }, &input);
        self.autosave = AutosaveClock::new(Instant::now());
        self.open_editor_modal("Edit post", editor);
    }

    /// Flushes a dirty draft once the interval has passed. Only the create
    /// editor autosaves; edits of existing posts never touch the draft slot.
    pub(super) fn tick_autosave(&mut self) {
        let now = Instant::now();
        if !self.autosave.due(now) {
            return;
        }
        let Some(draft) = self.open_create_draft() else {
            return;
        };
        match self.drafts.save(&draft) {
            Ok(()) => {
                self.autosave.saved(now);
                let stamp = fmt_ts_ui(&now_ts());
                if let Some(m) = &mut self.modal
                    && let ModalKind::Editor(ed) = &mut m.kind
                {
                    ed.draft_saved_at = Some(stamp);
                }
            }
            Err(err) => self.trace_error(&format!("save draft: {:#}", err)),
        }
    }

    /// Last-chance flush when the editor closes with unsaved edits, so Esc
    /// right after typing does not lose the last few seconds.
    pub(in crate::tui_shell) fn editor_closing(&mut self) {
        if !self.autosave.is_dirty() {
            return;
        }
        let Some(draft) = self.open_create_draft() else {
            return;
        };
        match self.drafts.save(&draft) {
            Ok(()) => self.autosave.saved(Instant::now()),
            Err(err) => self.trace_error(&format!("save draft: {:#}", err)),
        }
    }

    fn open_create_draft(&self) -> Option<PostInput> {
        let m = self.modal.as_ref()?;
        let ModalKind::Editor(ed) = &m.kind else {
            return None;
        };
        if !matches!(ed.target, EditorTarget::Create) {
            return None;
        }
        Some(ed.to_input())
    }

    /// Validation first; the request only goes out on a clean form. The
    /// draft is deleted only after the server accepted a create.
    pub(in crate::tui_shell) fn submit_editor(&mut self) {
        let plan = {
            let Some(m) = &mut self.modal else {
                return;
            };
            let ModalKind::Editor(ed) = &mut m.kind else {
                return;
            };
            let input = ed.to_input();
            let issues = validate_post(&input);
            if issues.is_empty() {
                ed.issues.clear();
                match &ed.target {
                    EditorTarget::Create => SubmitPlan::Create(input),
                    EditorTarget::Update { id } => SubmitPlan::Update(id.clone(), input),
                }
            } else {
                let n = issues.len();
                ed.issues = issues;
                SubmitPlan::Invalid(n)
            }
        };

        let (is_create, id, input) = match plan {
            SubmitPlan::Invalid(n) => {
                self.trace_error(&format!("post form invalid: {} field issue(s)", n));
                return;
            }
            SubmitPlan::Create(input) => (true, String::new(), input),
            SubmitPlan::Update(id, input) => (false, id, input),
        };

        let Some(client) = self.require_client() else {
            return;
        };
        let result = if is_create {
            client.create_post(&input)
        } else {
            client.update_post(&id, &input)
        };
        match result {
            Ok(post) => {
                if is_create {
                    if let Err(err) = self.drafts.clear() {
                        self.trace_error(&format!("clear draft: {:#}", err));
                    }
                    self.autosave = AutosaveClock::new(Instant::now());
                }
                self.close_modal();
                self.push_output(vec![if is_create {
                    format!("created post {}", post.id)
                } else {
                    format!("updated post {}", post.id)
                }]);
                self.refresh_current();
            }
            Err(err) => {
                // Keep the editor open; the form content survives a failure.
                let msg = format!("{:#}", err);
                self.trace_error(&msg);
                if let Some(m) = &mut self.modal
                    && let ModalKind::Editor(ed) = &mut m.kind
                {
                    ed.issues = vec![FieldIssue {
                        field: "request",
                        message: msg,
                    }];
                }
            }
        }
    }
}
