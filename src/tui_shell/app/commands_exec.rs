use super::*;

impl App {
    pub(super) fn recompute_suggestions(&mut self) {
        let show = self.input.buf.trim_start().starts_with('/');
        let q = self.input.buf.trim_start_matches('/').trim().to_lowercase();
        if q.is_empty() {
            if show {
                let mut defs = mode_command_defs(self.mode());
                defs.sort_by(|a, b| a.name.cmp(b.name));
                self.suggestions = defs;
                self.suggestion_selected = 0;
            } else {
                self.suggestions.clear();
                self.suggestion_selected = 0;
            }
            return;
        }

        // Only match the first token for palette.
        let first = q.split_whitespace().next().unwrap_or("");
        if first.is_empty() {
            self.suggestions.clear();
            self.suggestion_selected = 0;
            return;
        }

        let mut defs = mode_command_defs(self.mode());
        defs.sort_by(|a, b| a.name.cmp(b.name));

        let mut scored = Vec::new();
        for d in defs {
            let mut best = score_match(first, d.name);
            for &a in d.aliases {
                best = best.max(score_match(first, a));
            }
            if best > 0 {
                scored.push((best, d));
            }
        }

        // Hinted commands sort first so the palette agrees with the input line.
        let hint_order = self.primary_hint_commands();
        sort_scored_suggestions(&mut scored, &hint_order);
        self.suggestions = scored.into_iter().map(|(_, d)| d).collect();
        self.suggestion_selected = self
            .suggestion_selected
            .min(self.suggestions.len().saturating_sub(1));
    }

    pub(super) fn apply_selected_suggestion(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let show = self.input.buf.trim_start().starts_with('/');
        let sel = self
            .suggestion_selected
            .min(self.suggestions.len().saturating_sub(1));
        let cmd = self.suggestions[sel].name;

        // If the user opened suggestions with `/`, keep it so the list stays visible.
        let prefix = if show { "/" } else { "" };
        let raw = self.input.buf.trim_start_matches('/');
        let trimmed = raw.trim_start();
        let mut iter = trimmed.splitn(2, char::is_whitespace);
        let first = iter.next().unwrap_or("");
        let rest = iter.next().unwrap_or("");

        if first.is_empty() || rest.is_empty() {
            self.input.set(format!("{}{} ", prefix, cmd));
        } else {
            // Replace first token.
            self.input
                .set(format!("{}{} {}", prefix, cmd, rest.trim_start()));
        }
        self.recompute_suggestions();
    }

    pub(super) fn run_current_input(&mut self) {
        let line = self.input.buf.trim().to_string();
        if line.is_empty() {
            return;
        }

        self.input.push_history(&line);
        self.push_command(format!("{} {}", self.prompt(), line));
        self.input.clear();
        self.suggestions.clear();
        self.suggestion_selected = 0;

        let line = line.trim_start().strip_prefix('/').unwrap_or(&line).trim();
        let tokens = match tokenize(line) {
            Ok(t) => t,
            Err(err) => {
                self.push_error(format!("parse error: {}", err));
                return;
            }
        };
        if tokens.is_empty() {
            return;
        }

        let mut cmd = tokens[0].to_lowercase();
        let args = &tokens[1..];

        let mut defs = mode_command_defs(self.mode());
        defs.sort_by(|a, b| a.name.cmp(b.name));

        // Resolve aliases.
        if defs.iter().any(|d| d.name == cmd) {
            // already canonical
        } else if let Some(d) = defs.iter().find(|d| d.aliases.iter().any(|&a| a == cmd)) {
            cmd = d.name.to_string();
        } else {
            // Try prefix match if unambiguous.
            let matches = defs
                .iter()
                .filter(|d| d.name.starts_with(&cmd))
                .collect::<Vec<_>>();
            if matches.len() == 1 {
                cmd = matches[0].name.to_string();
            }
        }

        // Commands that only exist on another screen stay unknown here.
        if !defs.iter().any(|d| d.name == cmd) {
            self.trace_command_submitted(line, &cmd);
            self.push_error(format!("unknown command: {} (try /help)", cmd));
            return;
        }

        if cmd == "help" {
            self.trace_command_submitted(line, "help");
            self.cmd_help(&defs, args);
            return;
        }

        self.trace_command_submitted(line, &cmd);
        self.dispatch_command(cmd.as_str(), args);
    }

    /// Enter on an empty prompt runs the first hinted command, so the
    /// nudge on the input line and the key always agree.
    pub(super) fn run_default_action(&mut self) {
        let Some(first) = self.primary_hint_commands().into_iter().next() else {
            return;
        };
        self.dispatch_command(&first, &[]);
    }

    fn dispatch_command(&mut self, cmd: &str, args: &[String]) {
        match cmd {
            "refresh" => {
                let _ = args;
                self.refresh_current();
                self.push_output(vec!["refreshing".to_string()]);
            }
            "search" => {
                let text = args.join(" ");
                self.view.search_input_mut().set(text.clone());
                self.view.list_mut().set_search(&text, Instant::now());
                if text.trim().is_empty() {
                    self.push_output(vec!["search cleared".to_string()]);
                } else {
                    self.push_output(vec![format!("search: {}", text.trim())]);
                }
            }
            "filter" => {
                if args.len() < 2 {
                    self.push_error("usage: filter <name> <value>".to_string());
                    return;
                }
                let name = args[0].clone();
                let value = args[1..].join(" ");
                match self.view.set_filter(&name, &value) {
                    Ok(spec) => {
                        self.dispatch_fetch(spec);
                        self.push_output(vec![format!("filter {} = {}", name, value)]);
                    }
                    Err(msg) => self.push_error(msg),
                }
            }
            "clear-filters" => {
                let spec = self.view.clear_filters();
                self.dispatch_fetch(spec);
                self.push_output(vec!["filters cleared".to_string()]);
            }
            "page" => {
                let Some(raw) = args.first() else {
                    self.push_error("usage: page <n>".to_string());
                    return;
                };
                let n = match raw.parse::<u32>() {
                    Ok(n) => n,
                    Err(_) => {
                        self.push_error(format!("invalid page number: {}", raw));
                        return;
                    }
                };
                match self.view.list_mut().go_to_page(n) {
                    Some(spec) => self.dispatch_fetch(spec),
                    None => self.push_output(vec!["(page unchanged)".to_string()]),
                }
            }
            "next" => match self.view.list_mut().next_page() {
                Some(spec) => self.dispatch_fetch(spec),
                None => self.push_output(vec!["(page unchanged)".to_string()]),
            },
            "prev" => match self.view.list_mut().prev_page() {
                Some(spec) => self.dispatch_fetch(spec),
                None => self.push_output(vec!["(page unchanged)".to_string()]),
            },

            "new" => self.open_create_editor(),
            "edit" => self.open_edit_editor(),
            "delete" => match self.view.selected_entry() {
                Some((id, label)) => {
                    let resource = self.view.resource();
                    self.open_confirm_modal(PendingAction::DeleteSelected {
                        resource,
                        id,
                        label,
                    });
                }
                None => self.push_error("nothing selected".to_string()),
            },
            "export" => {
                let format = match args.first() {
                    Some(raw) => match ExportFormat::parse(raw) {
                        Ok(f) => f,
                        Err(err) => {
                            self.push_error(format!("{:#}", err));
                            return;
                        }
                    },
                    None => ExportFormat::Csv,
                };
                let Some(client) = self.require_client() else {
                    return;
                };
                match client.export_subscribers(format) {
                    Ok(bytes) => match write_export(Path::new("."), format, &bytes) {
                        Ok(path) => self.push_output(vec![format!(
                            "wrote {} ({} bytes)",
                            path.display(),
                            bytes.len()
                        )]),
                        Err(err) => self.push_error(format!("export: {:#}", err)),
                    },
                    Err(err) => self.push_error(format!("export subscribers: {:#}", err)),
                }
            }

            "posts" => self.switch_mode(UiMode::Posts),
            "stories" => self.switch_mode(UiMode::Stories),
            "subscribers" => self.switch_mode(UiMode::Subscribers),
            "submissions" => self.switch_mode(UiMode::Submissions),
            "team" => self.switch_mode(UiMode::Team),

            "login" => {
                let initial = self.base_url.clone();
                self.open_text_input_modal(
                    "Login",
                    "url> ",
                    TextInputAction::LoginUrl,
                    initial,
                    vec![],
                );
            }
            "logout" => self.logout(),
            "ts" => {
                self.ts_mode = self.ts_mode.toggle();
                self.push_output(vec![format!("timestamps: {}", self.ts_mode.label())]);
            }
            "clear" => {
                self.log.clear();
                self.last_command = None;
                self.last_result = None;
            }
            "quit" => {
                self.quit = true;
            }

            _ => self.push_error(format!("unknown command: {} (try /help)", cmd)),
        }
    }

    fn cmd_help(&mut self, defs: &[CommandDef], args: &[String]) {
        if args.is_empty() {
            let mut lines = Vec::new();
            lines.push("Commands:".to_string());
            let mut defs = defs.to_vec();
            defs.sort_by(|a, b| a.name.cmp(b.name));
            for d in defs {
                lines.push(format!("- {:<13} {}", d.name, d.help));
            }
            lines.push("".to_string());
            lines.push("Notes:".to_string());
            lines.push("- `/` shows available commands on this screen.".to_string());
            lines.push("- Keys 1-5 jump between screens.".to_string());
            lines.push("- Ctrl+f focuses the live search box; Esc leaves it.".to_string());
            lines.push("- Tab cycles the status filter; with suggestions open it accepts.".to_string());
            lines.push("- Left/Right page through the list when the input is empty.".to_string());
            lines.push("- History: Ctrl+p / Ctrl+n.".to_string());
            lines.push("- `Esc` clears input; on an empty input it quits.".to_string());
            self.open_modal("Help", lines);
            return;
        }

        let q = args[0].to_lowercase();
        let Some(d) = defs
            .iter()
            .find(|d| d.name == q || d.aliases.iter().any(|&a| a == q))
        else {
            self.push_error(format!("unknown command: {}", q));
            return;
        };

        self.open_modal(
            "Help",
            vec![
                format!("{} - {}", d.name, d.help),
                "".to_string(),
                format!("usage: {}", d.usage),
            ],
        );
    }
}
