use super::*;

impl App {
    pub(in crate::tui_shell) fn execute_pending_action(&mut self, action: PendingAction) {
        match action {
            PendingAction::DeleteSelected {
                resource,
                id,
                label,
            } => self.delete_item(resource, &id, &label),
        }
    }

    fn delete_item(&mut self, resource: Resource, id: &str, label: &str) {
        let Some(client) = self.require_client() else {
            return;
        };
        let result = match resource {
            Resource::Posts => client.delete_post(id),
            Resource::Stories => client.delete_story(id),
            Resource::Subscribers => client.delete_subscriber(id),
            Resource::Submissions => client.delete_submission(id),
            Resource::Team => client.delete_team_member(id),
        };
        match result {
            Ok(()) => {
                self.trace_state_change("list", "item-present", "item-deleted");
                self.push_output(vec![format!("deleted {}", label)]);
                if self.view.resource() == resource {
                    self.refresh_current();
                }
            }
            Err(err) => {
                self.push_error(format!("delete {}: {:#}", resource.as_str(), err));
            }
        }
    }

    pub(in crate::tui_shell) fn submit_text_input(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        match action {
            TextInputAction::LoginUrl => {
                let url = value.trim_end_matches('/').to_string();
                self.open_text_input_modal(
                    "Login",
                    "token> ",
                    TextInputAction::LoginToken { url: url.clone() },
                    None,
                    vec![format!("api: {}", url)],
                );
            }
            TextInputAction::LoginToken { url } => self.finish_login(url, value),
        }
    }

    fn finish_login(&mut self, url: String, token: String) {
        let Some(store) = self.require_store() else {
            return;
        };
        let mut cfg = match store.read_config() {
            Ok(cfg) => cfg,
            Err(err) => {
                self.push_error(format!("read config: {:#}", err));
                return;
            }
        };
        if let Err(err) = store.set_api_token(&url, &token) {
            self.push_error(format!("store api token: {:#}", err));
            return;
        }
        cfg.api = Some(ApiConfig {
            base_url: url.clone(),
            token: None,
        });
        if let Err(err) = store.write_config(&cfg) {
            self.push_error(format!("write config: {:#}", err));
            return;
        }
        match ApiClient::new(url.clone(), token) {
            Ok(client) => {
                self.client = Some(Arc::new(client));
                self.base_url = Some(url);
                self.trace_state_change("auth", "logged-out", "logged-in");
                self.push_output(vec!["Logged in".to_string()]);
                self.refresh_current();
            }
            Err(err) => {
                self.push_error(format!("build api client: {:#}", err));
            }
        }
    }

    pub(super) fn logout(&mut self) {
        let Some(store) = self.require_store() else {
            return;
        };
        let api = match store.read_config() {
            Ok(cfg) => cfg.api,
            Err(err) => {
                self.push_error(format!("read config: {:#}", err));
                return;
            }
        };
        let Some(api) = api else {
            self.push_error("no api configured".to_string());
            return;
        };
        if let Err(err) = store.clear_api_token(&api.base_url) {
            self.push_error(format!("clear api token: {:#}", err));
            return;
        }
        self.client = None;
        self.trace_state_change("auth", "logged-in", "logged-out");
        self.push_output(vec!["Logged out".to_string()]);
    }
}
