use super::*;

impl App {
    pub(super) fn load(opts: crate::tui::TuiRunOptions) -> Self {
        let mut app = App::default();

        match LocalStore::open_default() {
            Ok(store) => {
                app.drafts = DraftStore::new(Box::new(store.kv()));
                let (base_url, client) = configured_client(&store);
                app.base_url = base_url;
                app.client = client.map(Arc::new);
                app.store = Some(store);
            }
            Err(err) => {
                app.store_err = Some(format!("{:#}", err));
            }
        }

        app.push_output(vec![
            "Type `help` for commands.".to_string(),
            "(Use `/` to show available commands; keys 1-5 switch screens.)".to_string(),
        ]);
        app.enable_session_trace(opts.session_trace);

        if app.client.is_some() {
            app.refresh_current();
        }
        app
    }

    pub(in crate::tui_shell) fn require_client(&mut self) -> Option<Arc<ApiClient>> {
        match self.client.clone() {
            Some(client) => Some(client),
            None => {
                let msg = self
                    .store_err
                    .clone()
                    .unwrap_or_else(|| "not logged in (run `login`)".to_string());
                self.push_error(msg);
                None
            }
        }
    }

    pub(super) fn require_store(&mut self) -> Option<LocalStore> {
        match self.store.clone() {
            Some(store) => Some(store),
            None => {
                let msg = self
                    .store_err
                    .clone()
                    .unwrap_or_else(|| "local state unavailable".to_string());
                self.push_error(msg);
                None
            }
        }
    }
}

/// Builds an API client from saved config, if both URL and token are there.
fn configured_client(store: &LocalStore) -> (Option<String>, Option<ApiClient>) {
    let Ok(cfg) = store.read_config() else {
        return (None, None);
    };
    let Some(api) = cfg.api else {
        return (None, None);
    };
    let token = match store.get_api_token(&api.base_url) {
        Ok(Some(token)) => token,
        _ => return (Some(api.base_url), None),
    };
    match ApiClient::new(api.base_url.clone(), token) {
        Ok(client) => (Some(api.base_url), Some(client)),
        Err(_) => (Some(api.base_url), None),
    }
}
