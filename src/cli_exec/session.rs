use anyhow::{Context, Result};

use sitbox::model::ApiConfig;
use sitbox::store::LocalStore;

pub(super) fn login(store: &LocalStore, url: String, token: String) -> Result<()> {
    let mut cfg = store.read_config()?;
    let api = ApiConfig {
        base_url: url.trim_end_matches('/').to_string(),
        token: None,
    };
    store
        .set_api_token(&api.base_url, &token)
        .context("store api token in state.json")?;
    cfg.api = Some(api);
    store.write_config(&cfg)?;
    println!("Logged in");
    Ok(())
}

pub(super) fn logout(store: &LocalStore) -> Result<()> {
    let cfg = store.read_config()?;
    let api = cfg
        .api
        .context("no api configured (run `sitbox login --url ... --token ...`)")?;
    store
        .clear_api_token(&api.base_url)
        .context("clear api token")?;
    println!("Logged out");
    Ok(())
}
