use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};

use crate::model::{AdminConfig, LocalState};

const STORE_DIR: &str = ".sitbox";
const HOME_ENV: &str = "SITBOX_HOME";

/// Per-user sitbox directory holding `config.json`, `state.json` and the
/// autosave key/value file.
#[derive(Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// `$SITBOX_HOME` if set, otherwise `~/.sitbox`. Created on first use.
    pub fn open_default() -> Result<Self> {
        let root = match std::env::var_os(HOME_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .context("locate home directory (set SITBOX_HOME to override)")?
                .join(STORE_DIR),
        };
        Self::open_at(&root)
    }

    pub fn open_at(root: &Path) -> Result<Self> {
        fs::create_dir_all(root).with_context(|| format!("create {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<AdminConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(AdminConfig {
                version: 1,
                api: None,
            });
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let mut cfg: AdminConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }

        // Migration: if an older config contains a token, move it into state.json.
        if let Some(api) = cfg.api.as_mut()
            && let Some(token) = api.token.take()
        {
            self.set_api_token(&api.base_url, &token)
                .context("migrate api token to state")?;
            // Persist updated config without token.
            self.write_config(&cfg)
                .context("write config after token migration")?;
        }

        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &AdminConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<LocalState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(LocalState {
                version: 1,
                api_tokens: HashMap::new(),
            });
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: LocalState = serde_json::from_slice(&bytes).context("parse state.json")?;
        Ok(st)
    }

    pub fn write_state(&self, st: &LocalState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }

    pub fn get_api_token(&self, base_url: &str) -> Result<Option<String>> {
        let st = self.read_state()?;
        if st.version != 1 {
            anyhow::bail!("unsupported state version {}", st.version);
        }
        Ok(st.api_tokens.get(base_url).cloned())
    }

    pub fn set_api_token(&self, base_url: &str, token: &str) -> Result<()> {
        let mut st = self.read_state()?;
        if st.version != 1 {
            anyhow::bail!("unsupported state version {}", st.version);
        }
        st.api_tokens
            .insert(base_url.to_string(), token.to_string());
        self.write_state(&st)
    }

    pub fn clear_api_token(&self, base_url: &str) -> Result<()> {
        let mut st = self.read_state()?;
        if st.version != 1 {
            anyhow::bail!("unsupported state version {}", st.version);
        }
        st.api_tokens.remove(base_url);
        self.write_state(&st)
    }

    /// Key/value store backing editor autosave.
    pub fn kv(&self) -> FileKvStore {
        FileKvStore::new(self.root.join("kv.json"))
    }
}

/// String key/value persistence with swappable backing, so draft autosave can
/// run against a file in production and a map in tests.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// One JSON object per file. A missing or unreadable file reads as empty;
/// the entries are recoverable caches, not records.
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> HashMap<String, String> {
        let Ok(bytes) = fs::read(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_slice(&bytes).unwrap_or_default()
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(map).context("serialize kv map")?;
        write_atomic(&self.path, &bytes)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.read_map();
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and dry runs.
#[derive(Default)]
pub struct MemKvStore {
    map: Mutex<HashMap<String, String>>,
}

impl KvStore for MemKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        map.remove(key);
        Ok(())
    }
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
