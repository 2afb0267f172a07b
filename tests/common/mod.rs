use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};
use tokio::sync::oneshot;

/// In-process stand-in for the site's admin API. Serves the same routes and
/// envelope (camelCase, `items`/`total`/`page`) and deliberately reports
/// nonsense pagination flags, since the client must derive paging itself.
pub struct StubState {
    pub token: String,
    pub posts: Mutex<Vec<Value>>,
    pub stories: Mutex<Vec<Value>>,
    pub subscribers: Mutex<Vec<Value>>,
    pub submissions: Mutex<Vec<Value>>,
    pub team: Mutex<Vec<Value>>,

    /// Query string of the most recent list request, for asserting what the
    /// client actually sent.
    pub last_query: Mutex<Option<HashMap<String, String>>>,
    pub list_hits: AtomicU64,
    pub fail_next_list: AtomicBool,
    next_id: AtomicU64,
}

impl StubState {
    fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            posts: Mutex::new(Vec::new()),
            stories: Mutex::new(Vec::new()),
            subscribers: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
            team: Mutex::new(Vec::new()),
            last_query: Mutex::new(None),
            list_hits: AtomicU64::new(0),
            fail_next_list: AtomicBool::new(false),
            next_id: AtomicU64::new(1000),
        }
    }

    fn rows(&self, resource: &str) -> Option<&Mutex<Vec<Value>>> {
        match resource {
            "posts" => Some(&self.posts),
            "stories" => Some(&self.stories),
            "subscribers" => Some(&self.subscribers),
            "submissions" => Some(&self.submissions),
            "team" => Some(&self.team),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn fail_next_list(&self) {
        self.fail_next_list.store(true, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn take_last_query(&self) -> Option<HashMap<String, String>> {
        self.last_query.lock().unwrap().take()
    }

    #[allow(dead_code)]
    pub fn hits(&self) -> u64 {
        self.list_hits.load(Ordering::SeqCst)
    }
}

pub struct StubGuard {
    pub base_url: String,
    pub token: String,
    pub state: Arc<StubState>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Drop for StubGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn spawn_stub() -> Result<StubGuard> {
    let state = Arc::new(StubState::new("stub-admin-token"));
    seed(&state);
    spawn_with_state(state)
}

#[allow(dead_code)]
pub fn spawn_empty_stub() -> Result<StubGuard> {
    spawn_with_state(Arc::new(StubState::new("stub-admin-token")))
}

fn spawn_with_state(state: Arc<StubState>) -> Result<StubGuard> {
    let router = axum::Router::new()
        .route("/api/subscribers/export", get(export_subscribers))
        .route(
            "/api/:resource",
            get(list_resource).post(create_resource),
        )
        .route(
            "/api/:resource/:id",
            axum::routing::put(update_resource).delete(delete_resource),
        )
        .with_state(state.clone());

    let (addr_tx, addr_rx) = std::sync::mpsc::channel::<SocketAddr>();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build stub runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub listener");
            let addr = listener.local_addr().expect("stub local addr");
            let _ = addr_tx.send(addr);
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("serve stub");
        });
    });

    let addr = addr_rx
        .recv_timeout(Duration::from_secs(5))
        .context("stub did not start")?;

    Ok(StubGuard {
        base_url: format!("http://{}", addr),
        token: state.token.clone(),
        state,
        shutdown: Some(shutdown_tx),
        handle: Some(handle),
    })
}

/// 23 posts so limit=10 gives three pages, plus a handful of each other
/// resource. Everything is deterministic.
fn seed(state: &StubState) {
    let mut posts = state.posts.lock().unwrap();
    for i in 1..=23u32 {
        let status = if i % 3 == 0 { "draft" } else { "published" };
        posts.push(json!({
            "id": format!("p{}", i),
            "title": format!("Post {:02}", i),
            "slug": format!("post-{:02}", i),
            "excerpt": format!("Excerpt for post {:02}", i),
            "content": "body",
            "coverUrl": null,
            "tags": if i % 5 == 0 { json!(["launch"]) } else { json!(["news"]) },
            "status": status,
            "featured": i % 7 == 0,
            "createdAt": format!("2026-01-{:02}T10:00:00Z", (i % 28) + 1),
            "updatedAt": null,
        }));
    }
    drop(posts);

    let mut stories = state.stories.lock().unwrap();
    for i in 1..=7u32 {
        stories.push(json!({
            "id": format!("s{}", i),
            "title": format!("Story {:02}", i),
            "client": format!("Client {}", i),
            "summary": "summary",
            "content": "body",
            "coverUrl": null,
            "status": if i % 2 == 0 { "published" } else { "draft" },
            "featured": i == 1,
            "createdAt": format!("2026-02-{:02}T09:00:00Z", i),
        }));
    }
    drop(stories);

    let mut subscribers = state.subscribers.lock().unwrap();
    for i in 1..=9u32 {
        subscribers.push(json!({
            "id": format!("sub{}", i),
            "email": format!("reader{}@example.com", i),
            "name": if i % 2 == 0 { json!(format!("Reader {}", i)) } else { json!(null) },
            "status": if i % 4 == 0 { "unsubscribed" } else { "subscribed" },
            "createdAt": format!("2026-03-{:02}T08:00:00Z", i),
        }));
    }
    drop(subscribers);

    let mut submissions = state.submissions.lock().unwrap();
    for i in 1..=5u32 {
        submissions.push(json!({
            "id": format!("f{}", i),
            "formName": if i % 2 == 0 { "contact" } else { "quote" },
            "name": format!("Visitor {}", i),
            "email": format!("visitor{}@example.com", i),
            "message": format!("message {}", i),
            "createdAt": format!("2026-04-{:02}T07:00:00Z", i),
        }));
    }
    drop(submissions);

    let mut team = state.team.lock().unwrap();
    for i in 1..=4u32 {
        team.push(json!({
            "id": format!("t{}", i),
            "name": format!("Member {}", i),
            "role": if i % 2 == 0 { "editor" } else { "writer" },
            "photoUrl": null,
            "bio": "bio",
            "createdAt": format!("2026-05-{:02}T06:00:00Z", i),
        }));
    }
}

fn check_auth(state: &StubState, headers: &HeaderMap) -> Result<(), Response> {
    let ok = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", state.token));
    if ok {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "unauthorized"})),
        )
            .into_response())
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response()
}

fn row_matches(row: &Value, params: &HashMap<String, String>) -> bool {
    if let Some(search) = params.get("search") {
        let needle = search.to_lowercase();
        let hay = ["title", "name", "email"]
            .iter()
            .filter_map(|k| row.get(*k).and_then(Value::as_str))
            .map(str::to_lowercase)
            .collect::<Vec<_>>();
        if !hay.iter().any(|h| h.contains(&needle)) {
            return false;
        }
    }
    for key in ["status", "tag", "featured", "formName", "role"] {
        let Some(want) = params.get(key) else { continue };
        let hit = match key {
            "tag" => row
                .get("tags")
                .and_then(Value::as_array)
                .is_some_and(|tags| tags.iter().any(|t| t.as_str() == Some(want))),
            "featured" => row
                .get("featured")
                .and_then(Value::as_bool)
                .is_some_and(|b| b.to_string() == *want),
            other => row.get(other).and_then(Value::as_str) == Some(want),
        };
        if !hit {
            return false;
        }
    }
    true
}

async fn list_resource(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let Some(rows) = state.rows(&resource) else {
        return not_found();
    };

    state.list_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = Some(params.clone());

    if state.fail_next_list.swap(false, Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "stub induced failure"})),
        )
            .into_response();
    }

    let page: u64 = params
        .get("page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);
    let limit: u64 = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    let rows = rows.lock().unwrap();
    let matched: Vec<&Value> = rows.iter().filter(|r| row_matches(r, &params)).collect();
    let total = matched.len() as u64;
    let start = (page.saturating_sub(1) * limit) as usize;
    let items: Vec<Value> = matched
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();

    // The flags below are lies on purpose; a correct client ignores them.
    Json(json!({
        "items": items,
        "total": total,
        "page": page,
        "totalPages": 999,
        "hasNextPage": true,
        "hasPrevPage": true,
    }))
    .into_response()
}

async fn create_resource(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(resource): Path<String>,
    Json(input): Json<Value>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let Some(rows) = state.rows(&resource) else {
        return not_found();
    };

    let id = format!(
        "{}-{}",
        &resource[..1],
        state.next_id.fetch_add(1, Ordering::SeqCst)
    );
    let mut row = input;
    if let Some(obj) = row.as_object_mut() {
        obj.insert("id".to_string(), json!(id));
        obj.insert("createdAt".to_string(), json!("2026-06-01T12:00:00Z"));
    }
    rows.lock().unwrap().push(row.clone());
    Json(row).into_response()
}

async fn update_resource(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path((resource, id)): Path<(String, String)>,
    Json(input): Json<Value>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let Some(rows) = state.rows(&resource) else {
        return not_found();
    };

    let mut rows = rows.lock().unwrap();
    let Some(row) = rows
        .iter_mut()
        .find(|r| r.get("id").and_then(Value::as_str) == Some(id.as_str()))
    else {
        return not_found();
    };

    if let (Some(obj), Some(patch)) = (row.as_object_mut(), input.as_object()) {
        for (k, v) in patch {
            obj.insert(k.clone(), v.clone());
        }
        obj.insert("id".to_string(), json!(id));
        obj.insert("updatedAt".to_string(), json!("2026-06-02T12:00:00Z"));
    }
    Json(row.clone()).into_response()
}

async fn delete_resource(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let Some(rows) = state.rows(&resource) else {
        return not_found();
    };

    let mut rows = rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|r| r.get("id").and_then(Value::as_str) != Some(id.as_str()));
    if rows.len() == before {
        return not_found();
    }
    Json(json!({"ok": true})).into_response()
}

async fn export_subscribers(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let rows = state.subscribers.lock().unwrap();
    match params.get("format").map(String::as_str) {
        Some("json") => Json(Value::Array(rows.clone())).into_response(),
        _ => {
            let mut out = String::from("email,name,status\n");
            for r in rows.iter() {
                out.push_str(&format!(
                    "{},{},{}\n",
                    r.get("email").and_then(Value::as_str).unwrap_or(""),
                    r.get("name").and_then(Value::as_str).unwrap_or(""),
                    r.get("status").and_then(Value::as_str).unwrap_or(""),
                ));
            }
            out.into_response()
        }
    }
}
