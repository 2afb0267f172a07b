mod common;

use std::time::{Duration, Instant};

use anyhow::Result;

use sitbox::listing::{ADMIN_PAGE_SIZE, ListController, ListOps, SEARCH_DEBOUNCE};
use sitbox::model::Post;
use sitbox::remote::ApiClient;

fn run_fetch(
    list: &mut ListController<Post>,
    client: &ApiClient,
    spec: sitbox::listing::FetchSpec,
) -> bool {
    let outcome = client
        .list_posts(&spec.query)
        .map_err(|err| format!("{:#}", err));
    list.commit(spec.seq, outcome)
}

#[test]
fn search_waits_for_the_debounce_then_fetches_page_one() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;
    let mut list = ListController::<Post>::new(ADMIN_PAGE_SIZE);

    // Land on page 2 first so the search visibly resets it.
    let spec = list.refresh();
    assert!(run_fetch(&mut list, &client, spec));
    let spec = list.next_page().expect("page 2 exists");
    assert!(run_fetch(&mut list, &client, spec));
    assert_eq!(list.page(), 2);

    let typed_at = Instant::now();
    list.set_search("Post 03", typed_at);
    assert!(list.search_pending());
    assert!(list.poll(typed_at).is_none(), "debounce fired immediately");
    assert!(
        list.poll(typed_at + Duration::from_millis(100)).is_none(),
        "debounce fired early"
    );
    assert_eq!(stub.state.hits(), 2, "a request went out before the pause");

    let spec = list
        .poll(typed_at + SEARCH_DEBOUNCE)
        .expect("debounce elapsed");
    assert_eq!(spec.query.page, 1);
    assert_eq!(spec.query.search, "Post 03");
    assert!(run_fetch(&mut list, &client, spec));

    assert_eq!(list.page(), 1);
    assert_eq!(list.total(), 1);
    assert_eq!(list.items()[0].title, "Post 03");
    assert!(!list.search_pending());
    assert!(list.poll(typed_at + Duration::from_secs(5)).is_none());
    Ok(())
}

#[test]
fn retyping_restarts_the_debounce_window() {
    let mut list = ListController::<Post>::new(ADMIN_PAGE_SIZE);
    let start = Instant::now();

    list.set_search("po", start);
    list.set_search("post", start + Duration::from_millis(250));

    // 300ms after the first keystroke, but only 50ms after the last one.
    assert!(list.poll(start + SEARCH_DEBOUNCE).is_none());
    let spec = list
        .poll(start + Duration::from_millis(250) + SEARCH_DEBOUNCE)
        .expect("quiet period elapsed");
    assert_eq!(spec.query.search, "post");
}

#[test]
fn filter_change_fetches_immediately_and_disarms_the_search() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;
    let mut list = ListController::<Post>::new(ADMIN_PAGE_SIZE);

    list.set_search("dra", Instant::now());
    let spec = list.set_filter("status", "draft");
    assert_eq!(spec.query.page, 1);
    assert!(run_fetch(&mut list, &client, spec));

    // Every third seeded post is a draft.
    assert_eq!(list.total(), 7);
    assert_eq!(list.filter("status"), Some("draft"));
    assert!(
        list.poll(Instant::now() + Duration::from_secs(2)).is_none(),
        "stale search fired after an explicit filter fetch"
    );
    Ok(())
}

#[test]
fn stale_completion_is_discarded_wholesale() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;
    let mut list = ListController::<Post>::new(ADMIN_PAGE_SIZE);

    let old_spec = list.refresh();
    let new_spec = list.set_filter("status", "draft");

    // The newer, filtered request lands first.
    assert!(run_fetch(&mut list, &client, new_spec));
    assert_eq!(list.total(), 7);
    assert!(!list.loading());

    // The superseded unfiltered one arrives late and must change nothing.
    let outcome = client
        .list_posts(&old_spec.query)
        .map_err(|err| format!("{:#}", err));
    assert!(!list.commit(old_spec.seq, outcome));
    assert_eq!(list.total(), 7);
    assert_eq!(list.len(), 7);
    assert!(!list.loading());
    assert!(list.error().is_none());
    Ok(())
}

#[test]
fn pagination_is_recomputed_from_totals_not_server_flags() -> Result<()> {
    // The stub reports totalPages 999 and hasNextPage true on every page.
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;
    let mut list = ListController::<Post>::new(ADMIN_PAGE_SIZE);

    let spec = list.refresh();
    assert!(run_fetch(&mut list, &client, spec));
    assert_eq!(list.total_pages(), 3);
    assert!(list.has_next());
    assert!(!list.has_prev());

    assert!(list.go_to_page(0).is_none());
    assert!(list.go_to_page(4).is_none());

    let spec = list.go_to_page(3).expect("last page is reachable");
    assert!(run_fetch(&mut list, &client, spec));
    assert_eq!(list.page(), 3);
    assert_eq!(list.len(), 3);
    assert!(!list.has_next());
    assert!(list.has_prev());
    assert!(list.next_page().is_none());
    Ok(())
}

#[test]
fn page_moves_are_ignored_while_a_fetch_is_in_flight() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;
    let mut list = ListController::<Post>::new(ADMIN_PAGE_SIZE);

    let spec = list.refresh();
    assert!(run_fetch(&mut list, &client, spec));

    let inflight = list.next_page().expect("page 2 exists");
    assert!(list.loading());
    assert!(list.go_to_page(3).is_none(), "page jump during a fetch");
    assert!(list.next_page().is_none());
    assert!(list.prev_page().is_none());

    // Refresh stays allowed while loading and supersedes the page move's
    // response while keeping its query (still page 2).
    let refreshed = list.refresh();
    assert!(run_fetch(&mut list, &client, refreshed));
    assert!(!run_fetch(&mut list, &client, inflight));
    assert_eq!(list.page(), 2);
    assert_eq!(list.len(), 10);
    Ok(())
}

#[test]
fn failed_fetch_keeps_the_error_until_the_user_retries() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;
    let mut list = ListController::<Post>::new(ADMIN_PAGE_SIZE);

    let spec = list.refresh();
    assert!(run_fetch(&mut list, &client, spec));
    assert_eq!(list.len(), 10);

    stub.state.fail_next_list();
    let spec = list.refresh();
    assert!(run_fetch(&mut list, &client, spec));
    assert!(list.error().expect("error recorded").contains("stub induced failure"));
    assert!(list.is_empty(), "stale rows survived a failed fetch");
    assert!(!list.loading());

    let hits_before_wait = stub.state.hits();
    assert!(list.poll(Instant::now() + Duration::from_secs(30)).is_none());
    assert_eq!(stub.state.hits(), hits_before_wait, "something auto-retried");

    // An explicit refresh is the only way back.
    let spec = list.refresh();
    assert!(run_fetch(&mut list, &client, spec));
    assert!(list.error().is_none());
    assert_eq!(list.len(), 10);
    Ok(())
}
