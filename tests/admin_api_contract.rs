mod common;

use anyhow::Result;

use sitbox::listing::{ADMIN_PAGE_SIZE, ListQuery};
use sitbox::model::{PostInput, PublishStatus};
use sitbox::remote::ApiClient;

#[test]
fn list_endpoints_speak_the_admin_envelope() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;

    let page = client.list_posts(&ListQuery::first_page(ADMIN_PAGE_SIZE))?;
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total, 23);
    assert_eq!(page.page, 1);
    assert_eq!(page.items[0].title, "Post 01");

    assert_eq!(client.list_stories(&ListQuery::first_page(10))?.total, 7);
    assert_eq!(client.list_subscribers(&ListQuery::first_page(10))?.total, 9);
    assert_eq!(client.list_submissions(&ListQuery::first_page(10))?.total, 5);
    assert_eq!(client.list_team(&ListQuery::first_page(10))?.total, 4);
    Ok(())
}

#[test]
fn search_is_trimmed_and_sentinel_filters_stay_home() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;

    let mut query = ListQuery::first_page(ADMIN_PAGE_SIZE);
    query.search = "  Post 03  ".to_string();
    query.set_filter("status", "all");
    query.set_filter("tag", "");
    client.list_posts(&query)?;

    let sent = stub.state.take_last_query().expect("list request recorded");
    assert_eq!(sent.get("search").map(String::as_str), Some("Post 03"));
    assert_eq!(sent.get("page").map(String::as_str), Some("1"));
    assert_eq!(sent.get("limit").map(String::as_str), Some("10"));
    assert!(!sent.contains_key("status"), "sentinel status was sent");
    assert!(!sent.contains_key("tag"), "empty tag was sent");

    // A concrete filter value does go out.
    query.set_filter("status", "draft");
    client.list_posts(&query)?;
    let sent = stub.state.take_last_query().expect("second request recorded");
    assert_eq!(sent.get("status").map(String::as_str), Some("draft"));
    Ok(())
}

#[test]
fn wrong_token_reads_as_unauthorized() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), "bogus".to_string())?;

    let err = client
        .list_posts(&ListQuery::first_page(ADMIN_PAGE_SIZE))
        .expect_err("stub accepted a bad token");
    assert!(format!("{:#}", err).contains("unauthorized"));
    Ok(())
}

#[test]
fn post_create_update_delete_round_trip() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;

    let input = PostInput {
        title: "Fresh announcement".to_string(),
        slug: "fresh-announcement".to_string(),
        excerpt: "short".to_string(),
        content: "long body".to_string(),
        cover_url: None,
        tags: vec!["news".to_string()],
        status: PublishStatus::Draft,
        featured: false,
    };
    let created = client.create_post(&input)?;
    assert_eq!(created.title, "Fresh announcement");
    assert!(!created.id.is_empty());

    let mut updated_input = input.clone();
    updated_input.status = PublishStatus::Published;
    let updated = client.update_post(&created.id, &updated_input)?;
    assert_eq!(updated.status, PublishStatus::Published);
    assert_eq!(updated.id, created.id);

    client.delete_post(&created.id)?;
    let err = client
        .delete_post(&created.id)
        .expect_err("deleting twice should 404");
    assert!(format!("{:#}", err).contains("not found"));
    Ok(())
}

#[test]
fn server_failure_surfaces_the_api_error_message() -> Result<()> {
    let stub = common::spawn_stub()?;
    let client = ApiClient::new(stub.base_url.clone(), stub.token.clone())?;

    stub.state.fail_next_list();
    let err = client
        .list_posts(&ListQuery::first_page(ADMIN_PAGE_SIZE))
        .expect_err("stub was told to fail");
    assert!(format!("{:#}", err).contains("stub induced failure"));

    // The failure is not sticky; the next request succeeds unchanged.
    assert_eq!(client.list_posts(&ListQuery::first_page(10))?.total, 23);
    Ok(())
}
