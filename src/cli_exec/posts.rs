use anyhow::{Context, Result};

use sitbox::listing::{ListPage, ListQuery};
use sitbox::model::PostInput;
use sitbox::store::LocalStore;
use sitbox::validate::validate_post;

use crate::PostCommands;

pub(super) fn handle(store: &LocalStore, command: PostCommands) -> Result<()> {
    let client = super::api_client(store)?;

    match command {
        PostCommands::List {
            search,
            status,
            featured,
            tag,
            page,
            limit,
            json,
        } => {
            let mut query = ListQuery::first_page(limit);
            query.search = search.unwrap_or_default();
            if let Some(status) = status.as_deref() {
                query.set_filter("status", status);
            }
            if let Some(featured) = featured {
                query.set_filter("featured", if featured { "true" } else { "false" });
            }
            if let Some(tag) = tag.as_deref() {
                query.set_filter("tag", tag);
            }
            query.page = page;

            let envelope = client.list_posts(&query)?;
            let results =
                ListPage::compute(envelope.items, envelope.total, query.page, query.page_size);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&results).context("serialize post list json")?
                );
            } else {
                if results.items.is_empty() {
                    println!("(no posts)");
                }
                for p in &results.items {
                    let featured = if p.featured { " featured" } else { "" };
                    println!("{} {} {} {}{}", p.id, p.status.as_str(), p.slug, p.title, featured);
                }
                println!(
                    "page {}/{} ({} total)",
                    query.page, results.total_pages, results.total
                );
            }
        }

        PostCommands::Create {
            title,
            slug,
            excerpt,
            content,
            cover_url,
            tags,
            status,
            featured,
            json,
        } => {
            let input = PostInput {
                title,
                slug,
                excerpt,
                content,
                cover_url,
                tags: super::split_tags(tags),
                status: super::parse_status(&status)?,
                featured,
            };
            super::ensure_valid(validate_post(&input))?;
            let created = client.create_post(&input)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&created).context("serialize post create json")?
                );
            } else {
                println!("Created post {}", created.id);
            }
        }

        PostCommands::Update {
            id,
            title,
            slug,
            excerpt,
            content,
            cover_url,
            tags,
            status,
            featured,
            json,
        } => {
            let input = PostInput {
                title,
                slug,
                excerpt,
                content,
                cover_url,
                tags: super::split_tags(tags),
                status: super::parse_status(&status)?,
                featured,
            };
            super::ensure_valid(validate_post(&input))?;
            let updated = client.update_post(&id, &input)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&updated).context("serialize post update json")?
                );
            } else {
                println!("Updated post {}", updated.id);
            }
        }

        PostCommands::Delete { id, json } => {
            client.delete_post(&id)?;
            if json {
                println!("{}", serde_json::json!({"deleted": true, "id": id}));
            } else {
                println!("Deleted post {}", id);
            }
        }
    }

    Ok(())
}
