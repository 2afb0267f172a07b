use anyhow::{Context, Result};

use sitbox::listing::{ListPage, ListQuery};
use sitbox::model::StoryInput;
use sitbox::store::LocalStore;
use sitbox::validate::validate_story;

use crate::StoryCommands;

pub(super) fn handle(store: &LocalStore, command: StoryCommands) -> Result<()> {
    let client = super::api_client(store)?;

    match command {
        StoryCommands::List {
            search,
            status,
            featured,
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
            query.page = page;

            let envelope = client.list_stories(&query)?;
            let results =
                ListPage::compute(envelope.items, envelope.total, query.page, query.page_size);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&results).context("serialize story list json")?
                );
            } else {
                if results.items.is_empty() {
                    println!("(no stories)");
                }
                for s in &results.items {
                    let featured = if s.featured { " featured" } else { "" };
                    println!(
                        "{} {} {} ({}){}",
                        s.id,
                        s.status.as_str(),
                        s.title,
                        s.client,
                        featured
                    );
                }
                println!(
                    "page {}/{} ({} total)",
                    query.page, results.total_pages, results.total
                );
            }
        }

        StoryCommands::Create {
            title,
            client: client_name,
            summary,
            content,
            cover_url,
            status,
            featured,
            json,
        } => {
            let input = StoryInput {
                title,
                client: client_name,
                summary,
                content,
                cover_url,
                status: super::parse_status(&status)?,
                featured,
            };
            super::ensure_valid(validate_story(&input))?;
            let created = client.create_story(&input)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&created).context("serialize story create json")?
                );
            } else {
                println!("Created story {}", created.id);
            }
        }

        StoryCommands::Update {
            id,
            title,
            client: client_name,
            summary,
            content,
            cover_url,
            status,
            featured,
            json,
        } => {
            let input = StoryInput {
                title,
                client: client_name,
                summary,
                content,
                cover_url,
                status: super::parse_status(&status)?,
                featured,
            };
            super::ensure_valid(validate_story(&input))?;
            let updated = client.update_story(&id, &input)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&updated).context("serialize story update json")?
                );
            } else {
                println!("Updated story {}", updated.id);
            }
        }

        StoryCommands::Delete { id, json } => {
            client.delete_story(&id)?;
            if json {
                println!("{}", serde_json::json!({"deleted": true, "id": id}));
            } else {
                println!("Deleted story {}", id);
            }
        }
    }

    Ok(())
}
