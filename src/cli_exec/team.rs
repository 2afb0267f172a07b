use anyhow::{Context, Result};

use sitbox::listing::{ListPage, ListQuery};
use sitbox::model::TeamMemberInput;
use sitbox::store::LocalStore;
use sitbox::validate::validate_team_member;

use crate::TeamCommands;

pub(super) fn handle(store: &LocalStore, command: TeamCommands) -> Result<()> {
    let client = super::api_client(store)?;

    match command {
        TeamCommands::List {
            search,
            role,
            page,
            limit,
            json,
        } => {
            let mut query = ListQuery::first_page(limit);
            query.search = search.unwrap_or_default();
            if let Some(role) = role.as_deref() {
                query.set_filter("role", role);
            }
            query.page = page;

            let envelope = client.list_team(&query)?;
            let results =
                ListPage::compute(envelope.items, envelope.total, query.page, query.page_size);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&results).context("serialize team list json")?
                );
            } else {
                if results.items.is_empty() {
                    println!("(no team members)");
                }
                for m in &results.items {
                    println!("{} {} ({})", m.id, m.name, m.role);
                }
                println!(
                    "page {}/{} ({} total)",
                    query.page, results.total_pages, results.total
                );
            }
        }

        TeamCommands::Create {
            name,
            role,
            photo_url,
            bio,
            json,
        } => {
            let input = TeamMemberInput {
                name,
                role,
                photo_url,
                bio,
            };
            super::ensure_valid(validate_team_member(&input))?;
            let created = client.create_team_member(&input)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&created)
                        .context("serialize team create json")?
                );
            } else {
                println!("Added {} ({})", created.name, created.role);
            }
        }

        TeamCommands::Update {
            id,
            name,
            role,
            photo_url,
            bio,
            json,
        } => {
            let input = TeamMemberInput {
                name,
                role,
                photo_url,
                bio,
            };
            super::ensure_valid(validate_team_member(&input))?;
            let updated = client.update_team_member(&id, &input)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&updated)
                        .context("serialize team update json")?
                );
            } else {
                println!("Updated {} ({})", updated.name, updated.role);
            }
        }

        TeamCommands::Delete { id, json } => {
            client.delete_team_member(&id)?;
            if json {
                println!("{}", serde_json::json!({"deleted": true, "id": id}));
            } else {
                println!("Removed team member {}", id);
            }
        }
    }

    Ok(())
}
