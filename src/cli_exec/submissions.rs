use anyhow::{Context, Result};

use sitbox::listing::{ListPage, ListQuery};
use sitbox::store::LocalStore;

use crate::SubmissionCommands;

pub(super) fn handle(store: &LocalStore, command: SubmissionCommands) -> Result<()> {
    let client = super::api_client(store)?;

    match command {
        SubmissionCommands::List {
            search,
            form_name,
            page,
            limit,
            json,
        } => {
            let mut query = ListQuery::first_page(limit);
            query.search = search.unwrap_or_default();
            if let Some(form_name) = form_name.as_deref() {
                query.set_filter("formName", form_name);
            }
            query.page = page;

            let envelope = client.list_submissions(&query)?;
            let results =
                ListPage::compute(envelope.items, envelope.total, query.page, query.page_size);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&results)
                        .context("serialize submission list json")?
                );
            } else {
                if results.items.is_empty() {
                    println!("(no submissions)");
                }
                for s in &results.items {
                    println!("{} {} {} {}", s.id, s.form_name, s.email, s.name);
                }
                println!(
                    "page {}/{} ({} total)",
                    query.page, results.total_pages, results.total
                );
            }
        }

        SubmissionCommands::Delete { id, json } => {
            client.delete_submission(&id)?;
            if json {
                println!("{}", serde_json::json!({"deleted": true, "id": id}));
            } else {
                println!("Deleted submission {}", id);
            }
        }
    }

    Ok(())
}
