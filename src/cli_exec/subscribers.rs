use std::path::PathBuf;

use anyhow::{Context, Result};

use sitbox::export::{ExportFormat, write_export};
use sitbox::listing::{ListPage, ListQuery};
use sitbox::store::LocalStore;

use crate::SubscriberCommands;

pub(super) fn handle(store: &LocalStore, command: SubscriberCommands) -> Result<()> {
    let client = super::api_client(store)?;

    match command {
        SubscriberCommands::List {
            search,
            status,
            page,
            limit,
            json,
        } => {
            let mut query = ListQuery::first_page(limit);
            query.search = search.unwrap_or_default();
            if let Some(status) = status.as_deref() {
                query.set_filter("status", status);
            }
            query.page = page;

            let envelope = client.list_subscribers(&query)?;
            let results =
                ListPage::compute(envelope.items, envelope.total, query.page, query.page_size);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&results)
                        .context("serialize subscriber list json")?
                );
            } else {
                if results.items.is_empty() {
                    println!("(no subscribers)");
                }
                for s in &results.items {
                    let name = s.name.as_deref().unwrap_or("");
                    println!("{} {} {} {}", s.id, s.status.as_str(), s.email, name);
                }
                println!(
                    "page {}/{} ({} total)",
                    query.page, results.total_pages, results.total
                );
            }
        }

        SubscriberCommands::Export {
            format,
            out_dir,
            json,
        } => {
            let format = ExportFormat::parse(&format)?;
            let bytes = client.export_subscribers(format)?;
            let dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
            let path = write_export(&dir, format, &bytes)?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "path": path.display().to_string(),
                        "bytes": bytes.len(),
                    })
                );
            } else {
                println!("Wrote {} ({} bytes)", path.display(), bytes.len());
            }
        }

        SubscriberCommands::Delete { id, json } => {
            client.delete_subscriber(&id)?;
            if json {
                println!("{}", serde_json::json!({"deleted": true, "id": id}));
            } else {
                println!("Deleted subscriber {}", id);
            }
        }
    }

    Ok(())
}
