//! `shortcut-wall site|folder add|update|remove|list`.

use anyhow::Result;
use wall_core::listing::{Listing, SortMode, ViewState};
use wall_core::{NewRecord, RecordKind, RecordPatch, RecordStore};

pub async fn run_add(
    store: &RecordStore,
    kind: RecordKind,
    name: String,
    target: String,
    description: Option<String>,
    image_url: Option<String>,
) -> Result<()> {
    let record = store
        .create(
            kind,
            NewRecord {
                name,
                target,
                description,
                image_url,
            },
        )
        .await?;
    println!("Added {} {} ({})", kind, record.id, record.name);
    Ok(())
}

pub async fn run_update(
    store: &RecordStore,
    kind: RecordKind,
    id: &str,
    name: Option<String>,
    target: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
) -> Result<()> {
    let patch = RecordPatch {
        name,
        target,
        description,
        image_url,
    };
    let record = store.update(kind, id, patch).await?;
    println!("Updated {} {} ({})", kind, record.id, record.name);
    Ok(())
}

pub async fn run_remove(store: &RecordStore, kind: RecordKind, id: &str) -> Result<()> {
    let removed = store.delete(kind, id).await?;
    println!("Removed {} {} ({})", kind, removed.id, removed.name);
    Ok(())
}

pub async fn run_list(store: &RecordStore, kind: RecordKind, sort: SortMode, search: &str) -> Result<()> {
    let records = store.list(kind).await?;
    let mut listing = Listing::new(records, ViewState::default());
    listing.set_sort(sort);
    listing.set_term(search);

    let mut shown = listing.visible().peekable();
    if shown.peek().is_none() {
        println!("No {}s found.", kind);
        return Ok(());
    }
    println!("{:<36} {:<24} {:<24} {}", "ID", "CREATED", "NAME", "TARGET");
    for r in shown {
        println!("{:<36} {:<24} {:<24} {}", r.id, r.created_at, r.name, r.target);
    }
    Ok(())
}
