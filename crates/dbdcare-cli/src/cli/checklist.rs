use crate::cli::Context;
use crate::cli::opt::Checklist;
use anyhow::{Result, anyhow};
use dbdcare_core::checklist::{ChecklistProgress, default_items};
use dbdcare_model::checklist::ChecklistItem;
use std::error::Error;

/// The remote list, or the built-in one when the server has none or is unreachable.
async fn load_items(context: &Context) -> Vec<ChecklistItem> {
    match context.client.checklist().await {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => default_items(),
        Err(error) => {
            tracing::warn!(error = &error as &dyn Error, "failed to fetch checklist, using the built-in list");
            default_items()
        }
    }
}

/// Accepts a 1-based position in the list or an item id.
fn resolve<'a>(items: &'a [ChecklistItem], item: &str) -> Option<&'a ChecklistItem> {
    if let Ok(position) = item.parse::<usize>() {
        return position.checked_sub(1).and_then(|index| items.get(index));
    }
    items.iter().find(|candidate| candidate.id == item)
}

fn print_progress(items: &[ChecklistItem], progress: &ChecklistProgress) {
    for (index, item) in items.iter().enumerate() {
        let mark = if progress.is_checked(&item.id) { "x" } else { " " };
        println!("{:>2}. [{mark}] {} ({}, {})", index + 1, item.title, item.category, item.frequency);
    }
    println!(
        "{}/{} selesai ({}%)",
        progress.completed_count(),
        progress.total(),
        progress.rounded_percentage()
    );
}

pub(crate) async fn run(mut context: Context, command: Checklist) -> Result<()> {
    let items = load_items(&context).await;
    let mut progress = ChecklistProgress::merge(&items, &context.state.checklist().await);
    context.state.set_checklist(&progress).await?;

    match command {
        Checklist::List => {}
        Checklist::Toggle { item } => {
            let item = resolve(&items, &item).ok_or_else(|| anyhow!("Unknown checklist item {item}"))?;
            let celebration = progress.toggle(&item.id)?;
            context.state.set_checklist(&progress).await?;
            if let Some(celebration) = celebration {
                tracing::debug!(duration = ?celebration.duration, "checklist completed");
                println!("Selamat! Semua langkah pencegahan DBD sudah dilakukan.");
            }
        }
        Checklist::Reset { yes } => {
            if !yes && !context.prompter.confirm("Reset semua checklist?")? {
                println!("Dibatalkan");
                return Ok(());
            }
            progress.reset();
            context.state.set_checklist(&progress).await?;
        }
    }

    print_progress(&items, &progress);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_position_or_id() {
        let items = default_items();
        assert_eq!(resolve(&items, "1").map(|i| &i.id), Some(&items[0].id));
        assert_eq!(resolve(&items, &items[2].id).map(|i| &i.id), Some(&items[2].id));
        assert!(resolve(&items, "0").is_none());
        assert!(resolve(&items, &(items.len() + 1).to_string()).is_none());
        assert!(resolve(&items, "tidak-ada").is_none());
    }
}
