use super::{open_store, print_json};
use crate::classify::classify_item;
use crate::cli::{AiArgs, Context, OutputFormat};
use crate::error::AppError;
use crate::store::{Item, ItemKind, ItemStore, NewItem};
use colored::Colorize;

pub fn list(ctx: &Context, kind: Option<ItemKind>) -> Result<(), AppError> {
    let store = open_store(ctx)?;
    let items = store.list(kind)?;

    if ctx.format == OutputFormat::Json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("No items");
        return Ok(());
    }
    for item in &items {
        print_item(item);
    }
    Ok(())
}

pub fn add(
    ctx: &Context,
    kind: ItemKind,
    title: String,
    description: Option<String>,
    categorize: bool,
    ai: &AiArgs,
) -> Result<(), AppError> {
    let store = open_store(ctx)?;
    let mut item = store.insert(NewItem {
        kind,
        title,
        description,
    })?;

    if categorize {
        let generator = ctx.generator(ai);
        let classification = classify_item(&item.classifiable(), generator.as_deref());
        item = store.set_category(&item.id, classification.category)?;
    }

    if ctx.format == OutputFormat::Json {
        return print_json(&item);
    }
    print!("{} ", "Added".green());
    print_item(&item);
    Ok(())
}

fn print_item(item: &Item) {
    let category = item
        .category
        .map_or_else(|| "uncategorized".dimmed(), |c| c.as_str().cyan());
    println!(
        "{} {:<8} {} [{category}]",
        item.id.dimmed(),
        item.kind.as_str(),
        item.title
    );
}
