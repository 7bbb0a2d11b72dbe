use super::{open_store, print_json};
use crate::classify::ClassifyMethod;
use crate::cli::{AiArgs, Context, OutputFormat};
use crate::error::AppError;
use crate::store::{categorize_all, CategorizeOptions, ItemKind};
use colored::Colorize;

pub fn run(
    ctx: &Context,
    kind: Option<ItemKind>,
    only_uncategorized: bool,
    concurrency: Option<usize>,
    ai: &AiArgs,
) -> Result<(), AppError> {
    let store = open_store(ctx)?;
    let generator = ctx.generator(ai);
    let options = CategorizeOptions {
        kind,
        only_uncategorized,
        max_concurrent: concurrency.unwrap_or(ctx.config.classifier.max_concurrent),
        timeout_secs: ctx.config.classifier.timeout_secs,
    };

    if ctx.format == OutputFormat::Text && generator.is_some() {
        println!("Categorizing with AI (falls back to keyword rules)...");
    }

    let rt = tokio::runtime::Runtime::new()?;
    let summary = rt.block_on(categorize_all(&store, generator, &options))?;

    if ctx.format == OutputFormat::Json {
        return print_json(&summary);
    }

    for result in &summary.results {
        let changed = result.previous != Some(result.category);
        let marker = if changed { "*".yellow() } else { " ".normal() };
        println!(
            "{marker} {} {} {}",
            result.id.dimmed(),
            result.title,
            format!("[{}]", result.category).cyan()
        );
    }

    let ai_count = summary.by_method.get(&ClassifyMethod::Ai).copied().unwrap_or(0);
    let rule_count = summary
        .by_method
        .get(&ClassifyMethod::RuleBased)
        .copied()
        .unwrap_or(0);
    println!();
    println!(
        "{} Categorized {} item(s), {} updated ({} ai, {} rules)",
        "✓".green(),
        summary.total,
        summary.updated,
        ai_count,
        rule_count
    );

    Ok(())
}
