use super::print_json;
use crate::classify::taxonomy;
use crate::cli::OutputFormat;
use crate::error::AppError;
use colored::Colorize;

pub fn run(category: Option<&str>, format: OutputFormat) -> Result<(), AppError> {
    let entries: Vec<_> = taxonomy()
        .into_iter()
        .filter(|e| match category {
            Some(c) => {
                let c = c.to_lowercase();
                e.id.as_str() == c || e.name.to_lowercase() == c
            }
            None => true,
        })
        .collect();

    if entries.is_empty() {
        return Err(AppError::invalid_input(format!(
            "Unknown category '{}'",
            category.unwrap_or_default()
        )));
    }

    if format == OutputFormat::Json {
        return print_json(&entries);
    }

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            entry.name.bold().cyan(),
            format!("[{}]", entry.id).dimmed()
        );
        println!("  {}", entry.description.dimmed());
        if !entry.keywords.is_empty() {
            println!("  {}", entry.keywords.join(", ").green());
        }
    }

    Ok(())
}
