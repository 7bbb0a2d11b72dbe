use super::print_json;
use crate::classify::{classify_item, match_static, ClassifiableItem, ClassifyMethod};
use crate::cli::{AiArgs, Context, OutputFormat};
use crate::error::AppError;
use colored::Colorize;

pub fn run(
    ctx: &Context,
    title: &str,
    description: Option<&str>,
    explain: bool,
    ai: &AiArgs,
) -> Result<(), AppError> {
    let item = ClassifiableItem::new(title, description.map(str::to_owned));
    let generator = ctx.generator(ai);
    let result = classify_item(&item, generator.as_deref());

    let keyword = if result.method == ClassifyMethod::RuleBased {
        match_static(title, description).keyword
    } else {
        None
    };

    if ctx.format == OutputFormat::Json {
        let mut output = serde_json::to_value(result)?;
        if explain {
            output["keyword"] = serde_json::json!(keyword);
        }
        return print_json(&output);
    }

    let method = match result.method {
        ClassifyMethod::Ai => "ai",
        ClassifyMethod::RuleBased => "rules",
    };
    println!(
        "{} {}",
        result.category.as_str().green().bold(),
        format!("({method})").dimmed()
    );
    if explain {
        match keyword {
            Some(k) => println!("  matched keyword: {}", format!("\"{k}\"").cyan()),
            None if result.method == ClassifyMethod::RuleBased => {
                println!("  {}", "no keyword matched".dimmed());
            }
            None => {}
        }
    }

    Ok(())
}
