use super::category::Category;
use std::fmt::Write;

/// Build a flat list of every valid category id with its description.
fn build_taxonomy_string() -> String {
    let mut result = String::new();
    for category in Category::ALL {
        let _ = writeln!(result, "- `{}`: {}", category.as_str(), category.description());
    }
    result
}

/// Build a prompt asking for a single category id for one item.
pub fn build_category_prompt(title: &str, description: Option<&str>) -> String {
    let taxonomy = build_taxonomy_string();
    let description = description.map_or("", str::trim);

    format!(
        r#"Assign this personal goal, task or project to exactly one category.

# Valid Categories (use ONLY these exact strings)

{taxonomy}
# Rules

1. Pick the single best category for what the item is mostly about.
2. Anything urgent, broken or overdue is `fires`, whatever its subject.
3. If nothing fits, answer `other`.

# Item

Title: {title}
Description: {description}

# Response

Respond with the category id only: one word, no punctuation, no explanation."#,
        title = title.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_every_category() {
        let prompt = build_category_prompt("Run a 5k", None);
        for category in Category::ALL {
            assert!(
                prompt.contains(&format!("`{}`", category.as_str())),
                "missing {category}"
            );
        }
    }

    #[test]
    fn test_prompt_includes_item_text() {
        let prompt = build_category_prompt("  Run a 5k ", Some("before summer"));
        assert!(prompt.contains("Title: Run a 5k\n"));
        assert!(prompt.contains("Description: before summer"));
    }
}
