use super::category::Category;
use super::prompt::build_category_prompt;
use super::ClassifyError;
use crate::ai::TextGenerator;

/// Characters a model tends to wrap a one-word answer in.
const WRAPPING_CHARS: &[char] = &['`', '"', '\'', '*', '.', ',', ':', ';', '!'];

/// Parse a model response that should be a single category id.
///
/// Only the first non-empty line is considered. Labels outside the closed
/// category set are rejected rather than coerced.
pub fn parse_category_response(output: &str) -> Result<Category, ClassifyError> {
    let line = output
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or(ClassifyError::EmptyResponse)?;

    let label = line.trim_matches(|c: char| WRAPPING_CHARS.contains(&c) || c.is_whitespace());
    if label.is_empty() {
        return Err(ClassifyError::EmptyResponse);
    }

    label
        .parse::<Category>()
        .map_err(|e| ClassifyError::InvalidLabel(e.0))
}

/// Ask the text generator for a category.
pub fn classify_with_ai(
    generator: &dyn TextGenerator,
    title: &str,
    description: Option<&str>,
) -> Result<Category, ClassifyError> {
    let prompt = build_category_prompt(title, description);
    let output = generator.generate(&prompt)?;
    parse_category_response(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_label() {
        assert_eq!(parse_category_response("health").unwrap(), Category::Health);
    }

    #[test]
    fn test_parse_wrapped_label() {
        assert_eq!(
            parse_category_response("  `business_growth`.\n").unwrap(),
            Category::BusinessGrowth
        );
        assert_eq!(parse_category_response("\"Fires\"").unwrap(), Category::Fires);
        assert_eq!(parse_category_response("**job**").unwrap(), Category::Job);
    }

    #[test]
    fn test_parse_uses_first_non_empty_line() {
        let output = "\n\nsave_money\nBecause it mentions debt.";
        assert_eq!(parse_category_response(output).unwrap(), Category::SaveMoney);
    }

    #[test]
    fn test_parse_rejects_out_of_taxonomy_label() {
        let err = parse_category_response("wellness").unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidLabel(label) if label == "wellness"));
    }

    #[test]
    fn test_parse_rejects_sentences() {
        let err = parse_category_response("The category is health").unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidLabel(_)));
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(matches!(
            parse_category_response("   \n  "),
            Err(ClassifyError::EmptyResponse)
        ));
        assert!(matches!(
            parse_category_response("``"),
            Err(ClassifyError::EmptyResponse)
        ));
    }
}
