//! Field constraints shared by create and update paths

use super::entity::{DomainError, DomainResult};

pub const COLUMN_TITLE_MAX: usize = 50;
pub const CARD_TITLE_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 1000;

fn validate_title(title: &str, what: &str, max: usize) -> DomainResult<String> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("{} title is required", what)));
    }
    if title.chars().count() > max {
        return Err(DomainError::InvalidInput(format!(
            "{} title must be at most {} characters",
            what, max
        )));
    }
    Ok(title.trim().to_string())
}

/// Returns the trimmed title
pub fn validate_column_title(title: &str) -> DomainResult<String> {
    validate_title(title, "Column", COLUMN_TITLE_MAX)
}

/// Returns the trimmed title
pub fn validate_card_title(title: &str) -> DomainResult<String> {
    validate_title(title, "Card", CARD_TITLE_MAX)
}

pub fn validate_description(description: &str) -> DomainResult<()> {
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(DomainError::InvalidInput(format!(
            "Card description must be at most {} characters",
            DESCRIPTION_MAX
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_trimmed() {
        assert_eq!(validate_column_title("  Backlog ").unwrap(), "Backlog");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(validate_card_title("   ").is_err());
        assert!(validate_column_title("").is_err());
    }

    #[test]
    fn test_length_limits_count_characters() {
        assert!(validate_column_title(&"a".repeat(50)).is_ok());
        assert!(validate_column_title(&"a".repeat(51)).is_err());
        // multi-byte characters count once
        assert!(validate_card_title(&"한".repeat(100)).is_ok());
        assert!(validate_card_title(&"x".repeat(101)).is_err());
        assert!(validate_description(&"d".repeat(1000)).is_ok());
        assert!(validate_description(&"d".repeat(1001)).is_err());
    }
}
