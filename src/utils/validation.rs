use crate::utils::error::{FormatError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn locale_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z]{2}|[-_][0-9]{3})?$")
            .expect("locale tag pattern is valid")
    })
}

/// Accepts `ll` and `ll-RR` style tags (underscore separator tolerated).
pub fn validate_locale_tag(field_name: &str, tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: tag.to_string(),
            reason: "Locale cannot be empty".to_string(),
        });
    }

    if !locale_tag_pattern().is_match(tag) {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: tag.to_string(),
            reason: "Expected a language tag like 'de' or 'de-DE'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
