use crate::adapters::catalog::Catalog;
use crate::core::formatting::{DateOptions, DEFAULT_SHORT_DATE_FALLBACK};
use crate::core::locale;
use crate::domain::model::LocaleCode;
use crate::utils::error::{FormatError, Result};
use crate::utils::validation::{validate_locale_tag, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatterConfig {
    #[serde(default)]
    pub format: FormatSection,
    #[serde(default)]
    pub translations: Option<toml::Table>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatSection {
    #[serde(default)]
    pub locale: LocaleCode,
    #[serde(default)]
    pub date_fallback: String,
    #[serde(default = "default_short_fallback")]
    pub date_short_fallback: String,
    #[serde(default)]
    pub include_day: bool,
}

fn default_short_fallback() -> String {
    DEFAULT_SHORT_DATE_FALLBACK.to_string()
}

impl Default for FormatSection {
    fn default() -> Self {
        Self {
            locale: LocaleCode::default(),
            date_fallback: String::new(),
            date_short_fallback: default_short_fallback(),
            include_day: false,
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl FormatterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormatError::IoError)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), locale = %config.format.locale, "Loaded formatter config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FormatError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the environment value; unset names stay literal.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.format.locale = LocaleCode::new(locale);
        self
    }

    pub fn locale(&self) -> &str {
        self.format.locale.as_str()
    }

    pub fn date_options(&self) -> DateOptions<'_> {
        DateOptions::default()
            .locale(self.format.locale.as_str())
            .include_day(self.format.include_day)
            .fallback(&self.format.date_fallback)
    }

    /// Whether the locale has its own profile rather than a language or default fallback.
    pub fn has_supported_locale(&self) -> bool {
        let normalized = self.locale().replace('_', "-");
        locale::supported_tags().any(|tag| tag.eq_ignore_ascii_case(&normalized))
    }

    pub fn short_date_fallback(&self) -> &str {
        &self.format.date_short_fallback
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.translations {
            Some(table) => Catalog::from_table(table),
            None => Ok(Catalog::new()),
        }
    }
}

impl Validate for FormatterConfig {
    fn validate(&self) -> Result<()> {
        validate_locale_tag("format.locale", self.format.locale.as_str())?;
        if !self.has_supported_locale() {
            tracing::warn!(
                locale = self.locale(),
                "No exact locale profile, rendering as {} (supported: {})",
                locale::resolve(self.locale()).tag,
                locale::supported_tags().collect::<Vec<_>>().join(", ")
            );
        }
        let catalog = self.catalog()?;
        for key in catalog.keys() {
            let template = catalog.get(key).unwrap_or_default();
            validate_non_empty_string(&format!("translations.{}", key), template)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = FormatterConfig::from_toml_str("").unwrap();
        assert_eq!(config.locale(), "de-DE");
        assert_eq!(config.short_date_fallback(), "-");
        assert_eq!(config.format.date_fallback, "");
        assert!(!config.format.include_day);
        assert!(config.catalog().unwrap().is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = FormatterConfig::from_toml_str(
            r#"
[format]
locale = "en-GB"
date_fallback = "TBD"
include_day = true

[translations.community]
projectCount = "{count} project | {count} projects"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        let options = config.date_options();
        assert_eq!(options.locale, "en-GB");
        assert_eq!(options.fallback, "TBD");
        assert!(options.include_day);
        assert_eq!(
            config.catalog().unwrap().get("community.projectCount"),
            Some("{count} project | {count} projects")
        );
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("CROWDFUND_VIEW_TEST_LOCALE", "fr-FR");
        let config = FormatterConfig::from_toml_str(
            "[format]\nlocale = \"${CROWDFUND_VIEW_TEST_LOCALE}\"\n",
        )
        .unwrap();
        assert_eq!(config.locale(), "fr-FR");

        let unset = FormatterConfig::substitute_env_vars("x = \"${CROWDFUND_VIEW_UNSET_VAR}\"");
        assert_eq!(unset, "x = \"${CROWDFUND_VIEW_UNSET_VAR}\"");
    }

    #[test]
    fn test_validate_rejects_bad_locale() {
        let config = FormatterConfig::default().with_locale("deutsch");
        assert!(matches!(
            config.validate(),
            Err(FormatError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_unsupported_locale_still_validates() {
        let config = FormatterConfig::default().with_locale("pt-BR");
        assert!(!config.has_supported_locale());
        assert!(config.validate().is_ok());

        assert!(FormatterConfig::default().with_locale("de_AT").has_supported_locale());
    }

    #[test]
    fn test_validate_rejects_blank_translation() {
        let config = FormatterConfig::from_toml_str(
            r#"
[translations.community]
projectCount = "  "
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(FormatError::InvalidConfigValueError { ref field, .. })
                if field == "translations.community.projectCount"
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = FormatterConfig::from_toml_str("[format\nlocale=").unwrap_err();
        assert!(matches!(err, FormatError::ConfigParseError { .. }));
    }
}
