use crate::domain::ports::Translate;
use crate::utils::error::{FormatError, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Flat key -> template map. Nested TOML tables flatten to dotted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn from_table(table: &toml::Table) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.flatten_into("", table)?;
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).map_err(|e| FormatError::ConfigParseError {
            message: format!("Translation catalog parsing error: {}", e),
        })?;
        Self::from_table(&table)
    }

    /// Loads a standalone catalog file, e.g. `locales/de.toml`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), entries = catalog.len(), "Loaded translation catalog");
        Ok(catalog)
    }

    fn flatten_into(&mut self, prefix: &str, table: &toml::Table) -> Result<()> {
        for (key, value) in table {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };

            match value {
                toml::Value::String(template) => self.insert(full_key, template.clone()),
                toml::Value::Table(nested) => self.flatten_into(&full_key, nested)?,
                other => {
                    return Err(FormatError::InvalidConfigValueError {
                        field: full_key,
                        value: other.to_string(),
                        reason: "Translations must be strings or tables".to_string(),
                    })
                }
            }
        }
        Ok(())
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_tables_flatten_to_dotted_keys() {
        let catalog = Catalog::from_toml_str(
            r#"
title = "Projekte"

[community]
projectCount = "{count} Projekt | {count} Projekte"

[admin.table]
empty = "Keine Einträge"
"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get("community.projectCount"),
            Some("{count} Projekt | {count} Projekte")
        );
        assert_eq!(catalog.get("admin.table.empty"), Some("Keine Einträge"));
        assert_eq!(catalog.translate("missing"), None);
    }

    #[test]
    fn test_non_string_values_rejected() {
        let err = Catalog::from_toml_str("[community]\nprojectCount = 3\n").unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidConfigValueError { ref field, .. } if field == "community.projectCount"
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("en.toml");
        std::fs::write(&path, "[community]\nprojectCount = \"{count} project | {count} projects\"\n")
            .unwrap();

        let catalog = Catalog::from_file(&path).unwrap();
        assert_eq!(
            catalog.translate("community.projectCount").as_deref(),
            Some("{count} project | {count} projects")
        );
        assert!(matches!(
            Catalog::from_file(dir.path().join("missing.toml")),
            Err(FormatError::IoError(_))
        ));
    }

    #[test]
    fn test_builder_entries() {
        let catalog = Catalog::new().with_entry("a", "b");
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["a"]);
        assert!(!catalog.is_empty());
    }
}
