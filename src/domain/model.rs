use crate::utils::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LOCALE: &str = "de-DE";

/// Lifecycle state of a project as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Submitted,
    Verified,
    Financing,
    EndedSuccess,
    EndedFailed,
    Rejected,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 7] = [
        ProjectStatus::Draft,
        ProjectStatus::Submitted,
        ProjectStatus::Verified,
        ProjectStatus::Financing,
        ProjectStatus::EndedSuccess,
        ProjectStatus::EndedFailed,
        ProjectStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Submitted => "submitted",
            ProjectStatus::Verified => "verified",
            ProjectStatus::Financing => "financing",
            ProjectStatus::EndedSuccess => "ended_success",
            ProjectStatus::EndedFailed => "ended_failed",
            ProjectStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| FormatError::UnknownStatus {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    Crowdfunding,
    Fundraising,
    Private,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::Crowdfunding,
        ProjectType::Fundraising,
        ProjectType::Private,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Crowdfunding => "crowdfunding",
            ProjectType::Fundraising => "fundraising",
            ProjectType::Private => "private",
        }
    }
}

impl FromStr for ProjectType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FormatError::UnknownProjectType {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Asc, SortDirection::Desc];

    /// Only the literal `asc` is ascending; every other value sorts descending.
    pub fn parse_lenient(value: &str) -> Self {
        if value == "asc" {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortDirection::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| FormatError::UnknownSortDirection {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active column and direction of a sortable table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }
}

/// Language-region tag such as `de-DE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectOwner {
    pub id: i64,
    pub full_name: Option<String>,
}

/// A project row as listed by the backend. Status and type stay raw strings
/// so that unrecognized values reach the style mappings untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub funding_goal: Option<f64>,
    #[serde(default)]
    pub funding_current: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub financing_end: Option<String>,
    #[serde(default)]
    pub owner: Option<ProjectOwner>,
}

/// Display-ready strings and style tokens for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub status: String,
    pub status_class: String,
    pub type_class: String,
    pub type_class_light: String,
    pub button_class: String,
    pub accent_color: String,
    pub goal: String,
    pub raised: String,
    pub progress: i64,
    /// Month and year, or the full date when `include_day` is configured.
    pub created: String,
    /// Numeric creation date for table views.
    pub created_short: String,
    pub financing_end: String,
    pub owner_initials: String,
}
