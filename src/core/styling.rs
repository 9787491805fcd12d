//! Tailwind class tokens and accent colours for project status, project type
//! and sortable table headers.
//!
//! String-keyed functions are total. Unknown statuses get the neutral draft
//! badge; unknown project types get the crowdfunding variant.

use crate::domain::model::{ProjectStatus, ProjectType, SortDirection, SortState};

/// Brand colours from the design palette.
pub mod palette {
    pub const PRIMARY: &str = "#304b50";
    pub const SECONDARY: &str = "#06E481";
    pub const SECONDARY_HOVER: &str = "#05b667";
    pub const FUNDRAISING: &str = "#FF85FF";
    pub const FUNDRAISING_HOVER: &str = "#e070e0";
    pub const PRIVATE: &str = "#FFC21C";
    pub const PRIVATE_HOVER: &str = "#e0aa18";
}

pub const SORT_ICON_NEUTRAL: &str = "↕";
pub const SORT_ICON_ASC: &str = "↑";
pub const SORT_ICON_DESC: &str = "↓";

impl ProjectStatus {
    /// Badge background and text classes, light and dark variants.
    pub fn color_classes(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => {
                "bg-gray-100 dark:bg-gray-700 text-[#304b50] dark:text-gray-300"
            }
            ProjectStatus::Submitted => {
                "bg-yellow-100 dark:bg-yellow-900/30 text-yellow-800 dark:text-yellow-400"
            }
            ProjectStatus::Verified => {
                "bg-[#06E481]/20 dark:bg-[#06E481]/20 text-[#304b50] dark:text-[#06E481]"
            }
            ProjectStatus::Financing => {
                "bg-green-100 dark:bg-green-900/30 text-green-800 dark:text-green-400"
            }
            ProjectStatus::EndedSuccess => {
                "bg-emerald-100 dark:bg-emerald-900/30 text-emerald-800 dark:text-emerald-400"
            }
            ProjectStatus::EndedFailed | ProjectStatus::Rejected => {
                "bg-red-100 dark:bg-red-900/30 text-red-800 dark:text-red-400"
            }
        }
    }
}

impl ProjectType {
    /// Standard badge, 20% background opacity.
    pub fn color_classes(&self) -> &'static str {
        match self {
            ProjectType::Crowdfunding => "bg-[#06E481]/20 text-[#304b50] dark:text-[#06E481]",
            ProjectType::Fundraising => "bg-[#FF85FF]/20 text-[#FF85FF]",
            ProjectType::Private => "bg-[#FFC21C]/20 text-[#FFC21C]",
        }
    }

    /// Feed/discover badge, 30% background opacity.
    pub fn color_classes_light(&self) -> &'static str {
        match self {
            ProjectType::Crowdfunding => "bg-[#06E481]/30 text-[#06E481]",
            ProjectType::Fundraising => "bg-[#FF85FF]/30 text-[#FF85FF]",
            ProjectType::Private => "bg-[#FFC21C]/30 text-[#FFC21C]",
        }
    }

    pub fn button_classes(&self) -> &'static str {
        match self {
            ProjectType::Crowdfunding => "bg-[#06E481] text-[#304b50] hover:bg-[#05b667]",
            ProjectType::Fundraising => "bg-[#FF85FF] text-white hover:bg-[#e070e0]",
            ProjectType::Private => "bg-[#FFC21C] text-[#304b50] hover:bg-[#e0aa18]",
        }
    }

    pub fn accent_color(&self) -> &'static str {
        match self {
            ProjectType::Crowdfunding => palette::SECONDARY,
            ProjectType::Fundraising => palette::FUNDRAISING,
            ProjectType::Private => palette::PRIVATE,
        }
    }
}

impl SortDirection {
    pub fn icon(&self) -> &'static str {
        match self {
            SortDirection::Asc => SORT_ICON_ASC,
            SortDirection::Desc => SORT_ICON_DESC,
        }
    }
}

impl SortState {
    /// Header glyph for `column` under this sort state.
    pub fn icon_for(&self, column: &str) -> &'static str {
        if self.column != column {
            return SORT_ICON_NEUTRAL;
        }
        self.direction.icon()
    }
}

fn status_or_default(status: &str) -> ProjectStatus {
    status.parse().unwrap_or_else(|e| {
        tracing::debug!("{}, using draft badge", e);
        ProjectStatus::Draft
    })
}

fn project_type_or_default(kind: &str) -> ProjectType {
    kind.parse().unwrap_or_else(|e| {
        tracing::debug!("{}, using crowdfunding styling", e);
        ProjectType::Crowdfunding
    })
}

pub fn get_status_color(status: &str) -> &'static str {
    status_or_default(status).color_classes()
}

pub fn get_project_type_color(kind: &str) -> &'static str {
    project_type_or_default(kind).color_classes()
}

pub fn get_project_type_color_light(kind: &str) -> &'static str {
    project_type_or_default(kind).color_classes_light()
}

pub fn get_project_type_button_class(kind: &str) -> &'static str {
    project_type_or_default(kind).button_classes()
}

pub fn get_project_type_accent_color(kind: &str) -> &'static str {
    project_type_or_default(kind).accent_color()
}

/// Neutral glyph unless `column` is the active sort column; then `↑` for
/// `asc` and `↓` for anything else.
pub fn get_sort_icon(column: &str, sort_by: &str, sort_dir: &str) -> &'static str {
    SortState::new(sort_by, SortDirection::parse_lenient(sort_dir)).icon_for(column)
}
