pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::InputSource, CliArgs};

pub use crate::adapters::catalog::Catalog;
pub use crate::config::toml_config::FormatterConfig;
pub use crate::core::formatting::{
    calculate_progress, format_currency, format_date, format_date_short, format_project_count,
    get_initials, DateOptions, PluralTemplate,
};
pub use crate::core::presenter::{ProjectListing, ProjectPresenter};
pub use crate::core::styling::{
    get_project_type_accent_color, get_project_type_button_class, get_project_type_color,
    get_project_type_color_light, get_sort_icon, get_status_color,
};
pub use crate::domain::model::{
    LocaleCode, ProjectCard, ProjectStatus, ProjectSummary, ProjectType, SortDirection, SortState,
};
pub use crate::domain::ports::Translate;
pub use crate::utils::error::{FormatError, Result};
