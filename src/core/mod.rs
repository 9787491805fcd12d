pub mod formatting;
pub mod locale;
pub mod presenter;
pub mod styling;

pub use crate::domain::model::{ProjectCard, ProjectStatus, ProjectSummary, ProjectType};
pub use crate::domain::ports::Translate;
pub use crate::utils::error::Result;
