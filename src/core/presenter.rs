use crate::config::toml_config::FormatterConfig;
use crate::core::formatting::{
    calculate_progress, format_currency, format_date, format_date_short, format_project_count,
    get_initials,
};
use crate::core::styling::{
    get_project_type_accent_color, get_project_type_button_class, get_project_type_color,
    get_project_type_color_light, get_status_color,
};
use crate::domain::model::{ProjectCard, ProjectSummary, ProjectType};
use crate::domain::ports::Translate;
use serde::Serialize;

/// Cards for a listing plus its pluralized headline.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListing {
    pub headline: String,
    pub projects: Vec<ProjectCard>,
}

/// Builds view models from backend project rows.
pub struct ProjectPresenter<T> {
    config: FormatterConfig,
    translator: T,
}

impl<T: Translate> ProjectPresenter<T> {
    pub fn new(config: FormatterConfig, translator: T) -> Self {
        Self { config, translator }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn present(&self, project: &ProjectSummary) -> ProjectCard {
        let locale = Some(self.config.locale());
        let kind = project
            .project_type
            .as_deref()
            .unwrap_or(ProjectType::default().as_str());
        let owner_name = project
            .owner
            .as_ref()
            .and_then(|owner| owner.full_name.as_deref());
        let date_options = self.config.date_options();

        ProjectCard {
            id: project.id,
            title: project.title.clone(),
            slug: project.slug.clone(),
            summary: project.short_description.clone(),
            status: project.status.clone(),
            status_class: get_status_color(&project.status).to_string(),
            type_class: get_project_type_color(kind).to_string(),
            type_class_light: get_project_type_color_light(kind).to_string(),
            button_class: get_project_type_button_class(kind).to_string(),
            accent_color: get_project_type_accent_color(kind).to_string(),
            goal: format_currency(project.funding_goal, locale),
            raised: format_currency(project.funding_current, locale),
            progress: calculate_progress(
                project.funding_current.unwrap_or_default(),
                project.funding_goal,
            ),
            created: format_date(project.created_at.as_deref(), &date_options),
            created_short: format_date_short(
                project.created_at.as_deref(),
                locale,
                Some(self.config.short_date_fallback()),
            ),
            // deadlines always carry the day
            financing_end: format_date(
                project.financing_end.as_deref(),
                &date_options.include_day(true),
            ),
            owner_initials: get_initials(owner_name),
        }
    }

    pub fn present_all(&self, projects: &[ProjectSummary]) -> ProjectListing {
        tracing::debug!(count = projects.len(), locale = self.config.locale(), "Presenting projects");
        ProjectListing {
            headline: format_project_count(projects.len() as i64, &self.translator),
            projects: projects.iter().map(|p| self.present(p)).collect(),
        }
    }
}
