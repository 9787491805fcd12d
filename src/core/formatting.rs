//! Display strings for amounts, progress, dates, names and counts.
//!
//! Every function here is total: missing input yields a documented fallback
//! and nothing is reported back to the caller as an error.

use crate::core::locale;
use crate::domain::model::DEFAULT_LOCALE;
use crate::domain::ports::Translate;
use crate::utils::error::{FormatError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const PROJECT_COUNT_KEY: &str = "community.projectCount";
pub const INVALID_DATE: &str = "Invalid Date";
pub const DEFAULT_SHORT_DATE_FALLBACK: &str = "-";
const COUNT_PLACEHOLDER: &str = "{count}";

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn is_falsy_number(value: Option<f64>) -> bool {
    match value {
        None => true,
        Some(v) => v == 0.0 || v.is_nan(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Half-up rounding toward positive infinity on ties (`-2.5` becomes `-2`).
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Formats whole euros for `locale` (default `de-DE`), no fractional digits.
///
/// `None`, zero and `NaN` all render as zero.
pub fn format_currency(amount: Option<f64>, locale: Option<&str>) -> String {
    let amount = if is_falsy_number(amount) {
        0.0
    } else {
        amount.unwrap_or_default()
    };

    let mut whole_units = amount.round();
    if whole_units == 0.0 {
        // drops the sign of values that round to -0
        whole_units = 0.0;
    }

    locale::resolve(locale.unwrap_or(DEFAULT_LOCALE)).render_currency(whole_units)
}

/// Funding progress in percent, capped at 100. Zero when the goal is missing or zero.
///
/// Negative `current` values are passed through unclamped.
pub fn calculate_progress(current: f64, goal: Option<f64>) -> i64 {
    let goal = match goal {
        Some(g) if !is_falsy_number(Some(g)) => g,
        _ => return 0,
    };

    let percent = round_half_up(current / goal * 100.0);
    if percent.is_nan() {
        return 0;
    }
    percent.min(100.0) as i64
}

/// Options for [`format_date`].
#[derive(Debug, Clone, Copy)]
pub struct DateOptions<'a> {
    pub locale: &'a str,
    pub include_day: bool,
    pub fallback: &'a str,
}

impl Default for DateOptions<'_> {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            include_day: false,
            fallback: "",
        }
    }
}

impl<'a> DateOptions<'a> {
    pub fn locale(mut self, locale: &'a str) -> Self {
        self.locale = locale;
        self
    }

    pub fn include_day(mut self, include_day: bool) -> Self {
        self.include_day = include_day;
        self
    }

    pub fn fallback(mut self, fallback: &'a str) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Parses the date-like strings the backend emits.
///
/// Timestamps with an offset keep the calendar date of that offset.
pub fn parse_date_value(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts.date());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        return Some(date);
    }

    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return value
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    None
}

/// Month and year (plus day when requested) in the target locale.
///
/// Returns `options.fallback` for a missing or empty date and
/// [`INVALID_DATE`] when the value cannot be parsed.
pub fn format_date(date: Option<&str>, options: &DateOptions<'_>) -> String {
    let Some(raw) = non_empty(date) else {
        return options.fallback.to_string();
    };

    let Some(parsed) = parse_date_value(raw) else {
        tracing::debug!(value = raw, "Unparsable date");
        return INVALID_DATE.to_string();
    };

    let profile = locale::resolve(options.locale);
    if options.include_day {
        profile.render_long_date(parsed)
    } else {
        profile.render_month_year(parsed)
    }
}

/// Numeric date, as used in admin tables. Fallback defaults to `-`.
pub fn format_date_short(date: Option<&str>, locale: Option<&str>, fallback: Option<&str>) -> String {
    let Some(raw) = non_empty(date) else {
        return fallback.unwrap_or(DEFAULT_SHORT_DATE_FALLBACK).to_string();
    };

    match parse_date_value(raw) {
        Some(parsed) => locale::resolve(locale.unwrap_or(DEFAULT_LOCALE)).render_short_date(parsed),
        None => {
            tracing::debug!(value = raw, "Unparsable date");
            INVALID_DATE.to_string()
        }
    }
}

/// Up to two uppercase initials, `?` for a missing name.
///
/// Tokens are split on the plain space only; empty tokens from repeated
/// spaces contribute nothing.
pub fn get_initials(name: Option<&str>) -> String {
    let Some(name) = non_empty(name) else {
        return "?".to_string();
    };

    name.split(' ')
        .filter_map(|token| token.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// A `singular | plural` template with `{count}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralTemplate {
    singular: String,
    plural: Option<String>,
}

impl PluralTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments = template.split('|').map(str::trim);
        let singular = segments.next().unwrap_or_default();
        if singular.is_empty() {
            return Err(FormatError::MalformedTemplate {
                template: template.to_string(),
                reason: "singular segment is empty".to_string(),
            });
        }

        let plural = segments.next().filter(|s| !s.is_empty()).map(str::to_string);
        let extra = segments.count();
        if extra > 0 {
            tracing::debug!(template, extra, "Ignoring surplus plural segments");
        }

        Ok(Self {
            singular: singular.to_string(),
            plural,
        })
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> Option<&str> {
        self.plural.as_deref()
    }

    /// `None` when the plural form is needed but absent.
    pub fn render(&self, count: i64) -> Option<String> {
        let segment = if count == 1 {
            Some(self.singular.as_str())
        } else {
            self.plural.as_deref()
        };
        segment.map(|s| s.replacen(COUNT_PLACEHOLDER, &count.to_string(), 1))
    }
}

fn project_count_fallback(count: i64) -> String {
    format!("{count} Projekte")
}

/// Pluralized project count from the `community.projectCount` template.
pub fn format_project_count<T: Translate + ?Sized>(count: i64, translate: &T) -> String {
    let Some(template) = translate.translate(PROJECT_COUNT_KEY) else {
        tracing::debug!(key = PROJECT_COUNT_KEY, "Missing translation, using fallback");
        return project_count_fallback(count);
    };

    match PluralTemplate::parse(&template) {
        Ok(parsed) => parsed
            .render(count)
            .unwrap_or_else(|| project_count_fallback(count)),
        Err(e) => {
            tracing::debug!("{}", e);
            project_count_fallback(count)
        }
    }
}
