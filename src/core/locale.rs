//! Static locale table backing currency and date rendering.
//!
//! Each profile mirrors the CLDR data a browser would use for the same tag:
//! digit grouping, where the currency symbol sits, month names and the
//! numeric/long date patterns. Lookup is total: unknown tags resolve to the
//! primary language, then to the default profile.

use chrono::{Datelike, NaiveDate};

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";
const EURO: &str = "€";

/// Placement of the currency symbol and minus sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPattern {
    /// `-€1,234`
    SymbolFirst,
    /// `€ -1.234`
    SymbolFirstSpaced,
    /// `-€ 1.234`
    SignSymbolSpaced,
    /// `-1.234 €`
    SymbolLast,
}

#[derive(Debug, Clone, Copy)]
pub struct LocaleProfile {
    pub tag: &'static str,
    pub group_separator: &'static str,
    /// Numbers with fewer integer digits than `3 + min_grouping_digits` stay ungrouped.
    pub min_grouping_digits: usize,
    pub currency_pattern: CurrencyPattern,
    pub months: [&'static str; 12],
    /// Placeholders: `{d}`, `{dd}`, `{m}`, `{mm}`, `{month}`, `{y}`.
    pub month_year_pattern: &'static str,
    pub long_date_pattern: &'static str,
    pub short_date_pattern: &'static str,
}

const GERMAN_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober",
    "November", "Dezember",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

static PROFILES: [LocaleProfile; 8] = [
    LocaleProfile {
        tag: "de-DE",
        group_separator: ".",
        min_grouping_digits: 1,
        currency_pattern: CurrencyPattern::SymbolLast,
        months: GERMAN_MONTHS,
        month_year_pattern: "{month} {y}",
        long_date_pattern: "{d}. {month} {y}",
        short_date_pattern: "{d}.{m}.{y}",
    },
    LocaleProfile {
        tag: "de-AT",
        group_separator: ".",
        min_grouping_digits: 1,
        currency_pattern: CurrencyPattern::SignSymbolSpaced,
        months: [
            "Jänner", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        month_year_pattern: "{month} {y}",
        long_date_pattern: "{d}. {month} {y}",
        short_date_pattern: "{d}.{m}.{y}",
    },
    LocaleProfile {
        tag: "en-US",
        group_separator: ",",
        min_grouping_digits: 1,
        currency_pattern: CurrencyPattern::SymbolFirst,
        months: ENGLISH_MONTHS,
        month_year_pattern: "{month} {y}",
        long_date_pattern: "{month} {d}, {y}",
        short_date_pattern: "{m}/{d}/{y}",
    },
    LocaleProfile {
        tag: "en-GB",
        group_separator: ",",
        min_grouping_digits: 1,
        currency_pattern: CurrencyPattern::SymbolFirst,
        months: ENGLISH_MONTHS,
        month_year_pattern: "{month} {y}",
        long_date_pattern: "{d} {month} {y}",
        short_date_pattern: "{dd}/{mm}/{y}",
    },
    LocaleProfile {
        tag: "fr-FR",
        group_separator: NARROW_NBSP,
        min_grouping_digits: 1,
        currency_pattern: CurrencyPattern::SymbolLast,
        months: [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ],
        month_year_pattern: "{month} {y}",
        long_date_pattern: "{d} {month} {y}",
        short_date_pattern: "{dd}/{mm}/{y}",
    },
    LocaleProfile {
        tag: "es-ES",
        group_separator: ".",
        min_grouping_digits: 2,
        currency_pattern: CurrencyPattern::SymbolLast,
        months: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        month_year_pattern: "{month} de {y}",
        long_date_pattern: "{d} de {month} de {y}",
        short_date_pattern: "{d}/{m}/{y}",
    },
    LocaleProfile {
        tag: "it-IT",
        group_separator: ".",
        min_grouping_digits: 1,
        currency_pattern: CurrencyPattern::SymbolLast,
        months: [
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ],
        month_year_pattern: "{month} {y}",
        long_date_pattern: "{d} {month} {y}",
        short_date_pattern: "{d}/{m}/{y}",
    },
    LocaleProfile {
        tag: "nl-NL",
        group_separator: ".",
        min_grouping_digits: 1,
        currency_pattern: CurrencyPattern::SymbolFirstSpaced,
        months: [
            "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus",
            "september", "oktober", "november", "december",
        ],
        month_year_pattern: "{month} {y}",
        long_date_pattern: "{d} {month} {y}",
        short_date_pattern: "{d}-{m}-{y}",
    },
];

/// Resolves a tag to a profile: exact match, then primary language, then `de-DE`.
pub fn resolve(tag: &str) -> &'static LocaleProfile {
    let normalized = tag.trim().replace('_', "-");

    if let Some(profile) = PROFILES
        .iter()
        .find(|p| p.tag.eq_ignore_ascii_case(&normalized))
    {
        return profile;
    }

    let language = normalized.split('-').next().unwrap_or_default();
    if let Some(profile) = PROFILES.iter().find(|p| {
        p.tag
            .split('-')
            .next()
            .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
    }) {
        return profile;
    }

    tracing::debug!(locale = tag, "Unsupported locale, using {}", PROFILES[0].tag);
    &PROFILES[0]
}

pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.tag)
}

impl LocaleProfile {
    /// Renders a whole-unit euro amount. The value must already be rounded.
    pub fn render_currency(&self, whole_units: f64) -> String {
        if whole_units.is_nan() {
            return self.place_symbol("", "NaN");
        }

        let negative = whole_units < 0.0;
        let digits = if whole_units.is_infinite() {
            "∞".to_string()
        } else {
            self.group_digits(&format!("{:.0}", whole_units.abs()))
        };
        let sign = if negative { "-" } else { "" };

        self.place_symbol(sign, &digits)
    }

    fn place_symbol(&self, sign: &str, digits: &str) -> String {
        match self.currency_pattern {
            CurrencyPattern::SymbolFirst => format!("{sign}{EURO}{digits}"),
            CurrencyPattern::SymbolFirstSpaced => format!("{EURO}{NBSP}{sign}{digits}"),
            CurrencyPattern::SignSymbolSpaced => format!("{sign}{EURO}{NBSP}{digits}"),
            CurrencyPattern::SymbolLast => format!("{sign}{digits}{NBSP}{EURO}"),
        }
    }

    fn group_digits(&self, digits: &str) -> String {
        if digits.len() < 3 + self.min_grouping_digits {
            return digits.to_string();
        }

        let mut grouped = String::new();
        for (i, c) in digits.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                grouped.push_str(&self.group_separator.chars().rev().collect::<String>());
            }
            grouped.push(c);
        }
        grouped.chars().rev().collect()
    }

    pub fn render_month_year(&self, date: NaiveDate) -> String {
        self.render_date(self.month_year_pattern, date)
    }

    pub fn render_long_date(&self, date: NaiveDate) -> String {
        self.render_date(self.long_date_pattern, date)
    }

    pub fn render_short_date(&self, date: NaiveDate) -> String {
        self.render_date(self.short_date_pattern, date)
    }

    fn render_date(&self, pattern: &str, date: NaiveDate) -> String {
        let month_name = self.months[date.month0() as usize];
        pattern
            .replace("{dd}", &format!("{:02}", date.day()))
            .replace("{d}", &date.day().to_string())
            .replace("{mm}", &format!("{:02}", date.month()))
            .replace("{month}", month_name)
            .replace("{m}", &date.month().to_string())
            .replace("{y}", &date.year().to_string())
    }
}
