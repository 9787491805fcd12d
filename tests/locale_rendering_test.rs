use crowdfund_view::{format_currency, format_date, format_date_short, DateOptions};

const DATE: &str = "2024-11-03T18:45:00";

#[test]
fn test_currency_per_locale() {
    let cases = [
        ("de-DE", "1.250.000\u{a0}€"),
        ("de-AT", "€\u{a0}1.250.000"),
        ("en-US", "€1,250,000"),
        ("en-GB", "€1,250,000"),
        ("fr-FR", "1\u{202f}250\u{202f}000\u{a0}€"),
        ("es-ES", "1.250.000\u{a0}€"),
        ("it-IT", "1.250.000\u{a0}€"),
        ("nl-NL", "€\u{a0}1.250.000"),
    ];

    for (locale, expected) in cases {
        assert_eq!(
            format_currency(Some(1_250_000.0), Some(locale)),
            expected,
            "locale {locale}"
        );
    }
}

#[test]
fn test_currency_drops_fraction_digits() {
    assert_eq!(format_currency(Some(49.5), Some("en-US")), "€50");
    assert_eq!(format_currency(Some(49.49), Some("en-US")), "€49");
    assert_eq!(format_currency(Some(-49.5), Some("en-US")), "-€50");
}

#[test]
fn test_unknown_locale_uses_language_or_default() {
    assert_eq!(
        format_currency(Some(1000.0), Some("en-AU")),
        format_currency(Some(1000.0), Some("en-US"))
    );
    assert_eq!(
        format_currency(Some(1000.0), Some("zz-ZZ")),
        format_currency(Some(1000.0), None)
    );
}

#[test]
fn test_month_year_per_locale() {
    let cases = [
        ("de-DE", "November 2024"),
        ("de-AT", "November 2024"),
        ("en-US", "November 2024"),
        ("fr-FR", "novembre 2024"),
        ("es-ES", "noviembre de 2024"),
        ("it-IT", "novembre 2024"),
        ("nl-NL", "november 2024"),
    ];

    for (locale, expected) in cases {
        let options = DateOptions::default().locale(locale);
        assert_eq!(format_date(Some(DATE), &options), expected, "locale {locale}");
    }
}

#[test]
fn test_long_date_per_locale() {
    let cases = [
        ("de-DE", "3. November 2024"),
        ("en-US", "November 3, 2024"),
        ("en-GB", "3 November 2024"),
        ("fr-FR", "3 novembre 2024"),
        ("es-ES", "3 de noviembre de 2024"),
    ];

    for (locale, expected) in cases {
        let options = DateOptions::default().locale(locale).include_day(true);
        assert_eq!(format_date(Some(DATE), &options), expected, "locale {locale}");
    }
}

#[test]
fn test_short_date_per_locale() {
    let cases = [
        ("de-DE", "3.11.2024"),
        ("de-AT", "3.11.2024"),
        ("en-US", "11/3/2024"),
        ("en-GB", "03/11/2024"),
        ("fr-FR", "03/11/2024"),
        ("es-ES", "3/11/2024"),
        ("it-IT", "3/11/2024"),
        ("nl-NL", "3-11-2024"),
    ];

    for (locale, expected) in cases {
        assert_eq!(
            format_date_short(Some(DATE), Some(locale), None),
            expected,
            "locale {locale}"
        );
    }
}

#[test]
fn test_unparsable_dates_surface_platform_text() {
    assert_eq!(format_date(Some("31.02.2024"), &DateOptions::default()), "Invalid Date");
    assert_eq!(format_date_short(Some("soon"), None, Some("n/a")), "Invalid Date");
}

#[test]
fn test_austrian_german_differs_from_german() {
    assert_eq!(format_currency(Some(1234.0), Some("de-AT")), "€\u{a0}1.234");
    assert_eq!(
        format_date(Some("2024-01-15"), &DateOptions::default().locale("de-AT")),
        "Jänner 2024"
    );
    assert_eq!(
        format_date(
            Some("2024-01-15"),
            &DateOptions::default().locale("de-AT").include_day(true)
        ),
        "15. Jänner 2024"
    );
    assert_eq!(
        format_date(Some("2024-01-15"), &DateOptions::default()),
        "Januar 2024"
    );
}
