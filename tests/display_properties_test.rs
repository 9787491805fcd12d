use crowdfund_view::{
    calculate_progress, format_currency, format_date, format_date_short, format_project_count,
    get_initials, get_project_type_accent_color, get_sort_icon, get_status_color, DateOptions,
    ProjectStatus, ProjectType,
};

fn project_count(key: &str) -> Option<String> {
    (key == "community.projectCount").then(|| "{count} Projekt | {count} Projekte".to_string())
}

#[test]
fn test_progress_never_exceeds_hundred() {
    let goals = [1.0, 3.0, 250.0, 10_000.0, 1e9];
    let currents = [-50.0, 0.0, 0.4, 99.0, 1000.0, 5e12];

    for goal in goals {
        for current in currents {
            let progress = calculate_progress(current, Some(goal));
            assert!(progress <= 100, "{current}/{goal} gave {progress}");
        }
        assert_eq!(calculate_progress(goal, Some(0.0)), 0);
    }
}

#[test]
fn test_currency_zero_and_missing_match() {
    assert_eq!(format_currency(Some(0.0), None), format_currency(None, None));
    assert_eq!(
        format_currency(Some(0.0), Some("en-US")),
        format_currency(None, Some("en-US"))
    );
}

#[test]
fn test_date_fallbacks() {
    assert_eq!(format_date(Some(""), &DateOptions::default().fallback("X")), "X");
    assert_eq!(format_date(None, &DateOptions::default().fallback("X")), "X");
    assert_eq!(format_date_short(None, None, None), "-");
}

#[test]
fn test_initials() {
    assert_eq!(get_initials(Some("Jane Doe")), "JD");
    assert_eq!(get_initials(Some("")), "?");
    assert_eq!(get_initials(Some("Cher")), "C");
}

#[test]
fn test_project_count_selects_segment() {
    assert_eq!(format_project_count(1, &project_count), "1 Projekt");
    assert_eq!(format_project_count(5, &project_count), "5 Projekte");
}

#[test]
fn test_style_fallbacks_are_asymmetric() {
    assert_eq!(get_status_color("unknown-status"), get_status_color("draft"));
    assert_eq!(
        get_project_type_accent_color("unknown-type"),
        get_project_type_accent_color("crowdfunding")
    );
    assert!(get_status_color("unknown-status").contains("gray"));
    assert!(!get_project_type_accent_color("unknown-type").is_empty());
}

#[test]
fn test_sort_icons() {
    assert_eq!(get_sort_icon("name", "name", "asc"), "↑");
    assert_eq!(get_sort_icon("name", "price", "asc"), "↕");
}

#[test]
fn test_repeated_calls_are_identical() {
    for _ in 0..3 {
        assert_eq!(format_currency(Some(1234.0), None), "1.234\u{a0}€");
        assert_eq!(calculate_progress(1.0, Some(3.0)), 33);
        assert_eq!(format_date_short(Some("2024-01-02"), None, None), "2.1.2024");
        assert_eq!(get_initials(Some("ada lovelace")), "AL");
    }

    for status in ProjectStatus::ALL {
        assert_eq!(
            get_status_color(status.as_str()),
            get_status_color(status.as_str())
        );
    }
    for kind in ProjectType::ALL {
        assert_eq!(
            get_project_type_accent_color(kind.as_str()),
            kind.accent_color()
        );
    }
}

#[test]
fn test_calls_from_many_threads_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (
                    format_currency(Some(98765.0), Some("fr-FR")),
                    format_date(Some("2023-12-24"), &DateOptions::default().include_day(true)),
                )
            })
        })
        .collect();

    for handle in handles {
        let (amount, date) = handle.join().unwrap();
        assert_eq!(amount, "98\u{202f}765\u{a0}€");
        assert_eq!(date, "24. Dezember 2023");
    }
}
