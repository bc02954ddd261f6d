use super::*;
use time::Month;

fn date(y: i32, m: Month, d: u8) -> Date {
    Date::from_calendar_date(y, m, d).unwrap()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_deadline_reads_plain_dates() {
    assert_eq!(parse_deadline("2024-12-05"), Some(date(2024, Month::December, 5)));
}

#[test]
fn parse_deadline_ignores_time_suffix() {
    assert_eq!(parse_deadline("2024-12-05T00:00:00Z"), Some(date(2024, Month::December, 5)));
}

#[test]
fn parse_deadline_rejects_garbage() {
    assert_eq!(parse_deadline("soon"), None);
    assert_eq!(parse_deadline(""), None);
    assert_eq!(parse_deadline("2024-13-40"), None);
}

// =============================================================
// Status thresholds
// =============================================================

#[test]
fn status_thresholds_match_labels() {
    assert_eq!(DeadlineStatus::from_days(-1), DeadlineStatus::Overdue);
    assert_eq!(DeadlineStatus::from_days(0), DeadlineStatus::DueSoon);
    assert_eq!(DeadlineStatus::from_days(2), DeadlineStatus::DueSoon);
    assert_eq!(DeadlineStatus::from_days(3), DeadlineStatus::ThisWeek);
    assert_eq!(DeadlineStatus::from_days(7), DeadlineStatus::ThisWeek);
    assert_eq!(DeadlineStatus::from_days(8), DeadlineStatus::Upcoming);
}

#[test]
fn days_until_counts_calendar_days() {
    let today = date(2024, Month::December, 1);
    assert_eq!(days_until(date(2024, Month::December, 5), today), 4);
    assert_eq!(days_until(today, today), 0);
    assert_eq!(days_until(date(2024, Month::November, 30), today), -1);
}

#[test]
fn days_until_crosses_year_boundary() {
    let today = date(2024, Month::December, 30);
    assert_eq!(days_until(date(2025, Month::January, 2), today), 3);
}

#[test]
fn labels_read_as_shown_on_cards() {
    assert_eq!(DeadlineStatus::Overdue.label(), "Overdue");
    assert_eq!(DeadlineStatus::DueSoon.label(), "Due Soon");
    assert_eq!(DeadlineStatus::ThisWeek.label(), "This Week");
    assert_eq!(DeadlineStatus::Upcoming.label(), "Upcoming");
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_deadline_uses_short_weekday_and_month() {
    assert_eq!(format_deadline(date(2024, Month::December, 5)), "Thu, Dec 5");
}

#[test]
fn format_date_for_input_zero_pads() {
    assert_eq!(format_date_for_input(date(2025, Month::March, 7)), "2025-03-07");
}

#[test]
fn describe_combines_label_and_status() {
    let today = date(2024, Month::December, 4);
    let (label, status) = describe("2024-12-05", today).unwrap();
    assert_eq!(label, "Thu, Dec 5");
    assert_eq!(status, DeadlineStatus::DueSoon);
    assert!(describe("nope", today).is_none());
}
