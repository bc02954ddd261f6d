//! Card deadline parsing and "days until deadline" status.
//!
//! The label compares calendar dates only: a deadline of today is `0` days
//! away, yesterday is `-1`. Today's date comes from the browser clock under
//! hydrate and from UTC in SSR/native builds.

#[cfg(test)]
#[path = "deadline_test.rs"]
mod deadline_test;

use time::Date;
use time::macros::format_description;

/// Urgency bucket shown next to a card's deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeadlineStatus {
    Overdue,
    DueSoon,
    ThisWeek,
    Upcoming,
}

impl DeadlineStatus {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Self::Overdue,
            0..=2 => Self::DueSoon,
            3..=7 => Self::ThisWeek,
            _ => Self::Upcoming,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::DueSoon => "Due Soon",
            Self::ThisWeek => "This Week",
            Self::Upcoming => "Upcoming",
        }
    }

    /// CSS modifier for the badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Overdue => "deadline--overdue",
            Self::DueSoon => "deadline--soon",
            Self::ThisWeek => "deadline--week",
            Self::Upcoming => "deadline--upcoming",
        }
    }
}

/// Parse a backend deadline. Accepts `YYYY-MM-DD` with an optional time suffix.
pub fn parse_deadline(raw: &str) -> Option<Date> {
    let date_part = raw.trim().get(..10)?;
    Date::parse(date_part, format_description!("[year]-[month]-[day]")).ok()
}

/// Whole calendar days from `today` until `deadline`; negative when past.
pub fn days_until(deadline: Date, today: Date) -> i64 {
    (deadline - today).whole_days()
}

pub fn deadline_status(deadline: Date, today: Date) -> DeadlineStatus {
    DeadlineStatus::from_days(days_until(deadline, today))
}

/// Short display form, e.g. `Thu, Dec 5`.
pub fn format_deadline(date: Date) -> String {
    let weekday = date.weekday().to_string();
    let month = date.month().to_string();
    format!("{}, {} {}", &weekday[..3], &month[..3], date.day())
}

/// Value for an `<input type="date">`.
pub fn format_date_for_input(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Label data for one card deadline, or `None` when unparseable.
pub fn describe(raw: &str, today: Date) -> Option<(String, DeadlineStatus)> {
    let date = parse_deadline(raw)?;
    Some((format_deadline(date), deadline_status(date, today)))
}

/// Today's local calendar date.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (year, month, day) = (now.get_full_year() as i32, (now.get_month() + 1) as u8, now.get_date() as u8);
        time::Month::try_from(month)
            .ok()
            .and_then(|m| Date::from_calendar_date(year, m, day).ok())
            .unwrap_or_else(|| time::OffsetDateTime::UNIX_EPOCH.date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
