use chrono_tz::Tz;

use crate::{api::Time, Locale, Unit};

/// Renders how long ago `date` was, as seen at `now`. Dates older than a
/// week are shown as a calendar date in `tz`.
pub fn relative_age(date: Option<Time>, now: Time, tz: Tz, locale: Locale) -> String {
    let msg = locale.messages();
    let date = match date {
        Some(d) => d,
        None => return String::from(msg.recently),
    };
    let secs = (now - date).num_seconds();
    if secs < 60 {
        return String::from(msg.just_now);
    }
    let mins = (secs / 60) as u64;
    if mins < 60 {
        return locale.ago(Unit::Minute, mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return locale.ago(Unit::Hour, hours);
    }
    let days = hours / 24;
    if days < 7 {
        return locale.ago(Unit::Day, days);
    }
    date.with_timezone(&tz)
        .format(locale.date_format())
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn now() -> Time {
        Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap()
    }

    fn age(before: Duration, locale: Locale) -> String {
        relative_age(Some(now() - before), now(), chrono_tz::UTC, locale)
    }

    #[test]
    fn thresholds() {
        assert_eq!(age(Duration::seconds(0), Locale::Ru), "Только что");
        assert_eq!(age(Duration::seconds(59), Locale::Ru), "Только что");
        assert_eq!(age(Duration::seconds(90), Locale::Ru), "1 минуту назад");
        assert_eq!(age(Duration::seconds(90), Locale::En), "1 minute ago");
        assert_eq!(age(Duration::minutes(59), Locale::Ru), "59 минут назад");
        assert_eq!(age(Duration::minutes(125), Locale::Ru), "2 часа назад");
        assert_eq!(age(Duration::minutes(125), Locale::En), "2 hours ago");
        assert_eq!(age(Duration::hours(23), Locale::Ru), "23 часа назад");
        assert_eq!(age(Duration::days(3), Locale::Ru), "3 дня назад");
        assert_eq!(age(Duration::days(3), Locale::En), "3 days ago");
        assert_eq!(age(Duration::days(6), Locale::Ru), "6 дней назад");
    }

    #[test]
    fn old_dates_are_absolute() {
        assert_eq!(age(Duration::days(7), Locale::Ru), "13.05.2024");
        assert_eq!(age(Duration::days(30), Locale::En), "4/20/2024");
        // calendar date is taken in the viewer's timezone
        let late = Utc.with_ymd_and_hms(2024, 5, 1, 22, 30, 0).unwrap();
        assert_eq!(
            relative_age(Some(late), now(), chrono_tz::Europe::Moscow, Locale::Ru),
            "02.05.2024"
        );
    }

    #[test]
    fn missing_or_future_dates() {
        assert_eq!(
            relative_age(None, now(), chrono_tz::UTC, Locale::Ru),
            "Недавно"
        );
        assert_eq!(age(Duration::minutes(-5), Locale::En), "just now");
    }
}
