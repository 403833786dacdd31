//! Daily forecast aggregation.
//!
//! The provider returns a flat series in 3-hour steps. The frontend wants one
//! row per calendar day with a high, a low and the most representative
//! condition, so entries are bucketed by local date and summarized here.

use crate::{
    models::{DailyForecast, ForecastEntry},
    services::icons::{icon_class, FALLBACK_ICON},
    utils::units::round_half_even,
};
use chrono::{DateTime, Days, NaiveDate, TimeZone};

/// Number of days returned to the frontend
pub const MAX_FORECAST_DAYS: usize = 5;

struct DayBucket<'a> {
    date: NaiveDate,
    temps: Vec<f64>,
    descriptions: Vec<&'a str>,
    icons: Vec<&'a str>,
}

impl<'a> DayBucket<'a> {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            temps: Vec::new(),
            descriptions: Vec::new(),
            icons: Vec::new(),
        }
    }

    fn push(&mut self, entry: &'a ForecastEntry) {
        self.temps.push(entry.main.temp);
        if let Some(condition) = entry.weather.first() {
            self.descriptions.push(&condition.description);
            self.icons.push(&condition.icon);
        }
    }

    fn summarize(&self, today: NaiveDate) -> DailyForecast {
        let high = self.temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let low = self.temps.iter().copied().fold(f64::INFINITY, f64::min);

        DailyForecast {
            day: day_label(self.date, today),
            high: round_half_even(high),
            low: round_half_even(low),
            description: most_frequent(&self.descriptions)
                .unwrap_or_default()
                .to_string(),
            icon: most_frequent(&self.icons)
                .map(icon_class)
                .unwrap_or(FALLBACK_ICON)
                .to_string(),
        }
    }
}

/// Group forecast entries into at most [`MAX_FORECAST_DAYS`] daily summaries.
///
/// Dates are computed in `tz` and kept in first-seen order. `today` decides
/// which days are labelled "Today" and "Tomorrow".
pub fn aggregate_daily<Tz: TimeZone>(
    entries: &[ForecastEntry],
    tz: &Tz,
    today: NaiveDate,
) -> Vec<DailyForecast> {
    let mut days: Vec<DayBucket<'_>> = Vec::new();

    for entry in entries {
        let Some(date) = local_date(entry.dt, tz) else {
            tracing::warn!(dt = entry.dt, "Skipping forecast entry with out-of-range timestamp");
            continue;
        };

        let index = match days.iter().position(|day| day.date == date) {
            Some(index) => index,
            None if days.len() == MAX_FORECAST_DAYS => continue,
            None => {
                days.push(DayBucket::new(date));
                days.len() - 1
            }
        };

        days[index].push(entry);
    }

    days.iter().map(|day| day.summarize(today)).collect()
}

fn local_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(tz).date_naive())
}

/// "Today", "Tomorrow", or the English weekday name
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.checked_add_days(Days::new(1)) == Some(date) {
        "Tomorrow".to_string()
    } else {
        date.format("%A").to_string()
    }
}

/// Most frequent value; ties go to the value seen first.
fn most_frequent<'a>(values: &[&'a str]) -> Option<&'a str> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for &value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(&'a str, usize)>, (value, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
        .map(|(value, _)| value)
}
