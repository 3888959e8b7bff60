//! Statistics over the advertisement collection
//!
//! Read-only aggregations for the dashboard: status and publication
//! counts, creation-rate windows, business-day deadline proximity and
//! preset date ranges. Weeks start on Monday; Saturdays and Sundays do
//! not count as business days.

use crate::ads::{AdStatus, Advertisement};
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};

/// A label/count pair for dashboard lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

fn count_by<F>(ads: &[Advertisement], key: F) -> Vec<LabelCount>
where
    F: Fn(&Advertisement) -> String,
{
    let mut counts: Vec<LabelCount> = Vec::new();
    for ad in ads {
        let label = key(ad);
        match counts.iter_mut().find(|c| c.label == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(LabelCount { label, count: 1 }),
        }
    }
    counts
}

/// Advertisement counts per status, in first-seen order
pub fn count_by_status(ads: &[Advertisement]) -> Vec<LabelCount> {
    count_by(ads, |ad| ad.status.label().to_string())
}

/// Advertisement counts per publication venue
pub fn count_by_publication(ads: &[Advertisement]) -> Vec<LabelCount> {
    count_by(ads, |ad| ad.publication_venue.clone())
}

/// The top `n` entries by count, descending
pub fn top_n(mut items: Vec<LabelCount>, n: usize) -> Vec<LabelCount> {
    items.sort_by(|a, b| b.count.cmp(&a.count));
    items.truncate(n);
    items
}

/// Ads created within the last `days` days before `now`
pub fn count_created_last_days(ads: &[Advertisement], days: u64, now: DateTime<Utc>) -> usize {
    let cutoff = now - chrono::Duration::days(days as i64);
    ads.iter().filter(|a| a.created_at >= cutoff).count()
}

/// Advance a date by `n` business days, skipping Saturdays and Sundays
pub fn add_business_days(from: NaiveDate, n: u32) -> NaiveDate {
    let mut date = from;
    let mut remaining = n;
    while remaining > 0 {
        date = date + Days::new(1);
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            remaining -= 1;
        }
    }
    date
}

/// True when `date` falls within `start`..=`end` business days from `today`
pub fn is_within_business_days(date: NaiveDate, start: u32, end: u32, today: NaiveDate) -> bool {
    let window_start = add_business_days(today, start);
    let window_end = add_business_days(today, end);
    date >= window_start && date <= window_end
}

/// Ads whose publication date is 1-2 business days away and which are not
/// yet approved
pub fn near_deadline(ads: &[Advertisement], today: NaiveDate) -> Vec<Advertisement> {
    ads.iter()
        .filter(|a| {
            a.status != AdStatus::Approved
                && is_within_business_days(a.publication_date.date_naive(), 1, 2, today)
        })
        .cloned()
        .collect()
}

/// Preset reporting ranges offered by the statistics view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    ThisWeek,
    ThisMonth,
    ThisYear,
    LastWeek,
    Last30Days,
    LastYear,
}

impl RangePreset {
    /// Resolve the preset into an inclusive from/to date pair.
    /// "This week" starts on Monday.
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            RangePreset::ThisWeek => {
                let back = today.weekday().num_days_from_monday() as u64;
                (today - Days::new(back), today)
            }
            RangePreset::ThisMonth => (
                today.with_day(1).unwrap_or(today),
                today,
            ),
            RangePreset::ThisYear => (
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
                today,
            ),
            RangePreset::LastWeek => (today - Days::new(7), today),
            RangePreset::Last30Days => (today - Days::new(30), today),
            RangePreset::LastYear => (today - Days::new(365), today),
        }
    }
}

/// Ads created within the inclusive date range
pub fn filter_by_created_range(
    ads: &[Advertisement],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<Advertisement> {
    ads.iter()
        .filter(|a| {
            let d = a.created_at.date_naive();
            d >= from && d <= to
        })
        .cloned()
        .collect()
}
