use chrono::NaiveDate;

use crate::error::{TimelineError, TimelineResult};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[must_use]
pub fn month_name(month0: usize) -> Option<&'static str> {
    MONTH_NAMES.get(month0).copied()
}

/// Returns the calendar day count of a zero-based month.
pub fn days_in_month(year: i32, month0: u32) -> TimelineResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1);
    let next_first = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)
    };
    match (first, next_first) {
        (Some(first), Some(next_first)) => {
            let days = next_first.signed_duration_since(first).num_days();
            u32::try_from(days).map_err(|_| {
                TimelineError::InvalidData(format!("invalid day count for {year}-{month0}"))
            })
        }
        _ => Err(TimelineError::InvalidData(format!(
            "month index {month0} of year {year} is out of calendar range"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, month_name};

    #[test]
    fn february_tracks_leap_years() {
        assert_eq!(days_in_month(2024, 1).expect("feb 2024"), 29);
        assert_eq!(days_in_month(2026, 1).expect("feb 2026"), 28);
        assert_eq!(days_in_month(2100, 1).expect("feb 2100"), 28);
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(days_in_month(2026, 11).expect("dec"), 31);
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        assert!(days_in_month(2026, 12).is_err());
        assert_eq!(month_name(12), None);
        assert_eq!(month_name(6), Some("Jul"));
    }
}
