use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::calendar::month_name;
use crate::error::{TimelineError, TimelineResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        f64::from(self.width) * 0.5
    }
}

/// Plain 2D position in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

/// One trading day with its signed profit/loss.
///
/// `is_positive` always agrees with the sign bit of `signed_magnitude`, so a
/// zero-sized loss is stored as `-0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDay {
    pub date: NaiveDate,
    pub label: String,
    pub signed_magnitude: f64,
    pub is_positive: bool,
}

impl TradeDay {
    /// Builds a day from an unsigned magnitude and its profit flag.
    pub fn new(date: NaiveDate, is_positive: bool, magnitude: f64) -> TimelineResult<Self> {
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(TimelineError::InvalidData(
                "trade day magnitude must be finite and >= 0".to_owned(),
            ));
        }
        let signed_magnitude = if is_positive { magnitude } else { -magnitude };
        Ok(Self {
            date,
            label: day_label(date),
            signed_magnitude,
            is_positive,
        })
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.signed_magnitude.abs()
    }

    #[must_use]
    pub fn is_sign_consistent(&self) -> bool {
        self.signed_magnitude.is_finite()
            && self.is_positive == self.signed_magnitude.is_sign_positive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Month {
    pub name: String,
    pub days: Vec<TradeDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Year {
    pub year: i32,
    pub months: Vec<Month>,
}

impl Year {
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.months.iter().map(|month| month.days.len()).sum()
    }
}

fn day_label(date: NaiveDate) -> String {
    let month = month_name(date.month0() as usize).unwrap_or("???");
    format!("{month} {}", date.day())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Point, TradeDay};

    #[test]
    fn trade_day_sign_follows_profit_flag() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 4).expect("date");
        let loss = TradeDay::new(date, false, 250.0).expect("loss");
        assert_eq!(loss.signed_magnitude, -250.0);
        assert!(loss.is_sign_consistent());
        assert_eq!(loss.label, "Jul 4");

        let zero_loss = TradeDay::new(date, false, 0.0).expect("zero loss");
        assert!(zero_loss.signed_magnitude.is_sign_negative());
        assert!(zero_loss.is_sign_consistent());
    }

    #[test]
    fn trade_day_rejects_negative_or_nan_magnitude() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).expect("date");
        assert!(TradeDay::new(date, true, -1.0).is_err());
        assert!(TradeDay::new(date, true, f64::NAN).is_err());
    }

    #[test]
    fn point_distance_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() <= 1e-12);
        assert_eq!(a.midpoint(b), Point::new(1.5, 2.0));
    }
}
