use chrono::NaiveDate;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::calendar::{MONTH_NAMES, days_in_month};
use crate::core::{Month, Quarter, TradeDay, Year};
use crate::error::{TimelineError, TimelineResult};

pub const DEFAULT_FIRST_YEAR: i32 = 2024;
pub const DEFAULT_LAST_YEAR: i32 = 2030;
pub const DEFAULT_PROFIT_PROBABILITY: f64 = 0.6;
pub const DEFAULT_MAGNITUDE_MAX: f64 = 1000.0;

/// Shape of a generated sample hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// First generated year (inclusive).
    pub first_year: i32,
    /// Last generated year (inclusive).
    pub last_year: i32,
    /// Probability that a generated day is profitable.
    pub profit_probability: f64,
    /// Exclusive upper bound of the uniformly drawn magnitude.
    pub magnitude_max: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            first_year: DEFAULT_FIRST_YEAR,
            last_year: DEFAULT_LAST_YEAR,
            profit_probability: DEFAULT_PROFIT_PROBABILITY,
            magnitude_max: DEFAULT_MAGNITUDE_MAX,
        }
    }
}

impl DatasetConfig {
    #[must_use]
    pub fn with_year_range(mut self, first_year: i32, last_year: i32) -> Self {
        self.first_year = first_year;
        self.last_year = last_year;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if self.first_year > self.last_year {
            return Err(TimelineError::InvalidData(format!(
                "dataset first_year ({}) must be <= last_year ({})",
                self.first_year, self.last_year
            )));
        }
        if !self.profit_probability.is_finite() || !(0.0..=1.0).contains(&self.profit_probability)
        {
            return Err(TimelineError::InvalidData(
                "dataset profit_probability must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.magnitude_max.is_finite() || self.magnitude_max <= 0.0 {
            return Err(TimelineError::InvalidData(
                "dataset magnitude_max must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Immutable Year -> Month -> TradeDay hierarchy.
///
/// Years are kept in ascending, contiguous order; lookups by year value are
/// O(1) while iteration preserves the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    years: IndexMap<i32, Year>,
}

impl Dataset {
    /// Generates a sample hierarchy from an entropy-seeded RNG.
    pub fn generate(config: &DatasetConfig) -> TimelineResult<Self> {
        let mut rng = StdRng::from_entropy();
        Self::generate_with_rng(config, &mut rng)
    }

    /// Generates a reproducible sample hierarchy.
    pub fn generate_with_seed(config: &DatasetConfig, seed: u64) -> TimelineResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_with_rng(config, &mut rng)
    }

    pub fn generate_with_rng<G: Rng>(
        config: &DatasetConfig,
        rng: &mut G,
    ) -> TimelineResult<Self> {
        let config = config.validate()?;
        let mut years = IndexMap::new();
        for year in config.first_year..=config.last_year {
            let mut months = Vec::with_capacity(MONTH_NAMES.len());
            for (month0, name) in MONTH_NAMES.iter().enumerate() {
                let month0 = month0 as u32;
                let day_count = days_in_month(year, month0)?;
                let mut days = Vec::with_capacity(day_count as usize);
                for day in 1..=day_count {
                    let date = NaiveDate::from_ymd_opt(year, month0 + 1, day).ok_or_else(|| {
                        TimelineError::InvalidData(format!(
                            "invalid calendar date {year}-{}-{day}",
                            month0 + 1
                        ))
                    })?;
                    let is_positive = rng.gen_bool(config.profit_probability);
                    let magnitude = rng.gen_range(0.0..config.magnitude_max);
                    days.push(TradeDay::new(date, is_positive, magnitude)?);
                }
                months.push(Month {
                    name: (*name).to_owned(),
                    days,
                });
            }
            years.insert(year, Year { year, months });
        }

        debug!(
            first_year = config.first_year,
            last_year = config.last_year,
            "generated sample dataset"
        );
        Ok(Self { years })
    }

    /// Accepts an externally produced hierarchy after checking its invariants.
    pub fn from_years(years: Vec<Year>) -> TimelineResult<Self> {
        let mut indexed = IndexMap::with_capacity(years.len());
        let mut previous: Option<i32> = None;
        for year in years {
            if let Some(previous) = previous {
                if year.year != previous + 1 {
                    return Err(TimelineError::InvalidData(format!(
                        "dataset years must be ascending and contiguous: {} follows {previous}",
                        year.year
                    )));
                }
            }
            validate_year(&year)?;
            previous = Some(year.year);
            indexed.insert(year.year, year);
        }
        Ok(Self { years: indexed })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn years(&self) -> impl Iterator<Item = &Year> {
        self.years.values()
    }

    #[must_use]
    pub fn year(&self, year: i32) -> Option<&Year> {
        self.years.get(&year)
    }

    #[must_use]
    pub fn year_at(&self, index: usize) -> Option<&Year> {
        self.years.get_index(index).map(|(_, year)| year)
    }

    #[must_use]
    pub fn index_of_year(&self, year: i32) -> Option<usize> {
        self.years.get_index_of(&year)
    }

    #[must_use]
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = self.years.first()?;
        let last = self.years.last()?;
        Some((*first.0, *last.0))
    }

    /// Days of one quarter in date order.
    ///
    /// Returns an empty sequence when the year is unknown or the quarter
    /// index is outside `0..=3`.
    #[must_use]
    pub fn query(&self, year: i32, quarter_index: u8) -> Vec<&TradeDay> {
        let (Some(year), Some(quarter)) = (self.years.get(&year), Quarter::new(quarter_index))
        else {
            return Vec::new();
        };
        year.months
            .get(quarter.months())
            .unwrap_or_default()
            .iter()
            .flat_map(|month| month.days.iter())
            .collect()
    }

    #[must_use]
    pub fn quarter_day_count(&self, year: i32, quarter: Quarter) -> usize {
        self.years.get(&year).map_or(0, |year| {
            year.months
                .get(quarter.months())
                .unwrap_or_default()
                .iter()
                .map(|month| month.days.len())
                .sum()
        })
    }
}

fn validate_year(year: &Year) -> TimelineResult<()> {
    if year.months.len() != MONTH_NAMES.len() {
        return Err(TimelineError::InvalidData(format!(
            "year {} must have exactly 12 months, got {}",
            year.year,
            year.months.len()
        )));
    }
    for (month0, month) in year.months.iter().enumerate() {
        let expected = days_in_month(year.year, month0 as u32)? as usize;
        if month.days.len() != expected {
            return Err(TimelineError::InvalidData(format!(
                "{} {} must have {expected} days, got {}",
                month.name,
                year.year,
                month.days.len()
            )));
        }
        if !month.days.windows(2).all(|pair| pair[0].date < pair[1].date) {
            return Err(TimelineError::InvalidData(format!(
                "{} {} days must be ordered by date ascending",
                month.name, year.year
            )));
        }
        if let Some(day) = month.days.iter().find(|day| !day.is_sign_consistent()) {
            return Err(TimelineError::InvalidData(format!(
                "trade day {} has is_positive inconsistent with its magnitude sign",
                day.date
            )));
        }
    }
    Ok(())
}
