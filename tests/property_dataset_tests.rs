use proptest::prelude::*;
use timeline_rs::core::{Dataset, DatasetConfig, Quarter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn query_concatenates_quarter_months_in_order(
        seed in any::<u64>(),
        year in 2024i32..=2030,
        quarter_index in 0u8..4,
    ) {
        let dataset = Dataset::generate_with_seed(&DatasetConfig::default(), seed)
            .expect("dataset");
        let days = dataset.query(year, quarter_index);
        let quarter = Quarter::new(quarter_index).expect("quarter");

        let expected: usize = dataset
            .year(year)
            .expect("year")
            .months[quarter.months()]
            .iter()
            .map(|month| month.days.len())
            .sum();
        prop_assert_eq!(days.len(), expected);
        prop_assert!(days.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn invalid_quarter_indices_yield_nothing(
        seed in any::<u64>(),
        quarter_index in 4u8..=u8::MAX,
    ) {
        let dataset = Dataset::generate_with_seed(&DatasetConfig::default(), seed)
            .expect("dataset");
        prop_assert!(dataset.query(2026, quarter_index).is_empty());
    }

    #[test]
    fn generated_magnitudes_stay_in_range(
        seed in any::<u64>(),
        magnitude_max in 1.0f64..5_000.0,
    ) {
        let config = DatasetConfig {
            magnitude_max,
            ..DatasetConfig::default()
        }
        .with_year_range(2026, 2026);
        let dataset = Dataset::generate_with_seed(&config, seed).expect("dataset");
        for month in &dataset.year(2026).expect("year").months {
            for day in &month.days {
                prop_assert!(day.magnitude() < magnitude_max);
                prop_assert!(day.is_sign_consistent());
            }
        }
    }
}
