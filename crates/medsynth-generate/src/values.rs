//! Scalar value sampling.
//!
//! Thin wrappers over `rand` ranges and `fake` fakers so every draw runs
//! off the caller's seeded stream.

use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::faker::number::en::NumberWithFormat;
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Calendar anchor for all generated dates.
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

pub fn choice(options: &'static [&'static str], rng: &mut impl Rng) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

pub fn int_range(min: i64, max: i64, rng: &mut impl Rng) -> i64 {
    rng.random_range(min..=max)
}

pub fn float_range(min: f64, max: f64, scale: u32, rng: &mut impl Rng) -> f64 {
    round_to(rng.random_range(min..=max), scale)
}

/// Round half-up at `scale` decimal places.
pub fn round_to(value: f64, scale: u32) -> f64 {
    let factor = 10f64.powi(scale as i32);
    (value * factor).round() / factor
}

/// Date up to `days_back` days before the base date.
pub fn date_within(days_back: i64, rng: &mut impl Rng) -> NaiveDate {
    let offset = rng.random_range(0..=days_back.max(0));
    base_date() - Duration::days(offset)
}

pub fn full_name(rng: &mut impl Rng) -> String {
    Name().fake_with_rng(rng)
}

pub fn company_name(rng: &mut impl Rng) -> String {
    CompanyName().fake_with_rng(rng)
}

pub fn phone(rng: &mut impl Rng) -> String {
    PhoneNumber().fake_with_rng(rng)
}

pub fn email(rng: &mut impl Rng) -> String {
    SafeEmail().fake_with_rng(rng)
}

pub fn sentence(min_words: usize, max_words: usize, rng: &mut impl Rng) -> String {
    Sentence(min_words..max_words.max(min_words + 1)).fake_with_rng(rng)
}

/// Render a digit pattern: '#' is any digit, '^' a non-zero digit.
pub fn number_pattern(pattern: &'static str, rng: &mut impl Rng) -> String {
    NumberWithFormat(pattern).fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn rounding_fixes_the_decimal_scale() {
        assert_eq!(round_to(12.3456, 2), 12.35);
        assert_eq!(round_to(12.3449, 2), 12.34);
        assert_eq!(round_to(7.0, 2), 7.0);
    }

    #[test]
    fn dates_stay_within_the_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let date = date_within(365, &mut rng);
            assert!(date <= base_date());
            assert!(date >= base_date() - Duration::days(365));
        }
    }

    #[test]
    fn choices_come_from_the_vocabulary() {
        const OPTIONS: &[&str] = &["alpha", "beta", "gamma"];
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let value = choice(OPTIONS, &mut rng);
            assert!(OPTIONS.contains(&value.as_str()));
        }
    }

    #[test]
    fn float_ranges_respect_bounds_and_scale() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..100 {
            let value = float_range(10.0, 20.0, 2, &mut rng);
            assert!((10.0..=20.0).contains(&value));
            assert_eq!(round_to(value, 2), value);
        }
    }
}
