//! Deterministic sample users.
//!
//! Produces a believable startup collection when no dataset file is at hand.
//! The same [`SampleSpec`] always yields identical records.

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::raw::CountryName;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::record::{UserId, UserRecord};

/// Earliest generated birth year.
const MIN_BIRTH_YEAR: i32 = 1950;

/// Latest generated birth year.
const MAX_BIRTH_YEAR: i32 = 2005;

/// Highest generated day of month; valid in every month.
const MAX_BIRTH_DAY: u32 = 28;

/// Number of portrait images available per gender.
const PORTRAIT_COUNT: u32 = 100;

/// Word count range for generated descriptions.
const DESCRIPTION_WORDS: std::ops::Range<usize> = 4..10;

/// Default number of generated users.
pub(crate) const DEFAULT_SAMPLE_COUNT: usize = 12;

/// Seed and size of a generated sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSpec {
    seed: u64,
    count: usize,
}

impl SampleSpec {
    /// Creates a sample specification.
    #[must_use]
    pub const fn new(seed: u64, count: usize) -> Self {
        Self { seed, count }
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of users to generate.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

/// Generates sample users for `spec`.
///
/// Records get sequential ids starting at 1, so they are unique. Emails are
/// derived from the names under `example.com`.
///
/// # Errors
///
/// Returns [`GenerationError`] if a birth date cannot be constructed.
///
/// # Example
///
/// ```
/// use user_directory::{SampleSpec, generate_sample_users};
///
/// let spec = SampleSpec::new(42, 3);
/// let users = generate_sample_users(&spec).expect("generated");
///
/// assert_eq!(users.len(), 3);
/// assert_eq!(users, generate_sample_users(&spec).expect("generated"));
/// ```
pub fn generate_sample_users(spec: &SampleSpec) -> Result<Vec<UserRecord>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed());
    (1..=spec.count())
        .map(|index| {
            let raw_id = u64::try_from(index).unwrap_or(u64::MAX);
            generate_single_user(&mut rng, UserId::new(raw_id))
        })
        .collect()
}

fn generate_single_user(rng: &mut ChaCha8Rng, id: UserId) -> Result<UserRecord, GenerationError> {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let email = email_for(&first, &last);
    let dob = generate_dob(rng)?;
    let is_female = rng.random_ratio(1, 2);
    let gender = if is_female { "female" } else { "male" };
    let portrait = rng.random_range(0..PORTRAIT_COUNT);
    let folder = if is_female { "women" } else { "men" };
    let country: String = CountryName(EN).fake_with_rng(rng);
    let description: String = Sentence(EN, DESCRIPTION_WORDS).fake_with_rng(rng);

    Ok(UserRecord {
        id,
        first,
        last,
        email,
        description,
        dob,
        gender: gender.to_owned(),
        country,
        picture: format!("https://randomuser.me/api/portraits/med/{folder}/{portrait}.jpg"),
    })
}

fn generate_dob(rng: &mut ChaCha8Rng) -> Result<NaiveDate, GenerationError> {
    let year = rng.random_range(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=MAX_BIRTH_DAY);
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(GenerationError::InvalidBirthDate { year, month, day })
}

/// Builds `first.last@example.com`, keeping only ASCII alphanumerics.
fn email_for(first: &str, last: &str) -> String {
    let local = |name: &str| -> String {
        name.chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    };
    format!("{}.{}@example.com", local(first), local(last))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[test]
    fn generates_requested_count_with_sequential_ids() {
        let users = generate_sample_users(&SampleSpec::new(7, 5)).expect("generated");

        let ids: Vec<u64> = users.iter().map(|u| u.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn generation_is_deterministic() {
        let spec = SampleSpec::new(2026, 10);

        let first = generate_sample_users(&spec).expect("generated");
        let second = generate_sample_users(&spec).expect("generated");

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_produce_different_users() {
        let first = generate_sample_users(&SampleSpec::new(1, 4)).expect("generated");
        let second = generate_sample_users(&SampleSpec::new(2, 4)).expect("generated");

        assert_ne!(first, second);
    }

    #[test]
    fn zero_count_yields_empty_sample() {
        let users = generate_sample_users(&SampleSpec::new(1, 0)).expect("generated");
        assert!(users.is_empty());
    }

    #[rstest]
    #[case(42)]
    #[case(1234)]
    fn required_fields_are_filled(#[case] seed: u64) {
        let users = generate_sample_users(&SampleSpec::new(seed, 20)).expect("generated");

        for user in &users {
            assert!(!user.first.trim().is_empty(), "blank first name: {user:?}");
            assert!(!user.last.trim().is_empty(), "blank last name: {user:?}");
            assert!(user.email.ends_with("@example.com"), "bad email: {user:?}");
        }
    }

    #[test]
    fn birth_dates_stay_in_range() {
        let users = generate_sample_users(&SampleSpec::new(9, 50)).expect("generated");

        for user in &users {
            let year = chrono::Datelike::year(&user.dob);
            assert!((MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&year));
        }
    }

    #[test]
    fn ids_are_unique() {
        let users = generate_sample_users(&SampleSpec::new(3, 30)).expect("generated");
        let ids: HashSet<UserId> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[rstest]
    #[case("Ada", "Lovelace", "ada.lovelace@example.com")]
    #[case("Mary-Kate", "O'Neil", "marykate.oneil@example.com")]
    fn email_uses_ascii_alphanumerics(#[case] first: &str, #[case] last: &str, #[case] expected: &str) {
        assert_eq!(email_for(first, last), expected);
    }
}
