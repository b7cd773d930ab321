//! Onboarding questionnaire and challenge assignment
//!
//! Six statements are rated from 1 (rarely) to 5 (very often). The higher the
//! total, the longer the assigned detox challenge.

use tracing::info;

use crate::store::{PROGRESS_KEY, Storage};
use crate::{ChallengeLength, ProgressRecord};

/// Statements shown by the questionnaire, in order
pub const QUESTIONS: [&str; 6] = [
    "I pick up my phone without a clear reason.",
    "Notifications frequently pull me off task.",
    "I scroll in bed or late at night.",
    "I often multitask across devices.",
    "I feel restless without my phone nearby.",
    "I want more calm and focus day to day.",
];

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Totals at or above this get the 21-day challenge
const TWENTY_ONE_DAY_THRESHOLD: u32 = 24;
/// Totals at or above this (and below the 21-day threshold) get 14 days
const FOURTEEN_DAY_THRESHOLD: u32 = 15;

/// One rating per entry in [`QUESTIONS`]
///
/// Ratings are meant to be in `[1, 5]` but are taken as given; the total is
/// a plain sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers([u8; 6]);

impl Answers {
    pub fn new(ratings: [u8; 6]) -> Self {
        Self(ratings)
    }

    pub fn ratings(&self) -> [u8; 6] {
        self.0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&r| u32::from(r)).sum()
    }
}

impl Default for Answers {
    /// The questionnaire starts every slider at the midpoint
    fn default() -> Self {
        Self([3; 6])
    }
}

/// Pick the challenge length for a set of answers
pub fn score(answers: &Answers) -> ChallengeLength {
    score_total(answers.total())
}

/// Threshold rule on a raw total; bounds are inclusive, checked highest first
pub fn score_total(total: u32) -> ChallengeLength {
    if total >= TWENTY_ONE_DAY_THRESHOLD {
        ChallengeLength::TwentyOne
    } else if total >= FOURTEEN_DAY_THRESHOLD {
        ChallengeLength::Fourteen
    } else {
        ChallengeLength::Seven
    }
}

/// Start a fresh challenge, replacing any stored progress
pub fn assign_challenge(storage: &Storage, length: ChallengeLength) -> ProgressRecord {
    let record = ProgressRecord::started(length.days());
    info!(target_days = record.target, "Assigned challenge");
    storage.write(PROGRESS_KEY, &record);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_thresholds() {
        for total in 6..=14 {
            assert_eq!(score_total(total), ChallengeLength::Seven, "total {total}");
        }
        for total in 15..=23 {
            assert_eq!(score_total(total), ChallengeLength::Fourteen, "total {total}");
        }
        for total in 24..=30 {
            assert_eq!(score_total(total), ChallengeLength::TwentyOne, "total {total}");
        }
    }

    #[test]
    fn test_default_answers_score_fourteen() {
        let answers = Answers::default();
        assert_eq!(answers.total(), 18);
        assert_eq!(score(&answers), ChallengeLength::Fourteen);
    }

    #[test]
    fn test_extreme_answers() {
        assert_eq!(score(&Answers::new([1; 6])), ChallengeLength::Seven);
        assert_eq!(score(&Answers::new([5; 6])), ChallengeLength::TwentyOne);
        assert_eq!(score(&Answers::new([4, 4, 4, 4, 4, 4])), ChallengeLength::TwentyOne);
        assert_eq!(score(&Answers::new([4, 4, 4, 4, 4, 3])), ChallengeLength::Fourteen);
    }

    #[test]
    fn test_out_of_range_ratings_are_summed_as_given() {
        let answers = Answers::new([0, 0, 0, 5, 5, 4]);
        assert_eq!(answers.ratings(), [0, 0, 0, 5, 5, 4]);
        assert_eq!(answers.total(), 14);
        assert_eq!(score(&answers), ChallengeLength::Seven);

        let answers = Answers::new([9, 9, 1, 1, 1, 1]);
        assert_eq!(answers.total(), 22);
        assert_eq!(score(&answers), ChallengeLength::Fourteen);
    }

    #[test]
    fn test_assign_challenge_resets_progress() {
        let storage = Storage::in_memory();
        storage.write(
            PROGRESS_KEY,
            &ProgressRecord {
                days: 5,
                target: 7,
                daily: vec![100, 20, 0, 0, 0, 0, 0],
            },
        );

        let record = assign_challenge(&storage, ChallengeLength::TwentyOne);
        assert_eq!(record, ProgressRecord::started(21));
        assert_eq!(record.daily, vec![0; 7]);
        assert_eq!(storage.read(PROGRESS_KEY, ProgressRecord::default()), record);
    }
}
