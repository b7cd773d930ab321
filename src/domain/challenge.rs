use std::fmt;

/// One of the fixed detox challenge lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChallengeLength {
    /// 7 days, the default for light phone use
    Seven,
    Fourteen,
    TwentyOne,
}

impl ChallengeLength {
    /// All lengths, shortest first
    pub const ALL: [ChallengeLength; 3] = [Self::Seven, Self::Fourteen, Self::TwentyOne];

    pub fn days(&self) -> u32 {
        match self {
            Self::Seven => 7,
            Self::Fourteen => 14,
            Self::TwentyOne => 21,
        }
    }

    /// Map a stored target back to a length; `0` and unknown values are `None`
    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            7 => Some(Self::Seven),
            14 => Some(Self::Fourteen),
            21 => Some(Self::TwentyOne),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        format!("{}-Day Detox", self.days())
    }
}

impl fmt::Display for ChallengeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days())
    }
}
