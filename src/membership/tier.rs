use std::fmt;
use std::str::FromStr;

use crate::error::MembershipError;

/// Membership tiers with their monthly cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipTier {
    Simple,
    Standard,
    Super,
}

impl MembershipTier {
    /// Stable lowercase tier name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::Simple => "simple",
            MembershipTier::Standard => "standard",
            MembershipTier::Super => "super",
        }
    }

    /// Monthly cost in whole dollars.
    pub fn cost_usd(&self) -> u32 {
        match self {
            MembershipTier::Simple => 5,
            MembershipTier::Standard => 15,
            MembershipTier::Super => 25,
        }
    }
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipTier {
    type Err = MembershipError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(MembershipTier::Simple),
            "standard" => Ok(MembershipTier::Standard),
            "super" => Ok(MembershipTier::Super),
            _ => Err(MembershipError::UnknownTier { tier: s.to_string() }),
        }
    }
}
