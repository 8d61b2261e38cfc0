use tracing::debug;

use crate::error::MembershipError;
use crate::sinks::SinkRef;

use super::MembershipTier;

/// A member with a name and a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    tier: MembershipTier,
}

impl Member {
    /// Creates a member without writing anything to a sink.
    pub fn new(name: impl Into<String>, tier: MembershipTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }

    /// Member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Membership tier.
    pub fn tier(&self) -> MembershipTier {
        self.tier
    }

    /// `{name} ({tier}): ${cost}`
    pub fn describe(&self) -> String {
        format!("{} ({}): ${}", self.name, self.tier, self.tier.cost_usd())
    }
}

/// Creates members from tier names and writes their descriptions to a sink.
pub struct MemberFactory {
    sink: SinkRef,
}

impl MemberFactory {
    /// Creates a factory writing creation notices to `sink`.
    pub fn new(sink: SinkRef) -> Self {
        Self { sink }
    }

    /// Builds a member of the named tier.
    ///
    /// # Errors
    /// [`MembershipError::UnknownTier`] if `tier` names no tier.
    pub fn create(&self, name: &str, tier: &str) -> Result<Member, MembershipError> {
        let tier: MembershipTier = tier.parse()?;
        debug!(member = %name, %tier, "member created");
        Ok(Member::new(name, tier))
    }

    /// Writes the member description to the sink.
    pub fn define(&self, member: &Member) {
        self.sink.write_line(&member.describe());
    }
}
