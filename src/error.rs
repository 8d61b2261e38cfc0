//! Error types used by the router and the membership factory.
//!
//! This module defines two error enums:
//!
//! - [`RouterError`] — a send was refused by the message router.
//! - [`MembershipError`] — a member could not be built by the factory.
//!
//! Subscription operations have no error type: they never fail.
//! Both enums provide helper methods (`as_label`, `as_message`) for logging.

use thiserror::Error;

/// # Errors produced by message routing.
///
/// Both variants are local, synchronous failures surfaced to the caller of `send`;
/// nothing is retried.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// Targeted send to a handle the router does not hold (strict routing only).
    #[error("participant '{participant}' is not known to this router")]
    UnknownParticipant {
        /// Name of the rejected recipient.
        participant: String,
    },

    /// The sending participant has no owning router.
    #[error("participant '{participant}' is not registered to any router")]
    NotRegistered {
        /// Name of the unregistered sender.
        participant: String,
    },
}

impl RouterError {
    /// Returns a short stable label (snake_case) for use in logs/events.
    ///
    /// # Example
    /// ```
    /// use switchboard::RouterError;
    ///
    /// let err = RouterError::NotRegistered { participant: "brad".into() };
    /// assert_eq!(err.as_label(), "router_not_registered");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RouterError::UnknownParticipant { .. } => "router_unknown_participant",
            RouterError::NotRegistered { .. } => "router_not_registered",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RouterError::UnknownParticipant { participant } => {
                format!("unknown participant: {participant}")
            }
            RouterError::NotRegistered { participant } => {
                format!("not registered: {participant}")
            }
        }
    }
}

/// # Errors produced by the membership factory.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// The requested tier name does not match any membership tier.
    #[error("unknown membership tier '{tier}'")]
    UnknownTier {
        /// The tier name as given by the caller.
        tier: String,
    },
}

impl MembershipError {
    /// Returns a short stable label (snake_case) for use in logs/events.
    ///
    /// # Example
    /// ```
    /// use switchboard::MembershipError;
    ///
    /// let err = MembershipError::UnknownTier { tier: "gold".into() };
    /// assert_eq!(err.as_label(), "membership_unknown_tier");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            MembershipError::UnknownTier { .. } => "membership_unknown_tier",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            MembershipError::UnknownTier { tier } => format!("unknown tier: {tier}"),
        }
    }
}
