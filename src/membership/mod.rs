//! # Membership factory.
//!
//! Builds [`Member`]s of a [`MembershipTier`] from a tier name, the way a
//! signup form would hand it over.
//!
//! ```rust
//! use std::sync::Arc;
//! use switchboard::{MemberFactory, MemorySink, MembershipTier};
//!
//! let sink = Arc::new(MemorySink::new());
//! let factory = MemberFactory::new(sink.clone());
//!
//! let member = factory.create("John Doe", "simple").unwrap();
//! assert_eq!(member.tier(), MembershipTier::Simple);
//!
//! factory.define(&member);
//! assert_eq!(sink.lines(), vec!["John Doe (simple): $5"]);
//!
//! assert!(factory.create("Tom Smith", "gold").is_err());
//! ```

mod factory;
mod tier;

pub use factory::{Member, MemberFactory};
pub use tier::MembershipTier;
