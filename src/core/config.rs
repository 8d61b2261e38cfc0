//! # Runtime configuration.
//!
//! Provides [`Config`], the centralized settings for a [`Switchboard`](crate::Switchboard).
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1 by [`Config::bus_capacity_clamped`]

/// Configuration for a switchboard instance.
///
/// ## Field semantics
/// - `bus_capacity`: observability bus ring buffer size (min 1; clamped by Bus)
/// - `strict_routing`: reject targeted sends to handles the router does not hold
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks across the codebase.
#[derive(Clone, Debug)]
pub struct Config {
    /// Capacity of the observability bus broadcast channel.
    ///
    /// Receivers that lag behind more than `bus_capacity` events will
    /// receive `Lagged` and skip older items.
    pub bus_capacity: usize,

    /// Validates the recipient of targeted sends.
    ///
    /// - `true`: sending to a handle that is not the one currently registered
    ///   under its name fails with `RouterError::UnknownParticipant`
    /// - `false`: the message is delivered to whatever handle the caller passed
    pub strict_routing: bool,
}

impl Config {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `bus_capacity = 1024`
    /// - `strict_routing = true`
    fn default() -> Self {
        Self {
            bus_capacity: 1024,
            strict_routing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.bus_capacity, 1024);
        assert!(cfg.strict_routing);
    }

    #[test]
    fn test_bus_capacity_clamped() {
        let cfg = Config {
            bus_capacity: 0,
            ..Config::default()
        };
        assert_eq!(cfg.bus_capacity_clamped(), 1);
    }
}
