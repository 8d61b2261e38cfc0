//! Application context: configuration, builder and the owning [`Switchboard`].
//!
//! Internal modules:
//! - [`config`]: runtime settings;
//! - [`builder`]: wires bus, sink, registry, router and the supplementary components;
//! - [`switchboard`]: the context object handed to the caller.

mod builder;
mod config;
mod switchboard;

pub use builder::SwitchboardBuilder;
pub use config::Config;
pub use switchboard::Switchboard;
