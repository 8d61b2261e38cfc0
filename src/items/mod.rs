//! # Item store.
//!
//! A private, append-only list of [`Item`]s exposing only `add` and `get`.

mod store;

pub use store::{Item, ItemStore};
