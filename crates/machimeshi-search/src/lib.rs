//! Filter primitives the list/map views call to narrow the shop directory.
//!
//! The view layer owns rendering and input handling; this crate owns the
//! matching rules. All filters are conjunctive: a shop must pass every one
//! that is set.

pub mod filters;

pub use filters::{search_shops, SearchFilters};
