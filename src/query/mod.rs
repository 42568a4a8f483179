//! Query module — filter state and the builder that renders it.
//!
//! The main interface for assembling a search query:
//!
//! ```ignore
//! let mut search = SearchBuilder::new();
//! search.add_all_word("watching")?;
//! search.add_exact_word("happy hour")?;
//! let query = search.search_query()?; // "watching \"happy hour\""
//! ```

pub mod builder;
pub mod types;

pub use builder::SearchBuilder;
pub use types::Filters;
