//! # tweetquery
//!
//! Fluent builder for Twitter search API query strings.
//!
//! tweetquery assembles a search query from structured filter criteria:
//! word inclusion and exclusion, exact phrases, OR groups, hashtags,
//! user-relationship filters and sentiment/question/retweet markers. Each
//! input is validated as it is added (fail fast, state untouched on
//! rejection) and the accumulated filters render into one query string in a
//! fixed clause order.
//!
//! This crate only produces the query string. Sending it to the search API,
//! authentication and response parsing belong to the embedding application.
//!
//! ## Quick Start
//!
//! ```rust
//! use tweetquery::SearchBuilder;
//!
//! let mut search = SearchBuilder::new();
//! search.add_all_word("watching")?;
//! search.add_all_word("now")?;
//! search.add_exact_word("happy hour")?;
//! search.include_retweets();
//!
//! assert_eq!(
//!     search.search_query()?,
//!     "watching now \"happy hour\" include:retweets"
//! );
//! # Ok::<(), tweetquery::QueryError>(())
//! ```

pub mod error;
pub mod query;
pub mod validate;

// Re-exports for convenience
pub use error::{QueryError, Result};
pub use query::{Filters, SearchBuilder};
pub use validate::{TwitterRules, Validate};
