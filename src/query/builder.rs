//! The search query builder.
//!
//! Accumulates filter criteria through mutator calls, validating each input
//! as it arrives, and renders everything into one query string on demand.

use tracing::debug;

use crate::error::{QueryError, Result};
use crate::validate::{TwitterRules, Validate};

use super::types::Filters;

/// Fluent builder for Twitter search API query strings.
///
/// Mutators validate their input and either append to the accumulated
/// [`Filters`] or fail without touching state. [`search_query`] renders the
/// accumulated state in a fixed category order; it neither consumes nor
/// resets the builder, so repeated calls with unchanged state return
/// identical strings.
///
/// [`search_query`]: SearchBuilder::search_query
///
/// ```
/// use tweetquery::SearchBuilder;
///
/// let mut search = SearchBuilder::new();
/// search.add_all_word("beer")?;
/// search.add_none_word("root")?;
/// assert_eq!(search.search_query()?, "beer -root");
/// # Ok::<(), tweetquery::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchBuilder<V = TwitterRules> {
    filters: Filters,
    validator: V,
}

impl SearchBuilder<TwitterRules> {
    /// Create an empty builder using Twitter's canonical validation rules.
    pub fn new() -> Self {
        Self::with_validator(TwitterRules)
    }

    /// Resume from previously accumulated filter state.
    pub fn from_filters(filters: Filters) -> Self {
        Self {
            filters,
            validator: TwitterRules,
        }
    }
}

impl Default for SearchBuilder<TwitterRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validate> SearchBuilder<V> {
    /// Create an empty builder with a caller-supplied validator.
    pub fn with_validator(validator: V) -> Self {
        Self {
            filters: Filters::default(),
            validator,
        }
    }

    /// The accumulated filter state.
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    fn checked_word(word: &str) -> Result<String> {
        if word.is_empty() {
            return Err(QueryError::EmptyWord);
        }
        Ok(word.to_string())
    }

    fn checked_username(&self, handle: &str) -> Result<String> {
        if !self.validator.is_valid_username(handle) {
            return Err(QueryError::InvalidUsername(handle.to_string()));
        }
        Ok(handle.to_string())
    }

    /// Add a term that must appear in matching tweets.
    pub fn add_all_word(&mut self, word: &str) -> Result<()> {
        self.filters.all_words.push(Self::checked_word(word)?);
        Ok(())
    }

    /// Add a phrase requiring exact match.
    pub fn add_exact_word(&mut self, word: &str) -> Result<()> {
        self.filters.exact_words.push(Self::checked_word(word)?);
        Ok(())
    }

    /// Add a term to the OR group. At least two are required by the time
    /// [`search_query`](SearchBuilder::search_query) is called; this is not
    /// checked here.
    pub fn add_any_word(&mut self, word: &str) -> Result<()> {
        self.filters.any_words.push(Self::checked_word(word)?);
        Ok(())
    }

    /// Add a term that must be absent from matching tweets.
    pub fn add_none_word(&mut self, word: &str) -> Result<()> {
        self.filters.none_words.push(Self::checked_word(word)?);
        Ok(())
    }

    /// Add a hashtag, leading `#` included.
    pub fn add_hashtag(&mut self, tag: &str) -> Result<()> {
        if !self.validator.is_valid_hashtag(tag) {
            return Err(QueryError::InvalidHashtag(tag.to_string()));
        }
        self.filters.hashtags.push(tag.to_string());
        Ok(())
    }

    /// Filter to tweets authored by this account.
    pub fn add_from_username(&mut self, handle: &str) -> Result<()> {
        let handle = self.checked_username(handle)?;
        self.filters.from_people.push(handle);
        Ok(())
    }

    /// Filter to tweets replying to this account.
    pub fn add_to_username(&mut self, handle: &str) -> Result<()> {
        let handle = self.checked_username(handle)?;
        self.filters.to_people.push(handle);
        Ok(())
    }

    /// Filter to tweets mentioning this account.
    pub fn add_mention_username(&mut self, handle: &str) -> Result<()> {
        let handle = self.checked_username(handle)?;
        self.filters.mention_people.push(handle);
        Ok(())
    }

    /// Ask for positive-sentiment tweets.
    pub fn include_positive(&mut self) {
        self.filters.include_positive = true;
    }

    /// Drop the positive-sentiment marker.
    pub fn exclude_positive(&mut self) {
        self.filters.include_positive = false;
    }

    /// Ask for negative-sentiment tweets.
    pub fn include_negative(&mut self) {
        self.filters.include_negative = true;
    }

    /// Drop the negative-sentiment marker.
    pub fn exclude_negative(&mut self) {
        self.filters.include_negative = false;
    }

    /// Ask for tweets asking a question.
    pub fn include_questions(&mut self) {
        self.filters.include_question = true;
    }

    /// Drop the question marker.
    pub fn exclude_questions(&mut self) {
        self.filters.include_question = false;
    }

    /// Include retweets in results.
    pub fn include_retweets(&mut self) {
        self.filters.include_retweets = true;
    }

    /// Drop the retweet-inclusion marker.
    pub fn exclude_retweets(&mut self) {
        self.filters.include_retweets = false;
    }

    /// Set the reserved language filter. Tracked but not yet rendered; the
    /// search API's `lang:` operator is deliberately not emitted.
    pub fn language(&mut self, lang: &str) {
        self.filters.language = lang.to_string();
    }

    /// Render the accumulated filters into one search query string.
    ///
    /// Categories are emitted in a fixed order regardless of call order:
    /// all words, exact phrases, the OR group, excluded words, hashtags,
    /// `from:` accounts, `to:` accounts, mentions, then the sentiment and
    /// retweet markers. Terms are trimmed of surrounding whitespace at
    /// render time and clauses joined with single spaces. An empty builder
    /// renders to an empty string.
    pub fn search_query(&self) -> Result<String> {
        let f = &self.filters;
        let mut query: Vec<String> = Vec::new();

        for word in &f.all_words {
            query.push(word.trim().to_string());
        }

        for word in &f.exact_words {
            query.push(format!("\"{}\"", word.trim()));
        }

        if !f.any_words.is_empty() {
            let any_words: Vec<&str> = f.any_words.iter().map(|w| w.trim()).collect();
            if any_words.len() < 2 {
                return Err(QueryError::NotEnoughAnyWords);
            }
            query.push(any_words.join(" OR "));
        }

        for word in &f.none_words {
            query.push(format!("-{}", word.trim()));
        }

        for tag in &f.hashtags {
            query.push(tag.trim().to_string());
        }

        for person in &f.from_people {
            query.push(format!("from:{}", person.trim()));
        }

        for person in &f.to_people {
            query.push(format!("to:{}", person.trim()));
        }

        for person in &f.mention_people {
            query.push(person.trim().to_string());
        }

        if f.include_positive {
            query.push(":)".to_string());
        }

        if f.include_negative {
            query.push(":(".to_string());
        }

        if f.include_question {
            query.push("?".to_string());
        }

        if f.include_retweets {
            query.push("include:retweets".to_string());
        }

        debug!(clauses = query.len(), "search query rendered");

        Ok(query.join(" "))
    }
}
