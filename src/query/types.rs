//! Filter state record.
//!
//! Separated for modularity - the state can be inspected, persisted and
//! restored independently of the builder that mutates it.

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "all".to_string()
}

/// Accumulated filter criteria for one search query.
///
/// All sequences preserve insertion order and keep duplicates; nothing is
/// ever removed once added. Flags are independent and last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Terms that must all appear (AND semantics).
    pub all_words: Vec<String>,
    /// Phrases requiring exact match, rendered in double quotes.
    pub exact_words: Vec<String>,
    /// Terms joined by OR; at least 2 are required at render time.
    pub any_words: Vec<String>,
    /// Terms that must be absent, rendered with a `-` prefix.
    pub none_words: Vec<String>,
    /// Validated hashtags, leading `#` included.
    pub hashtags: Vec<String>,
    /// Validated usernames for the "authored by" filter (`from:`).
    pub from_people: Vec<String>,
    /// Validated usernames for the "reply to" filter (`to:`).
    pub to_people: Vec<String>,
    /// Validated usernames for the "mentions" filter, leading `@` included.
    pub mention_people: Vec<String>,
    /// Emit the positive-sentiment marker `:)`.
    pub include_positive: bool,
    /// Emit the negative-sentiment marker `:(`.
    pub include_negative: bool,
    /// Emit the question marker `?`.
    pub include_question: bool,
    /// Emit `include:retweets`.
    pub include_retweets: bool,
    /// Reserved language filter. Tracked but not consulted during rendering.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            all_words: Vec::new(),
            exact_words: Vec::new(),
            any_words: Vec::new(),
            none_words: Vec::new(),
            hashtags: Vec::new(),
            from_people: Vec::new(),
            to_people: Vec::new(),
            mention_people: Vec::new(),
            include_positive: false,
            include_negative: false,
            include_question: false,
            include_retweets: false,
            language: default_language(),
        }
    }
}

impl Filters {
    /// True when no word, people or flag filter has been set.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
            && self.exact_words.is_empty()
            && self.any_words.is_empty()
            && self.none_words.is_empty()
            && self.hashtags.is_empty()
            && self.from_people.is_empty()
            && self.to_people.is_empty()
            && self.mention_people.is_empty()
            && !self.include_positive
            && !self.include_negative
            && !self.include_question
            && !self.include_retweets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_with_language_all() {
        let filters = Filters::default();
        assert!(filters.is_empty());
        assert_eq!(filters.language, "all");
    }

    #[test]
    fn serde_round_trip() {
        let mut filters = Filters::default();
        filters.all_words.push("beer".to_string());
        filters.hashtags.push("#haiku".to_string());
        filters.include_retweets = true;

        let json = serde_json::to_string(&filters).unwrap();
        let restored: Filters = serde_json::from_str(&json).unwrap();
        assert_eq!(filters, restored);
    }

    #[test]
    fn language_defaults_when_missing_from_json() {
        let restored: Filters = serde_json::from_str(
            r#"{
                "all_words": ["watching"],
                "exact_words": [],
                "any_words": [],
                "none_words": [],
                "hashtags": [],
                "from_people": [],
                "to_people": [],
                "mention_people": [],
                "include_positive": false,
                "include_negative": false,
                "include_question": false,
                "include_retweets": false
            }"#,
        )
        .unwrap();
        assert_eq!(restored.language, "all");
    }
}
