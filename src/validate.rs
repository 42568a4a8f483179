//! Syntactic validation of handles and hashtags.
//!
//! Pure character-class checks, no I/O. Validators return `bool` and never
//! fail; the builder turns a `false` into a typed error.

/// Validation capability injected into the builder.
///
/// The default implementation is [`TwitterRules`]. Tests (or callers
/// targeting a platform with looser handle syntax) can substitute their own.
pub trait Validate {
    /// True iff `handle` is a well-formed username, leading `@` included.
    fn is_valid_username(&self, handle: &str) -> bool;

    /// True iff `tag` is a well-formed hashtag, leading `#` included.
    fn is_valid_hashtag(&self, tag: &str) -> bool;
}

/// Twitter's canonical syntax rules.
///
/// Handles are `@` followed by 1–15 alphanumeric or underscore characters.
/// Hashtags are `#` followed by at least one alphanumeric or underscore
/// character.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterRules;

fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Validate for TwitterRules {
    fn is_valid_username(&self, handle: &str) -> bool {
        match handle.strip_prefix('@') {
            Some(rest) => {
                (1..=15).contains(&rest.len()) && rest.chars().all(is_handle_char)
            }
            None => false,
        }
    }

    fn is_valid_hashtag(&self, tag: &str) -> bool {
        match tag.strip_prefix('#') {
            Some(rest) => !rest.is_empty() && rest.chars().all(is_handle_char),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_usernames() {
        let rules = TwitterRules;
        assert!(rules.is_valid_username("@alexiskold"));
        assert!(rules.is_valid_username("@a"));
        assert!(rules.is_valid_username("@under_score_99"));
    }

    #[test]
    fn rejects_malformed_usernames() {
        let rules = TwitterRules;
        assert!(!rules.is_valid_username(""));
        assert!(!rules.is_valid_username("@"));
        assert!(!rules.is_valid_username("spam0r")); // no leading @
        assert!(!rules.is_valid_username("@has space"));
        assert!(!rules.is_valid_username("@way_too_long_for_twitter"));
        assert!(!rules.is_valid_username("@émoji"));
    }

    #[test]
    fn accepts_well_formed_hashtags() {
        let rules = TwitterRules;
        assert!(rules.is_valid_hashtag("#haiku"));
        assert!(rules.is_valid_hashtag("#rust_lang"));
        assert!(rules.is_valid_hashtag("#100days"));
    }

    #[test]
    fn rejects_malformed_hashtags() {
        let rules = TwitterRules;
        assert!(!rules.is_valid_hashtag(""));
        assert!(!rules.is_valid_hashtag("#"));
        assert!(!rules.is_valid_hashtag("haiku")); // no leading #
        assert!(!rules.is_valid_hashtag("#no tags"));
    }
}
