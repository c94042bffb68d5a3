//! Tag text normalization and tokenization.

use std::sync::OnceLock;

use regex::Regex;

use crate::stopwords::StopWords;

/// Lower-case tag text and turn list separators into whitespace, so a tag
/// list becomes one flat token stream.
#[must_use]
pub fn normalize_tags(tags: &str) -> String {
    tags.to_lowercase().replace(',', " ")
}

fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Tokens are runs of two or more word characters; punctuation and
    // single characters are dropped.
    RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token regex is valid"))
}

/// Splits normalized tag text into vocabulary tokens.
#[derive(Debug, Clone)]
pub struct TagTokenizer {
    stop_words: Option<StopWords>,
}

impl TagTokenizer {
    /// A tokenizer that drops English stop words.
    #[must_use]
    pub fn english() -> Self {
        Self {
            stop_words: Some(StopWords::english()),
        }
    }

    /// A tokenizer that keeps every token.
    #[must_use]
    pub fn without_stop_words() -> Self {
        Self { stop_words: None }
    }

    /// Normalize raw tag text and return its tokens in order.
    pub fn tokenize(&self, tags: &str) -> Vec<String> {
        let text = normalize_tags(tags);
        token_pattern()
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|token| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.contains(token))
            })
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags() {
        assert_eq!(
            normalize_tags("TV Dramas, TV Mysteries"),
            "tv dramas  tv mysteries"
        );
    }

    #[test]
    fn test_tokenize_tag_list() {
        let tokens = TagTokenizer::english().tokenize("International TV Shows, TV Dramas");
        assert_eq!(tokens, vec!["international", "tv", "shows", "tv", "dramas"]);
    }

    #[test]
    fn test_tokenize_splits_punctuation() {
        let tokens = TagTokenizer::english().tokenize("Sci-Fi & Fantasy, Action & Adventure");
        assert_eq!(
            tokens,
            vec!["sci", "fi", "fantasy", "action", "adventure"]
        );
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        let tokens = TagTokenizer::without_stop_words().tokenize("a b cd");
        assert_eq!(tokens, vec!["cd"]);
    }

    #[test]
    fn test_tokenize_stop_words() {
        let text = "Movies for the Family, Stand-Up Comedy & Talk Shows";
        let english = TagTokenizer::english().tokenize(text);
        assert!(!english.contains(&String::from("for")));
        assert!(!english.contains(&String::from("the")));
        assert!(!english.contains(&String::from("up")));

        let all = TagTokenizer::without_stop_words().tokenize(text);
        assert!(all.contains(&String::from("for")));
        assert!(all.contains(&String::from("the")));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(TagTokenizer::english().tokenize("").is_empty());
        assert!(TagTokenizer::english().tokenize(" , ,").is_empty());
    }
}
