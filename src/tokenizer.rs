use crate::error::{Error, Result};
use regex::Regex;

const EMOTICON: &str = r"[:=;][oO\-]?[D\)\]\(\]/\\OpP]";

/// Alternatives are tried in this order at every position; the first one that
/// matches wins, so the order decides how ambiguous text is split.
const TOKEN_PATTERNS: [&str; 9] = [
    EMOTICON,
    // HTML tags
    r"<[^>]+>",
    // @-mentions
    r"@[\w_]+",
    // hashtags
    r"#+[\w_]+[\w'_\-]*[\w_]+",
    // URLs
    r"http[s]?://(?:[a-z]|[0-9]|[$-_@.&amp;+]|[!*\(\),]|(?:%[0-9a-f][0-9a-f]))+",
    // numbers
    r"(?:\d+,?)+(?:\.?\d+)?",
    // words with - and '
    r"[a-z][a-z'\-_]+[a-z]",
    // other words
    r"[\w_]+",
    // anything else
    r"\S",
];

/// Splits post text into tokens, keeping emoticons, mentions, hashtags, URLs
/// and numbers intact.
pub struct Tokenizer {
    tokens: Regex,
    emoticon: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokens: Regex::new(&format!("(?i)(?:{})", TOKEN_PATTERNS.join("|")))
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
            emoticon: Regex::new(&format!("(?i)^(?:{EMOTICON})$"))
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Lazily yields the tokens of `text` with their original case. Every
    /// non-whitespace character ends up in exactly one token.
    pub fn tokenize<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.tokens.find_iter(text).map(|token| token.as_str())
    }

    pub fn is_emoticon(&self, token: &str) -> bool {
        self.emoticon.is_match(token)
    }

    /// Tokenizes `text` and, when `lowercase` is set, lowercases every token
    /// except emoticons (`:D` must not turn into `:d`).
    pub fn preprocess(&self, text: &str, lowercase: bool) -> Vec<String> {
        self.tokenize(text)
            .map(|token| {
                if lowercase && !self.is_emoticon(token) {
                    token.to_lowercase()
                } else {
                    token.to_string()
                }
            })
            .collect()
    }
}
