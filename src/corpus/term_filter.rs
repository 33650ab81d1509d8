use std::{collections::HashSet, fmt, str::FromStr};

use serde::Serialize;

use super::constants::{ENGLISH_STOP_WORDS, PUNCTUATION, SOCIAL_STOP_WORDS};
use crate::error::{Error, Result};

/// Tokens that carry no meaning for term statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        let words = ENGLISH_STOP_WORDS
            .iter()
            .chain(SOCIAL_STOP_WORDS.iter())
            .map(|word| (*word).to_string())
            .chain(PUNCTUATION.chars().map(String::from))
            .collect();

        Self { words }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}

/// Which tokens of a post end up in its term list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermFilter {
    /// Every token.
    Default,
    RemoveStopWords,
    /// Only tokens starting with `#`.
    Hashtags,
    /// No stop-words, hashtags or mentions.
    TermsOnly,
    /// Every token, once per post.
    SingleTerms,
    /// No stop-words, once per post.
    SingleStopWords,
    /// Adjacent pairs of the non stop-word tokens, joined by a space.
    Bigrams,
}

impl TermFilter {
    pub const ALL: [Self; 7] = [
        Self::Default,
        Self::RemoveStopWords,
        Self::Hashtags,
        Self::TermsOnly,
        Self::SingleTerms,
        Self::SingleStopWords,
        Self::Bigrams,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::RemoveStopWords => "remove_stop_words",
            Self::Hashtags => "hashtags",
            Self::TermsOnly => "terms_only",
            Self::SingleTerms => "single_terms",
            Self::SingleStopWords => "single_stop_words",
            Self::Bigrams => "bigrams",
        }
    }

    /// Turns the preprocessed tokens of one post into its term list.
    pub fn apply(self, tokens: Vec<String>, stop_words: &StopWords) -> Vec<String> {
        let without_stop_words = |tokens: Vec<String>| {
            tokens
                .into_iter()
                .filter(move |token| !stop_words.contains(token))
        };

        match self {
            Self::Default => tokens,
            Self::RemoveStopWords => without_stop_words(tokens).collect(),
            Self::Hashtags => tokens
                .into_iter()
                .filter(|token| token.starts_with('#'))
                .collect(),
            Self::TermsOnly => without_stop_words(tokens)
                .filter(|token| !token.starts_with(['#', '@']))
                .collect(),
            Self::SingleTerms => unique(tokens),
            Self::SingleStopWords => unique(without_stop_words(tokens).collect()),
            Self::Bigrams => without_stop_words(tokens)
                .collect::<Vec<_>>()
                .windows(2)
                .map(|pair| format!("{} {}", pair[0], pair[1]))
                .collect(),
        }
    }
}

fn unique(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();

    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

impl FromStr for TermFilter {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.name() == name)
            .ok_or_else(|| Error::InvalidFilterKind(name.to_string()))
    }
}

impl fmt::Display for TermFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
