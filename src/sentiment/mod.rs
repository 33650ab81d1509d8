pub mod lexicon;
pub mod scorer;

pub use lexicon::{load_lexicon, Lexicon, LexiconEncoding};
pub use scorer::{score, Orientation, SentimentReport, SentimentScorer};
