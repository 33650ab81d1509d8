pub mod analysis;
pub mod corpus;
pub mod error;
pub mod sentiment;
pub mod term_stats;
pub mod tokenizer;
