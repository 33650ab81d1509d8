pub mod co_matrix;
pub mod frequency;

pub use co_matrix::{co_occurrent_terms, generate_co_matrix, CoMatrix, PairCount};
pub use frequency::{
    calculate_term_frequencies, search_word_co_occurrences, FrequencyTable, TermCount,
};
