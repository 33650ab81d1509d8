use std::collections::HashMap;

use log::warn;
use serde::Serialize;

use super::lexicon::Lexicon;
use crate::term_stats::{CoMatrix, FrequencyTable};

/// A term and its semantic orientation.
pub type Orientation = (String, f64);

/// Pointwise mutual information of term pairs within one corpus.
pub struct SentimentScorer<'a> {
    frequencies: &'a FrequencyTable,
    matrix: &'a CoMatrix,
    documents: usize,
}

impl<'a> SentimentScorer<'a> {
    pub const fn new(
        frequencies: &'a FrequencyTable,
        matrix: &'a CoMatrix,
        documents: usize,
    ) -> Self {
        Self {
            frequencies,
            matrix,
            documents,
        }
    }

    /// Share of documents `term` was counted in, `P(t) = freq(t) / D`.
    pub fn probability(&self, term: &str) -> f64 {
        if self.documents == 0 {
            return 0.0;
        }
        self.frequencies.get(term) as f64 / self.documents as f64
    }

    /// `log2(P(a, b) / (P(a) * P(b)))`.
    ///
    /// `None` when the pair never co-occurs or either term was never seen: PMI
    /// is undefined there and must not be mistaken for zero association.
    pub fn pmi(&self, a: &str, b: &str) -> Option<f64> {
        let joint = self.matrix.get(a, b);
        let (p_a, p_b) = (self.probability(a), self.probability(b));
        if joint == 0 || p_a == 0.0 || p_b == 0.0 {
            return None;
        }

        let p_ab = joint as f64 / self.documents as f64;
        Some((p_ab / (p_a * p_b)).log2())
    }

    /// PMI summed over the positive lexicon minus PMI summed over the negative
    /// one. Undefined PMI contributes nothing. Reference for `orientations`.
    #[cfg(test)]
    fn orientation(&self, term: &str, positive: &Lexicon, negative: &Lexicon) -> f64 {
        let association = |lexicon: &Lexicon| -> f64 {
            lexicon
                .iter()
                .map(|other| match self.pmi(term, other) {
                    Some(pmi) => pmi,
                    None => 0.0,
                })
                .sum()
        };

        association(positive) - association(negative)
    }

    /// Orientation of every counted term, in first-seen order.
    ///
    /// Only partners a term actually co-occurs with can have a defined PMI, so
    /// this walks the co-occurrence pairs instead of whole lexicons.
    pub fn orientations(&self, positive: &Lexicon, negative: &Lexicon) -> Vec<Orientation> {
        let mut partners: HashMap<&str, Vec<&str>> = HashMap::new();
        for (low, high, _) in self.matrix.pairs() {
            partners.entry(low).or_default().push(high);
            partners.entry(high).or_default().push(low);
        }

        self.frequencies
            .iter()
            .map(|(term, _)| {
                let orientation = partners
                    .get(term)
                    .into_iter()
                    .flatten()
                    .map(|partner| {
                        let sign = match (positive.contains(partner), negative.contains(partner)) {
                            (true, false) => 1.0,
                            (false, true) => -1.0,
                            _ => return 0.0,
                        };
                        match self.pmi(term, partner) {
                            Some(pmi) => sign * pmi,
                            None => 0.0,
                        }
                    })
                    .sum::<f64>();

                (term.to_string(), orientation)
            })
            .collect()
    }
}

/// Every scored term ranked by orientation, plus both ends of the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    /// Descending by orientation; equal scores rank by term.
    pub ranking: Vec<Orientation>,
    pub top_positive: Vec<Orientation>,
    /// Tail of the ranking, most negative last.
    pub top_negative: Vec<Orientation>,
}

impl SentimentReport {
    /// Mean orientation over all ranked terms, `None` if nothing was ranked.
    pub fn mean_orientation(&self) -> Option<f64> {
        if self.ranking.is_empty() {
            return None;
        }

        let total: f64 = self.ranking.iter().map(|(_, orientation)| orientation).sum();
        Some(total / self.ranking.len() as f64)
    }
}

/// Scores the semantic orientation of every term in `frequencies`.
pub fn score(
    term_lists: &[Vec<String>],
    frequencies: &FrequencyTable,
    matrix: &CoMatrix,
    positive: &Lexicon,
    negative: &Lexicon,
    top_n: usize,
) -> SentimentReport {
    for term in positive.overlap(negative) {
        warn!("'{term}' is in both lexicons and cancels out");
    }

    let scorer = SentimentScorer::new(frequencies, matrix, term_lists.len());

    let mut ranking = scorer.orientations(positive, negative);
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let top_positive = ranking.iter().take(top_n).cloned().collect();
    let top_negative = ranking[ranking.len().saturating_sub(top_n)..].to_vec();

    SentimentReport {
        ranking,
        top_positive,
        top_negative,
    }
}
