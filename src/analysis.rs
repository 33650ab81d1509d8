use std::{fmt, io::BufRead, path::Path};

use log::info;
use serde::Serialize;

use crate::{
    corpus::{
        generate_term_list, generate_term_list_from_path,
        term_filter::{StopWords, TermFilter},
        TermLists,
    },
    error::Result,
    sentiment::{score, Lexicon, Orientation, SentimentReport},
    term_stats::{
        calculate_term_frequencies, co_occurrent_terms, generate_co_matrix,
        search_word_co_occurrences, PairCount, TermCount,
    },
    tokenizer::Tokenizer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub filter: TermFilter,
    /// Length of every ranked list in the report.
    pub top_n: usize,
    pub lowercase: bool,
    /// Also rank the terms co-occurring with this one.
    pub keyword: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            filter: TermFilter::TermsOnly,
            top_n: 10,
            lowercase: true,
            keyword: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordCoOccurrences {
    pub keyword: String,
    pub terms: Vec<TermCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub filter: TermFilter,
    pub records_scanned: usize,
    pub documents: usize,
    pub most_frequent: Vec<TermCount>,
    pub co_occurrent: Vec<PairCount>,
    pub keyword: Option<KeywordCoOccurrences>,
    pub sentiment: SentimentReport,
    pub mean_orientation: Option<f64>,
}

/// Runs the whole pipeline: term lists, frequencies, co-occurrences and
/// lexicon-based sentiment.
pub struct Analyzer {
    config: AnalysisConfig,
    tokenizer: Tokenizer,
    stop_words: StopWords,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        Ok(Self {
            config,
            tokenizer: Tokenizer::new()?,
            stop_words: StopWords::new(),
        })
    }

    /// Term lists of a stream that is not a corpus file, such as stdin.
    pub fn term_lists<R: BufRead>(&self, source: R) -> Result<TermLists> {
        generate_term_list(
            source,
            self.config.filter,
            &self.tokenizer,
            &self.stop_words,
            self.config.lowercase,
        )
    }

    pub fn analyze(
        &self,
        term_lists: &TermLists,
        positive: &Lexicon,
        negative: &Lexicon,
    ) -> Report {
        let top_n = self.config.top_n;

        let (frequencies, most_frequent) = calculate_term_frequencies(term_lists, top_n);
        let matrix = generate_co_matrix(term_lists);
        info!(
            "Counted {} distinct terms and {} co-occurring pairs",
            frequencies.len(),
            matrix.len()
        );

        let keyword = self.config.keyword.as_ref().map(|keyword| KeywordCoOccurrences {
            keyword: keyword.clone(),
            terms: search_word_co_occurrences(keyword, term_lists, top_n),
        });

        let sentiment = score(
            &term_lists.lists,
            &frequencies,
            &matrix,
            positive,
            negative,
            top_n,
        );

        Report {
            filter: self.config.filter,
            records_scanned: term_lists.records_scanned,
            documents: term_lists.len(),
            most_frequent,
            co_occurrent: co_occurrent_terms(&matrix, top_n),
            keyword,
            mean_orientation: sentiment.mean_orientation(),
            sentiment,
        }
    }

    pub fn run(&self, corpus: &Path, positive: &Lexicon, negative: &Lexicon) -> Result<Report> {
        info!("Analyzing {}", corpus.display());

        let term_lists = generate_term_list_from_path(
            corpus,
            self.config.filter,
            &self.tokenizer,
            &self.stop_words,
            self.config.lowercase,
        )?;

        Ok(self.analyze(&term_lists, positive, negative))
    }
}

fn write_orientations(f: &mut fmt::Formatter<'_>, orientations: &[Orientation]) -> fmt::Result {
    for (term, orientation) in orientations {
        writeln!(f, "({term:?}, {orientation})")?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most frequent terms:")?;
        for (term, count) in &self.most_frequent {
            writeln!(f, "({term:?}, {count})")?;
        }

        writeln!(f, "\nMost frequent co-occurrent terms:")?;
        for ((a, b), count) in &self.co_occurrent {
            writeln!(f, "(({a:?}, {b:?}), {count})")?;
        }

        if let Some(keyword) = &self.keyword {
            writeln!(
                f,
                "\nFor the word {}, the most frequent co-occurrent terms are:",
                keyword.keyword
            )?;
            for (term, count) in &keyword.terms {
                writeln!(f, "({term:?}, {count})")?;
            }
        }

        writeln!(f, "\nThe most positive terms:")?;
        write_orientations(f, &self.sentiment.top_positive)?;

        writeln!(f, "\nThe most negative terms:")?;
        write_orientations(f, &self.sentiment.top_negative)?;

        match self.mean_orientation {
            Some(mean) => write!(
                f,
                "\nFor a collection of {} posts, the average semantic orientation is {mean}",
                self.records_scanned
            ),
            None => write!(
                f,
                "\nFor a collection of {} posts, no term could be scored",
                self.records_scanned
            ),
        }
    }
}
