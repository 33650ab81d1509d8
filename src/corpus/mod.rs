pub mod constants;
pub mod post;
pub mod term_filter;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::{debug, info};
use walkdir::WalkDir;

use self::{
    constants::{CORPUS_EXTENSION, PROGRESS_INTERVAL},
    post::Post,
    term_filter::{StopWords, TermFilter},
};
use crate::{
    error::{Error, Result},
    tokenizer::Tokenizer,
};

/// The filtered terms of one post.
pub type TermList = Vec<String>;

/// Term lists of every usable post in a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermLists {
    pub lists: Vec<TermList>,
    /// Records read, including the ones that were skipped.
    pub records_scanned: usize,
}

impl TermLists {
    pub const fn new(lists: Vec<TermList>, records_scanned: usize) -> Self {
        Self {
            lists,
            records_scanned,
        }
    }

    /// Number of documents, i.e. posts that produced a term list.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl<'a> IntoIterator for &'a TermLists {
    type Item = &'a TermList;
    type IntoIter = std::slice::Iter<'a, TermList>;

    fn into_iter(self) -> Self::IntoIter {
        self.lists.iter()
    }
}

/// Reads line-delimited posts from `source` and builds one term list per post.
///
/// Records that are not valid JSON or have no `text` are counted as scanned but
/// produce no term list. Blank lines are not records.
pub fn generate_term_list<R: BufRead>(
    mut source: R,
    filter: TermFilter,
    tokenizer: &Tokenizer,
    stop_words: &StopWords,
    lowercase: bool,
) -> Result<TermLists> {
    let mut lists = Vec::new();
    let mut records_scanned = 0;
    let mut line = Vec::new();

    loop {
        line.clear();
        if source.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        records_scanned += 1;

        match Post::parse_text(&line) {
            Ok(text) => {
                let tokens = tokenizer.preprocess(&text, lowercase);
                lists.push(filter.apply(tokens, stop_words));
            }
            Err(e) => debug!("Skipping record {records_scanned}: {e}"),
        }

        if records_scanned % PROGRESS_INTERVAL == 0 {
            info!("Processed {records_scanned} records");
        }
    }

    info!(
        "Scanned {records_scanned} records, kept {} posts with filter {filter}",
        lists.len()
    );

    Ok(TermLists::new(lists, records_scanned))
}

/// Opens the corpus at `path` and builds its term lists.
pub fn generate_term_list_from_path(
    path: &Path,
    filter: TermFilter,
    tokenizer: &Tokenizer,
    stop_words: &StopWords,
    lowercase: bool,
) -> Result<TermLists> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::IO(e),
    })?;

    generate_term_list(
        BufReader::new(file),
        filter,
        tokenizer,
        stop_words,
        lowercase,
    )
}

/// Resolves a corpus given either as a path or as a name inside `data_dir`.
/// A name without an extension gets `.json` appended.
pub fn resolve_corpus(data_dir: &Path, name: &str) -> Result<PathBuf> {
    let direct = PathBuf::from(name);
    if direct.is_file() {
        return Ok(direct);
    }

    let mut file_name = direct;
    if file_name.extension().is_none() {
        file_name.set_extension(CORPUS_EXTENSION);
    }

    let candidate = data_dir.join(&file_name);
    if candidate.is_file() {
        return Ok(candidate);
    }

    Err(Error::CorpusNotFound {
        name: name.to_string(),
        available: available_corpora(data_dir),
    })
}

/// Names of the corpus files directly inside `data_dir`, sorted.
pub fn available_corpora(data_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|extension| extension == CORPUS_EXTENSION)
        })
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();

    names.sort();
    names
}
