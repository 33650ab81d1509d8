use std::{io, path::PathBuf, process};

use clap::Parser;
use log::{error, info};
use tweet_sentiment::{
    analysis::{AnalysisConfig, Analyzer},
    corpus::{resolve_corpus, term_filter::TermFilter},
    error::Result,
    sentiment::{load_lexicon, LexiconEncoding},
};

const STDIN: &str = "-";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Corpus of line-delimited JSON posts, as a path, a name inside the data
    /// directory, or `-` for stdin
    corpus: String,

    /// Directory holding collected corpora
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Term filter: default, remove_stop_words, hashtags, terms_only,
    /// single_terms, single_stop_words or bigrams
    #[arg(short, long, default_value = "terms_only")]
    filter: String,

    /// Number of entries in every ranked list
    #[arg(short = 'n', long, default_value_t = 10)]
    top: usize,

    /// Lexicon of positive terms, one per line
    #[arg(long, default_value = "term_database/positive_words.txt")]
    positive_lexicon: PathBuf,

    /// Lexicon of negative terms, one per line
    #[arg(long, default_value = "term_database/negative_words.txt")]
    negative_lexicon: PathBuf,

    /// Encoding of the lexicon files: latin1 or utf8
    #[arg(long, default_value = "latin1")]
    lexicon_encoding: String,

    /// Also list the terms co-occurring with this word
    #[arg(short, long)]
    keyword: Option<String>,

    /// Keep the original case of tokens
    #[arg(long, default_value = "false")]
    keep_case: bool,

    /// Print the report as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Configuration errors abort before the corpus is touched.
    let filter: TermFilter = args.filter.parse()?;
    let encoding: LexiconEncoding = args.lexicon_encoding.parse()?;

    info!("Loading {encoding} lexicons");
    let positive = load_lexicon(&args.positive_lexicon, encoding)?;
    let negative = load_lexicon(&args.negative_lexicon, encoding)?;

    let analyzer = Analyzer::new(AnalysisConfig {
        filter,
        top_n: args.top,
        lowercase: !args.keep_case,
        keyword: args.keyword,
    })?;

    let report = if args.corpus == STDIN {
        info!("Analyzing stdin");
        let term_lists = analyzer.term_lists(io::stdin().lock())?;
        analyzer.analyze(&term_lists, &positive, &negative)
    } else {
        let corpus = resolve_corpus(&args.data_dir, &args.corpus)?;
        analyzer.run(&corpus, &positive, &negative)?
    };

    if args.json {
        serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
        println!();
    } else {
        println!("{report}");
    }

    Ok(())
}
