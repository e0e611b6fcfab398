use std::path::PathBuf;

use clap::Parser;
use content_core::DEFAULT_ARXIV_ID;
use log::LevelFilter;

use crate::logging::LogDestination;
use crate::runner::{RunConfig, Selection};
use crate::sources::{SourceUrls, ARXIV_API_URL, BOOK_URL, LETTERS_URL};

pub const DEFAULT_OUTPUT_DIR: &str = "examples/.content";

/// Fetch CC/Public Domain content for moderndoc examples
#[derive(Parser, Debug)]
#[command(name = "content_fetcher", version, about)]
pub struct Cli {
    /// Fetch Les Misérables
    #[arg(long)]
    pub book: bool,

    /// Fetch HyperTransformer (CC BY 4.0)
    #[arg(long)]
    pub paper: bool,

    /// Fetch Lincoln Letters
    #[arg(long)]
    pub letter: bool,

    /// Fetch all content (the default when no content flag is given)
    #[arg(long)]
    pub all: bool,

    /// Directory the JSON files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// arXiv identifier of the paper to fetch
    #[arg(long, default_value = DEFAULT_ARXIV_ID)]
    pub arxiv_id: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, default_value = BOOK_URL, hide = true)]
    pub book_url: String,

    #[arg(long, default_value = LETTERS_URL, hide = true)]
    pub letters_url: String,

    #[arg(long, default_value = ARXIV_API_URL, hide = true)]
    pub arxiv_api: String,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn selection(&self) -> Selection {
        if self.all || !(self.book || self.paper || self.letter) {
            return Selection::all();
        }
        Selection {
            book: self.book,
            paper: self.paper,
            letter: self.letter,
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            output_dir: self.output_dir.clone(),
            arxiv_id: self.arxiv_id.clone(),
            sources: SourceUrls {
                book: self.book_url.clone(),
                letters: self.letters_url.clone(),
                arxiv_api: self.arxiv_api.clone(),
            },
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::Both(path.clone()),
            None => LogDestination::Terminal,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
