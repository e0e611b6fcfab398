use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use content_core::{
    clean_gutenberg_text, ArxivExtractor, BookExtractor, ContentExtractor, LettersExtractor,
};
use content_engine::{fetch_text, Fetcher, JsonPersister, LogProgressSink};
use content_logging::{content_debug, content_info};

use crate::sources::{SourceUrls, BOOK_FILENAME, LETTERS_FILENAME, PAPER_FILENAME};

/// Which content types to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub book: bool,
    pub paper: bool,
    pub letter: bool,
}

impl Selection {
    pub fn all() -> Self {
        Self {
            book: true,
            paper: true,
            letter: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    pub arxiv_id: String,
    pub sources: SourceUrls,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: Vec<PathBuf>,
}

/// How fetched text is prepared before extraction.
#[derive(Debug, Clone, Copy)]
enum Preparation {
    StripGutenberg,
    Raw,
}

/// Fetch, extract and save each selected content type in turn.
///
/// Fetch failures and empty extractions skip that content type. Write failures
/// abort the run.
pub async fn run(selection: Selection, config: &RunConfig, fetcher: &dyn Fetcher) -> Result<RunSummary> {
    let persister = JsonPersister::new(config.output_dir.clone());
    let mut summary = RunSummary::default();

    if selection.book {
        println!("Fetching Les Misérables from Project Gutenberg...");
        let saved = fetch_and_save(
            fetcher,
            &persister,
            &config.sources.book,
            Preparation::StripGutenberg,
            &BookExtractor,
            BOOK_FILENAME,
        )
        .await?;
        summary.saved.extend(saved);
    }

    if selection.paper {
        println!("Fetching arXiv paper {}...", config.arxiv_id);
        let saved = fetch_and_save(
            fetcher,
            &persister,
            &config.sources.arxiv_query(&config.arxiv_id),
            Preparation::Raw,
            &ArxivExtractor::new(config.arxiv_id.as_str()),
            PAPER_FILENAME,
        )
        .await?;
        summary.saved.extend(saved);
    }

    if selection.letter {
        println!("Fetching Lincoln Letters from Project Gutenberg...");
        let saved = fetch_and_save(
            fetcher,
            &persister,
            &config.sources.letters,
            Preparation::StripGutenberg,
            &LettersExtractor,
            LETTERS_FILENAME,
        )
        .await?;
        summary.saved.extend(saved);
    }

    print!("{}", completion_report(&config.output_dir, &config.arxiv_id));
    content_info!("run finished; {} file(s) saved", summary.saved.len());
    Ok(summary)
}

async fn fetch_and_save<E: ContentExtractor>(
    fetcher: &dyn Fetcher,
    persister: &JsonPersister,
    url: &str,
    preparation: Preparation,
    extractor: &E,
    filename: &str,
) -> Result<Option<PathBuf>> {
    let Some(body) = fetch_text(fetcher, url, &LogProgressSink).await else {
        return Ok(None);
    };
    if body.is_empty() {
        content_debug!("empty body from {}; skipping {}", url, filename);
        return Ok(None);
    }

    let text = match preparation {
        Preparation::StripGutenberg => clean_gutenberg_text(&body),
        Preparation::Raw => body.as_str(),
    };
    let Some(record) = extractor.extract(text) else {
        content_debug!("nothing extracted from {}; skipping {}", url, filename);
        return Ok(None);
    };

    let path = persister
        .save(filename, &record)
        .with_context(|| format!("failed to save {filename} to {}", persister.dir().display()))?;
    println!("Saved: {}", path.display());
    Ok(Some(path))
}

/// Closing report with licence attribution, printed whatever was saved.
pub fn completion_report(output_dir: &Path, arxiv_id: &str) -> String {
    format!(
        "\nDone! Content saved to {}/\n\
         \nContent licenses:\n  \
         - Les Misérables: Public Domain (Project Gutenberg)\n  \
         - HyperTransformer: CC BY 4.0 (arXiv:{arxiv_id})\n  \
         - Lincoln Letters: Public Domain (Project Gutenberg)\n",
        output_dir.display()
    )
}
