//! # Cockney CLI
//!
//! The `cockney` command: rewrites a piece of text as rhyming slang.
//!
//! ```bash
//! cockney "Let's have a look at the stairs"
//! cockney --random --file letter.txt --output letter.cockney.txt
//! cockney --rhymes rhymes.json --report "Mind the stairs"
//! ```
//!
//! Rhymes are looked up online through a Datamuse-compatible service unless
//! an offline `--rhymes` map is given. When the service cannot be reached the
//! run stops before anything is written.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use cockney::{
    BigramTable, DatamuseRhymeSource, Memoized, RhymeSource, Rhymer, StaticRhymeSource,
    Transformation,
};
use tempfile::NamedTempFile;
use tracing::info;

mod cli;
pub use cli::*;

/// Run the command described by `cli` to completion.
///
/// The output is only written once the whole text has been rewritten.
pub async fn run(cli: &CockneyCli) -> Result<Transformation> {
    let text = read_input(cli).await?;
    let corpus = Arc::new(load_corpus(cli).await?);
    let source = rhyme_source(cli).await?;

    let mut rhymer = Rhymer::new(source, corpus, cli.options());
    let transformation = rhymer.transform(&text).await?;

    info!(
        replaced = transformation.replaced(),
        kept = transformation.kept(),
        "Rewrote text"
    );

    match &cli.output {
        Some(path) => write_atomically(path, &transformation.text)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(transformation.text.as_bytes())?;
            if !transformation.text.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    if cli.report {
        for outcome in &transformation.outcomes {
            eprintln!("{outcome}");
        }
    }

    Ok(transformation)
}

async fn read_input(cli: &CockneyCli) -> Result<String> {
    match (&cli.text, &cli.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not read {}", path.display())),
        (None, None) => anyhow::bail!("No text given"),
    }
}

async fn load_corpus(cli: &CockneyCli) -> Result<BigramTable> {
    let corpus = match &cli.corpus {
        Some(path) => BigramTable::from_file(path).await?,
        None => BigramTable::bundled().await?,
    };
    info!(collocations = corpus.len(), "Loaded bigram corpus");
    Ok(corpus)
}

async fn rhyme_source(cli: &CockneyCli) -> Result<Box<dyn RhymeSource>> {
    if let Some(path) = &cli.rhymes {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not read {}", path.display()))?;
        let source = StaticRhymeSource::from_json(&json)?;
        info!(words = source.len(), "Using offline rhymes");
        return Ok(Box::new(source));
    }

    let config = cli.datamuse_config();
    info!(endpoint = %config.endpoint, "Using online rhymes");
    Ok(Box::new(Memoized::new(DatamuseRhymeSource::new(config))))
}

/// Write `text` to a temporary file next to `path`, then move it into place.
fn write_atomically(path: &Path, text: &str) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Could not create a file in {}", parent_dir.display()))?;
    temp_file.write_all(text.as_bytes())?;
    temp_file
        .persist(path)
        .with_context(|| format!("Could not write {}", path.display()))?;

    Ok(())
}
