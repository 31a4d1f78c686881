//! Encoders that write a generated corpus to an output stream.

use std::io::{self, Write};

use serde::Serialize;
use topicsim_core::{Corpus, Dictionary};

use super::commands::{GenerationSummary, OutputFormat};

#[derive(Serialize)]
struct CorpusRecord<'a> {
    topics: Vec<TopicRecord<'a>>,
    mixtures: Vec<&'a [f64]>,
    documents: Vec<&'a [String]>,
}

#[derive(Serialize)]
struct TopicRecord<'a> {
    label: String,
    tokens: &'a [String],
    frequencies: &'a [f64],
}

impl<'a> From<&'a Corpus> for CorpusRecord<'a> {
    fn from(corpus: &'a Corpus) -> Self {
        Self {
            topics: corpus
                .topics()
                .iter()
                .map(|topic| TopicRecord {
                    label: topic.label(),
                    tokens: topic.tokens(),
                    frequencies: topic.frequencies(),
                })
                .collect(),
            mixtures: corpus.mixtures().iter().map(|m| m.weights()).collect(),
            documents: corpus.documents().iter().map(|d| d.tokens()).collect(),
        }
    }
}

/// Writes `summary` to `writer` in its requested format.
///
/// # Errors
/// Returns any I/O error raised by `writer`. JSON encoding failures are
/// reported as [`io::ErrorKind::Other`].
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use clap::Parser;
/// use topicsim_cli::cli::{Cli, render_summary, run_cli};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cli = Cli::parse_from(["topicsim", "generate", "--documents", "2", "--tokens", "3"]);
/// let summary = run_cli(cli)?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert_eq!(text.lines().count(), 2);
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &GenerationSummary, writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => render_text(&summary.corpus, writer),
        OutputFormat::Json => render_json(&summary.corpus, writer),
        OutputFormat::Bow => render_bow(&summary.corpus, writer),
    }
}

fn render_text(corpus: &Corpus, mut writer: impl Write) -> io::Result<()> {
    for document in corpus.documents() {
        writeln!(writer, "{}", document.join(" "))?;
    }
    Ok(())
}

fn render_json(corpus: &Corpus, mut writer: impl Write) -> io::Result<()> {
    serde_json::to_writer(&mut writer, &CorpusRecord::from(corpus)).map_err(io::Error::other)?;
    writeln!(writer)
}

fn render_bow(corpus: &Corpus, mut writer: impl Write) -> io::Result<()> {
    let dictionary = Dictionary::from_documents(corpus.documents());
    for (id, token) in dictionary.iter() {
        writeln!(writer, "{id}\t{token}")?;
    }
    writeln!(writer)?;
    for document in corpus.documents() {
        let line = dictionary
            .doc2bow(document.tokens())
            .into_iter()
            .map(|(id, count)| format!("{id}:{count}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
