use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::sentence_splitter::{DetectedSentence, SentenceSplitter, Span};

/// How detected sentences are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One sentence per line
    #[default]
    Text,
    /// index<TAB>sentence<TAB>(start_line,start_col,end_line,end_col)
    Tsv,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct JsonSentence<'a> {
    source: &'a str,
    index: usize,
    content: &'a str,
    span: &'a Span,
}

/// Write the sentences of one input in the requested format
pub fn write_sentences<W: Write>(
    writer: &mut W,
    source: &str,
    sentences: &[DetectedSentence],
    format: OutputFormat,
) -> Result<()> {
    let splitter = SentenceSplitter::new();

    for sentence in sentences {
        match format {
            OutputFormat::Text => writeln!(writer, "{}", sentence.content)?,
            OutputFormat::Tsv => writeln!(writer, "{}", splitter.format_sentence_output(sentence))?,
            OutputFormat::Json => {
                let record = JsonSentence {
                    source,
                    index: sentence.index,
                    content: &sentence.content,
                    span: &sentence.span,
                };
                serde_json::to_writer(&mut *writer, &record)?;
                writer.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
