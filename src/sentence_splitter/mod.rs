// Single-pass sentence splitter over punctuation, whitespace and letter case

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod boundary;
pub mod normalization;

pub use boundary::{is_sentence_end, is_terminal_punctuation, TERMINAL_PUNCTUATION};
pub use normalization::{normalize_sentence, normalize_sentence_into, SentenceBuffer};

/// Position of a sentence in its source text, 1-based, columns counted in code points.
/// Both ends are inclusive: `end_col` is the column of the sentence's last rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

/// Line/column cursor for the rune currently under the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl Position {
    /// Move past `ch`. A newline ends its line.
    #[inline]
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

/// A sentence with its ordinal and location in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedSentence {
    pub index: usize,
    pub content: String,
    pub span: Span,
}

/// Heuristic sentence splitter.
///
/// A run of `.`, `!` or `?` closes a sentence when the input ends right after it, or
/// when it is followed by whitespace and then an upper-case letter. Anything else
/// (a lower-case word, a digit, a quote, another mark) keeps the sentence open.
/// There is no abbreviation list, so "Dr. Smith" splits and "etc. and" does not.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split text into trimmed, whitespace-collapsed sentences in input order
    pub fn split(&self, text: &str) -> Vec<String> {
        self.detect(text)
            .into_iter()
            .map(|sentence| sentence.content)
            .collect()
    }

    /// Split text and keep each sentence's index and span
    pub fn detect(&self, text: &str) -> Vec<DetectedSentence> {
        let runes: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut buffer = SentenceBuffer::with_capacity(text.len().min(256));
        let mut position = Position::default();

        let mut i = 0;
        while i < runes.len() {
            let rune = runes[i];
            buffer.push(rune, position);

            if is_terminal_punctuation(rune) {
                // Swallow the rest of the run so "!!!!" or "?!" is one candidate
                while i + 1 < runes.len() && is_terminal_punctuation(runes[i + 1]) {
                    position.advance(runes[i]);
                    i += 1;
                    buffer.push(runes[i], position);
                }

                if is_sentence_end(&runes[i + 1..]) {
                    emit(&mut buffer, &mut sentences);
                }
            }

            position.advance(runes[i]);
            i += 1;
        }

        // End of input closes whatever is left, with or without punctuation
        emit(&mut buffer, &mut sentences);

        debug!(
            "Detected {} sentences in {} runes",
            sentences.len(),
            runes.len()
        );
        sentences
    }

    /// Format a detected sentence as `index<TAB>content<TAB>(l,c,l,c)`
    pub fn format_sentence_output(&self, sentence: &DetectedSentence) -> String {
        format!(
            "{}\t{}\t({},{},{},{})",
            sentence.index,
            sentence.content,
            sentence.span.start_line,
            sentence.span.start_col,
            sentence.span.end_line,
            sentence.span.end_col
        )
    }
}

fn emit(buffer: &mut SentenceBuffer, sentences: &mut Vec<DetectedSentence>) {
    if let Some((content, span)) = buffer.take() {
        sentences.push(DetectedSentence {
            index: sentences.len(),
            content,
            span,
        });
    }
}

/// Split text into sentences with the default splitter
pub fn sentences(text: &str) -> Vec<String> {
    SentenceSplitter::new().split(text)
}
