// Streaming whitespace normalization for the sentence under construction

use super::{Position, Span};

/// Accumulates the runes of the sentence currently being scanned.
///
/// Any whitespace rune is stored as a single space, and a whitespace rune arriving
/// while the tail is already a space (or the buffer is still empty) is dropped.
/// The buffer therefore never holds leading whitespace or interior runs, and at most
/// one trailing space, which `take` strips.
#[derive(Debug, Default)]
pub struct SentenceBuffer {
    text: String,
    start: Option<Position>,
    end: Position,
}

impl SentenceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            start: None,
            end: Position::default(),
        }
    }

    /// Append one rune read at `position`
    pub fn push(&mut self, ch: char, position: Position) {
        if ch.is_whitespace() {
            if !self.text.is_empty() && !self.text.ends_with(' ') {
                self.text.push(' ');
            }
            return;
        }

        if self.start.is_none() {
            self.start = Some(position);
        }
        self.end = position;
        self.text.push(ch);
    }

    /// Hand out the trimmed sentence and its span, leaving the buffer empty.
    /// Returns None when nothing but whitespace was pushed since the last take.
    pub fn take(&mut self) -> Option<(String, Span)> {
        let start = self.start.take()?;

        let trimmed_len = self.text.trim_end().len();
        self.text.truncate(trimmed_len);

        let content = std::mem::take(&mut self.text);
        let span = Span {
            start_line: start.line,
            start_col: start.col,
            end_line: self.end.line,
            end_col: self.end.col,
        };
        Some((content, span))
    }
}

/// Collapse whitespace runs to single spaces and trim both ends
pub fn normalize_sentence(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_sentence_into(text, &mut result);
    result
}

/// Normalize into a supplied buffer to avoid allocation
pub fn normalize_sentence_into(text: &str, buffer: &mut String) {
    let mut sentence = SentenceBuffer {
        text: std::mem::take(buffer),
        start: None,
        end: Position::default(),
    };
    sentence.text.clear();

    let mut position = Position::default();
    for ch in text.chars() {
        sentence.push(ch, position);
        position.advance(ch);
    }

    // take() only yields when a non-whitespace rune was seen; otherwise the
    // buffer is already empty
    match sentence.take() {
        Some((content, _)) => *buffer = content,
        None => *buffer = sentence.text,
    }
}
