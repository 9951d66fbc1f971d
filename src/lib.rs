pub mod discovery;
pub mod output;
pub mod reader;
pub mod sentence_splitter;
pub mod stats;

// Re-export main types for convenient access
pub use sentence_splitter::{
    is_sentence_end, normalize_sentence, sentences, DetectedSentence, SentenceSplitter, Span,
};

pub use discovery::{resolve_inputs, DiscoveryConfig, InputSource};
pub use output::{write_sentences, OutputFormat};
pub use reader::{AsyncFileReader, ReadStats, ReaderConfig};
pub use stats::{FileStats, RunStats};
