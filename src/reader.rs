use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::discovery::InputSource;

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for a single read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub source: String,
    pub chars_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Async reader that loads a whole input as one block of text
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read any input source
    pub async fn read_source(&self, source: &InputSource) -> Result<(String, ReadStats)> {
        match source {
            InputSource::Stdin => self.read_stdin().await,
            InputSource::File(path) => self.read_text(path).await,
        }
    }

    /// Read a file into memory with buffered async I/O.
    ///
    /// Open failures and invalid UTF-8 are returned as `Err` when fail-fast is set;
    /// otherwise they come back as empty text with `read_error` filled in.
    pub async fn read_text<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = Instant::now();

        debug!("Starting async read of file: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", path.display(), e);
                return self.failed(path.display().to_string(), error_msg, start_time);
            }
        };

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        self.read_all(path.display().to_string(), reader, start_time)
            .await
    }

    /// Read all of stdin
    pub async fn read_stdin(&self) -> Result<(String, ReadStats)> {
        let start_time = Instant::now();
        let reader = BufReader::with_capacity(self.config.buffer_size, tokio::io::stdin());
        self.read_all(InputSource::Stdin.to_string(), reader, start_time)
            .await
    }

    async fn read_all<R: AsyncRead + Unpin>(
        &self,
        source: String,
        mut reader: R,
        start_time: Instant,
    ) -> Result<(String, ReadStats)> {
        let mut text = String::new();
        if let Err(e) = reader.read_to_string(&mut text).await {
            // read_to_string reports invalid UTF-8 as InvalidData
            let error_msg = format!("Failed to read {source}: {e}");
            return self.failed(source, error_msg, start_time);
        }

        let stats = ReadStats {
            chars_read: text.chars().count() as u64,
            bytes_read: text.len() as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error: None,
            source,
        };

        info!(
            "Read {}: {} chars, {} bytes in {}ms",
            stats.source, stats.chars_read, stats.bytes_read, stats.duration_ms
        );
        Ok((text, stats))
    }

    fn failed(
        &self,
        source: String,
        error_msg: String,
        start_time: Instant,
    ) -> Result<(String, ReadStats)> {
        warn!("{}", error_msg);

        if self.config.fail_fast {
            return Err(anyhow::anyhow!(error_msg));
        }

        let stats = ReadStats {
            source,
            chars_read: 0,
            bytes_read: 0,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error: Some(error_msg),
        };
        Ok((String::new(), stats))
    }
}
