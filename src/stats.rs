// Per-input and per-run statistics written by --stats-out

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Per-input processing statistics
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileStats {
    /// Input path, or `<stdin>`
    pub path: String,
    /// Number of characters processed
    pub chars_processed: u64,
    /// Number of sentences detected
    pub sentences_detected: u64,
    /// Read plus split time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in characters per second
    pub chars_per_sec: f64,
    /// "success" or "failed"
    pub status: String,
    /// Error message if processing failed
    pub error: Option<String>,
}

impl FileStats {
    pub fn success(
        path: String,
        chars_processed: u64,
        sentences_detected: u64,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            path,
            chars_processed,
            sentences_detected,
            processing_time_ms,
            chars_per_sec: chars_per_sec(chars_processed, processing_time_ms),
            status: "success".to_string(),
            error: None,
        }
    }

    pub fn failed(path: String, processing_time_ms: u64, error: String) -> Self {
        Self {
            path,
            chars_processed: 0,
            sentences_detected: 0,
            processing_time_ms,
            chars_per_sec: 0.0,
            status: "failed".to_string(),
            error: Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Aggregate statistics for one CLI run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    pub run_start_unix_secs: u64,
    pub total_processing_time_ms: u64,
    pub total_chars_processed: u64,
    pub total_sentences_detected: u64,
    pub overall_chars_per_sec: f64,
    pub files_processed: u64,
    pub files_failed: u64,
    pub file_stats: Vec<FileStats>,
}

impl RunStats {
    /// Start an empty run stamped with the current wall-clock time
    pub fn start() -> Self {
        let run_start_unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        Self {
            run_start_unix_secs,
            total_processing_time_ms: 0,
            total_chars_processed: 0,
            total_sentences_detected: 0,
            overall_chars_per_sec: 0.0,
            files_processed: 0,
            files_failed: 0,
            file_stats: Vec::new(),
        }
    }

    /// Fold one input's statistics into the totals
    pub fn record(&mut self, file: FileStats) {
        if file.is_failed() {
            self.files_failed += 1;
        } else {
            self.files_processed += 1;
            self.total_chars_processed += file.chars_processed;
            self.total_sentences_detected += file.sentences_detected;
        }
        self.file_stats.push(file);
    }

    /// Close the run with its wall-clock duration
    pub fn finish(&mut self, total_processing_time_ms: u64) {
        self.total_processing_time_ms = total_processing_time_ms;
        self.overall_chars_per_sec =
            chars_per_sec(self.total_chars_processed, total_processing_time_ms);
    }

    /// Write pretty-printed JSON to `path`
    pub async fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        info!("Wrote run stats to {}", path.display());
        Ok(())
    }
}

fn chars_per_sec(chars: u64, millis: u64) -> f64 {
    if millis > 0 {
        chars as f64 / (millis as f64 / 1000.0)
    } else {
        0.0
    }
}
