use anyhow::Result;
use clap::Parser;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use aggtext::{
    resolve_inputs, write_sentences, AsyncFileReader, DiscoveryConfig, FileStats, OutputFormat,
    ReaderConfig, RunStats, SentenceSplitter,
};

#[derive(Parser, Debug)]
#[command(name = "aggtext")]
#[command(about = "Split text into sentences using punctuation and letter case")]
#[command(version)]
struct Args {
    /// Input files or glob patterns; reads stdin when omitted or given as "-"
    inputs: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = 8192)]
    buffer_size: usize,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries sentences, so logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting aggtext");
    info!(?args, "Parsed CLI arguments");

    if args.buffer_size == 0 {
        anyhow::bail!("Buffer size must be greater than zero");
    }

    let discovery_config = DiscoveryConfig {
        fail_fast: args.fail_fast,
    };
    let sources = resolve_inputs(&args.inputs, discovery_config)?;

    let reader = AsyncFileReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        buffer_size: args.buffer_size,
    });
    let splitter = SentenceSplitter::new();

    let run_start = Instant::now();
    let mut run_stats = RunStats::start();
    let mut out = BufWriter::new(std::io::stdout());

    for source in &sources {
        let file_start = Instant::now();
        let (text, read_stats) = reader.read_source(source).await?;

        if let Some(error) = read_stats.read_error {
            warn!("Skipping {}: {}", source, error);
            run_stats.record(FileStats::failed(
                read_stats.source,
                file_start.elapsed().as_millis() as u64,
                error,
            ));
            continue;
        }

        let sentences = splitter.detect(&text);
        write_sentences(&mut out, &read_stats.source, &sentences, args.format)?;

        info!(
            "Split {}: {} sentences from {} bytes (read in {}ms)",
            source,
            sentences.len(),
            read_stats.bytes_read,
            read_stats.duration_ms
        );
        run_stats.record(FileStats::success(
            read_stats.source,
            read_stats.chars_read,
            sentences.len() as u64,
            file_start.elapsed().as_millis() as u64,
        ));
    }

    out.flush()?;
    run_stats.finish(run_start.elapsed().as_millis() as u64);

    info!(
        "Processed {} inputs: {} sentences, {} failed",
        run_stats.files_processed, run_stats.total_sentences_detected, run_stats.files_failed
    );

    if let Some(stats_path) = &args.stats_out {
        run_stats.write_json(stats_path).await?;
    }

    Ok(())
}
