use anyhow::Result;
use glob::glob;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Configuration for input discovery behavior
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Where a block of text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_glob_pattern(arg: &str) -> bool {
    arg.contains(&['*', '?', '['][..])
}

/// Turn CLI input arguments into an ordered list of sources.
///
/// No arguments, or a lone `-`, means stdin. Arguments containing glob
/// metacharacters are expanded (sorted, directories skipped). Plain paths are kept
/// as given so a missing file surfaces later as a read error.
pub fn resolve_inputs(args: &[String], config: DiscoveryConfig) -> Result<Vec<InputSource>> {
    if args.is_empty() {
        debug!("No inputs given, reading stdin");
        return Ok(vec![InputSource::Stdin]);
    }

    let mut sources = Vec::with_capacity(args.len());
    for arg in args {
        if arg == "-" {
            sources.push(InputSource::Stdin);
        } else if is_glob_pattern(arg) {
            sources.extend(expand_pattern(arg, &config)?);
        } else {
            sources.push(InputSource::File(PathBuf::from(arg)));
        }
    }

    info!(
        "Resolved {} inputs from {} arguments",
        sources.len(),
        args.len()
    );
    Ok(sources)
}

fn expand_pattern(pattern: &str, config: &DiscoveryConfig) -> Result<Vec<InputSource>> {
    let paths = match glob(pattern) {
        Ok(paths) => paths,
        Err(e) => {
            let error_msg = format!("Invalid glob pattern {pattern}: {e}");
            if config.fail_fast {
                anyhow::bail!(error_msg);
            }
            warn!("{}", error_msg);
            return Ok(Vec::new());
        }
    };

    let mut matches = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => matches.push(path),
            Ok(path) => debug!("Skipping non-file match: {}", path.display()),
            Err(e) => {
                if config.fail_fast {
                    return Err(e.into());
                }
                warn!("Unreadable glob match for {}: {}", pattern, e);
            }
        }
    }

    if matches.is_empty() {
        if config.fail_fast {
            anyhow::bail!("Glob pattern matched no files: {pattern}");
        }
        warn!("Glob pattern matched no files: {}", pattern);
    }

    matches.sort();
    Ok(matches.into_iter().map(InputSource::File).collect())
}
