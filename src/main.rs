use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser as _, Subcommand};
use tracing::{info, warn};

use youdao_page::{parse_file, Parser, Settings, WordResponse};

#[derive(clap::Parser)]
#[command(name = "youdao-page", about = "Parse Youdao dictionary result pages into JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one page and print the result as JSON
    Parse {
        /// HTML file (default: stdin)
        file: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print only the page shape
    Classify {
        /// HTML file (default: stdin)
        file: Option<PathBuf>,
    },
    /// Print the lookup URL for a word
    Url {
        word: String,
    },
    /// Parse every .html file in a directory, one JSON line per file
    Batch {
        dir: PathBuf,
        /// Max files to parse
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    let parser = settings.parser();

    match cli.command {
        Commands::Parse { file, pretty } => {
            let result = parser.parse(&read_input(file.as_deref())?);
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", json);
        }
        Commands::Classify { file } => {
            let result = parser.parse(&read_input(file.as_deref())?);
            println!("{}", result.response_type());
        }
        Commands::Url { word } => {
            println!("{}", settings.lookup_url(&word));
        }
        Commands::Batch { dir, limit } => {
            let t0 = Instant::now();
            let files = html_files(&dir, limit)?;
            if files.is_empty() {
                println!("No .html files in {}", dir.display());
                return Ok(());
            }
            let counts = parse_batch(&parser, &files)?;
            info!(files = files.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "batch done");
            let summary: Vec<String> = counts.iter().map(|(k, v)| format!("{} {}", v, k)).collect();
            eprintln!("Parsed {} files: {}", files.len(), summary.join(", "));
        }
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(youdao_page::Error::from)?;
            Ok(buf)
        }
    }
}

fn html_files(dir: &Path, limit: Option<usize>) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "html"))
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }
    Ok(files)
}

/// Parse files in parallel, print results in input order, count tags.
fn parse_batch(parser: &Parser, files: &[PathBuf]) -> anyhow::Result<BTreeMap<&'static str, usize>> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut counts = BTreeMap::new();

    for chunk in files.chunks(500) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|path| (path, parse_file(parser, path)))
            .collect();

        for (path, result) in results {
            match result {
                Ok(response) => {
                    *counts.entry(response.response_type().as_str()).or_insert(0) += 1;
                    print_line(path, &response)?;
                }
                Err(e) => warn!("skipping {}: {}", path.display(), e),
            }
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(counts)
}

fn print_line(path: &Path, response: &WordResponse) -> anyhow::Result<()> {
    let line = serde_json::json!({ "file": path.display().to_string(), "result": response });
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}
