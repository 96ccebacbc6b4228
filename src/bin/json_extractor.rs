use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use secure_extract::logger::init_logger;
use secure_extract::{Extractor, ExtractorConfig};
use serde_json::{json, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::info;

const CHUNK_LINES: usize = 1024;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract data from each line of a log with JSON output")]
struct Args {
    /// Path to log file
    #[arg(index = 1)]
    file_path: PathBuf,

    /// Process only first N lines (default: 1000)
    #[arg(short, long, default_value = "1000")]
    limit: usize,

    /// Output JSON file path
    #[arg(short, long, default_value = "findings.json")]
    output: PathBuf,

    /// Number of threads to use (default: 4)
    #[arg(short, long, default_value = "4")]
    threads: usize,

    /// JSON extractor configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ExtractorConfig::from_file(path)?,
        None => ExtractorConfig::default(),
    };
    let extractor = Extractor::new(config)?;

    println!("Processing file: {}", args.file_path.display());
    let file = File::open(&args.file_path)
        .with_context(|| format!("failed to open {}", args.file_path.display()))?;
    let reader = BufReader::with_capacity(1_000_000, file);

    let lines = reader
        .lines()
        .take(args.limit)
        .collect::<Result<Vec<String>, _>>()
        .context("failed to read input lines")?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()
        .context("failed to build thread pool")?;

    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")?
            .progress_chars("#>-"),
    );

    let mut findings: Vec<Value> = Vec::new();
    let mut rejected_lines = 0;

    for (chunk_idx, chunk) in lines.chunks(CHUNK_LINES).enumerate() {
        let outcomes = pool.install(|| extractor.extract_batch(chunk));

        for (offset, outcome) in outcomes.into_iter().enumerate() {
            let line_number = chunk_idx * CHUNK_LINES + offset + 1;
            match outcome {
                Ok(result) => {
                    for (category, values) in result.iter() {
                        for value in values {
                            findings.push(json!({
                                "line": line_number,
                                "type": category,
                                "value": value
                            }));
                        }
                    }
                }
                Err(rejected) => {
                    rejected_lines += 1;
                    findings.push(json!({
                        "line": line_number,
                        "status": "rejected",
                        "signatures": rejected.signatures().collect::<Vec<_>>()
                    }));
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    println!(
        "Found {} values in {} lines ({} rejected)",
        findings.len() - rejected_lines,
        lines.len(),
        rejected_lines
    );
    let json_output = serde_json::to_string_pretty(&findings)?;

    std::fs::write(&args.output, json_output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(output = %args.output.display(), "findings written");
    println!("Results written to {}", args.output.display());

    Ok(())
}
