use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use secure_extract::config::parse_category_list;
use secure_extract::logger::init_logger;
use secure_extract::{Extractor, ExtractorConfig, Report};
use tracing::info;

/// Extract emails, URLs, phone numbers, card numbers and times from text,
/// masking sensitive values and rejecting injection attempts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input text (reads stdin when omitted)
    #[arg(index = 1)]
    file_path: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(short, long, default_value = "extraction_results.json")]
    output: PathBuf,

    /// JSON extractor configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extract only these categories (comma-separated)
    #[arg(short, long)]
    categories: Option<String>,

    /// Exclude specific categories (comma-separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Reject inputs longer than this many bytes
    #[arg(long)]
    max_input: Option<usize>,

    /// Print every extracted value
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<ExtractorConfig> {
    let mut config = match &args.config {
        Some(path) => ExtractorConfig::from_file(path)?,
        None => ExtractorConfig::default(),
    };

    if let Some(list) = &args.categories {
        config.categories = Some(parse_category_list(list)?);
    }
    if let Some(list) = &args.exclude {
        config.exclude = parse_category_list(list)?;
    }
    if let Some(max) = args.max_input {
        config.max_input_len = max;
    }
    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<ExitCode> {
    init_logger();
    let args = Args::parse();

    let config = load_config(&args)?;
    let extractor = Extractor::new(config).context("failed to build extractor")?;
    let text = read_input(args.file_path.as_ref())?;

    let report = Report::from(extractor.extract(&text));

    match &report {
        Report::Rejected { signatures, .. } => {
            println!("Input rejected due to security concerns: {}", signatures.join(", "));
        }
        Report::Ok { data } => {
            println!("=== Data Extraction Results ===");
            for (category, values) in data.iter().filter(|(_, v)| !v.is_empty()) {
                println!("\n{}: {}", category.as_str().to_uppercase(), values.len());
                if args.verbose {
                    for value in values {
                        println!("  - {}", value);
                    }
                }
            }
        }
    }

    fs::write(&args.output, serde_json::to_string_pretty(&report)?)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(output = %args.output.display(), "report written");

    println!("\nResults saved to {}", args.output.display());
    println!(
        "Total data types extracted: {}",
        report.data().non_empty_categories().count()
    );

    Ok(if report.is_rejected() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn flags_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn short_flags_select_categories() {
        let args = Args::try_parse_from([
            "secure-extract",
            "input.txt",
            "--config",
            "extractor.json",
            "-c",
            "email,phone",
            "-e",
            "time",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("extractor.json")));
        assert_eq!(args.categories.as_deref(), Some("email,phone"));
        assert_eq!(args.exclude.as_deref(), Some("time"));
        assert_eq!(args.output, PathBuf::from("extraction_results.json"));
    }
}
