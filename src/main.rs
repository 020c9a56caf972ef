#![forbid(unsafe_code)]
//! # Distant Reading CLI
//!
//! Command-line front end of the `distant_reading` crate. It analyzes every
//! `pg*.txt` file of a directory (Project Gutenberg naming) and writes one JSON
//! report with per-text statistics and pairwise vocabulary comparisons.
//!
//! ## Example
//! ```bash
//! cargo run --release -- path/to/corpus --output analysis_data.json
//! ```
//!
//! See `--help` for all available options.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use distant_reading::{
    AnalysisOptions, Stopwords, VaderScorer, analyze_path, file_size_kb, print_failed_files,
    save_report,
};
use log::error;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Corpus directory or single text file
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file for the JSON report (overwritten on every run)
    #[arg(long, default_value = "analysis_data.json")]
    output: PathBuf,

    /// File-name prefix of corpus files inside the directory
    #[arg(long, default_value = "pg")]
    prefix: String,

    /// Optional path to additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Number of most frequent words listed per text
    #[arg(long, default_value_t = 200)]
    top_n: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let rule = "=".repeat(60);
    println!("{rule}");
    println!("Distant Reading Analysis");
    println!("{rule}");

    let mut stopwords = Stopwords::english();
    if let Some(extra) = &cli.stopwords {
        if let Err(e) = stopwords.extend_from_file(extra) {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
    let vader = VaderScorer::new();
    let options = AnalysisOptions {
        top_n: cli.top_n,
        file_prefix: cli.prefix.clone(),
        ..AnalysisOptions::default()
    };

    let outcome = match analyze_path(&cli.path, &stopwords, &vader, &options) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    };
    let report = &outcome.report;

    println!("\nAnalyzed {} text files", report.texts.len());
    for text in &report.texts {
        println!("\n{} ({} by {})", text.filename, text.title, text.author);
        println!("  - Total words: {}", text.style_metrics.total_words);
        println!("  - Unique words: {}", text.style_metrics.unique_words);
        println!(
            "  - Vocabulary richness: {}",
            text.style_metrics.vocabulary_richness
        );
        println!("  - Sentiment (compound): {}", text.sentiment.compound);
    }

    let written = match save_report(report, &cli.output) {
        Ok(path) => path,
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("\n{rule}");
    println!("Analysis complete! Data saved to {}", written.display());
    println!("{rule}");
    println!("\nSummary:");
    println!("  - Texts analyzed: {}", report.texts.len());
    println!("  - Comparisons generated: {}", report.comparisons.len());
    match file_size_kb(&written) {
        Ok(kb) => println!("  - Output file size: {kb:.2} KB"),
        Err(e) => error!("Error: {}", e),
    }

    if !outcome.failed_files.is_empty() {
        print_failed_files(&outcome.failed_files);
        process::exit(1);
    }
}
