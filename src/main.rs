//! CLI front-end for the crossword layout engine.
//!
//! Reads a JSON array of `{word, clue}` objects (or their accepted
//! aliases) from a file or stdin, normalizes them, generates a layout, and
//! prints either an ASCII rendering with clue lists or the full
//! `LayoutResult` as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crossword_layout::{create_puzzle, normalize, CreateOptions, GenerationConfig};

/// Generate a crossword layout from a list of (answer, clue) pairs.
#[derive(Parser, Debug)]
#[command(name = "crossword-layout", version, about)]
struct Cli {
    /// Path to a JSON file of entries. Reads stdin if omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// How many entries to place.
    #[arg(short, long)]
    count: usize,

    /// Seed for reproducible layouts.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the full layout result as JSON instead of an ASCII rendering.
    #[arg(long)]
    json: bool,
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading entries from {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading entries from stdin")?;
            Ok(buffer)
        }
    }
}

fn print_ascii(result: &crossword_layout::LayoutResult) {
    println!("Generated Crossword Layout ({} x {}):", result.rows, result.cols);
    for row in &result.grid {
        let line: String = row
            .iter()
            .map(|cell| cell.unwrap_or('.'))
            .collect();
        println!("{line}");
    }

    println!("\nAcross:");
    for clue in &result.across_clues {
        println!("  {}. {} ({})", clue.number, clue.clue_text, clue.answer_length);
    }

    println!("\nDown:");
    for clue in &result.down_clues {
        println!("  {}. {} ({})", clue.number, clue.clue_text, clue.answer_length);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw_text = read_input(&cli.input)?;
    let raw_value: serde_json::Value =
        serde_json::from_str(&raw_text).context("parsing entries as JSON")?;

    let entries = normalize(&raw_value, &Default::default())?;
    let config = GenerationConfig::default();
    let on_progress = |message: &str| eprintln!("{message}");
    let options = CreateOptions {
        on_progress: Some(&on_progress),
        seed: cli.seed,
    };

    let result = create_puzzle(&entries, cli.count, &config, options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_ascii(&result);
    }

    Ok(())
}
