//! matchmelt: Flatten a match export into one CSV row per player
//!
//! Usage:
//!   # Read data/raw/<NAME>, write data/processed/<NAME>.csv
//!   matchmelt matches-2018-11-18T19:33:05.278801
//!
//!   # Explicit paths
//!   matchmelt --input export.json --output players.csv
//!
//!   # No arguments: prompt for the raw file name
//!   matchmelt

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use matchmelt::types::{DEFAULT_PROCESSED_DIR, DEFAULT_RAW_DIR};
use matchmelt::{flatten_file, FlattenConfig};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "matchmelt")]
#[command(about = "Flatten match exports into per-player CSV rows", long_about = None)]
struct Args {
    /// Raw export file name, looked up in the raw directory (prompted for if omitted)
    #[arg(value_name = "NAME", conflicts_with = "input")]
    name: Option<String>,

    /// Read the export from this path instead of the raw directory
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Write the CSV to this path (default: <processed-dir>/<input name>.csv)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Directory holding raw exports
    #[arg(long, default_value = DEFAULT_RAW_DIR)]
    raw_dir: PathBuf,

    /// Directory flattened CSV files are written to
    #[arg(long, default_value = DEFAULT_PROCESSED_DIR)]
    processed_dir: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = build_config(args)?;
    let summary = flatten_file(&config)
        .with_context(|| format!("Failed to flatten {}", config.input.display()))?;

    println!(
        "Wrote {} players from {} matches to {}",
        summary.players,
        summary.matches,
        config.output.display()
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: Args) -> Result<FlattenConfig> {
    if let Some(input) = args.input {
        let output = match args.output {
            Some(output) => output,
            None => default_output(&input, &args.processed_dir)?,
        };
        return Ok(FlattenConfig::new(input, output));
    }

    let name = match args.name {
        Some(name) => name,
        None => prompt_for_name(std::io::stdin().lock(), std::io::stdout())?,
    };

    let mut config = FlattenConfig::from_name(&name, &args.raw_dir, &args.processed_dir);
    if let Some(output) = args.output {
        config.output = output;
    }
    Ok(config)
}

/// `<processed_dir>/<input file name>.csv`
fn default_output(input: &Path, processed_dir: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .with_context(|| format!("Input path has no file name: {}", input.display()))?;
    Ok(processed_dir.join(format!("{}.csv", file_name.to_string_lossy())))
}

/// Ask for the raw file name and read one line of answer
fn prompt_for_name<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    writeln!(
        output,
        "Please input the file name for your raw data. Ex: \"matches-2018-11-18T19:33:05.278801\":"
    )?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read file name from stdin")?;

    let name = line.trim_end_matches(['\n', '\r']);
    if name.is_empty() {
        bail!("No file name given");
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_ending() {
        let mut shown = Vec::new();
        let name = prompt_for_name(Cursor::new("matches-2018-11-18T19:33:05.278801\r\n"), &mut shown).unwrap();

        assert_eq!(name, "matches-2018-11-18T19:33:05.278801");
        assert!(String::from_utf8(shown).unwrap().starts_with("Please input the file name"));
    }

    #[test]
    fn test_prompt_keeps_inner_spaces() {
        let name = prompt_for_name(Cursor::new(" day one.json\nignored\n"), Vec::new()).unwrap();
        assert_eq!(name, " day one.json");
    }

    #[test]
    fn test_prompt_rejects_empty_answer() {
        assert!(prompt_for_name(Cursor::new("\n"), Vec::new()).is_err());
        assert!(prompt_for_name(Cursor::new(""), Vec::new()).is_err());
    }

    #[test]
    fn test_name_derives_both_paths() {
        let args = Args::parse_from(["matchmelt", "matches-1"]);
        let config = build_config(args).unwrap();

        assert_eq!(config.input, PathBuf::from("data/raw/matches-1"));
        assert_eq!(config.output, PathBuf::from("data/processed/matches-1.csv"));
    }

    #[test]
    fn test_input_without_output_uses_processed_dir() {
        let args = Args::parse_from(["matchmelt", "--input", "/tmp/exports/day1.json", "--processed-dir", "out"]);
        let config = build_config(args).unwrap();

        assert_eq!(config.input, PathBuf::from("/tmp/exports/day1.json"));
        assert_eq!(config.output, PathBuf::from("out/day1.json.csv"));
    }

    #[test]
    fn test_explicit_output_wins() {
        let args = Args::parse_from(["matchmelt", "matches-1", "-o", "players.csv"]);
        let config = build_config(args).unwrap();

        assert_eq!(config.output, PathBuf::from("players.csv"));
    }

    #[test]
    fn test_name_and_input_conflict() {
        assert!(Args::try_parse_from(["matchmelt", "matches-1", "--input", "x.json"]).is_err());
    }
}
