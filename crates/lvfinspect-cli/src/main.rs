use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use glob::glob;

use lvfinspect_core::{PreviewOptions, build_report, inspect_lvf_file, render_text};

#[derive(Parser, Debug)]
#[command(name = "lvfinspect")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LVFINSPECT_BUILD_COMMIT"),
    ")"
))]
#[command(
    about = "Inspect .lvf acoustic feature files (header, options, matrix, VAD flags).",
    long_about = None,
    after_help = "Examples:\n  lvfinspect features.lvf\n  lvfinspect features.lvf --rows 10 --cols 12\n  lvfinspect features.lvf --full-matrix\n  lvfinspect features.lvf --json --pretty"
)]
struct Cli {
    /// Path to a .lvf file
    input: PathBuf,

    /// How many matrix rows to print (preview mode)
    #[arg(long, default_value_t = 5)]
    rows: u32,

    /// How many cols per row to print (preview mode)
    #[arg(long, default_value_t = 10)]
    cols: u32,

    /// Print the full matrix (all rows and columns)
    #[arg(long)]
    full_matrix: bool,

    /// Emit a JSON report instead of the text report
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = resolve_input_path(&cli.input)?;
    validate_input_file(&input)?;

    let inspection = inspect_lvf_file(&input)
        .with_context(|| format!("failed to inspect {}", input.display()))?;

    if cli.json {
        let report = build_report(&inspection);
        let json = if cli.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .context("JSON serialization failed")?;
        println!("{json}");
    } else {
        let preview = PreviewOptions {
            max_rows: cli.rows,
            max_cols: cli.cols,
            full_matrix: cli.full_matrix,
        };
        print!("{}", render_text(&inspection, &preview));
    }

    Ok(())
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .lvf feature file".to_string()),
        ));
    }

    let meta = fs::metadata(input)
        .with_context(|| format!("failed to read input file: {}", input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .lvf feature file".to_string()),
        ));
    }

    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "lvf" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .lvf feature file".to_string()),
        ));
    }

    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .lvf file".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single .lvf file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
