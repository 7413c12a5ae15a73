use anyhow::{Context, Result};
use booktools::cli::{Cli, Commands, OutputFormat};
use booktools::{glossary, prose};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Convert a glossary in place, or print the result on a dry run
fn run_glossary(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        let text = glossary::read_glossary(path)?;
        let (converted, count) = glossary::convert_glossary(&text);
        print!("{}", converted);
        eprintln!("Would convert {} terms.", count);
    } else {
        let count = glossary::convert_file(path)?;
        println!("Converted {} terms.", count);
    }
    Ok(())
}

/// Check the book and print the report; returns whether it was clean
fn run_check(root: &Path, format: OutputFormat, config: Option<PathBuf>) -> Result<bool> {
    let config = match config {
        Some(path) => prose::CheckerConfig::from_file(&path)?,
        None => prose::CheckerConfig::default(),
    };

    let summary = prose::check_tree(root, &config)?;

    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Text => summary.write_text(&mut stdout),
        OutputFormat::Json => summary.write_json(&mut stdout),
    }
    .context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;

    Ok(summary.is_clean())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    match args.command {
        Commands::Glossary { path, dry_run } => run_glossary(&path, dry_run)?,
        Commands::Check {
            root,
            format,
            strict,
            config,
        } => {
            let clean = run_check(&root, format, config)?;
            if strict && !clean {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
