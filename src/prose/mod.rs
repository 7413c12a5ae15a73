// Prose checker for book sources
//
// Walks a directory for markdown files and reports known misspellings and a
// few common grammar slips. Deliberately conservative: it only reports words
// from a curated misspellings list rather than guessing at a dictionary.

mod config;
mod markdown;
mod report;
mod rules;

pub use config::{CheckerConfig, ConfigError, DEFAULT_PASSIVE_THRESHOLD};
pub use markdown::extract_text;
pub use report::{CheckSummary, FileReport};
pub use rules::{check_grammar, check_spelling, count_passive, GrammarIssue, SpellingIssue};

use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Check a markdown document's content
pub fn check_content(
    content: &str,
    config: &CheckerConfig,
) -> (Vec<SpellingIssue>, Vec<GrammarIssue>) {
    let text = extract_text(content);
    (check_spelling(&text, config), check_grammar(content, config))
}

/// Check one file; an unreadable file is reported on stderr and treated as clean
pub fn check_file(path: &Path, display: PathBuf, config: &CheckerConfig) -> FileReport {
    let (spelling, grammar) = match fs::read_to_string(path) {
        Ok(content) => check_content(&content, config),
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            warn!(path = %path.display(), error = %e, "Error reading file");
            (Vec::new(), Vec::new())
        }
    };

    FileReport {
        path: display,
        spelling,
        grammar,
    }
}

/// All `.md` files below `root`, sorted by path; symlinks are followed
pub fn discover_markdown(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Skipping unreadable entry: {}", e);
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "md") {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "discovered markdown files");
    Ok(files)
}

/// Check every markdown file under `root`
pub fn check_tree(root: &Path, config: &CheckerConfig) -> Result<CheckSummary> {
    let reports = discover_markdown(root)?
        .into_iter()
        .map(|path| {
            let display = path
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| path.clone());
            check_file(&path, display, config)
        })
        .collect();

    Ok(CheckSummary::from_reports(reports))
}
