//! Glossary conversion from definition lists to headings
//!
//! Rewrites entries of the form
//!
//! ```text
//! **Term**
//! : definition
//! ```
//!
//! into a level-two heading per term so mdBook puts each one in the sidebar
//! and gives it an anchor:
//!
//! ```text
//! ## Term
//! definition
//! ```

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Bold term on its own line, then `: definition` on the next
static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\*\*(.+?)\*\*\r?\n: (.+)$").unwrap());

/// Convert every definition-list entry in `text`
///
/// Returns the rewritten text and how many terms were converted.
pub fn convert_glossary(text: &str) -> (String, usize) {
    let count = ENTRY.find_iter(text).count();
    let converted = ENTRY.replace_all(text, "## ${1}\n${2}").into_owned();
    (converted, count)
}

/// Convert a glossary file in place, returning the number of converted terms
pub fn convert_file(path: &Path) -> Result<usize> {
    let text = read_glossary(path)?;
    let (converted, count) = convert_glossary(&text);
    if count > 0 {
        fs::write(path, converted)
            .with_context(|| format!("Failed to write glossary: {}", path.display()))?;
    }
    tracing::debug!(path = %path.display(), count, "converted glossary");
    Ok(count)
}

/// Read a glossary file with path context on failure
pub fn read_glossary(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read glossary: {}", path.display()))
}
