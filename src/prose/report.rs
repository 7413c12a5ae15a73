// Report types and rendering for the prose checker

use super::rules::{GrammarIssue, SpellingIssue};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

const RULE: &str = "==================================================";

/// Findings for a single markdown file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub spelling: Vec<SpellingIssue>,
    pub grammar: Vec<GrammarIssue>,
}

impl FileReport {
    /// Whether any spelling or grammar issue was found
    pub fn has_issues(&self) -> bool {
        !self.spelling.is_empty() || !self.grammar.is_empty()
    }
}

/// Aggregate results of a checker run
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    pub total_files: usize,
    pub files_with_issues: usize,
    pub spelling_errors: usize,
    pub grammar_issues: usize,
    /// Every checked file, clean ones included, in path order
    pub reports: Vec<FileReport>,
}

impl CheckSummary {
    /// Total up per-file reports
    pub fn from_reports(reports: Vec<FileReport>) -> Self {
        Self {
            total_files: reports.len(),
            files_with_issues: reports.iter().filter(|r| r.has_issues()).count(),
            spelling_errors: reports.iter().map(|r| r.spelling.len()).sum(),
            grammar_issues: reports.iter().map(|r| r.grammar.len()).sum(),
            reports,
        }
    }

    /// Whether every checked file is free of issues
    pub fn is_clean(&self) -> bool {
        self.files_with_issues == 0
    }

    /// Human-readable report with per-file status, totals and details
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "🔍 Book Spell & Grammar Checker")?;
        writeln!(out, "{}", RULE)?;

        for report in &self.reports {
            if !report.has_issues() {
                writeln!(out, "✅ {}", report.path.display())?;
                continue;
            }

            writeln!(out, "\n⚠️  {}", report.path.display())?;
            if !report.spelling.is_empty() {
                writeln!(out, "  🔤 Spelling Issues:")?;
                for issue in &report.spelling {
                    writeln!(out, "    • '{}' → '{}'", issue.word, issue.suggestion)?;
                }
            }
            if !report.grammar.is_empty() {
                writeln!(out, "  📝 Grammar Issues:")?;
                for issue in &report.grammar {
                    writeln!(
                        out,
                        "    • {} → {} ({})",
                        issue.text, issue.suggestion, issue.explanation
                    )?;
                }
            }
        }

        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "📊 SUMMARY")?;
        writeln!(out, "Total files checked: {}", self.total_files)?;
        writeln!(out, "Files with issues: {}", self.files_with_issues)?;
        writeln!(
            out,
            "Files without issues: {}",
            self.total_files - self.files_with_issues
        )?;
        writeln!(out, "Actual spelling errors: {}", self.spelling_errors)?;
        writeln!(out, "Grammar concerns: {}", self.grammar_issues)?;

        if self.is_clean() {
            writeln!(out, "\n🎉 All files look good!")?;
            return Ok(());
        }

        writeln!(out, "\n📋 DETAILED ISSUES SUMMARY")?;
        for report in self.reports.iter().filter(|r| r.has_issues()) {
            writeln!(out, "\n{}:", report.path.display())?;
            if !report.spelling.is_empty() {
                writeln!(out, "  Spelling:")?;
                for issue in &report.spelling {
                    writeln!(out, "    - {} → {}", issue.word, issue.suggestion)?;
                }
            }
            if !report.grammar.is_empty() {
                writeln!(out, "  Grammar:")?;
                for issue in &report.grammar {
                    writeln!(out, "    - {} ({})", issue.text, issue.explanation)?;
                }
            }
        }
        writeln!(out, "\n⚠️  {} files need attention.", self.files_with_issues)?;
        Ok(())
    }

    /// Pretty-printed JSON report
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}
