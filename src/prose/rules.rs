// Spelling and grammar rules
//
// Spelling only flags words from the known-misspellings list, so technical
// vocabulary never produces noise. Grammar rules run on the raw markdown.

use super::config::CheckerConfig;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Za-z]+\b").unwrap());
static PASSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(is|are|was|were|be|been|being)\s+\w*ed\b").unwrap());

/// Pattern, suggestion, explanation
static GRAMMAR_RULES: LazyLock<Vec<(Regex, &'static str, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"(?i)\bit's own\b",
            "its own",
            "Possessive 'its' doesn't use an apostrophe",
        ),
        (r"(?i)\balot\b", "a lot", "Should be two words"),
        (
            r"(?i)\bloose\b.*\b(something|it|them)\b",
            "lose",
            "Use 'lose' not 'loose' for the verb",
        ),
        (
            r"(?i)\bthen\b.*\b(better|more|less)\b",
            "than",
            "Use 'than' for comparisons",
        ),
    ]
    .into_iter()
    .map(|(pattern, suggestion, explanation)| {
        (Regex::new(pattern).unwrap(), suggestion, explanation)
    })
    .collect()
});

/// A known misspelling found in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellingIssue {
    pub word: String,
    pub suggestion: String,
}

/// A grammar concern found in the raw content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarIssue {
    /// Matched text, or a short label for whole-file findings
    pub text: String,
    pub suggestion: String,
    pub explanation: String,
}

/// Report each distinct misspelled word once, in alphabetical order
pub fn check_spelling(text: &str, config: &CheckerConfig) -> Vec<SpellingIssue> {
    let lowered = text.to_lowercase();
    let words: BTreeSet<&str> = WORD.find_iter(&lowered).map(|m| m.as_str()).collect();

    words
        .into_iter()
        .filter_map(|word| {
            config.suggestion_for(word).map(|suggestion| SpellingIssue {
                word: word.to_string(),
                suggestion: suggestion.to_string(),
            })
        })
        .collect()
}

/// Run every grammar rule, then the passive-voice density check
pub fn check_grammar(content: &str, config: &CheckerConfig) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();

    for (pattern, suggestion, explanation) in GRAMMAR_RULES.iter() {
        for m in pattern.find_iter(content) {
            issues.push(GrammarIssue {
                text: m.as_str().to_string(),
                suggestion: suggestion.to_string(),
                explanation: explanation.to_string(),
            });
        }
    }

    let passive = count_passive(content);
    if passive > config.passive_threshold {
        issues.push(GrammarIssue {
            text: "High passive voice".to_string(),
            suggestion: format!("{} instances", passive),
            explanation: "Consider using more active voice".to_string(),
        });
    }

    issues
}

/// Number of `<be-verb> <word>ed` constructions
pub fn count_passive(content: &str) -> usize {
    PASSIVE.find_iter(content).count()
}
