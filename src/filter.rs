//! Line filtering for captured stderr output
//!
//! Drops diagnostic lines that contain a known-benign literal substring and
//! passes everything else through in its original order. Matching is a plain
//! substring test on bytes, so non-UTF-8 output is never rewritten.

/// Version notice printed by every `mdbook-katex` run built against a
/// different mdbook release than the one executing it
pub const KATEX_VERSION_WARNING: &str = "This mdbook-katex was built against mdbook v";

/// Filter that removes stderr lines containing any of its patterns
#[derive(Debug, Clone, Default)]
pub struct StderrFilter {
    /// Literal substrings; a line containing any of them is dropped
    patterns: Vec<Vec<u8>>,
}

impl StderrFilter {
    /// Create a filter that keeps every line
    pub fn none() -> Self {
        Self::default()
    }

    /// Create the filter used for `mdbook-katex`
    pub fn katex() -> Self {
        Self::none().with_pattern(KATEX_VERSION_WARNING)
    }

    /// Add a literal substring to suppress
    pub fn with_pattern(mut self, pattern: impl AsRef<[u8]>) -> Self {
        let pattern = pattern.as_ref();
        // An empty pattern would match every line
        if !pattern.is_empty() {
            self.patterns.push(pattern.to_vec());
        }
        self
    }

    /// Number of suppression patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the filter keeps every line
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check if a single line (without its terminator) should be re-emitted
    pub fn should_keep(&self, line: &[u8]) -> bool {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        !self.patterns.iter().any(|p| contains(line, p))
    }

    /// Filter a captured stream, returning the bytes to re-emit
    ///
    /// Kept lines are always newline-terminated, including a final line that
    /// arrived without one. Empty input, or input where every line is
    /// suppressed, produces empty output.
    pub fn filter_bytes(&self, captured: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(captured.len());
        if captured.is_empty() {
            return out;
        }

        let body = captured.strip_suffix(b"\n").unwrap_or(captured);
        let mut dropped = 0usize;
        for line in body.split(|&b| b == b'\n') {
            if self.should_keep(line) {
                out.extend_from_slice(line);
                out.push(b'\n');
            } else {
                dropped += 1;
            }
        }

        tracing::trace!(
            input_bytes = captured.len(),
            output_bytes = out.len(),
            dropped,
            "filtered captured stderr"
        );
        out
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.len() <= haystack.len() && haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katex_filter_drops_version_warning() {
        let filter = StderrFilter::katex();
        let input = b"Warning: This mdbook-katex was built against mdbook v0.4.40, but mdbook v0.4.52 is being used.\n";
        assert!(filter.filter_bytes(input).is_empty());
    }

    #[test]
    fn test_keeps_other_lines_in_order() {
        let filter = StderrFilter::katex();
        let input = b"first\nThis mdbook-katex was built against mdbook v0.4.40...\nFatal: missing input file\nlast\n";
        assert_eq!(
            filter.filter_bytes(input),
            b"first\nFatal: missing input file\nlast\n".to_vec()
        );
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(StderrFilter::katex().filter_bytes(b"").is_empty());
    }

    #[test]
    fn test_unterminated_last_line_gets_newline() {
        let filter = StderrFilter::katex();
        assert_eq!(filter.filter_bytes(b"oops"), b"oops\n".to_vec());
    }

    #[test]
    fn test_blank_lines_pass_through() {
        let filter = StderrFilter::katex();
        assert_eq!(filter.filter_bytes(b"a\n\nb\n"), b"a\n\nb\n".to_vec());
    }

    #[test]
    fn test_crlf_line_still_matches() {
        let filter = StderrFilter::katex();
        let input = b"This mdbook-katex was built against mdbook v0.4.40\r\nkept\r\n";
        assert_eq!(filter.filter_bytes(input), b"kept\r\n".to_vec());
    }

    #[test]
    fn test_partial_pattern_is_not_suppressed() {
        let filter = StderrFilter::katex();
        assert!(filter.should_keep(b"This mdbook-katex was built"));
        assert!(!filter.should_keep(b"xx This mdbook-katex was built against mdbook v9 yy"));
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let filter = StderrFilter::katex();
        let input = [0xff, 0xfe, b'\n'];
        assert_eq!(filter.filter_bytes(&input), input.to_vec());
    }

    #[test]
    fn test_none_keeps_everything() {
        let filter = StderrFilter::none();
        assert!(filter.is_empty());
        assert!(filter.should_keep(KATEX_VERSION_WARNING.as_bytes()));
    }

    #[test]
    fn test_empty_pattern_is_ignored() {
        let filter = StderrFilter::none().with_pattern("");
        assert_eq!(filter.len(), 0);
        assert!(filter.should_keep(b"anything"));
    }

    #[test]
    fn test_multiple_patterns() {
        let filter = StderrFilter::katex().with_pattern("deprecated");
        assert_eq!(filter.len(), 2);
        assert_eq!(
            filter.filter_bytes(b"x deprecated\nreal error\n"),
            b"real error\n".to_vec()
        );
    }
}
