use std::sync::LazyLock;

use chrono::Local;
use regex::RegexSet;

use podlens_types::{LogAnalysis, LogCategory};

// Word boundaries and whitespace are ASCII-only, so a word glued to a
// non-ASCII letter (`éerror`) still matches.
static ERROR_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    pattern_set(&[
        r"(?i)(?-u:\b)(error|err|exception|fatal|panic|crash|failed|failure)(?-u:\b)",
        r"(?i)(?-u:\b)(stack(?-u:\s)+trace|stacktrace)(?-u:\b)",
        r"(?i)(?-u:\b)(connection(?-u:\s)+(refused|failed|timeout))(?-u:\b)",
        r"(?i)(?-u:\b)(out(?-u:\s)+of(?-u:\s)+memory|oom)(?-u:\b)",
        r"(?i)(?-u:\b)(permission(?-u:\s)+denied|access(?-u:\s)+denied)(?-u:\b)",
    ])
});

static WARNING_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    pattern_set(&[
        r"(?i)(?-u:\b)(warn|warning|deprecated|timeout|retry|retrying)(?-u:\b)",
        r"(?i)(?-u:\b)(slow(?-u:\s)+query|performance)(?-u:\b)",
        r"(?i)(?-u:\b)(connection(?-u:\s)+lost|reconnecting)(?-u:\b)",
    ])
});

static INFO_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    pattern_set(&[
        r"(?i)(?-u:\b)(info|starting|started|listening|ready|success|successful|completed)(?-u:\b)",
        r"(?i)(?-u:\b)(connected|initialized|loaded)(?-u:\b)",
    ])
});

fn pattern_set(patterns: &[&str]) -> RegexSet {
    RegexSet::new(patterns).expect("built-in log patterns must compile")
}

/// Classifier turning raw log text into a [`LogAnalysis`]
pub struct LogClassifier;

impl LogClassifier {
    /// Classify every line of `raw`.
    ///
    /// Each line lands in at most one category, checked in
    /// error > warning > info order. Lines matching nothing only count
    /// toward `total_lines`.
    pub fn classify(raw: &str) -> LogAnalysis {
        let mut analysis = LogAnalysis {
            total_lines: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
            info: Vec::new(),
            raw: raw.to_string(),
            analyzed_at: Local::now(),
        };

        for line in raw.lines() {
            analysis.total_lines += 1;

            match Self::categorize(line) {
                Some(LogCategory::Error) => analysis.errors.push(line.to_string()),
                Some(LogCategory::Warning) => analysis.warnings.push(line.to_string()),
                Some(LogCategory::Info) => analysis.info.push(line.to_string()),
                None => {}
            }
        }

        analysis
    }

    /// Category of a single line, if any pattern group matches
    pub fn categorize(line: &str) -> Option<LogCategory> {
        if ERROR_PATTERNS.is_match(line) {
            Some(LogCategory::Error)
        } else if WARNING_PATTERNS.is_match(line) {
            Some(LogCategory::Warning)
        } else if INFO_PATTERNS.is_match(line) {
            Some(LogCategory::Info)
        } else {
            None
        }
    }
}
