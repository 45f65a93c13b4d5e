/// Display tone of a single log line.
///
/// Deliberately looser than [`crate::LogClassifier`]: plain substring tests,
/// never used for counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineTone {
    Error,
    Warning,
    Info,
    Neutral,
}

impl LineTone {
    pub fn of(line: &str) -> Self {
        let lower = line.to_lowercase();

        if ["error", "fail", "exception", "panic"]
            .iter()
            .any(|needle| lower.contains(needle))
        {
            Self::Error
        } else if lower.contains("warn") {
            Self::Warning
        } else if lower.contains("info") {
            Self::Info
        } else {
            Self::Neutral
        }
    }
}

/// Lines of the raw text as shown by the log view, oldest first
pub fn display_lines(raw: &str) -> Vec<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
