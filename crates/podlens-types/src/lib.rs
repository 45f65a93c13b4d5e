//! Shared types for podlens
//!
//! This crate contains data structures used across multiple podlens crates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Workload Types
// ============================================================================

/// One workload row as reported by the inventory provider.
///
/// Summaries are replaced wholesale on every refresh; the name is the
/// identity used for selection and for keying log analyses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadSummary {
    pub name: String,
    /// Lifecycle phase as reported by the cluster (`Running`, `Pending`, ...)
    pub phase: String,
    pub ready: bool,
    pub restarts: u32,
    pub age: AgeBucket,
}

impl WorkloadSummary {
    pub fn new(name: impl Into<String>, phase: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phase: phase.into(),
            ready: false,
            restarts: 0,
            age: AgeBucket::Unknown,
        }
    }

    /// Display icon chosen from phase and readiness
    pub fn status_icon(&self) -> &'static str {
        match self.phase.as_str() {
            "Running" if self.ready => "✅",
            "Running" => "🟡",
            "Pending" => "⏳",
            "Failed" | "Error" => "❌",
            "Succeeded" => "✅",
            "Terminating" => "🟠",
            "CrashLoopBackOff" => "💥",
            "ImagePullBackOff" => "📥",
            "ContainerCreating" => "🔧",
            _ => "❔",
        }
    }

    /// Coarse grouping of the phase used to pick a display style
    pub fn phase_tone(&self) -> PhaseTone {
        PhaseTone::from(self.phase.as_str())
    }

    /// Failing workloads get a blinking highlight in the grid
    pub fn is_failing(&self) -> bool {
        matches!(
            self.phase.as_str(),
            "Failed" | "Error" | "CrashLoopBackOff"
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseTone {
    Running,
    Pending,
    Failed,
    Terminating,
    Unknown,
}

impl From<&str> for PhaseTone {
    fn from(phase: &str) -> Self {
        match phase {
            "Running" => Self::Running,
            "Pending" | "ContainerCreating" => Self::Pending,
            "Failed" | "Error" | "CrashLoopBackOff" | "ImagePullBackOff" => Self::Failed,
            "Terminating" => Self::Terminating,
            _ => Self::Unknown,
        }
    }
}

/// Workload age, bucketed for display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AgeBucket {
    Minutes(u64),
    Hours(u64),
    Days(u64),
    #[default]
    Unknown,
}

impl AgeBucket {
    /// Bucket the time elapsed between `created` and `now`
    pub fn between(created: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let Some(created) = created else {
            return Self::Unknown;
        };

        // Clock skew can put the creation time slightly in the future
        let secs = (now - created).num_seconds().max(0) as u64;

        if secs < 60 * 60 {
            Self::Minutes((secs as f64 / 60.0).round() as u64)
        } else if secs < 24 * 60 * 60 {
            Self::Hours((secs as f64 / 3600.0).round() as u64)
        } else {
            Self::Days(secs / (24 * 60 * 60))
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(m) => write!(f, "{m}m"),
            Self::Hours(h) => write!(f, "{h}h"),
            Self::Days(d) => write!(f, "{d}d"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

// ============================================================================
// Log Types
// ============================================================================

/// Classification category of a log line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Error,
    Warning,
    Info,
}

/// Overall health verdict of an analysis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogVerdict {
    Healthy,
    Warnings,
    Errors,
}

/// Classified summary of one workload's recent log output
#[derive(Clone, Debug)]
pub struct LogAnalysis {
    /// Every line seen, matched or not
    pub total_lines: usize,

    /// Lines classified as errors, in input order
    pub errors: Vec<String>,

    /// Lines classified as warnings, in input order
    pub warnings: Vec<String>,

    /// Lines classified as info, in input order
    pub info: Vec<String>,

    /// The fetched text, kept verbatim for the line-by-line view
    pub raw: String,

    /// When the classification ran
    pub analyzed_at: DateTime<Local>,
}

impl LogAnalysis {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn info_count(&self) -> usize {
        self.info.len()
    }

    /// Lines that matched no category
    pub fn unmatched_count(&self) -> usize {
        self.total_lines
            .saturating_sub(self.error_count() + self.warning_count() + self.info_count())
    }

    pub fn count(&self, category: LogCategory) -> usize {
        self.lines(category).len()
    }

    pub fn lines(&self, category: LogCategory) -> &[String] {
        match category {
            LogCategory::Error => &self.errors,
            LogCategory::Warning => &self.warnings,
            LogCategory::Info => &self.info,
        }
    }

    pub fn verdict(&self) -> LogVerdict {
        if !self.errors.is_empty() {
            LogVerdict::Errors
        } else if !self.warnings.is_empty() {
            LogVerdict::Warnings
        } else {
            LogVerdict::Healthy
        }
    }
}

/// How far back to fetch logs (`30s`, `5m`, `2h`)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Lookback {
    text: String,
    seconds: i64,
}

impl Lookback {
    pub fn as_seconds(&self) -> i64 {
        self.seconds
    }

    /// The duration as written by the user, e.g. for `kubectl --since`
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self {
            text: "5m".to_string(),
            seconds: 5 * 60,
        }
    }
}

impl FromStr for Lookback {
    type Err = LookbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || LookbackError(text.to_string());

        if text.len() < 2 || !text.is_char_boundary(text.len() - 1) {
            return Err(invalid());
        }
        let (amount, unit) = text.split_at(text.len() - 1);
        let amount: i64 = amount.parse().map_err(|_| invalid())?;
        if amount <= 0 {
            return Err(invalid());
        }

        let multiplier = match unit {
            "s" => 1,
            "m" => 60,
            "h" => 60 * 60,
            _ => return Err(invalid()),
        };

        Ok(Self {
            text: text.to_string(),
            seconds: amount * multiplier,
        })
    }
}

impl TryFrom<String> for Lookback {
    type Error = LookbackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid lookback duration '{0}' (expected e.g. 30s, 5m, 2h)")]
pub struct LookbackError(String);

// ============================================================================
// Presentation Selectors
// ============================================================================

/// Display language for rendered strings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Language {
    #[default]
    English,
    Turkish,
}

impl Language {
    /// Unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "tr" | "turkish" => Self::Turkish,
            _ => Self::English,
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// A failed inventory fetch, surfaced verbatim to the user
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to load namespaces: {0}")]
    Namespaces(String),

    #[error("Failed to load workloads in {namespace}: {message}")]
    Workloads { namespace: String, message: String },

    #[error("Failed to load logs for {workload}: {message}")]
    Logs { workload: String, message: String },
}
