//! Per-file rejection taxonomy and the batch-wide validation report

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Reason a replay was excluded from the dataset
///
/// The declaration order is the order used in the summary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ErrorKind {
    /// Metadata block shorter than the supported format
    Metadata = 0,
    /// Non-default extra options
    Options = 1,
    /// Team mode instead of solo
    Team = 2,
    /// Old game build
    Ac = 3,
    /// Rounds won do not describe a best-of-three
    Rounds = 4,
    /// Both sides won the same number of rounds
    Draw = 5,
    /// Frame records are missing or inconsistent
    Frames = 6,
    /// Compressed payload could not be inflated
    Decompression = 7,
}

impl ErrorKind {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// One rejected replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
    pub file: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file: file.into(),
        }
    }

    /// Line written to the diagnostics artifact
    pub fn diagnostic_line(&self) -> String {
        format!("{}, {}", self.message, self.file)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.diagnostic_line())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct KindEntry {
    count: usize,
    lines: Vec<String>,
}

/// Aggregated outcome counters for a batch of replays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    total: usize,
    rejected: usize,
    kinds: [KindEntry; ErrorKind::COUNT],
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            total: 0,
            rejected: 0,
            kinds: std::array::from_fn(|_| KindEntry::default()),
        }
    }

    /// Count a file that passed every check
    pub fn record_accepted(&mut self) {
        self.total += 1;
    }

    /// Count a rejected file and keep its diagnostic
    pub fn record_rejected(&mut self, error: &ValidationError) {
        self.total += 1;
        self.rejected += 1;
        let entry = &mut self.kinds[error.kind.index()];
        entry.count += 1;
        entry.lines.push(error.diagnostic_line());
    }

    /// Fold another report into this one, appending its diagnostics after ours
    pub fn merge(&mut self, other: ValidationReport) {
        self.total += other.total;
        self.rejected += other.rejected;
        for (mine, theirs) in self.kinds.iter_mut().zip(other.kinds) {
            mine.count += theirs.count;
            mine.lines.extend(theirs.lines);
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn accepted(&self) -> usize {
        self.total - self.rejected
    }

    pub fn count(&self, kind: ErrorKind) -> usize {
        self.kinds[kind.index()].count
    }

    pub fn messages(&self, kind: ErrorKind) -> &[String] {
        &self.kinds[kind.index()].lines
    }

    /// Render the diagnostics artifact
    ///
    /// Every kind is listed in declaration order, including kinds with no
    /// rejections, so the layout does not depend on which files failed.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Excluded replays: {} out of {}\n\n",
            self.rejected, self.total
        );
        for kind in ErrorKind::iter() {
            let entry = &self.kinds[kind.index()];
            out.push_str(&format!("{}: {}\n", kind, entry.count));
            for line in &entry.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// Serializable snapshot of the report
    pub fn to_summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.total,
            rejected: self.rejected,
            kinds: ErrorKind::iter()
                .map(|kind| KindSummary {
                    kind,
                    count: self.count(kind),
                    messages: self.messages(kind).to_vec(),
                })
                .collect(),
        }
    }
}

/// JSON-friendly view of a [`ValidationReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub rejected: usize,
    pub kinds: Vec<KindSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSummary {
    pub kind: ErrorKind,
    pub count: usize,
    pub messages: Vec<String>,
}
