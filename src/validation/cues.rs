/*!
 * Invariant checks for cue lists.
 *
 * A valid list has:
 * - a positive duration and a non-negative start for every cue
 * - non-empty text
 * - chronological, non-overlapping cues
 * - sequence numbers 1..N without gaps
 */

use log::debug;

use crate::subtitle::{seconds_to_ms, Cue};

/// Result of validating a single cue
#[derive(Debug, Clone)]
pub struct CueResult {
    /// Sequence number of the cue
    pub sequence: usize,
    /// Whether the cue passed validation
    pub passed: bool,
    /// Issues found
    pub issues: Vec<CueIssue>,
}

impl CueResult {
    /// Create a passing result
    pub fn passed(sequence: usize) -> Self {
        Self {
            sequence,
            passed: true,
            issues: vec![],
        }
    }

    /// Create a failing result
    pub fn failed(sequence: usize, issues: Vec<CueIssue>) -> Self {
        Self {
            sequence,
            passed: false,
            issues,
        }
    }
}

/// Ways a cue can break the list invariants
#[derive(Debug, Clone, PartialEq)]
pub enum CueIssue {
    /// End is not after start
    InvalidTimeRange { start_ms: u64, end_ms: u64 },
    /// Start lies before zero
    NegativeStart { start: f64 },
    /// Starts before the previous cue ends
    Overlap { previous: usize, overlap_ms: u64 },
    /// Starts before the previous cue starts
    OutOfOrder { previous: usize },
    /// Sequence number breaks the 1..N numbering
    SequenceGap { expected: usize, found: usize },
    /// Text is empty or whitespace only
    EmptyText,
}

impl std::fmt::Display for CueIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CueIssue::InvalidTimeRange { start_ms, end_ms } => {
                write!(f, "Invalid time range: start {}ms >= end {}ms", start_ms, end_ms)
            }
            CueIssue::NegativeStart { start } => write!(f, "Negative start time: {:.3}s", start),
            CueIssue::Overlap { previous, overlap_ms } => {
                write!(f, "Overlaps with cue {} by {}ms", previous, overlap_ms)
            }
            CueIssue::OutOfOrder { previous } => write!(f, "Starts before cue {}", previous),
            CueIssue::SequenceGap { expected, found } => {
                write!(f, "Sequence number {} (expected {})", found, expected)
            }
            CueIssue::EmptyText => write!(f, "Empty text"),
        }
    }
}

/// Result of validating a whole cue list
#[derive(Debug, Clone)]
pub struct CueValidationResult {
    /// True when no cue has an issue
    pub passed: bool,
    /// Results for each cue, in input order
    pub cue_results: Vec<CueResult>,
    /// Total number of issues
    pub total_issues: usize,
}

impl CueValidationResult {
    /// Get all failed cues
    pub fn failed_cues(&self) -> Vec<&CueResult> {
        self.cue_results.iter().filter(|r| !r.passed).collect()
    }

    /// One line per issue, for error messages
    pub fn summary(&self) -> String {
        self.failed_cues()
            .iter()
            .flat_map(|r| r.issues.iter().map(move |issue| format!("cue {}: {}", r.sequence, issue)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validator for final cue lists
#[derive(Default)]
pub struct CueValidator;

impl CueValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check a single cue in isolation
    pub fn validate_cue(&self, cue: &Cue) -> CueResult {
        let mut issues = Vec::new();

        if cue.start < 0.0 {
            issues.push(CueIssue::NegativeStart { start: cue.start });
        }

        if cue.end <= cue.start {
            issues.push(CueIssue::InvalidTimeRange {
                start_ms: cue.start_ms(),
                end_ms: cue.end_ms(),
            });
        }

        if cue.text.trim().is_empty() {
            issues.push(CueIssue::EmptyText);
        }

        if issues.is_empty() {
            CueResult::passed(cue.sequence)
        } else {
            CueResult::failed(cue.sequence, issues)
        }
    }

    /// Check every cue and the relations between neighbours, in list order
    pub fn validate(&self, cues: &[Cue]) -> CueValidationResult {
        let mut cue_results: Vec<CueResult> = cues.iter().map(|c| self.validate_cue(c)).collect();

        for (i, cue) in cues.iter().enumerate() {
            let mut issues = Vec::new();

            if cue.sequence != i + 1 {
                issues.push(CueIssue::SequenceGap {
                    expected: i + 1,
                    found: cue.sequence,
                });
            }

            if i > 0 {
                let previous = &cues[i - 1];
                if cue.start < previous.start {
                    issues.push(CueIssue::OutOfOrder {
                        previous: previous.sequence,
                    });
                } else if previous.end > cue.start {
                    issues.push(CueIssue::Overlap {
                        previous: previous.sequence,
                        overlap_ms: seconds_to_ms(previous.end - cue.start),
                    });
                }
            }

            if !issues.is_empty() {
                let result = &mut cue_results[i];
                result.issues.extend(issues);
                result.passed = false;
            }
        }

        let total_issues: usize = cue_results.iter().map(|r| r.issues.len()).sum();
        let passed = total_issues == 0;

        debug!("Cue validation: {} cues, {} issues", cues.len(), total_issues);

        CueValidationResult {
            passed,
            cue_results,
            total_issues,
        }
    }
}
