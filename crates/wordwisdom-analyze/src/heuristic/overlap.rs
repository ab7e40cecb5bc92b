//! Greedy overlap resolution for candidate spans.

use crate::types::EntityLabel;

/// A regex match before overlap resolution. Offsets are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

impl Candidate {
    pub fn new(label: EntityLabel, start: usize, end: usize) -> Self {
        Self { label, start, end }
    }

    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Keep a non-overlapping subset of `candidates`, ordered by start.
///
/// Earliest start wins; on equal starts the longer span wins. A candidate
/// survives only if it starts at or after the end of the last survivor.
pub fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    // Stable, so equal spans keep scan order (URL, then DATE, then PROPN).
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.len().cmp(&a.len())));

    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    let mut last_end = 0;
    for candidate in candidates {
        if candidate.start >= last_end {
            last_end = candidate.end;
            kept.push(candidate);
        }
    }
    kept
}
