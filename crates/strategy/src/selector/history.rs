//! Rolling selection history and per-kind performance records.

use std::collections::VecDeque;

use crate::objective::ObjectiveKind;

/// One completed selection pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionRecord {
    /// Monotonic pass counter, starting at 1.
    pub sequence: u64,
    pub kind: ObjectiveKind,
    pub name: String,
    pub weight: f64,
    /// Objectives that cleared the significance floor this pass.
    pub candidates: usize,
}

/// Bounded ring of selection records; the oldest entry is evicted first.
#[derive(Clone, Debug)]
pub struct SelectionHistory {
    records: VecDeque<SelectionRecord>,
    capacity: usize,
}

impl SelectionHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, record: SelectionRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn latest(&self) -> Option<&SelectionRecord> {
        self.records.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SelectionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained selections of `kind`.
    pub fn count_of(&self, kind: ObjectiveKind) -> usize {
        self.records.iter().filter(|record| record.kind == kind).count()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Running outcome totals for one objective kind.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceRecord {
    pub attempts: u32,
    pub successes: u32,
    /// Sum of per-attempt progress, each clamped to `[0, 1]`.
    pub total_progress: f64,
}

impl PerformanceRecord {
    pub fn record(&mut self, success: bool, progress: f64) {
        self.attempts += 1;
        if success {
            self.successes += 1;
        }
        self.total_progress += progress.clamp(0.0, 1.0);
    }

    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        f64::from(self.successes) / f64::from(self.attempts)
    }

    pub fn avg_progress(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.total_progress / f64::from(self.attempts)
    }
}
