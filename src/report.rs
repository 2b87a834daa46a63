use serde::Serialize;

use crate::units::UnitOutcome;

/// Result of the units downloading run
/// 
/// Every requested unit ends up in exactly one of the lists,
/// both lists keep the order units were requested in
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub written: Vec<String>,
    pub failed: Vec<String>
}

impl Report {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: impl ToString, outcome: &UnitOutcome) {
        match outcome {
            UnitOutcome::Written(_) => self.written.push(id.to_string()),
            UnitOutcome::Failed(_) => self.failed.push(id.to_string())
        }
    }

    /// Total amount of processed units
    #[inline]
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    /// Check whether all the units were written
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Pretty-printed list of failed units
    #[inline]
    pub fn pretty_failed(&self) -> String {
        format!("{:#?}", self.failed)
    }

    /// Closing console message listing failed units
    #[inline]
    pub fn summary(&self) -> String {
        format!("Error retrieving following units:\n{}", self.pretty_failed())
    }
}
