/// What a single backup-and-replace call did to its target.
///
/// None of these are errors from the run's point of view: the caller logs
/// them and moves on to the next substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Replaced { occurrences: usize },
    /// An insertion whose result is already in the file.
    AlreadyApplied,
    TextNotFound,
    FileMissing,
    Failed { reason: String },
}

impl ReplaceOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReplaceOutcome::Replaced { .. })
    }
}
