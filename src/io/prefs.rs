// prefs.rs: Per-run splitter preferences.
//
// `SplitPrefs` is a small value type built by the CLI layer and passed by
// reference into both pipelines. Defaults reject malformed input.

/// What to do with a line whose key cannot be derived (an alpha line not
/// starting with `a..=z`, or a length line that is blank after trimming).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidLinePolicy {
    /// Abort the run with [`crate::split::SplitError::Unclassifiable`].
    #[default]
    Reject,
    /// Leave the line out of every output file and count it in the report.
    Skip,
}

/// Preferences shared by both splitters.
#[derive(Debug, Clone, Default)]
pub struct SplitPrefs {
    pub invalid_lines: InvalidLinePolicy,
}

impl SplitPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for unclassifiable lines and returns `self`.
    pub fn with_invalid_lines(mut self, policy: InvalidLinePolicy) -> Self {
        self.invalid_lines = policy;
        self
    }

    /// `true` when unclassifiable lines are skipped rather than rejected.
    #[inline]
    pub fn skips_invalid(&self) -> bool {
        self.invalid_lines == InvalidLinePolicy::Skip
    }
}
