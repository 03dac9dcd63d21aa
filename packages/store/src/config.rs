//! Store configuration.

use std::time::Duration;

/// Quiet period between the last mutation and the auto-save it triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(2);

/// What to do when an auto-save fails.
///
/// A named policy rather than inline behavior so alternatives (backoff, an
/// explicit retry affordance) can be added without touching mutation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoSaveFailurePolicy {
    /// Log the failure, keep local edits, and rely on the next mutation to
    /// re-arm the debounce timer. No automatic retry, no rollback: edits
    /// are idempotent whole-document overwrites, so the next save carries
    /// everything the failed one did. A failure also discards any queued
    /// save slot; the state it represented stays dirty and rides along
    /// with the save the next edit schedules.
    #[default]
    RetryOnNextEdit,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub debounce: Duration,
    pub failure_policy: AutoSaveFailurePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            failure_policy: AutoSaveFailurePolicy::default(),
        }
    }
}
