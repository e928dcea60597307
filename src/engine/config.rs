//! Engine configuration.

/// Switches for validation and self-checking.
///
/// ## Example
///
/// ```
/// use deferred_acceptance::{EngineConfig, MatchingEngine};
///
/// let config = EngineConfig::default()
///     .with_reject_duplicate_preferences(false)
///     .with_verify_result(true);
/// let engine = MatchingEngine::with_config(config);
///
/// assert!(engine.config().verify_result);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reject a student that ranks the same school twice.
    pub reject_duplicate_preferences: bool,

    /// Audit every produced assignment for capacity, individual rationality
    /// and stability, panicking on a violation. On by default in debug builds.
    pub verify_result: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_preferences: true,
            verify_result: cfg!(debug_assertions),
        }
    }
}

impl EngineConfig {
    pub fn with_reject_duplicate_preferences(mut self, reject: bool) -> Self {
        self.reject_duplicate_preferences = reject;
        self
    }

    pub fn with_verify_result(mut self, verify: bool) -> Self {
        self.verify_result = verify;
        self
    }
}
