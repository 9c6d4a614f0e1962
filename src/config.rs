use crate::interpreter::{checker::core::CheckOptions, evaluator::core::Limits};

/// Settings for a full run of the pipeline.
///
/// `Config::default()` gives the language's canonical semantics: strict
/// typing and no execution limits.
///
/// # Example
/// ```
/// use lalg::config::Config;
///
/// let config = Config::default().with_max_loop_iterations(1_000)
///                               .with_literal_booleans(true);
///
/// assert_eq!(config.limits.max_loop_iterations, Some(1_000));
/// assert!(config.check.literal_booleans);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Limits applied by the evaluator.
    pub limits: Limits,
    /// Options for the semantic checker.
    pub check:  CheckOptions,
}

impl Config {
    /// Caps the number of iterations of any single `enquanto` loop.
    #[must_use]
    pub const fn with_max_loop_iterations(mut self, limit: u64) -> Self {
        self.limits.max_loop_iterations = Some(limit);
        self
    }

    /// Lets the literals `0` and `1` be assigned to boolean variables.
    #[must_use]
    pub const fn with_literal_booleans(mut self, enabled: bool) -> Self {
        self.check.literal_booleans = enabled;
        self
    }
}
