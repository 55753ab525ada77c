//! Scan configuration

use crate::category::Category;
use crate::error::{CoreError, Result};

/// Default configuration constants
pub mod defaults {
    /// Minimum number of code points a run needs to be emitted
    pub const MIN_RUN_LENGTH: usize = 5;
}

/// What happens to a run that is still open when the stream ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingRunPolicy {
    /// Drop the open run without checking its length
    #[default]
    Discard,
    /// Emit the open run if it qualifies, at the final byte offset
    Flush,
}

/// Immutable settings for one or more scans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) min_run_length: usize,
    pub(crate) letters: bool,
    pub(crate) numbers: bool,
    pub(crate) space: bool,
    pub(crate) punctuation: bool,
    pub(crate) emit_offsets: bool,
    pub(crate) trailing_run: TrailingRunPolicy,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            min_run_length: defaults::MIN_RUN_LENGTH,
            letters: true,
            numbers: true,
            space: true,
            punctuation: true,
            emit_offsets: false,
            trailing_run: TrailingRunPolicy::Discard,
        }
    }
}

impl Configuration {
    /// Create a configuration builder
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Minimum run length in code points
    pub fn min_run_length(&self) -> usize {
        self.min_run_length
    }

    pub fn letters(&self) -> bool {
        self.letters
    }

    pub fn numbers(&self) -> bool {
        self.numbers
    }

    pub fn space(&self) -> bool {
        self.space
    }

    pub fn punctuation(&self) -> bool {
        self.punctuation
    }

    /// Whether emitted lines carry a byte offset prefix
    pub fn emit_offsets(&self) -> bool {
        self.emit_offsets
    }

    pub fn trailing_run(&self) -> TrailingRunPolicy {
        self.trailing_run
    }

    /// Categories switched on, in a fixed order
    pub fn enabled_categories(&self) -> Vec<Category> {
        [
            (Category::Letter, self.letters),
            (Category::Number, self.numbers),
            (Category::Space, self.space),
            (Category::Punctuation, self.punctuation),
        ]
        .into_iter()
        .filter_map(|(category, enabled)| enabled.then_some(category))
        .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.min_run_length == 0 {
            return Err(CoreError::InvalidConfiguration(
                "min_run_length must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`Configuration`]
///
/// Unset fields keep their [`Configuration::default`] values.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    min_run_length: Option<usize>,
    letters: Option<bool>,
    numbers: Option<bool>,
    space: Option<bool>,
    punctuation: Option<bool>,
    emit_offsets: Option<bool>,
    trailing_run: Option<TrailingRunPolicy>,
}

impl ConfigurationBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum run length in code points
    pub fn min_run_length(mut self, length: usize) -> Self {
        self.min_run_length = Some(length);
        self
    }

    pub fn letters(mut self, enabled: bool) -> Self {
        self.letters = Some(enabled);
        self
    }

    pub fn numbers(mut self, enabled: bool) -> Self {
        self.numbers = Some(enabled);
        self
    }

    pub fn space(mut self, enabled: bool) -> Self {
        self.space = Some(enabled);
        self
    }

    pub fn punctuation(mut self, enabled: bool) -> Self {
        self.punctuation = Some(enabled);
        self
    }

    /// Toggle every category at once
    pub fn all_categories(self, enabled: bool) -> Self {
        self.letters(enabled)
            .numbers(enabled)
            .space(enabled)
            .punctuation(enabled)
    }

    /// Prefix emitted lines with their byte offset
    pub fn emit_offsets(mut self, enabled: bool) -> Self {
        self.emit_offsets = Some(enabled);
        self
    }

    pub fn trailing_run(mut self, policy: TrailingRunPolicy) -> Self {
        self.trailing_run = Some(policy);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Configuration> {
        let defaults = Configuration::default();
        let config = Configuration {
            min_run_length: self.min_run_length.unwrap_or(defaults.min_run_length),
            letters: self.letters.unwrap_or(defaults.letters),
            numbers: self.numbers.unwrap_or(defaults.numbers),
            space: self.space.unwrap_or(defaults.space),
            punctuation: self.punctuation.unwrap_or(defaults.punctuation),
            emit_offsets: self.emit_offsets.unwrap_or(defaults.emit_offsets),
            trailing_run: self.trailing_run.unwrap_or(defaults.trailing_run),
        };

        config.validate()?;
        Ok(config)
    }
}
