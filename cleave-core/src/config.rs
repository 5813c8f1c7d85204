//! Processor configuration

use crate::{
    error::Result,
    processor::LineProcessor,
    receiver::Delimiters,
    segment::Strategy,
};

/// Settings for a [`LineProcessor`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Word boundary rules
    pub strategy: Strategy,
    /// Delimiters written between graphemes, words and lines
    pub delimiters: Delimiters,
}

impl ProcessorConfig {
    /// Create a configuration with the given strategy and default delimiters
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    /// Start building a configuration
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::new()
    }

    /// Check the configuration for inconsistencies
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`](crate::CoreError::InvalidConfig)
    /// if a delimiter is empty.
    pub fn validate(&self) -> Result<()> {
        self.delimiters.validate()
    }

    /// Validate and create a processor
    ///
    /// # Errors
    ///
    /// Fails when [`validate`](Self::validate) does.
    pub fn build_processor(self) -> Result<LineProcessor> {
        self.validate()?;
        Ok(LineProcessor::with_delimiters(self.strategy, self.delimiters))
    }
}

/// Builder for ProcessorConfig
#[derive(Debug, Default)]
pub struct ProcessorConfigBuilder {
    config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Split on whitespace instead of Unicode word boundaries
    pub fn whitespace(self) -> Self {
        self.strategy(Strategy::Whitespace)
    }

    /// Set the delimiters
    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.config.delimiters = delimiters;
        self
    }

    /// Use the ASCII unit/record separator delimiters
    pub fn ascii_separators(self) -> Self {
        self.delimiters(Delimiters::ascii_separators())
    }

    /// Validate and return the configuration
    ///
    /// # Errors
    ///
    /// Fails when [`ProcessorConfig::validate`] does.
    pub fn build(self) -> Result<ProcessorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
