//! Plugin configuration
//!
//! Resolved settings are produced by merging a caller-supplied
//! [`ConfigPatch`] over [`ParallaxConfig::default`]. Only fields the caller
//! actually set override; everything else falls back to the defaults. The
//! merge is shallow - there are no nested option groups.
//!
//! Validation happens at merge time: a divisor of zero would make the
//! offset quotient undefined, so non-positive and non-finite divisors are
//! rejected before any instance can be constructed.

use thiserror::Error;

/// Configuration errors surfaced at merge time
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The scroll divisor must be a finite number greater than zero
    #[error("invalid scroll divisor {value}: must be finite and > 0")]
    InvalidDivisor { value: f32 },
}

/// Resolved plugin settings (immutable after construction)
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Display-only option carried through from the instance defaults
    pub default_option: String,
    /// Divides the scroll offset before it is applied to the margin;
    /// larger values mean weaker movement. Always finite and > 0.
    pub scroll_divisor: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            default_option: "I'm a default option".to_string(),
            scroll_divisor: 1.0,
        }
    }
}

impl ParallaxConfig {
    /// Merge caller overrides over the defaults
    ///
    /// Fails fast on an invalid divisor; nothing downstream ever sees a
    /// config that would divide by zero.
    pub fn merged(patch: &ConfigPatch) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            default_option: patch
                .default_option
                .clone()
                .unwrap_or(defaults.default_option),
            scroll_divisor: patch.scroll_divisor.unwrap_or(defaults.scroll_divisor),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.scroll_divisor.is_finite() || self.scroll_divisor <= 0.0 {
            return Err(ConfigError::InvalidDivisor {
                value: self.scroll_divisor,
            });
        }
        Ok(())
    }
}

/// Caller-supplied option overrides
///
/// All fields are optional - when merging, only set fields override.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigPatch {
    /// Override for [`ParallaxConfig::default_option`]
    pub default_option: Option<String>,
    /// Override for [`ParallaxConfig::scroll_divisor`]
    pub scroll_divisor: Option<f32>,
}

impl ConfigPatch {
    /// Create an empty patch (merging it yields the defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display option
    pub fn default_option(mut self, value: impl Into<String>) -> Self {
        self.default_option = Some(value.into());
        self
    }

    /// Set the scroll divisor
    pub fn scroll_divisor(mut self, value: f32) -> Self {
        self.scroll_divisor = Some(value);
        self
    }
}
