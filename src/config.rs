//! Animation constants and their validating builder.

use crate::colors::PERCENT_MAX;
use crate::hue::HUE_MAX;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Hue step of zero would never leave the first hue.
    ZeroHueStep,

    /// Hue step covers the whole wheel.
    HueStepTooLarge,

    /// Minimum intensity level of zero.
    ZeroMinLevel,

    /// Intensity level step of zero.
    ZeroLevelStep,

    /// Minimum intensity level above the maximum.
    InvertedLevelRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroHueStep => write!(f, "hue step must be non-zero"),
            ConfigError::HueStepTooLarge => {
                write!(f, "hue step must be smaller than {}", HUE_MAX)
            }
            ConfigError::ZeroMinLevel => {
                write!(f, "minimum intensity level must be at least 1")
            }
            ConfigError::ZeroLevelStep => write!(f, "intensity level step must be non-zero"),
            ConfigError::InvertedLevelRange => {
                write!(f, "minimum intensity level exceeds maximum")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Parameters of the hue-cycling animation.
///
/// Construct with [`AnimationConfig::builder`] or use
/// [`AnimationConfig::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationConfig {
    hue_step: u16,
    saturation: u8,
    brightness: u8,
    level_min: u16,
    level_step: u16,
    level_max: u16,
}

impl AnimationConfig {
    /// Full saturation at half brightness, hue step 4, levels 1 through 10.
    pub const DEFAULT: Self = Self {
        hue_step: 4,
        saturation: 100,
        brightness: 50,
        level_min: 1,
        level_step: 1,
        level_max: 10,
    };

    /// Creates a builder seeded with [`AnimationConfig::DEFAULT`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Hue units advanced per step.
    pub const fn hue_step(&self) -> u16 {
        self.hue_step
    }

    /// Saturation percentage, 0 to 100.
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Brightness percentage, 0 to 100.
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Intensity level at startup and after every reset.
    pub const fn level_min(&self) -> u16 {
        self.level_min
    }

    /// Increment applied to the intensity level after each full sweep.
    pub const fn level_step(&self) -> u16 {
        self.level_step
    }

    /// Highest intensity level; the ramp holds here.
    pub const fn level_max(&self) -> u16 {
        self.level_max
    }

    /// Number of PWM frames rendered per hue step at `level`.
    ///
    /// `level_max / level`, never less than one.
    pub fn frames_per_step(&self, level: u16) -> u16 {
        (self.level_max / level.max(1)).max(1)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for validated animation configurations.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: AnimationConfig,
}

impl ConfigBuilder {
    /// Creates a builder seeded with [`AnimationConfig::DEFAULT`].
    pub fn new() -> Self {
        Self {
            config: AnimationConfig::DEFAULT,
        }
    }

    /// Sets the hue units advanced per step.
    pub fn hue_step(mut self, step: u16) -> Self {
        self.config.hue_step = step;
        self
    }

    /// Sets the saturation percentage. Values above 100 are clamped.
    pub fn saturation(mut self, saturation: u8) -> Self {
        self.config.saturation = saturation.min(PERCENT_MAX);
        self
    }

    /// Sets the brightness percentage. Values above 100 are clamped.
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.config.brightness = brightness.min(PERCENT_MAX);
        self
    }

    /// Sets the intensity level range and ramp increment.
    pub fn levels(mut self, min: u16, step: u16, max: u16) -> Self {
        self.config.level_min = min;
        self.config.level_step = step;
        self.config.level_max = max;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroHueStep` / `HueStepTooLarge` - hue step outside `1..HUE_MAX`
    /// * `ZeroMinLevel` - minimum level is zero
    /// * `ZeroLevelStep` - level step is zero
    /// * `InvertedLevelRange` - minimum level above maximum
    pub fn build(self) -> Result<AnimationConfig, ConfigError> {
        let config = self.config;

        if config.hue_step == 0 {
            return Err(ConfigError::ZeroHueStep);
        }
        if config.hue_step >= HUE_MAX {
            return Err(ConfigError::HueStepTooLarge);
        }
        if config.level_min == 0 {
            return Err(ConfigError::ZeroMinLevel);
        }
        if config.level_step == 0 {
            return Err(ConfigError::ZeroLevelStep);
        }
        if config.level_min > config.level_max {
            return Err(ConfigError::InvertedLevelRange);
        }

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
