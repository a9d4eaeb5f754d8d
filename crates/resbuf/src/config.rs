//! Configuration parameters for resources and demonstration scenarios.

use crate::error::ResourceError;

/// Limits applied when constructing a [`Resource`](crate::Resource).
///
/// The ceiling is checked before any allocation is attempted, so a request
/// above it fails with [`ResourceError::CapacityExceeded`] without touching
/// the allocator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Maximum number of `i32` elements a single resource may own.
    ///
    /// Default: the largest element count whose byte size fits in `isize`.
    pub max_elements: usize,
}

impl ResourceConfig {
    /// Default ceiling: `isize::MAX` bytes worth of `i32`.
    pub const DEFAULT_MAX_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<i32>();

    /// Create a config with the given element ceiling.
    pub fn new(max_elements: usize) -> Self {
        Self { max_elements }
    }

    /// Check a requested length against the ceiling.
    pub fn validate(&self, requested: usize) -> Result<(), ResourceError> {
        if requested > self.max_elements {
            return Err(ResourceError::CapacityExceeded {
                requested,
                max: self.max_elements,
            });
        }
        Ok(())
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ELEMENTS)
    }
}

/// Parameters for the demonstration scenarios in [`crate::scenario`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioConfig {
    /// Length of the first resource; it is populated with `0..len`.
    pub len: usize,
}

impl ScenarioConfig {
    /// Default scenario length.
    pub const DEFAULT_LEN: usize = 10;

    /// Longest buffer the scenarios can populate with distinct `i32`
    /// counting values `0..len`.
    pub const MAX_LEN: usize = i32::MAX as usize + 1;

    /// Environment variable overriding [`ScenarioConfig::len`].
    pub const LEN_ENV: &str = "RESBUF_SCENARIO_LEN";

    /// Create a scenario config with an explicit length.
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Read the length from `RESBUF_SCENARIO_LEN`, falling back to the
    /// default when unset or unparsable.
    pub fn from_env() -> Self {
        let raw = std::env::var(Self::LEN_ENV).ok();
        Self::new(Self::parse_len(raw.as_deref()))
    }

    /// Parse a length override, ignoring surrounding whitespace.
    ///
    /// `None`, empty or unparsable input yields [`ScenarioConfig::DEFAULT_LEN`].
    pub fn parse_len(raw: Option<&str>) -> usize {
        raw.and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_LEN)
    }

    /// Check the length against [`ScenarioConfig::MAX_LEN`].
    pub fn validate(&self) -> Result<(), ResourceError> {
        ResourceConfig::new(Self::MAX_LEN).validate(self.len)
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ceiling_fits_isize_bytes() {
        let config = ResourceConfig::default();
        let bytes = config.max_elements * std::mem::size_of::<i32>();
        assert!(bytes <= isize::MAX as usize);
    }

    #[test]
    fn validate_accepts_up_to_ceiling() {
        let config = ResourceConfig::new(8);
        assert!(config.validate(0).is_ok());
        assert!(config.validate(8).is_ok());
    }

    #[test]
    fn validate_rejects_above_ceiling() {
        let config = ResourceConfig::new(8);
        assert_eq!(
            config.validate(9),
            Err(ResourceError::CapacityExceeded {
                requested: 9,
                max: 8
            })
        );
    }

    #[test]
    fn scenario_default_len_is_ten() {
        assert_eq!(ScenarioConfig::default().len, 10);
    }

    #[test]
    fn parse_len_unset_uses_default() {
        assert_eq!(ScenarioConfig::parse_len(None), ScenarioConfig::DEFAULT_LEN);
    }

    #[test]
    fn parse_len_trims_whitespace() {
        assert_eq!(ScenarioConfig::parse_len(Some("  25\n")), 25);
        assert_eq!(ScenarioConfig::parse_len(Some("0")), 0);
    }

    #[test]
    fn parse_len_rejects_garbage() {
        for raw in ["", "   ", "ten", "-3", "1.5", "99999999999999999999999"] {
            assert_eq!(
                ScenarioConfig::parse_len(Some(raw)),
                ScenarioConfig::DEFAULT_LEN,
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn scenario_validate_bounds_counting_values() {
        assert!(ScenarioConfig::new(ScenarioConfig::MAX_LEN).validate().is_ok());
        assert_eq!(
            ScenarioConfig::new(ScenarioConfig::MAX_LEN + 1).validate(),
            Err(ResourceError::CapacityExceeded {
                requested: ScenarioConfig::MAX_LEN + 1,
                max: ScenarioConfig::MAX_LEN,
            })
        );
    }
}
