use serde::{Deserialize, Serialize};

/// Configuration for the interval merger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Upper bound on the number of input intervals. `None` means unbounded.
    pub max_intervals: Option<usize>,
}

impl MergeConfig {
    /// A configuration rejecting inputs longer than `limit`.
    pub fn with_max_intervals(limit: usize) -> Self {
        Self {
            max_intervals: Some(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unbounded() {
        let c = MergeConfig::default();
        assert_eq!(c.max_intervals, None);
    }

    #[test]
    fn bounded_config() {
        let c = MergeConfig::with_max_intervals(64);
        assert_eq!(c.max_intervals, Some(64));
    }

    #[test]
    fn loads_from_toml() {
        let c: MergeConfig = toml::from_str("max_intervals = 10").unwrap();
        assert_eq!(c, MergeConfig::with_max_intervals(10));
        let empty: MergeConfig = toml::from_str("").unwrap();
        assert_eq!(empty, MergeConfig::default());
    }
}
