use crate::fields::FilterField;
use crate::filtering::{expansion_filtration, narrowing_filtration};
use crate::filtration::Filtration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How active selections combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Each selection restricts the result further
    #[default]
    Narrowing,
    /// Each selection adds matching items back into the result
    Expansion,
}

impl FilterMode {
    /// All modes, in selector order
    pub const ALL: [FilterMode; 2] = [FilterMode::Narrowing, FilterMode::Expansion];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Narrowing => "narrowing",
            FilterMode::Expansion => "expansion",
        }
    }

    /// Build the filtration pipeline for this mode over `fields`
    pub fn filtration<T: 'static>(self, fields: &[FilterField<T>]) -> Filtration<T> {
        match self {
            FilterMode::Narrowing => narrowing_filtration(fields),
            FilterMode::Expansion => expansion_filtration(fields),
        }
    }

    /// Expansion builds its result up from nothing once anything is selected
    pub fn starts_from_empty(self, any_selected: bool) -> bool {
        self == FilterMode::Expansion && any_selected
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "narrowing" | "narrow" => Ok(FilterMode::Narrowing),
            "expansion" | "expand" => Ok(FilterMode::Expansion),
            other => Err(format!(
                "unknown filter mode '{}' (expected 'narrowing' or 'expansion')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_narrowing() {
        assert_eq!(FilterMode::default(), FilterMode::Narrowing);
        assert_eq!(FilterMode::ALL[0], FilterMode::Narrowing);
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("narrowing".parse::<FilterMode>(), Ok(FilterMode::Narrowing));
        assert_eq!(" Expansion ".parse::<FilterMode>(), Ok(FilterMode::Expansion));
        assert_eq!("expand".parse::<FilterMode>(), Ok(FilterMode::Expansion));
        assert!("sideways".parse::<FilterMode>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for mode in FilterMode::ALL {
            assert_eq!(mode.to_string().parse::<FilterMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_starts_from_empty() {
        assert!(FilterMode::Expansion.starts_from_empty(true));
        assert!(!FilterMode::Expansion.starts_from_empty(false));
        assert!(!FilterMode::Narrowing.starts_from_empty(true));
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FilterMode::Expansion).unwrap(),
            "\"expansion\""
        );
    }
}
